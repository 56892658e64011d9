use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::app::AppState;
use crate::dto::toponym::{
    CreateStreetcodeToponymRequest, CreateStreetcodeToponymResponse,
    DeleteStreetcodeToponymRequest, ToponymDto, ToponymQuery,
};
use crate::error::ApiError;
use crate::extract::Exists;
use crate::models::{Streetcode, Toponym};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};

use super::ensure_exists;

const DEFAULT_PAGE_SIZE: i64 = 20;

/// GET /api/toponyms - paged, optional street-name filter
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ToponymQuery>,
) -> ApiResult<Vec<ToponymDto>> {
    let page = query.page.unwrap_or(1);
    let amount = query.amount.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100);

    let toponyms = repo::toponym::list(&state.pool, page, amount, query.title.as_deref()).await?;
    Ok(ApiResponse::success(
        toponyms.into_iter().map(Into::into).collect(),
    ))
}

/// GET /api/toponyms/:id
pub async fn get_by_id(Exists(toponym): Exists<Toponym>) -> ApiResult<ToponymDto> {
    Ok(ApiResponse::success(toponym.into()))
}

/// GET /api/toponyms/by-streetcode/:streetcode_id
pub async fn get_by_streetcode(
    State(state): State<AppState>,
    Path(streetcode_id): Path<i32>,
) -> ApiResult<Vec<ToponymDto>> {
    let toponyms = repo::toponym::by_streetcode(&state.pool, streetcode_id).await?;
    Ok(ApiResponse::success(
        toponyms.into_iter().map(Into::into).collect(),
    ))
}

/// POST /api/streetcode-toponyms - link a streetcode to a toponym
pub async fn create_link(
    State(state): State<AppState>,
    Json(req): Json<CreateStreetcodeToponymRequest>,
) -> ApiResult<CreateStreetcodeToponymResponse> {
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;
    ensure_exists::<Toponym>(&state.pool, req.toponym_id).await?;

    repo::toponym::insert_link(&state.pool, req.streetcode_id, req.toponym_id).await?;

    Ok(ApiResponse::created(CreateStreetcodeToponymResponse {
        streetcode_id: req.streetcode_id,
        toponym_id: req.toponym_id,
        physical_streetcode: physical_streetcode(req.streetcode_id, req.toponym_id),
    }))
}

/// DELETE /api/streetcode-toponyms - unlink by pair
pub async fn delete_link(
    State(state): State<AppState>,
    Json(req): Json<DeleteStreetcodeToponymRequest>,
) -> ApiResult<()> {
    let deleted =
        repo::toponym::delete_link(&state.pool, req.streetcode_id, req.toponym_id).await?;
    if deleted == 0 {
        let message = format!(
            "Streetcode {} is not linked to toponym {}",
            req.streetcode_id, req.toponym_id
        );
        tracing::error!("{}", message);
        return Err(ApiError::not_found(message));
    }
    Ok(ApiResponse::<()>::no_content())
}

/// Plaque code printed next to the QR: both ids zero-padded to six digits.
fn physical_streetcode(streetcode_id: i32, toponym_id: i32) -> String {
    format!("{:06}{:06}", streetcode_id, toponym_id)
}

#[cfg(test)]
mod tests {
    use super::physical_streetcode;

    #[test]
    fn pads_both_ids_to_six_digits() {
        assert_eq!(physical_streetcode(1, 2), "000001000002");
        assert_eq!(physical_streetcode(123, 45678), "000123045678");
        assert_eq!(physical_streetcode(999999, 999999), "999999999999");
    }
}
