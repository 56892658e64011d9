use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::dto::streetcode::{
    CatalogQuery, CreateStreetcodeRequest, GetAllStreetcodesQuery, MainPageQuery,
    StreetcodeDto, StreetcodeMainPageDto, StreetcodeShortDto, UpdateStreetcodeRequest,
};
use crate::error::{messages, ApiError};
use crate::extract::Exists;
use crate::models::{Audio, Entity, Streetcode};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::ensure_exists;

const DEFAULT_PAGE_SIZE: i64 = 10;

/// GET /api/streetcodes - paged listing with optional title/teaser filter
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<GetAllStreetcodesQuery>,
) -> ApiResult<Value> {
    let page = query.page.unwrap_or(1);
    let amount = query.amount.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100);

    let streetcodes =
        repo::streetcode::list(&state.pool, page, amount, query.title.as_deref()).await?;
    let total = repo::streetcode::count(&state.pool).await?;

    let dtos: Vec<StreetcodeDto> = streetcodes.into_iter().map(Into::into).collect();
    Ok(ApiResponse::success(json!({
        "total_amount": total,
        "streetcodes": dtos,
    })))
}

/// GET /api/streetcodes/short
pub async fn get_all_short(State(state): State<AppState>) -> ApiResult<Vec<StreetcodeShortDto>> {
    let streetcodes = repo::streetcode::list_all(&state.pool).await?;
    Ok(ApiResponse::success(
        streetcodes.into_iter().map(Into::into).collect(),
    ))
}

/// GET /api/streetcodes/main-page - random published selection
pub async fn get_main_page(
    State(state): State<AppState>,
    Query(query): Query<MainPageQuery>,
) -> ApiResult<Vec<StreetcodeMainPageDto>> {
    let count = query.count.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100);
    let streetcodes = repo::streetcode::main_page(&state.pool, count).await?;
    Ok(ApiResponse::success(
        streetcodes.into_iter().map(Into::into).collect(),
    ))
}

/// GET /api/streetcodes/catalog
pub async fn get_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> ApiResult<Vec<StreetcodeShortDto>> {
    let streetcodes =
        repo::streetcode::catalog(&state.pool, query.page, query.count.clamp(1, 100)).await?;
    Ok(ApiResponse::success(
        streetcodes.into_iter().map(Into::into).collect(),
    ))
}

/// GET /api/streetcodes/count
pub async fn get_count(State(state): State<AppState>) -> ApiResult<i64> {
    Ok(ApiResponse::success(
        repo::streetcode::count(&state.pool).await?,
    ))
}

/// GET /api/streetcodes/:id
pub async fn get_by_id(Exists(streetcode): Exists<Streetcode>) -> ApiResult<StreetcodeDto> {
    Ok(ApiResponse::success(streetcode.into()))
}

/// GET /api/streetcodes/:id/short
pub async fn get_short_by_id(
    Exists(streetcode): Exists<Streetcode>,
) -> ApiResult<StreetcodeShortDto> {
    Ok(ApiResponse::success(streetcode.into()))
}

/// GET /api/streetcodes/by-url/:url - public page fetch; counts the view
pub async fn get_by_transliteration_url(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> ApiResult<StreetcodeDto> {
    let Some(streetcode) =
        repo::streetcode::get_by_transliteration_url(&state.pool, &url).await?
    else {
        let message = format!("Streetcode with url {} not found", url);
        tracing::error!("{}", message);
        return Err(ApiError::not_found(message));
    };

    repo::streetcode::increment_views(&state.pool, streetcode.id).await?;
    Ok(ApiResponse::success(streetcode.into()))
}

/// POST /api/streetcodes (admin)
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateStreetcodeRequest>,
) -> ApiResult<StreetcodeDto> {
    validation::streetcode(
        req.index,
        &req.title,
        req.teaser.as_deref(),
        &req.transliteration_url,
        req.first_name.as_deref(),
        req.last_name.as_deref(),
    )?;
    if let Some(audio_id) = req.audio_id {
        ensure_exists::<Audio>(&state.pool, audio_id).await?;
    }

    let streetcode = repo::streetcode::insert(&state.pool, &req).await?;
    Ok(ApiResponse::created(streetcode.into()))
}

/// PUT /api/streetcodes/:id (admin)
pub async fn update(
    State(state): State<AppState>,
    Exists(existing): Exists<Streetcode>,
    Json(req): Json<UpdateStreetcodeRequest>,
) -> ApiResult<StreetcodeDto> {
    validation::streetcode(
        req.index,
        &req.title,
        req.teaser.as_deref(),
        &req.transliteration_url,
        req.first_name.as_deref(),
        req.last_name.as_deref(),
    )?;
    if let Some(audio_id) = req.audio_id {
        ensure_exists::<Audio>(&state.pool, audio_id).await?;
    }

    let updated = repo::streetcode::update(&state.pool, existing.id, &req)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(messages::update_failed(Streetcode::NAME, existing.id))
        })?;
    Ok(ApiResponse::success(updated.into()))
}

/// DELETE /api/streetcodes/:id (admin) - soft delete via status
pub async fn delete(
    State(state): State<AppState>,
    Exists(streetcode): Exists<Streetcode>,
) -> ApiResult<()> {
    let affected = repo::streetcode::soft_delete(&state.pool, streetcode.id).await?;
    if affected == 0 {
        let message = messages::delete_failed(Streetcode::NAME, streetcode.id);
        tracing::error!("{}", message);
        return Err(ApiError::not_found(message));
    }
    Ok(ApiResponse::<()>::no_content())
}
