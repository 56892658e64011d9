use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::dto::fact::{CreateFactRequest, FactDto, ReorderFactsRequest, UpdateFactRequest};
use crate::error::{messages, ApiError};
use crate::extract::Exists;
use crate::models::{Entity, Fact, Image, Streetcode};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::{delete_entity, ensure_exists};

/// GET /api/facts
pub async fn get_all(State(state): State<AppState>) -> ApiResult<Vec<FactDto>> {
    let facts = repo::fact::list(&state.pool).await?;
    Ok(ApiResponse::success(facts.into_iter().map(Into::into).collect()))
}

/// GET /api/facts/:id
pub async fn get_by_id(Exists(fact): Exists<Fact>) -> ApiResult<FactDto> {
    Ok(ApiResponse::success(fact.into()))
}

/// GET /api/facts/by-streetcode/:streetcode_id
pub async fn get_by_streetcode(
    State(state): State<AppState>,
    Path(streetcode_id): Path<i32>,
) -> ApiResult<Vec<FactDto>> {
    let facts = repo::fact::by_streetcode(&state.pool, streetcode_id).await?;
    Ok(ApiResponse::success(facts.into_iter().map(Into::into).collect()))
}

/// POST /api/facts
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateFactRequest>,
) -> ApiResult<FactDto> {
    validation::fact(&req.title, &req.fact_content, req.image_id, req.streetcode_id)?;
    ensure_exists::<Image>(&state.pool, req.image_id).await?;
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;

    let fact = repo::fact::insert(&state.pool, &req).await?;
    Ok(ApiResponse::created(fact.into()))
}

/// PUT /api/facts/:id
pub async fn update(
    State(state): State<AppState>,
    Exists(existing): Exists<Fact>,
    Json(req): Json<UpdateFactRequest>,
) -> ApiResult<FactDto> {
    validation::fact(&req.title, &req.fact_content, req.image_id, req.streetcode_id)?;
    ensure_exists::<Image>(&state.pool, req.image_id).await?;
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;

    let updated = repo::fact::update(&state.pool, existing.id, &req)
        .await?
        .ok_or_else(|| ApiError::not_found(messages::update_failed(Fact::NAME, existing.id)))?;
    Ok(ApiResponse::success(updated.into()))
}

/// PUT /api/facts/reorder - rewrite the ordering of one streetcode's facts
pub async fn reorder(
    State(state): State<AppState>,
    Json(req): Json<ReorderFactsRequest>,
) -> ApiResult<Vec<FactDto>> {
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;

    let applied = repo::fact::reorder(&state.pool, req.streetcode_id, &req.ordered_ids).await?;
    if !applied {
        return Err(ApiError::bad_request(
            "ordered_ids must contain every fact id of the streetcode exactly once",
        ));
    }

    let facts = repo::fact::by_streetcode(&state.pool, req.streetcode_id).await?;
    Ok(ApiResponse::success(facts.into_iter().map(Into::into).collect()))
}

/// DELETE /api/facts/:id
pub async fn delete(
    State(state): State<AppState>,
    Exists(fact): Exists<Fact>,
) -> ApiResult<()> {
    delete_entity::<Fact>(&state.pool, fact.id).await?;
    Ok(ApiResponse::<()>::no_content())
}
