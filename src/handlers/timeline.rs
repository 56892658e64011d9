use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::dto::timeline::{
    CreateTimelineItemRequest, TimelineItemDto, UpdateTimelineItemRequest,
};
use crate::error::{messages, ApiError};
use crate::extract::Exists;
use crate::models::{Entity, Streetcode, TimelineItem};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::{delete_entity, ensure_exists};

/// GET /api/timeline
pub async fn get_all(State(state): State<AppState>) -> ApiResult<Vec<TimelineItemDto>> {
    let items = repo::timeline::list(&state.pool).await?;

    let mut dtos = Vec::with_capacity(items.len());
    for item in items {
        let contexts = repo::timeline::contexts_for(&state.pool, item.id).await?;
        dtos.push(TimelineItemDto::from_entity(item, contexts));
    }
    Ok(ApiResponse::success(dtos))
}

/// GET /api/timeline/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Exists(item): Exists<TimelineItem>,
) -> ApiResult<TimelineItemDto> {
    let contexts = repo::timeline::contexts_for(&state.pool, item.id).await?;
    Ok(ApiResponse::success(TimelineItemDto::from_entity(item, contexts)))
}

/// GET /api/timeline/by-streetcode/:streetcode_id
pub async fn get_by_streetcode(
    State(state): State<AppState>,
    Path(streetcode_id): Path<i32>,
) -> ApiResult<Vec<TimelineItemDto>> {
    let items = repo::timeline::by_streetcode(&state.pool, streetcode_id).await?;

    let mut dtos = Vec::with_capacity(items.len());
    for item in items {
        let contexts = repo::timeline::contexts_for(&state.pool, item.id).await?;
        dtos.push(TimelineItemDto::from_entity(item, contexts));
    }
    Ok(ApiResponse::success(dtos))
}

/// POST /api/timeline - unknown context titles are created on the fly
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateTimelineItemRequest>,
) -> ApiResult<TimelineItemDto> {
    validation::timeline_item(&req.title, Some(req.streetcode_id))?;
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;

    let (item, contexts) = repo::timeline::insert(&state.pool, &req).await?;
    Ok(ApiResponse::created(TimelineItemDto::from_entity(item, contexts)))
}

/// PUT /api/timeline/:id
pub async fn update(
    State(state): State<AppState>,
    Exists(existing): Exists<TimelineItem>,
    Json(req): Json<UpdateTimelineItemRequest>,
) -> ApiResult<TimelineItemDto> {
    validation::timeline_item(&req.title, None)?;

    let (item, contexts) = repo::timeline::update(&state.pool, existing.id, &req)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(messages::update_failed(TimelineItem::NAME, existing.id))
        })?;
    Ok(ApiResponse::success(TimelineItemDto::from_entity(item, contexts)))
}

/// DELETE /api/timeline/:id
pub async fn delete(
    State(state): State<AppState>,
    Exists(item): Exists<TimelineItem>,
) -> ApiResult<()> {
    delete_entity::<TimelineItem>(&state.pool, item.id).await?;
    Ok(ApiResponse::<()>::no_content())
}
