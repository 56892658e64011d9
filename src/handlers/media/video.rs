use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::dto::media::{CreateVideoRequest, UpdateVideoRequest, VideoDto};
use crate::error::{messages, ApiError};
use crate::extract::Exists;
use crate::models::{Entity, Streetcode, Video};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::super::{delete_entity, ensure_exists};

/// GET /api/videos
pub async fn get_all(State(state): State<AppState>) -> ApiResult<Vec<VideoDto>> {
    let videos = repo::media::list_videos(&state.pool).await?;
    Ok(ApiResponse::success(videos.into_iter().map(Into::into).collect()))
}

/// GET /api/videos/:id
pub async fn get_by_id(Exists(video): Exists<Video>) -> ApiResult<VideoDto> {
    Ok(ApiResponse::success(video.into()))
}

/// GET /api/videos/by-streetcode/:streetcode_id
pub async fn get_by_streetcode(
    State(state): State<AppState>,
    Path(streetcode_id): Path<i32>,
) -> ApiResult<Vec<VideoDto>> {
    let videos = repo::media::videos_by_streetcode(&state.pool, streetcode_id).await?;
    Ok(ApiResponse::success(videos.into_iter().map(Into::into).collect()))
}

/// POST /api/videos
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateVideoRequest>,
) -> ApiResult<VideoDto> {
    validation::video(&req.url, req.streetcode_id)?;
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;

    let video = repo::media::insert_video(&state.pool, &req).await?;
    Ok(ApiResponse::created(video.into()))
}

/// PUT /api/videos/:id
pub async fn update(
    State(state): State<AppState>,
    Exists(existing): Exists<Video>,
    Json(req): Json<UpdateVideoRequest>,
) -> ApiResult<VideoDto> {
    validation::video(&req.url, req.streetcode_id)?;
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;

    let updated = repo::media::update_video(&state.pool, existing.id, &req)
        .await?
        .ok_or_else(|| ApiError::not_found(messages::update_failed(Video::NAME, existing.id)))?;
    Ok(ApiResponse::success(updated.into()))
}

/// DELETE /api/videos/:id
pub async fn delete(
    State(state): State<AppState>,
    Exists(video): Exists<Video>,
) -> ApiResult<()> {
    delete_entity::<Video>(&state.pool, video.id).await?;
    Ok(ApiResponse::<()>::no_content())
}
