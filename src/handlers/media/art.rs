use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::dto::media::{ArtDto, CreateArtRequest};
use crate::extract::Exists;
use crate::models::{Art, Image, Streetcode};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::super::ensure_exists;

/// GET /api/arts
pub async fn get_all(State(state): State<AppState>) -> ApiResult<Vec<ArtDto>> {
    let arts = repo::media::list_arts(&state.pool).await?;
    Ok(ApiResponse::success(arts.into_iter().map(Into::into).collect()))
}

/// GET /api/arts/:id
pub async fn get_by_id(Exists(art): Exists<Art>) -> ApiResult<ArtDto> {
    Ok(ApiResponse::success(art.into()))
}

/// GET /api/arts/by-streetcode/:streetcode_id
pub async fn get_by_streetcode(
    State(state): State<AppState>,
    Path(streetcode_id): Path<i32>,
) -> ApiResult<Vec<ArtDto>> {
    let arts = repo::media::arts_by_streetcode(&state.pool, streetcode_id).await?;
    Ok(ApiResponse::success(arts.into_iter().map(Into::into).collect()))
}

/// POST /api/arts - creates the art and links it to the streetcode
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateArtRequest>,
) -> ApiResult<ArtDto> {
    validation::art(&req)?;
    ensure_exists::<Image>(&state.pool, req.image_id).await?;
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;

    let art = repo::media::insert_art(&state.pool, &req).await?;
    Ok(ApiResponse::created(art.into()))
}
