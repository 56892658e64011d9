use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::dto::media::{AudioDto, CreateAudioRequest};
use crate::error::ApiError;
use crate::extract::Exists;
use crate::models::{Audio, Streetcode};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::super::{delete_entity, ensure_exists};

/// GET /api/audios/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Exists(audio): Exists<Audio>,
) -> ApiResult<AudioDto> {
    let base64 = state.blob.load_base64(&audio.blob_name).await?;
    Ok(ApiResponse::success(AudioDto::from_entity(audio, Some(base64))))
}

/// GET /api/audios/by-streetcode/:streetcode_id - the narration track
pub async fn get_by_streetcode(
    State(state): State<AppState>,
    Path(streetcode_id): Path<i32>,
) -> ApiResult<AudioDto> {
    let Some(audio) = repo::media::audio_by_streetcode(&state.pool, streetcode_id).await? else {
        let message = format!("Streetcode {} has no audio", streetcode_id);
        tracing::error!("{}", message);
        return Err(ApiError::not_found(message));
    };

    let base64 = state.blob.load_base64(&audio.blob_name).await?;
    Ok(ApiResponse::success(AudioDto::from_entity(audio, Some(base64))))
}

/// POST /api/audios
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAudioRequest>,
) -> ApiResult<AudioDto> {
    validation::audio(&req)?;
    if let Some(streetcode_id) = req.streetcode_id {
        ensure_exists::<Streetcode>(&state.pool, streetcode_id).await?;
    }

    let logical_name = req.title.as_deref().unwrap_or("audio");
    let blob_name = state
        .blob
        .save_base64(&req.base64, logical_name, &req.extension)
        .await?;

    let audio = repo::media::insert_audio(
        &state.pool,
        &blob_name,
        &req.mime_type,
        req.title.as_deref(),
        req.description.as_deref(),
    )
    .await?;

    if let Some(streetcode_id) = req.streetcode_id {
        repo::media::set_streetcode_audio(&state.pool, streetcode_id, audio.id).await?;
    }

    Ok(ApiResponse::created(AudioDto::from_entity(audio, Some(req.base64))))
}

/// DELETE /api/audios/:id
pub async fn delete(
    State(state): State<AppState>,
    Exists(audio): Exists<Audio>,
) -> ApiResult<()> {
    delete_entity::<Audio>(&state.pool, audio.id).await?;

    if let Err(e) = state.blob.delete(&audio.blob_name).await {
        tracing::warn!("Failed to delete blob {}: {}", audio.blob_name, e);
    }
    Ok(ApiResponse::<()>::no_content())
}
