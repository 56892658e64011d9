use axum::{
    extract::{Path, State},
    Json,
};
use futures::future::try_join_all;

use crate::app::AppState;
use crate::dto::media::{CreateImageRequest, ImageDto};
use crate::extract::Exists;
use crate::models::{Image, Streetcode};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::super::{delete_entity, ensure_exists};

/// GET /api/images/:id - metadata plus the decrypted payload
pub async fn get_by_id(
    State(state): State<AppState>,
    Exists(image): Exists<Image>,
) -> ApiResult<ImageDto> {
    let base64 = state.blob.load_base64(&image.blob_name).await?;
    Ok(ApiResponse::success(ImageDto::from_entity(image, Some(base64))))
}

/// GET /api/images/by-streetcode/:streetcode_id
pub async fn get_by_streetcode(
    State(state): State<AppState>,
    Path(streetcode_id): Path<i32>,
) -> ApiResult<Vec<ImageDto>> {
    let images = repo::media::images_by_streetcode(&state.pool, streetcode_id).await?;

    let payloads = try_join_all(
        images
            .iter()
            .map(|image| state.blob.load_base64(&image.blob_name)),
    )
    .await?;

    let dtos = images
        .into_iter()
        .zip(payloads)
        .map(|(image, base64)| ImageDto::from_entity(image, Some(base64)))
        .collect();
    Ok(ApiResponse::success(dtos))
}

/// POST /api/images - stores the payload encrypted, then the row
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateImageRequest>,
) -> ApiResult<ImageDto> {
    validation::image(&req)?;
    if let Some(streetcode_id) = req.streetcode_id {
        ensure_exists::<Streetcode>(&state.pool, streetcode_id).await?;
    }

    let logical_name = req.title.as_deref().unwrap_or("image");
    let blob_name = state
        .blob
        .save_base64(&req.base64, logical_name, &req.extension)
        .await?;

    let image = repo::media::insert_image(
        &state.pool,
        &blob_name,
        &req.mime_type,
        req.title.as_deref(),
        req.alt.as_deref(),
    )
    .await?;

    if let Some(streetcode_id) = req.streetcode_id {
        repo::media::link_image_to_streetcode(&state.pool, streetcode_id, image.id).await?;
    }

    Ok(ApiResponse::created(ImageDto::from_entity(image, Some(req.base64))))
}

/// DELETE /api/images/:id - removes the row and its stored file
pub async fn delete(
    State(state): State<AppState>,
    Exists(image): Exists<Image>,
) -> ApiResult<()> {
    delete_entity::<Image>(&state.pool, image.id).await?;

    if let Err(e) = state.blob.delete(&image.blob_name).await {
        // The row is gone; a stray file will be picked up by the sweep.
        tracing::warn!("Failed to delete blob {}: {}", image.blob_name, e);
    }
    Ok(ApiResponse::<()>::no_content())
}
