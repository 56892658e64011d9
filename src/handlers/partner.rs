use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;

use crate::app::AppState;
use crate::dto::partner::{CreatePartnerRequest, PartnerDto, UpdatePartnerRequest};
use crate::error::{messages, ApiError};
use crate::extract::Exists;
use crate::models::{Entity, Image, Partner};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::{delete_entity, ensure_exists};

async fn with_relations(pool: &PgPool, partner: Partner) -> Result<PartnerDto, ApiError> {
    let links = repo::partner::links_for(pool, partner.id).await?;
    let streetcode_ids = repo::partner::streetcode_ids_for(pool, partner.id).await?;
    Ok(PartnerDto::from_entity(partner, links, streetcode_ids))
}

/// GET /api/partners
pub async fn get_all(State(state): State<AppState>) -> ApiResult<Vec<PartnerDto>> {
    let partners = repo::partner::list(&state.pool).await?;

    let mut dtos = Vec::with_capacity(partners.len());
    for partner in partners {
        dtos.push(with_relations(&state.pool, partner).await?);
    }
    Ok(ApiResponse::success(dtos))
}

/// GET /api/partners/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Exists(partner): Exists<Partner>,
) -> ApiResult<PartnerDto> {
    Ok(ApiResponse::success(with_relations(&state.pool, partner).await?))
}

/// GET /api/partners/by-streetcode/:streetcode_id
pub async fn get_by_streetcode(
    State(state): State<AppState>,
    Path(streetcode_id): Path<i32>,
) -> ApiResult<Vec<PartnerDto>> {
    let partners = repo::partner::by_streetcode(&state.pool, streetcode_id).await?;

    let mut dtos = Vec::with_capacity(partners.len());
    for partner in partners {
        dtos.push(with_relations(&state.pool, partner).await?);
    }
    Ok(ApiResponse::success(dtos))
}

/// POST /api/partners (admin)
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePartnerRequest>,
) -> ApiResult<PartnerDto> {
    validation::partner(&req)?;
    ensure_exists::<Image>(&state.pool, req.logo_id).await?;

    let (partner, links, streetcode_ids) = repo::partner::insert(&state.pool, &req).await?;
    Ok(ApiResponse::created(PartnerDto::from_entity(
        partner,
        links,
        streetcode_ids,
    )))
}

/// PUT /api/partners/:id (admin) - links are replaced wholesale
pub async fn update(
    State(state): State<AppState>,
    Exists(existing): Exists<Partner>,
    Json(req): Json<UpdatePartnerRequest>,
) -> ApiResult<PartnerDto> {
    validation::partner(&req)?;
    ensure_exists::<Image>(&state.pool, req.logo_id).await?;

    let (partner, links, streetcode_ids) = repo::partner::update(&state.pool, existing.id, &req)
        .await?
        .ok_or_else(|| ApiError::not_found(messages::update_failed(Partner::NAME, existing.id)))?;
    Ok(ApiResponse::success(PartnerDto::from_entity(
        partner,
        links,
        streetcode_ids,
    )))
}

/// DELETE /api/partners/:id (admin)
pub async fn delete(
    State(state): State<AppState>,
    Exists(partner): Exists<Partner>,
) -> ApiResult<()> {
    delete_entity::<Partner>(&state.pool, partner.id).await?;
    Ok(ApiResponse::<()>::no_content())
}
