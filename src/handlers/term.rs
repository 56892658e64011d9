use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::dto::term::{
    CreateRelatedTermRequest, CreateTermRequest, RelatedTermDto, TermDto,
    UpdateRelatedTermRequest,
};
use crate::error::{messages, ApiError};
use crate::extract::Exists;
use crate::models::{Entity, RelatedTerm, Term};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::ensure_exists;

/// GET /api/terms
pub async fn get_all(State(state): State<AppState>) -> ApiResult<Vec<TermDto>> {
    let terms = repo::term::list(&state.pool).await?;
    Ok(ApiResponse::success(terms.into_iter().map(Into::into).collect()))
}

/// GET /api/terms/:id
pub async fn get_by_id(Exists(term): Exists<Term>) -> ApiResult<TermDto> {
    Ok(ApiResponse::success(term.into()))
}

/// POST /api/terms
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateTermRequest>,
) -> ApiResult<TermDto> {
    validation::term(&req)?;
    let term = repo::term::insert(&state.pool, &req).await?;
    Ok(ApiResponse::created(term.into()))
}

/// GET /api/related-terms/by-term/:term_id
pub async fn get_related_by_term(
    State(state): State<AppState>,
    Path(term_id): Path<i32>,
) -> ApiResult<Vec<RelatedTermDto>> {
    ensure_exists::<Term>(&state.pool, term_id).await?;
    let related = repo::term::related_by_term(&state.pool, term_id).await?;
    Ok(ApiResponse::success(related.into_iter().map(Into::into).collect()))
}

/// POST /api/related-terms (admin)
pub async fn create_related(
    State(state): State<AppState>,
    Json(req): Json<CreateRelatedTermRequest>,
) -> ApiResult<RelatedTermDto> {
    validation::related_term(&req.word, req.term_id)?;
    ensure_exists::<Term>(&state.pool, req.term_id).await?;

    let related = repo::term::insert_related(&state.pool, &req).await?;
    Ok(ApiResponse::created(related.into()))
}

/// PUT /api/related-terms/:id (admin)
pub async fn update_related(
    State(state): State<AppState>,
    Exists(existing): Exists<RelatedTerm>,
    Json(req): Json<UpdateRelatedTermRequest>,
) -> ApiResult<RelatedTermDto> {
    validation::related_term(&req.word, req.term_id)?;
    ensure_exists::<Term>(&state.pool, req.term_id).await?;

    let updated = repo::term::update_related(&state.pool, existing.id, &req)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(messages::update_failed(RelatedTerm::NAME, existing.id))
        })?;
    Ok(ApiResponse::success(updated.into()))
}

/// DELETE /api/related-terms/:word (admin)
pub async fn delete_related(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> ApiResult<()> {
    let deleted = repo::term::delete_related_by_word(&state.pool, &word).await?;
    if deleted == 0 {
        let message = format!("Related term '{}' not found", word);
        tracing::error!("{}", message);
        return Err(ApiError::not_found(message));
    }
    Ok(ApiResponse::<()>::no_content())
}
