use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::app::AppState;
use crate::dto::source::{
    CategoryContentDto, CategoryNameDto, ContentQuery, CreateCategoryRequest,
    SourceLinkCategoryDto, UpdateCategoryContentRequest,
};
use crate::error::ApiError;
use crate::extract::Exists;
use crate::models::{Image, SourceLinkCategory, Streetcode};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::{delete_entity, ensure_exists};

/// GET /api/sources/names
pub async fn get_all_names(State(state): State<AppState>) -> ApiResult<Vec<CategoryNameDto>> {
    let categories = repo::source::list_categories(&state.pool).await?;
    Ok(ApiResponse::success(
        categories.into_iter().map(Into::into).collect(),
    ))
}

/// GET /api/sources/categories
pub async fn get_all_categories(
    State(state): State<AppState>,
) -> ApiResult<Vec<SourceLinkCategoryDto>> {
    let categories = repo::source::list_categories(&state.pool).await?;
    Ok(ApiResponse::success(
        categories.into_iter().map(Into::into).collect(),
    ))
}

/// GET /api/sources/categories/:id
pub async fn get_category_by_id(
    Exists(category): Exists<SourceLinkCategory>,
) -> ApiResult<SourceLinkCategoryDto> {
    Ok(ApiResponse::success(category.into()))
}

/// GET /api/sources/categories/by-streetcode/:streetcode_id
pub async fn get_categories_by_streetcode(
    State(state): State<AppState>,
    Path(streetcode_id): Path<i32>,
) -> ApiResult<Vec<SourceLinkCategoryDto>> {
    let categories = repo::source::categories_by_streetcode(&state.pool, streetcode_id).await?;
    Ok(ApiResponse::success(
        categories.into_iter().map(Into::into).collect(),
    ))
}

/// GET /api/sources/content?streetcode_id=&category_id=
pub async fn get_content(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> ApiResult<CategoryContentDto> {
    let Some(content) =
        repo::source::content(&state.pool, query.streetcode_id, query.category_id).await?
    else {
        let message = format!(
            "No content for category {} on streetcode {}",
            query.category_id, query.streetcode_id
        );
        tracing::error!("{}", message);
        return Err(ApiError::not_found(message));
    };
    Ok(ApiResponse::success(content.into()))
}

/// POST /api/sources/categories (admin)
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> ApiResult<SourceLinkCategoryDto> {
    validation::category(&req)?;
    ensure_exists::<Image>(&state.pool, req.image_id).await?;

    let category = repo::source::insert_category(&state.pool, &req).await?;
    Ok(ApiResponse::created(category.into()))
}

/// PUT /api/sources/content (admin) - upsert keyed by (category, streetcode)
pub async fn update_content(
    State(state): State<AppState>,
    Json(req): Json<UpdateCategoryContentRequest>,
) -> ApiResult<CategoryContentDto> {
    validation::category_content(&req)?;
    ensure_exists::<SourceLinkCategory>(&state.pool, req.source_link_category_id).await?;
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;

    let content = repo::source::upsert_content(&state.pool, &req).await?;
    Ok(ApiResponse::success(content.into()))
}

/// DELETE /api/sources/categories/:id (admin)
pub async fn delete_category(
    State(state): State<AppState>,
    Exists(category): Exists<SourceLinkCategory>,
) -> ApiResult<()> {
    delete_entity::<SourceLinkCategory>(&state.pool, category.id).await?;
    Ok(ApiResponse::<()>::no_content())
}
