use sqlx::PgPool;

use crate::dto::source::{CreateCategoryRequest, UpdateCategoryContentRequest};
use crate::models::{SourceLinkCategory, StreetcodeCategoryContent};

pub async fn list_categories(pool: &PgPool) -> Result<Vec<SourceLinkCategory>, sqlx::Error> {
    sqlx::query_as::<_, SourceLinkCategory>("SELECT * FROM source_link_categories ORDER BY title")
        .fetch_all(pool)
        .await
}

pub async fn categories_by_streetcode(
    pool: &PgPool,
    streetcode_id: i32,
) -> Result<Vec<SourceLinkCategory>, sqlx::Error> {
    sqlx::query_as::<_, SourceLinkCategory>(
        "SELECT c.* FROM source_link_categories c
         JOIN streetcode_category_contents scc ON scc.source_link_category_id = c.id
         WHERE scc.streetcode_id = $1
         ORDER BY c.title",
    )
    .bind(streetcode_id)
    .fetch_all(pool)
    .await
}

pub async fn content(
    pool: &PgPool,
    streetcode_id: i32,
    category_id: i32,
) -> Result<Option<StreetcodeCategoryContent>, sqlx::Error> {
    sqlx::query_as::<_, StreetcodeCategoryContent>(
        "SELECT * FROM streetcode_category_contents
         WHERE streetcode_id = $1 AND source_link_category_id = $2",
    )
    .bind(streetcode_id)
    .bind(category_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_category(
    pool: &PgPool,
    req: &CreateCategoryRequest,
) -> Result<SourceLinkCategory, sqlx::Error> {
    sqlx::query_as::<_, SourceLinkCategory>(
        "INSERT INTO source_link_categories (title, image_id)
         VALUES ($1, $2)
         RETURNING *",
    )
    .bind(&req.title)
    .bind(req.image_id)
    .fetch_one(pool)
    .await
}

/// Upsert keyed by the (category, streetcode) pair.
pub async fn upsert_content(
    pool: &PgPool,
    req: &UpdateCategoryContentRequest,
) -> Result<StreetcodeCategoryContent, sqlx::Error> {
    sqlx::query_as::<_, StreetcodeCategoryContent>(
        "INSERT INTO streetcode_category_contents (source_link_category_id, streetcode_id, text)
         VALUES ($1, $2, $3)
         ON CONFLICT (source_link_category_id, streetcode_id)
         DO UPDATE SET text = EXCLUDED.text
         RETURNING *",
    )
    .bind(req.source_link_category_id)
    .bind(req.streetcode_id)
    .bind(&req.text)
    .fetch_one(pool)
    .await
}
