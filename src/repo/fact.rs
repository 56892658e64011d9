use sqlx::PgPool;

use crate::dto::fact::{CreateFactRequest, UpdateFactRequest};
use crate::models::Fact;

pub async fn list(pool: &PgPool) -> Result<Vec<Fact>, sqlx::Error> {
    sqlx::query_as::<_, Fact>(r#"SELECT * FROM facts ORDER BY streetcode_id, "index""#)
        .fetch_all(pool)
        .await
}

pub async fn by_streetcode(pool: &PgPool, streetcode_id: i32) -> Result<Vec<Fact>, sqlx::Error> {
    sqlx::query_as::<_, Fact>(
        r#"SELECT * FROM facts WHERE streetcode_id = $1 ORDER BY "index""#,
    )
    .bind(streetcode_id)
    .fetch_all(pool)
    .await
}

/// New facts land at the end of their streetcode's ordering.
pub async fn insert(pool: &PgPool, req: &CreateFactRequest) -> Result<Fact, sqlx::Error> {
    sqlx::query_as::<_, Fact>(
        r#"INSERT INTO facts (title, fact_content, "index", image_id, streetcode_id)
           VALUES ($1, $2,
                   (SELECT COALESCE(MAX("index"), 0) + 1 FROM facts WHERE streetcode_id = $4),
                   $3, $4)
           RETURNING *"#,
    )
    .bind(&req.title)
    .bind(&req.fact_content)
    .bind(req.image_id)
    .bind(req.streetcode_id)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    req: &UpdateFactRequest,
) -> Result<Option<Fact>, sqlx::Error> {
    sqlx::query_as::<_, Fact>(
        r#"UPDATE facts
           SET title = $2, fact_content = $3, image_id = $4, streetcode_id = $5
           WHERE id = $1
           RETURNING *"#,
    )
    .bind(id)
    .bind(&req.title)
    .bind(&req.fact_content)
    .bind(req.image_id)
    .bind(req.streetcode_id)
    .fetch_optional(pool)
    .await
}

/// Rewrites the ordering of one streetcode's facts. Returns false (and
/// leaves the table untouched) unless `ordered_ids` is exactly the set of
/// that streetcode's fact ids.
pub async fn reorder(
    pool: &PgPool,
    streetcode_id: i32,
    ordered_ids: &[i32],
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (total,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM facts WHERE streetcode_id = $1")
            .bind(streetcode_id)
            .fetch_one(&mut *tx)
            .await?;
    let (matching,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM facts WHERE streetcode_id = $1 AND id = ANY($2)",
    )
    .bind(streetcode_id)
    .bind(ordered_ids)
    .fetch_one(&mut *tx)
    .await?;

    if total != ordered_ids.len() as i64 || matching != ordered_ids.len() as i64 {
        return Ok(false);
    }

    for (position, fact_id) in ordered_ids.iter().enumerate() {
        sqlx::query(r#"UPDATE facts SET "index" = $1 WHERE id = $2 AND streetcode_id = $3"#)
            .bind(position as i32 + 1)
            .bind(fact_id)
            .bind(streetcode_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(true)
}
