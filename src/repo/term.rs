use sqlx::PgPool;

use crate::dto::term::{CreateRelatedTermRequest, CreateTermRequest};
use crate::models::{RelatedTerm, Term};

pub async fn list(pool: &PgPool) -> Result<Vec<Term>, sqlx::Error> {
    sqlx::query_as::<_, Term>("SELECT * FROM terms ORDER BY title")
        .fetch_all(pool)
        .await
}

pub async fn insert(pool: &PgPool, req: &CreateTermRequest) -> Result<Term, sqlx::Error> {
    sqlx::query_as::<_, Term>(
        "INSERT INTO terms (title, description) VALUES ($1, $2) RETURNING *",
    )
    .bind(&req.title)
    .bind(&req.description)
    .fetch_one(pool)
    .await
}

pub async fn related_by_term(pool: &PgPool, term_id: i32) -> Result<Vec<RelatedTerm>, sqlx::Error> {
    sqlx::query_as::<_, RelatedTerm>(
        "SELECT * FROM related_terms WHERE term_id = $1 ORDER BY word",
    )
    .bind(term_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_related(
    pool: &PgPool,
    req: &CreateRelatedTermRequest,
) -> Result<RelatedTerm, sqlx::Error> {
    sqlx::query_as::<_, RelatedTerm>(
        "INSERT INTO related_terms (word, term_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(&req.word)
    .bind(req.term_id)
    .fetch_one(pool)
    .await
}

pub async fn update_related(
    pool: &PgPool,
    id: i32,
    req: &CreateRelatedTermRequest,
) -> Result<Option<RelatedTerm>, sqlx::Error> {
    sqlx::query_as::<_, RelatedTerm>(
        "UPDATE related_terms SET word = $2, term_id = $3 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&req.word)
    .bind(req.term_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_related_by_word(pool: &PgPool, word: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM related_terms WHERE word = $1")
        .bind(word)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
