use sqlx::PgPool;

use crate::dto::streetcode::{CreateStreetcodeRequest, UpdateStreetcodeRequest};
use crate::models::{Streetcode, StreetcodeStatus};

/// Paged listing for the admin grid; soft-deleted rows are always hidden.
pub async fn list(
    pool: &PgPool,
    page: i64,
    amount: i64,
    title: Option<&str>,
) -> Result<Vec<Streetcode>, sqlx::Error> {
    let offset = (page.max(1) - 1) * amount;
    match title {
        Some(title) => {
            sqlx::query_as::<_, Streetcode>(
                r#"SELECT * FROM streetcodes
                   WHERE status <> $1 AND (title ILIKE '%' || $2 || '%' OR teaser ILIKE '%' || $2 || '%')
                   ORDER BY "index" LIMIT $3 OFFSET $4"#,
            )
            .bind(StreetcodeStatus::Deleted)
            .bind(title)
            .bind(amount)
            .bind(offset)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Streetcode>(
                r#"SELECT * FROM streetcodes WHERE status <> $1 ORDER BY "index" LIMIT $2 OFFSET $3"#,
            )
            .bind(StreetcodeStatus::Deleted)
            .bind(amount)
            .bind(offset)
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Streetcode>, sqlx::Error> {
    sqlx::query_as::<_, Streetcode>(
        r#"SELECT * FROM streetcodes WHERE status <> $1 ORDER BY "index""#,
    )
    .bind(StreetcodeStatus::Deleted)
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM streetcodes WHERE status <> $1")
            .bind(StreetcodeStatus::Deleted)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

/// Random published selection for the landing page.
pub async fn main_page(pool: &PgPool, count: i64) -> Result<Vec<Streetcode>, sqlx::Error> {
    sqlx::query_as::<_, Streetcode>(
        "SELECT * FROM streetcodes WHERE status = $1 ORDER BY random() LIMIT $2",
    )
    .bind(StreetcodeStatus::Published)
    .bind(count)
    .fetch_all(pool)
    .await
}

pub async fn catalog(pool: &PgPool, page: i64, count: i64) -> Result<Vec<Streetcode>, sqlx::Error> {
    let offset = (page.max(1) - 1) * count;
    sqlx::query_as::<_, Streetcode>(
        r#"SELECT * FROM streetcodes WHERE status = $1 ORDER BY "index" LIMIT $2 OFFSET $3"#,
    )
    .bind(StreetcodeStatus::Published)
    .bind(count)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn get_by_transliteration_url(
    pool: &PgPool,
    url: &str,
) -> Result<Option<Streetcode>, sqlx::Error> {
    sqlx::query_as::<_, Streetcode>(
        "SELECT * FROM streetcodes WHERE transliteration_url = $1 AND status <> $2",
    )
    .bind(url)
    .bind(StreetcodeStatus::Deleted)
    .fetch_optional(pool)
    .await
}

pub async fn increment_views(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE streetcodes SET view_count = view_count + 1 WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn insert(
    pool: &PgPool,
    req: &CreateStreetcodeRequest,
) -> Result<Streetcode, sqlx::Error> {
    sqlx::query_as::<_, Streetcode>(
        r#"INSERT INTO streetcodes
               ("index", teaser, date_string, alias, title, transliteration_url, status,
                streetcode_type, event_start_or_person_birth_date,
                event_end_or_person_death_date, first_name, last_name, audio_id)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
           RETURNING *"#,
    )
    .bind(req.index)
    .bind(&req.teaser)
    .bind(&req.date_string)
    .bind(&req.alias)
    .bind(&req.title)
    .bind(&req.transliteration_url)
    .bind(StreetcodeStatus::Draft)
    .bind(req.streetcode_type)
    .bind(req.event_start_or_person_birth_date)
    .bind(req.event_end_or_person_death_date)
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(req.audio_id)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    req: &UpdateStreetcodeRequest,
) -> Result<Option<Streetcode>, sqlx::Error> {
    sqlx::query_as::<_, Streetcode>(
        r#"UPDATE streetcodes SET
               "index" = $2, teaser = $3, date_string = $4, alias = $5, title = $6,
               transliteration_url = $7, status = $8, streetcode_type = $9,
               event_start_or_person_birth_date = $10, event_end_or_person_death_date = $11,
               first_name = $12, last_name = $13, audio_id = $14, updated_at = now()
           WHERE id = $1
           RETURNING *"#,
    )
    .bind(id)
    .bind(req.index)
    .bind(&req.teaser)
    .bind(&req.date_string)
    .bind(&req.alias)
    .bind(&req.title)
    .bind(&req.transliteration_url)
    .bind(req.status)
    .bind(req.streetcode_type)
    .bind(req.event_start_or_person_birth_date)
    .bind(req.event_end_or_person_death_date)
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(req.audio_id)
    .fetch_optional(pool)
    .await
}

/// Soft delete: the row stays, status flips to Deleted.
pub async fn soft_delete(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE streetcodes SET status = $2, updated_at = now() WHERE id = $1 AND status <> $2",
    )
    .bind(id)
    .bind(StreetcodeStatus::Deleted)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
