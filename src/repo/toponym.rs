use sqlx::PgPool;

use crate::models::Toponym;

pub async fn list(
    pool: &PgPool,
    page: i64,
    amount: i64,
    title: Option<&str>,
) -> Result<Vec<Toponym>, sqlx::Error> {
    let offset = (page.max(1) - 1) * amount;
    match title {
        Some(title) => {
            sqlx::query_as::<_, Toponym>(
                "SELECT * FROM toponyms
                 WHERE street_name ILIKE '%' || $1 || '%'
                 ORDER BY street_name LIMIT $2 OFFSET $3",
            )
            .bind(title)
            .bind(amount)
            .bind(offset)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Toponym>(
                "SELECT * FROM toponyms ORDER BY street_name LIMIT $1 OFFSET $2",
            )
            .bind(amount)
            .bind(offset)
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn by_streetcode(
    pool: &PgPool,
    streetcode_id: i32,
) -> Result<Vec<Toponym>, sqlx::Error> {
    sqlx::query_as::<_, Toponym>(
        "SELECT t.* FROM toponyms t
         JOIN streetcode_toponyms st ON st.toponym_id = t.id
         WHERE st.streetcode_id = $1
         ORDER BY t.street_name",
    )
    .bind(streetcode_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_link(
    pool: &PgPool,
    streetcode_id: i32,
    toponym_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO streetcode_toponyms (streetcode_id, toponym_id) VALUES ($1, $2)")
        .bind(streetcode_id)
        .bind(toponym_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_link(
    pool: &PgPool,
    streetcode_id: i32,
    toponym_id: i32,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM streetcode_toponyms WHERE streetcode_id = $1 AND toponym_id = $2",
    )
    .bind(streetcode_id)
    .bind(toponym_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
