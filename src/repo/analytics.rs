use sqlx::PgPool;

use crate::dto::analytics::CreateStatisticRecordRequest;
use crate::models::StatisticRecord;

pub async fn list(pool: &PgPool) -> Result<Vec<StatisticRecord>, sqlx::Error> {
    sqlx::query_as::<_, StatisticRecord>("SELECT * FROM statistic_records ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn by_qr(pool: &PgPool, qr_id: i32) -> Result<Option<StatisticRecord>, sqlx::Error> {
    sqlx::query_as::<_, StatisticRecord>("SELECT * FROM statistic_records WHERE qr_id = $1")
        .bind(qr_id)
        .fetch_optional(pool)
        .await
}

/// qr_id is unique; a duplicate insert surfaces as a 409 via the error
/// mapping.
pub async fn insert(
    pool: &PgPool,
    req: &CreateStatisticRecordRequest,
) -> Result<StatisticRecord, sqlx::Error> {
    sqlx::query_as::<_, StatisticRecord>(
        "INSERT INTO statistic_records (qr_id, count, address, streetcode_id)
         VALUES ($1, 0, $2, $3)
         RETURNING *",
    )
    .bind(req.qr_id)
    .bind(&req.address)
    .bind(req.streetcode_id)
    .fetch_one(pool)
    .await
}

/// Registers one scan of the plaque.
pub async fn hit(pool: &PgPool, qr_id: i32) -> Result<Option<StatisticRecord>, sqlx::Error> {
    sqlx::query_as::<_, StatisticRecord>(
        "UPDATE statistic_records SET count = count + 1 WHERE qr_id = $1 RETURNING *",
    )
    .bind(qr_id)
    .fetch_optional(pool)
    .await
}
