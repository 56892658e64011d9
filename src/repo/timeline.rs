use sqlx::{PgPool, Postgres, Transaction};

use crate::dto::timeline::{CreateTimelineItemRequest, UpdateTimelineItemRequest};
use crate::models::{HistoricalContext, TimelineItem};

pub async fn list(pool: &PgPool) -> Result<Vec<TimelineItem>, sqlx::Error> {
    sqlx::query_as::<_, TimelineItem>("SELECT * FROM timeline_items ORDER BY date")
        .fetch_all(pool)
        .await
}

pub async fn by_streetcode(
    pool: &PgPool,
    streetcode_id: i32,
) -> Result<Vec<TimelineItem>, sqlx::Error> {
    sqlx::query_as::<_, TimelineItem>(
        "SELECT * FROM timeline_items WHERE streetcode_id = $1 ORDER BY date",
    )
    .bind(streetcode_id)
    .fetch_all(pool)
    .await
}

pub async fn contexts_for(
    pool: &PgPool,
    timeline_item_id: i32,
) -> Result<Vec<HistoricalContext>, sqlx::Error> {
    sqlx::query_as::<_, HistoricalContext>(
        "SELECT hc.* FROM historical_contexts hc
         JOIN timeline_item_historical_contexts tihc ON tihc.historical_context_id = hc.id
         WHERE tihc.timeline_item_id = $1
         ORDER BY hc.title",
    )
    .bind(timeline_item_id)
    .fetch_all(pool)
    .await
}

/// Inserts the item and resolves its context titles: existing titles are
/// linked, unknown ones created first.
pub async fn insert(
    pool: &PgPool,
    req: &CreateTimelineItemRequest,
) -> Result<(TimelineItem, Vec<HistoricalContext>), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let item = sqlx::query_as::<_, TimelineItem>(
        "INSERT INTO timeline_items (date, date_view_pattern, title, description, streetcode_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(req.date)
    .bind(req.date_view_pattern)
    .bind(&req.title)
    .bind(&req.description)
    .bind(req.streetcode_id)
    .fetch_one(&mut *tx)
    .await?;

    let contexts = link_contexts(&mut tx, item.id, &req.historical_contexts).await?;

    tx.commit().await?;
    Ok((item, contexts))
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    req: &UpdateTimelineItemRequest,
) -> Result<Option<(TimelineItem, Vec<HistoricalContext>)>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(item) = sqlx::query_as::<_, TimelineItem>(
        "UPDATE timeline_items
         SET date = $2, date_view_pattern = $3, title = $4, description = $5
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(req.date)
    .bind(req.date_view_pattern)
    .bind(&req.title)
    .bind(&req.description)
    .fetch_optional(&mut *tx)
    .await?
    else {
        return Ok(None);
    };

    sqlx::query("DELETE FROM timeline_item_historical_contexts WHERE timeline_item_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let contexts = link_contexts(&mut tx, item.id, &req.historical_contexts).await?;

    tx.commit().await?;
    Ok(Some((item, contexts)))
}

async fn link_contexts(
    tx: &mut Transaction<'_, Postgres>,
    timeline_item_id: i32,
    titles: &[String],
) -> Result<Vec<HistoricalContext>, sqlx::Error> {
    let mut contexts = Vec::with_capacity(titles.len());
    for title in titles {
        let context = sqlx::query_as::<_, HistoricalContext>(
            "INSERT INTO historical_contexts (title)
             VALUES ($1)
             ON CONFLICT (title) DO UPDATE SET title = EXCLUDED.title
             RETURNING *",
        )
        .bind(title)
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query(
            "INSERT INTO timeline_item_historical_contexts (timeline_item_id, historical_context_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(timeline_item_id)
        .bind(context.id)
        .execute(&mut **tx)
        .await?;

        contexts.push(context);
    }
    Ok(contexts)
}
