use sqlx::PgPool;

use crate::dto::media::{CreateArtRequest, CreateVideoRequest, UpdateVideoRequest};
use crate::models::{Art, Audio, Image, Video};

// --- images ---

pub async fn images_by_streetcode(
    pool: &PgPool,
    streetcode_id: i32,
) -> Result<Vec<Image>, sqlx::Error> {
    sqlx::query_as::<_, Image>(
        "SELECT i.* FROM images i
         JOIN streetcode_images si ON si.image_id = i.id
         WHERE si.streetcode_id = $1
         ORDER BY i.id",
    )
    .bind(streetcode_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_image(
    pool: &PgPool,
    blob_name: &str,
    mime_type: &str,
    title: Option<&str>,
    alt: Option<&str>,
) -> Result<Image, sqlx::Error> {
    sqlx::query_as::<_, Image>(
        "INSERT INTO images (blob_name, mime_type, title, alt)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(blob_name)
    .bind(mime_type)
    .bind(title)
    .bind(alt)
    .fetch_one(pool)
    .await
}

pub async fn link_image_to_streetcode(
    pool: &PgPool,
    streetcode_id: i32,
    image_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO streetcode_images (streetcode_id, image_id)
         VALUES ($1, $2)
         ON CONFLICT DO NOTHING",
    )
    .bind(streetcode_id)
    .bind(image_id)
    .execute(pool)
    .await?;
    Ok(())
}

// --- audios ---

pub async fn audio_by_streetcode(
    pool: &PgPool,
    streetcode_id: i32,
) -> Result<Option<Audio>, sqlx::Error> {
    sqlx::query_as::<_, Audio>(
        "SELECT a.* FROM audios a
         JOIN streetcodes s ON s.audio_id = a.id
         WHERE s.id = $1",
    )
    .bind(streetcode_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_audio(
    pool: &PgPool,
    blob_name: &str,
    mime_type: &str,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<Audio, sqlx::Error> {
    sqlx::query_as::<_, Audio>(
        "INSERT INTO audios (blob_name, mime_type, title, description)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(blob_name)
    .bind(mime_type)
    .bind(title)
    .bind(description)
    .fetch_one(pool)
    .await
}

pub async fn set_streetcode_audio(
    pool: &PgPool,
    streetcode_id: i32,
    audio_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE streetcodes SET audio_id = $2, updated_at = now() WHERE id = $1")
        .bind(streetcode_id)
        .bind(audio_id)
        .execute(pool)
        .await?;
    Ok(())
}

// --- videos ---

pub async fn list_videos(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>("SELECT * FROM videos ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn videos_by_streetcode(
    pool: &PgPool,
    streetcode_id: i32,
) -> Result<Vec<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE streetcode_id = $1 ORDER BY id")
        .bind(streetcode_id)
        .fetch_all(pool)
        .await
}

pub async fn insert_video(pool: &PgPool, req: &CreateVideoRequest) -> Result<Video, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        "INSERT INTO videos (title, description, url, streetcode_id)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.url)
    .bind(req.streetcode_id)
    .fetch_one(pool)
    .await
}

pub async fn update_video(
    pool: &PgPool,
    id: i32,
    req: &UpdateVideoRequest,
) -> Result<Option<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        "UPDATE videos
         SET title = $2, description = $3, url = $4, streetcode_id = $5
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.url)
    .bind(req.streetcode_id)
    .fetch_optional(pool)
    .await
}

// --- arts ---

pub async fn list_arts(pool: &PgPool) -> Result<Vec<Art>, sqlx::Error> {
    sqlx::query_as::<_, Art>("SELECT * FROM arts ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn arts_by_streetcode(
    pool: &PgPool,
    streetcode_id: i32,
) -> Result<Vec<Art>, sqlx::Error> {
    sqlx::query_as::<_, Art>(
        "SELECT a.* FROM arts a
         JOIN streetcode_arts sa ON sa.art_id = a.id
         WHERE sa.streetcode_id = $1
         ORDER BY a.id",
    )
    .bind(streetcode_id)
    .fetch_all(pool)
    .await
}

/// Inserts the art and its streetcode link in one transaction.
pub async fn insert_art(pool: &PgPool, req: &CreateArtRequest) -> Result<Art, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let art = sqlx::query_as::<_, Art>(
        "INSERT INTO arts (image_id, title, description)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(req.image_id)
    .bind(&req.title)
    .bind(&req.description)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO streetcode_arts (streetcode_id, art_id) VALUES ($1, $2)")
        .bind(req.streetcode_id)
        .bind(art.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(art)
}
