use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ApplicationUser, Role};

pub async fn find_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<ApplicationUser>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationUser>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ApplicationUser>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationUser>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// email uniqueness is enforced by the table; duplicates map to 409.
pub async fn insert(
    pool: &PgPool,
    user_name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<ApplicationUser, sqlx::Error> {
    sqlx::query_as::<_, ApplicationUser>(
        "INSERT INTO users (id, user_name, email, password_hash, role)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await
}

/// Rotate the stored refresh token (login and refresh both go through here).
pub async fn store_refresh_token(
    pool: &PgPool,
    id: Uuid,
    refresh_token: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE users SET refresh_token = $2, refresh_token_expires_at = $3 WHERE id = $1",
    )
    .bind(id)
    .bind(refresh_token)
    .bind(expires_at)
    .execute(pool)
    .await?;
    Ok(())
}
