use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ApplicationUser, Role};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The access token may be expired; its signature must still verify.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user_name: String,
    pub email: String,
    pub token: String,
    pub expiration: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_token_expiration: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

impl From<ApplicationUser> for UserDto {
    fn from(u: ApplicationUser) -> Self {
        Self {
            id: u.id,
            user_name: u.user_name,
            email: u.email,
            role: u.role,
        }
    }
}
