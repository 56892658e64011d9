use axum::{extract::State, Json};
use chrono::Utc;

use crate::app::AppState;
use crate::auth;
use crate::dto::auth::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, UserDto,
};
use crate::error::ApiError;
use crate::models::{ApplicationUser, Role};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<UserDto> {
    validation::register(&req)?;

    if repo::user::find_by_email(&state.pool, &req.email).await?.is_some() {
        return Err(ApiError::conflict(format!(
            "A user with email {} already exists",
            req.email
        )));
    }

    let password_hash = auth::hash_password(&req.password)?;
    let user = repo::user::insert(
        &state.pool,
        &req.user_name,
        &req.email,
        &password_hash,
        Role::User,
    )
    .await?;

    tracing::info!("Registered user {}", user.email);
    Ok(ApiResponse::created(user.into()))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    let Some(user) = repo::user::find_by_email(&state.pool, &req.email).await? else {
        return Err(invalid_credentials());
    };

    if !auth::verify_password(&req.password, &user.password_hash)? {
        tracing::warn!("Failed login attempt for {}", req.email);
        return Err(invalid_credentials());
    }

    let response = issue_session(&state, &user).await?;
    Ok(ApiResponse::success(response))
}

/// POST /api/auth/refresh
///
/// Accepts an access token whose signature verifies (expiry ignored) plus
/// the refresh token issued alongside it. The refresh token is rotated.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<AuthResponse> {
    let claims = auth::principal_ignoring_expiry(&req.token)?;

    let Some(user) = repo::user::find_by_id(&state.pool, claims.sub).await? else {
        return Err(ApiError::unauthorized("User no longer exists"));
    };

    let stored = user
        .refresh_token
        .as_deref()
        .filter(|stored| *stored == req.refresh_token);
    if stored.is_none() {
        tracing::warn!("Refresh token mismatch for user {}", user.email);
        return Err(ApiError::unauthorized("Invalid refresh token"));
    }

    let expired = user
        .refresh_token_expires_at
        .map(|at| at < Utc::now())
        .unwrap_or(true);
    if expired {
        return Err(ApiError::unauthorized("Refresh token has expired"));
    }

    let response = issue_session(&state, &user).await?;
    Ok(ApiResponse::success(response))
}

async fn issue_session(
    state: &AppState,
    user: &ApplicationUser,
) -> Result<AuthResponse, ApiError> {
    let (token, expiration) = auth::issue_token(user)?;
    let refresh_token = auth::generate_refresh_token();
    let refresh_expiration = auth::refresh_expiry();

    repo::user::store_refresh_token(&state.pool, user.id, &refresh_token, refresh_expiration)
        .await?;

    Ok(AuthResponse {
        user_name: user.user_name.clone(),
        email: user.email.clone(),
        token,
        expiration,
        refresh_token,
        refresh_token_expiration: refresh_expiration,
    })
}

fn invalid_credentials() -> ApiError {
    // One message for both unknown email and bad password.
    ApiError::unauthorized("Invalid email or password")
}
