use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;
use crate::models::{ApplicationUser, Role};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Unique token id
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &ApplicationUser) -> (Self, DateTime<Utc>) {
        let now = Utc::now();
        let expiry_minutes = config::config().security.jwt_expiry_minutes;
        let expiration = now + Duration::minutes(expiry_minutes as i64);

        let claims = Self {
            sub: user.id,
            name: user.user_name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };
        (claims, expiration)
    }

    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("JWT secret not configured")]
    MissingSecret,
    #[error("{0}")]
    Invalid(String),
    #[error("token generation failed: {0}")]
    Generation(String),
    #[error("password hash failure: {0}")]
    Hash(String),
}

fn secret() -> Result<&'static str, TokenError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }
    Ok(secret)
}

/// Issue a signed HS256 token; returns the token and its expiration moment.
pub fn issue_token(user: &ApplicationUser) -> Result<(String, DateTime<Utc>), TokenError> {
    let (claims, expiration) = Claims::for_user(user);
    let encoding_key = EncodingKey::from_secret(secret()?.as_bytes());

    let token = encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))?;
    Ok((token, expiration))
}

/// Validate signature and expiry, returning the claims.
pub fn decode_token(token: &str) -> Result<Claims, TokenError> {
    let decoding_key = DecodingKey::from_secret(secret()?.as_bytes());
    let validation = Validation::default();

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| TokenError::Invalid(e.to_string()))
}

/// Like [`decode_token`] but ignores expiry; the refresh flow accepts an
/// expired access token as long as the signature still verifies.
pub fn principal_ignoring_expiry(token: &str) -> Result<Claims, TokenError> {
    let decoding_key = DecodingKey::from_secret(secret()?.as_bytes());
    let mut validation = Validation::default();
    validation.validate_exp = false;

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| TokenError::Invalid(e.to_string()))
}

/// 64 random bytes, base64-encoded.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; 64];
    rand::thread_rng().fill_bytes(&mut bytes);
    BASE64.encode(bytes)
}

pub fn refresh_expiry() -> DateTime<Utc> {
    Utc::now() + Duration::days(config::config().security.refresh_expiry_days)
}

pub fn hash_password(password: &str) -> Result<String, TokenError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| TokenError::Hash(e.to_string()))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, TokenError> {
    bcrypt::verify(password, hash).map_err(|e| TokenError::Hash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> ApplicationUser {
        ApplicationUser {
            id: Uuid::new_v4(),
            user_name: "editor".into(),
            email: "editor@streetcode.example".into(),
            password_hash: String::new(),
            role: Role::Admin,
            refresh_token: None,
            refresh_token_expires_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn token_round_trip() {
        let user = sample_user();
        let (token, expiration) = issue_token(&user).unwrap();
        assert!(expiration > Utc::now());

        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role(), Some(Role::Admin));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let (token, _) = issue_token(&sample_user()).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(decode_token(&tampered).is_err());
    }

    #[test]
    fn expired_token_still_yields_principal() {
        // Claims with exp in the past, signed with the configured secret.
        let user = sample_user();
        let (mut claims, _) = Claims::for_user(&user);
        claims.exp = (Utc::now() - Duration::hours(2)).timestamp();

        let key = EncodingKey::from_secret(secret().unwrap().as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert!(decode_token(&token).is_err());
        let principal = principal_ignoring_expiry(&token).unwrap();
        assert_eq!(principal.sub, user.id);
    }

    #[test]
    fn refresh_tokens_are_distinct() {
        let a = generate_refresh_token();
        let b = generate_refresh_token();
        assert_ne!(a, b);
        assert!(a.len() > 64);
    }

    #[test]
    fn password_hash_verifies() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }
}
