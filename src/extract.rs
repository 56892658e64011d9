use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Path},
    http::{request::Parts, Method},
};
use sqlx::PgPool;

use crate::error::{messages, ApiError};
use crate::models::Entity;
use crate::repo::EntityRepository;

/// Existence-checked entity extractor. Runs before the handler: parses the
/// `id` path segment, loads the row, and rejects with a 404 (worded per
/// HTTP method) when it is absent. Handlers receive the loaded entity.
pub struct Exists<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Exists<T>
where
    S: Send + Sync,
    PgPool: FromRef<S>,
    T: Entity + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request("Route id must be an integer"))?;

        let pool = PgPool::from_ref(state);
        match EntityRepository::<T>::new(pool).get_by_id(id).await? {
            Some(entity) => Ok(Exists(entity)),
            None => {
                let message = not_found_message(&parts.method, T::NAME, id);
                tracing::error!("{}", message);
                Err(ApiError::not_found(message))
            }
        }
    }
}

fn not_found_message(method: &Method, entity: &str, id: i32) -> String {
    match *method {
        Method::PUT | Method::PATCH => messages::update_failed(entity, id),
        Method::DELETE => messages::delete_failed(entity, id),
        _ => messages::entity_by_id_not_found(entity, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_depends_on_method() {
        assert_eq!(
            not_found_message(&Method::GET, "Fact", 5),
            "Fact with id 5 not found"
        );
        assert_eq!(
            not_found_message(&Method::PUT, "Fact", 5),
            "Failed to update Fact with id 5"
        );
        assert_eq!(
            not_found_message(&Method::DELETE, "Fact", 5),
            "Failed to delete Fact with id 5"
        );
    }
}
