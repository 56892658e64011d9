pub mod analytics;
pub mod auth;
pub mod fact;
pub mod media;
pub mod partner;
pub mod source;
pub mod streetcode;
pub mod term;
pub mod timeline;
pub mod toponym;

use sqlx::PgPool;

use crate::error::{messages, ApiError};
use crate::models::Entity;
use crate::repo::{self, EntityRepository};

/// Referential check used by create/update handlers: 404 with the entity's
/// name when the referenced row is missing.
pub(crate) async fn ensure_exists<T: Entity>(pool: &PgPool, id: i32) -> Result<(), ApiError> {
    if repo::exists::<T>(pool, id).await? {
        Ok(())
    } else {
        let message = messages::entity_by_id_not_found(T::NAME, id);
        tracing::error!("{}", message);
        Err(ApiError::not_found(message))
    }
}

pub(crate) async fn delete_entity<T: Entity>(pool: &PgPool, id: i32) -> Result<(), ApiError> {
    let deleted = EntityRepository::<T>::new(pool.clone()).delete_by_id(id).await?;
    if deleted == 0 {
        let message = messages::delete_failed(T::NAME, id);
        tracing::error!("{}", message);
        Err(ApiError::not_found(message))
    } else {
        Ok(())
    }
}
