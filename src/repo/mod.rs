use sqlx::PgPool;
use std::marker::PhantomData;

use crate::models::Entity;

pub mod analytics;
pub mod fact;
pub mod media;
pub mod partner;
pub mod source;
pub mod streetcode;
pub mod term;
pub mod timeline;
pub mod toponym;
pub mod user;

/// Generic by-id access for any [`Entity`]. Table names come from the
/// entity impl, so the formatted SQL never contains request input.
pub struct EntityRepository<T> {
    pool: PgPool,
    _marker: PhantomData<T>,
}

impl<T: Entity> EntityRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<T>, sqlx::Error> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, sqlx::Error> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = $1", T::TABLE);
        let (count,): (i64,) = sqlx::query_as(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(count > 0)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<u64, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

/// True when a row with the given id exists; shared by the handlers'
/// referential checks.
pub async fn exists<T: Entity>(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    EntityRepository::<T>::new(pool.clone()).exists(id).await
}
