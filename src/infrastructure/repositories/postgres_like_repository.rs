use async_trait::async_trait;
use sqlx::PgPool;

use super::{map_delete_error, map_write_error};
use crate::domain::errors::RepositoryError;
use crate::domain::like::{Like, LikeKey};
use crate::domain::repositories::LikeRepository;

/// PostgreSQL implementation of LikeRepository
///
/// The `(user_id, post_id)` primary key enforces one like per pair.
#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn create(&self, key: LikeKey) -> Result<Like, RepositoryError> {
        sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO likes (user_id, post_id)
            VALUES ($1, $2)
            RETURNING user_id, post_id, created_at
            "#,
        )
        .bind(key.user_id)
        .bind(key.post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error("create like", "Post already liked by this user", e))
    }

    async fn delete(&self, key: LikeKey) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND post_id = $2")
            .bind(key.user_id)
            .bind(key.post_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error("Like", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Like".to_string()));
        }

        Ok(())
    }
}
