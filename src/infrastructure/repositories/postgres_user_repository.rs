use async_trait::async_trait;
use sqlx::PgPool;

use super::{map_delete_error, map_read_error, map_write_error};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::UserRepository;
use crate::domain::user::{Email, NewUser, User, UserChanges};

const EMAIL_TAKEN: &str = "Email already registered";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, username, password)
            VALUES ($1, $2, $3)
            RETURNING id, email, username, password, created_at
            "#,
        )
        .bind(user.email.as_str())
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error("create user", EMAIL_TAKEN, e))
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error("list users", e))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error("find user by id", e))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error("find user by email", e))
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                username = COALESCE($3, username)
            WHERE id = $1
            RETURNING id, email, username, password, created_at
            "#,
        )
        .bind(id)
        .bind(changes.email.as_ref().map(Email::as_str))
        .bind(changes.username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error("update user", EMAIL_TAKEN, e))?
        .ok_or_else(|| RepositoryError::NotFound("User".to_string()))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error("User", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("User".to_string()));
        }

        Ok(())
    }
}
