use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::CommentDetailRow;
use super::{map_delete_error, map_read_error, map_write_error};
use crate::domain::comment::{Comment, CommentChanges, CommentDetail, NewComment};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::CommentRepository;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepositoryError> {
        sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (content, author_id, post_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, author_id, post_id, created_at
            "#,
        )
        .bind(&comment.content)
        .bind(comment.author_id)
        .bind(comment.post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error("create comment", "Comment already exists", e))
    }

    async fn list_detailed(&self) -> Result<Vec<CommentDetail>, RepositoryError> {
        let rows = sqlx::query_as::<_, CommentDetailRow>(
            r#"
            SELECT c.id, c.content, c.author_id, c.post_id, c.created_at,
                   u.email AS author_email,
                   u.username AS author_username,
                   u.created_at AS author_created_at,
                   p.title AS post_title,
                   p.content AS post_content,
                   p.author_id AS post_author_id,
                   p.created_at AS post_created_at
            FROM comments c
            JOIN users u ON u.id = c.author_id
            JOIN posts p ON p.id = c.post_id
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error("list comments", e))?;

        Ok(rows.into_iter().map(CommentDetail::from).collect())
    }

    async fn update(&self, id: i32, changes: CommentChanges) -> Result<Comment, RepositoryError> {
        sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET content = COALESCE($2, content)
            WHERE id = $1
            RETURNING id, content, author_id, post_id, created_at
            "#,
        )
        .bind(id)
        .bind(changes.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error("update comment", "Comment already exists", e))?
        .ok_or_else(|| RepositoryError::NotFound("Comment".to_string()))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error("Comment", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Comment".to_string()));
        }

        Ok(())
    }
}
