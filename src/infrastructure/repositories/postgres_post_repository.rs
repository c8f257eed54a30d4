use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{CommentWithAuthorRow, PostWithAuthorRow};
use super::{map_delete_error, map_read_error, map_write_error};
use crate::domain::comment::CommentWithAuthor;
use crate::domain::errors::RepositoryError;
use crate::domain::like::Like;
use crate::domain::post::{assemble_post_details, NewPost, Post, PostChanges, PostDetail};
use crate::domain::repositories::PostRepository;
use crate::domain::user::UserProfile;

const POSTS_WITH_AUTHOR: &str = r#"
    SELECT p.id, p.title, p.content, p.author_id, p.created_at,
           u.email AS author_email,
           u.username AS author_username,
           u.created_at AS author_created_at
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

/// PostgreSQL implementation of PostRepository
///
/// Detailed reads load posts, then the comments and likes of exactly those
/// posts, and stitch them together in memory.
#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    /// Creates a new PostgresPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn attach_children(
        &self,
        posts: Vec<(Post, UserProfile)>,
    ) -> Result<Vec<PostDetail>, RepositoryError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<i32> = posts.iter().map(|(post, _)| post.id).collect();

        let comments = sqlx::query_as::<_, CommentWithAuthorRow>(
            r#"
            SELECT c.id, c.content, c.author_id, c.post_id, c.created_at,
                   u.email AS author_email,
                   u.username AS author_username,
                   u.created_at AS author_created_at
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = ANY($1)
            ORDER BY c.id
            "#,
        )
        .bind(&post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error("load post comments", e))?
        .into_iter()
        .map(CommentWithAuthor::from)
        .collect();

        let likes = sqlx::query_as::<_, Like>(
            r#"
            SELECT user_id, post_id, created_at
            FROM likes
            WHERE post_id = ANY($1)
            ORDER BY created_at, user_id
            "#,
        )
        .bind(&post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error("load post likes", e))?;

        Ok(assemble_post_details(posts, comments, likes))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepositoryError> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author_id, created_at
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error("create post", "Post already exists", e))
    }

    async fn list_detailed(&self) -> Result<Vec<PostDetail>, RepositoryError> {
        let posts = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            "{} ORDER BY p.id",
            POSTS_WITH_AUTHOR
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error("list posts", e))?
        .into_iter()
        .map(Into::into)
        .collect();

        self.attach_children(posts).await
    }

    async fn find_detailed(&self, id: i32) -> Result<Option<PostDetail>, RepositoryError> {
        let post = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            "{} WHERE p.id = $1",
            POSTS_WITH_AUTHOR
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error("find post by id", e))?;

        match post {
            Some(row) => Ok(self.attach_children(vec![row.into()]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, RepositoryError> {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content)
            WHERE id = $1
            RETURNING id, title, content, author_id, created_at
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error("update post", "Post already exists", e))?
        .ok_or_else(|| RepositoryError::NotFound("Post".to_string()))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error("Post", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Post".to_string()));
        }

        Ok(())
    }
}
