// Flat row shapes for joined queries
// Each converts into the nested domain read model

use chrono::{DateTime, Utc};

use crate::domain::comment::{Comment, CommentDetail, CommentWithAuthor};
use crate::domain::post::Post;
use crate::domain::user::UserProfile;

/// posts JOIN users
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PostWithAuthorRow {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub author_email: String,
    pub author_username: String,
    pub author_created_at: DateTime<Utc>,
}

impl From<PostWithAuthorRow> for (Post, UserProfile) {
    fn from(r: PostWithAuthorRow) -> Self {
        let author = UserProfile {
            id: r.author_id,
            email: r.author_email,
            username: r.author_username,
            created_at: r.author_created_at,
        };
        let post = Post {
            id: r.id,
            title: r.title,
            content: r.content,
            author_id: r.author_id,
            created_at: r.created_at,
        };
        (post, author)
    }
}

/// comments JOIN users
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CommentWithAuthorRow {
    pub id: i32,
    pub content: String,
    pub author_id: i32,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
    pub author_email: String,
    pub author_username: String,
    pub author_created_at: DateTime<Utc>,
}

impl From<CommentWithAuthorRow> for CommentWithAuthor {
    fn from(r: CommentWithAuthorRow) -> Self {
        Self {
            author: UserProfile {
                id: r.author_id,
                email: r.author_email,
                username: r.author_username,
                created_at: r.author_created_at,
            },
            comment: Comment {
                id: r.id,
                content: r.content,
                author_id: r.author_id,
                post_id: r.post_id,
                created_at: r.created_at,
            },
        }
    }
}

/// comments JOIN users JOIN posts
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CommentDetailRow {
    pub id: i32,
    pub content: String,
    pub author_id: i32,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
    pub author_email: String,
    pub author_username: String,
    pub author_created_at: DateTime<Utc>,
    pub post_title: String,
    pub post_content: String,
    pub post_author_id: i32,
    pub post_created_at: DateTime<Utc>,
}

impl From<CommentDetailRow> for CommentDetail {
    fn from(r: CommentDetailRow) -> Self {
        Self {
            post: Post {
                id: r.post_id,
                title: r.post_title,
                content: r.post_content,
                author_id: r.post_author_id,
                created_at: r.post_created_at,
            },
            author: UserProfile {
                id: r.author_id,
                email: r.author_email,
                username: r.author_username,
                created_at: r.author_created_at,
            },
            comment: Comment {
                id: r.id,
                content: r.content,
                author_id: r.author_id,
                post_id: r.post_id,
                created_at: r.created_at,
            },
        }
    }
}
