use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::post::Post;
use crate::domain::user::UserProfile;

/// Stored comment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub author_id: i32,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub author_id: i32,
    pub post_id: i32,
}

/// Partial update of a comment; only the content is mutable
#[derive(Debug, Clone, Default)]
pub struct CommentChanges {
    pub content: Option<String>,
}

/// A comment with its author, as nested under a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: UserProfile,
}

/// A comment with its author and the post it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: UserProfile,
    pub post: Post,
}
