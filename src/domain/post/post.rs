use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stored post record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a post
///
/// `author_id` is not checked against the users table before the insert;
/// the foreign key constraint rejects unknown authors.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: i32,
}

/// Partial update of a post; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}
