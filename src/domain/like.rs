use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user's endorsement of a post
///
/// Identified by the `(user_id, post_id)` pair; at most one like exists
/// per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub user_id: i32,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Composite key of a like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LikeKey {
    pub user_id: i32,
    pub post_id: i32,
}

impl LikeKey {
    pub fn new(user_id: i32, post_id: i32) -> Self {
        Self { user_id, post_id }
    }
}

impl From<&Like> for LikeKey {
    fn from(like: &Like) -> Self {
        Self::new(like.user_id, like.post_id)
    }
}
