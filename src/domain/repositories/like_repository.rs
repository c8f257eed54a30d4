use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::like::{Like, LikeKey};

/// Repository trait for likes
///
/// Likes have no identifier of their own; both operations address a like
/// by its `(user_id, post_id)` key.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a like; a second like for the same key is a `UniqueViolation`
    async fn create(&self, key: LikeKey) -> Result<Like, RepositoryError>;

    /// Delete a like; an unknown key is `NotFound`
    async fn delete(&self, key: LikeKey) -> Result<(), RepositoryError>;
}
