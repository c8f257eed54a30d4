use async_trait::async_trait;

use crate::domain::comment::{Comment, CommentChanges, CommentDetail, NewComment};
use crate::domain::errors::RepositoryError;

/// Repository trait for comments
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepositoryError>;

    /// Every comment with its author and post
    async fn list_detailed(&self) -> Result<Vec<CommentDetail>, RepositoryError>;

    async fn update(&self, id: i32, changes: CommentChanges) -> Result<Comment, RepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
