use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::post::{NewPost, Post, PostChanges, PostDetail};

/// Repository trait for posts
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, RepositoryError>;

    /// Every post with author, comments (with their authors) and likes
    async fn list_detailed(&self) -> Result<Vec<PostDetail>, RepositoryError>;

    /// One post with author, comments (with their authors) and likes
    async fn find_detailed(&self, id: i32) -> Result<Option<PostDetail>, RepositoryError>;

    async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, RepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
