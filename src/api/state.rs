use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{
    CommentRepository, LikeRepository, PostRepository, UserRepository,
};
use crate::infrastructure::repositories::{
    PostgresCommentRepository, PostgresLikeRepository, PostgresPostRepository,
    PostgresUserRepository,
};

/// Shared state handed to every handler
///
/// Repositories sit behind trait objects so the router can run against
/// PostgreSQL in production and against other implementations in tests.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
    /// bcrypt cost for new password hashes
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Wires PostgreSQL repositories over one shared pool
    pub fn postgres(pool: PgPool, bcrypt_cost: u32) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            posts: Arc::new(PostgresPostRepository::new(pool.clone())),
            comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
            likes: Arc::new(PostgresLikeRepository::new(pool)),
            bcrypt_cost,
        }
    }
}
