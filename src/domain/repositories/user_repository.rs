use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::user::{Email, NewUser, User, UserChanges};

/// Repository trait for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored record
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// All users, ordered by id
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Apply a partial update and return the updated record
    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, RepositoryError>;

    /// Delete a user by ID
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
