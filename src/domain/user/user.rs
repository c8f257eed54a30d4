use chrono::{DateTime, Utc};
use serde::Serialize;

use super::value_objects::Email;

/// Stored user record
///
/// `password` holds the bcrypt hash, never the plaintext. The full record
/// (hash included) is what the user CRUD routes return; use
/// [`UserProfile`] anywhere the hash must not leave the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Strips the password hash
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email,
            username: self.username,
            created_at: self.created_at,
        }
    }
}

/// User record without the password hash
///
/// Returned by `/login` and embedded as `author` in post and comment reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        user.into_profile()
    }
}

/// Data for inserting a user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub username: String,
    pub password_hash: String,
}

/// Partial update of a user's mutable fields
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<Email>,
    pub username: Option<String>,
}
