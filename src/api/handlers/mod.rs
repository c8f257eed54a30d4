// HTTP handlers, one module per resource

pub mod auth;
pub mod comments;
pub mod likes;
pub mod posts;
pub mod users;

use serde::Serialize;

/// `{"message": ...}` body returned by delete routes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
