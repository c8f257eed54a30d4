use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::password::PasswordError;
use crate::domain::errors::RepositoryError;
use crate::domain::user::InvalidEmail;

/// Message sent to clients for every internal failure
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Closed set of failure kinds a route can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    ValidationFailed,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error with a kind and a client-facing message
///
/// Rendered as `{"error": message}` with the kind's status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Creates a 400 Bad Request error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationFailed, message)
    }

    /// Creates a 500 error; `detail` is logged, never sent
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "internal error");
        Self::new(ErrorKind::Internal, INTERNAL_MESSAGE)
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status(), body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            RepositoryError::UniqueViolation(msg) | RepositoryError::StillReferenced(msg) => {
                tracing::debug!(%msg, "store rejected write");
                Self::conflict(msg)
            }
            RepositoryError::MissingReference(msg) | RepositoryError::InvalidInput(msg) => {
                Self::validation(msg)
            }
            RepositoryError::Database(_) => Self::internal(err),
        }
    }
}

impl From<InvalidEmail> for ApiError {
    fn from(err: InvalidEmail) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_kinds() {
        let cases = [
            (RepositoryError::NotFound("Post".into()), StatusCode::NOT_FOUND, "Post not found"),
            (
                RepositoryError::UniqueViolation("Email already registered".into()),
                StatusCode::CONFLICT,
                "Email already registered",
            ),
            (
                RepositoryError::StillReferenced("User is still referenced by other records".into()),
                StatusCode::CONFLICT,
                "User is still referenced by other records",
            ),
            (
                RepositoryError::MissingReference("User does not exist".into()),
                StatusCode::BAD_REQUEST,
                "User does not exist",
            ),
            (
                RepositoryError::InvalidInput("Invalid input: invalid byte sequence".into()),
                StatusCode::BAD_REQUEST,
                "Invalid input: invalid byte sequence",
            ),
        ];

        for (err, status, message) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status(), status);
            assert_eq!(api.message, message);
        }
    }

    #[test]
    fn database_errors_do_not_leak() {
        let api: ApiError =
            RepositoryError::Database("relation \"users\" does not exist".into()).into();

        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn renders_error_body() {
        let response = ApiError::validation("Invalid password").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "Invalid password" }));
    }
}
