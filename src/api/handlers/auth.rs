use std::fmt::Display;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::api::errors::{ApiError, ErrorKind};
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::auth::password::verify_password_blocking;
use crate::domain::user::{Email, UserProfile};

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Check credentials
///
/// POST /login
///
/// Returns the user without the password hash. No token or session is
/// issued.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    // An address that cannot be valid cannot be registered either
    let user = match Email::new(req.email) {
        Ok(email) => state
            .users
            .find_by_email(&email)
            .await
            .map_err(login_failure)?,
        Err(_) => None,
    };

    let Some(user) = user else {
        tracing::debug!("login rejected: unknown email");
        return Err(ApiError::validation("User not found"));
    };

    let valid = verify_password_blocking(req.password, user.password.clone())
        .await
        .map_err(login_failure)?;

    if !valid {
        tracing::debug!(user_id = user.id, "login rejected: wrong password");
        return Err(ApiError::validation("Invalid password"));
    }

    tracing::info!(user_id = user.id, "user logged in");
    Ok(Json(user.into_profile()))
}

fn login_failure(err: impl Display) -> ApiError {
    tracing::error!(error = %err, "login error");
    ApiError::new(ErrorKind::Internal, "An error occurred during login")
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
