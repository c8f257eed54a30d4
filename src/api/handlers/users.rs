use axum::{extract::State, Json};
use serde::Deserialize;

use super::MessageResponse;
use crate::api::errors::ApiError;
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::state::AppState;
use crate::auth::password::hash_password_blocking;
use crate::domain::user::{Email, NewUser, User, UserChanges};

/// Request body for sign-up
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Request body for a profile edit; omitted fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
}

/// Create a user
///
/// POST /users
///
/// The password is stored as a bcrypt hash. The response is the stored
/// record, hash included.
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let email = Email::new(req.email)?;
    let password_hash = hash_password_blocking(req.password, state.bcrypt_cost).await?;

    let user = state
        .users
        .create(NewUser {
            email,
            username: req.username,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(Json(user))
}

/// List all users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

/// Get a user by ID; `null` when absent
///
/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Option<User>>, ApiError> {
    Ok(Json(state.users.find_by_id(id).await?))
}

/// Update a user's email and/or username
///
/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let changes = UserChanges {
        email: req.email.map(Email::new).transpose()?,
        username: req.username,
    };

    Ok(Json(state.users.update(id, changes).await?))
}

/// Delete a user
///
/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.users.delete(id).await?;

    tracing::info!(user_id = id, "user deleted");
    Ok(Json(MessageResponse::new("User deleted")))
}
