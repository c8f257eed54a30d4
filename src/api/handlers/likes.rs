use axum::{extract::State, Json};
use serde::Deserialize;

use super::MessageResponse;
use crate::api::errors::ApiError;
use crate::api::extract::{deserialize_id, ApiJson, ApiPath};
use crate::api::state::AppState;
use crate::domain::like::{Like, LikeKey};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLikeRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: i32,
    #[serde(deserialize_with = "deserialize_id")]
    pub post_id: i32,
}

/// Like a post
///
/// POST /likes
///
/// A second like for the same user and post is rejected with 409.
pub async fn create_like(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateLikeRequest>,
) -> Result<Json<Like>, ApiError> {
    let like = state
        .likes
        .create(LikeKey::new(req.user_id, req.post_id))
        .await?;

    Ok(Json(like))
}

/// Remove a like
///
/// DELETE /likes/:user_id/:post_id
pub async fn delete_like(
    State(state): State<AppState>,
    ApiPath((user_id, post_id)): ApiPath<(i32, i32)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.likes.delete(LikeKey::new(user_id, post_id)).await?;

    Ok(Json(MessageResponse::new("Like removed")))
}
