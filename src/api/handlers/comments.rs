use axum::{extract::State, Json};
use serde::Deserialize;

use super::MessageResponse;
use crate::api::errors::ApiError;
use crate::api::extract::{deserialize_id, ApiJson, ApiPath};
use crate::api::state::AppState;
use crate::domain::comment::{Comment, CommentChanges, CommentDetail, NewComment};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub author_id: i32,
    #[serde(deserialize_with = "deserialize_id")]
    pub post_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: Option<String>,
}

/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    let comment = state
        .comments
        .create(NewComment {
            content: req.content,
            author_id: req.author_id,
            post_id: req.post_id,
        })
        .await?;

    tracing::info!(
        comment_id = comment.id,
        post_id = comment.post_id,
        "comment created"
    );
    Ok(Json(comment))
}

/// GET /comments
pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<CommentDetail>>, ApiError> {
    Ok(Json(state.comments.list_detailed().await?))
}

/// PUT /comments/:id
pub async fn update_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    let changes = CommentChanges {
        content: req.content,
    };

    Ok(Json(state.comments.update(id, changes).await?))
}

/// DELETE /comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.comments.delete(id).await?;

    tracing::info!(comment_id = id, "comment deleted");
    Ok(Json(MessageResponse::new("Comment deleted")))
}
