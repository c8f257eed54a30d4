use axum::{extract::State, Json};
use serde::Deserialize;

use super::MessageResponse;
use crate::api::errors::ApiError;
use crate::api::extract::{deserialize_id, ApiJson, ApiPath};
use crate::api::state::AppState;
use crate::domain::post::{NewPost, Post, PostChanges, PostDetail};

/// Request body for creating a post
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub author_id: i32,
}

/// Request body for editing a post; omitted fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            author_id: req.author_id,
        })
        .await?;

    tracing::info!(post_id = post.id, author_id = post.author_id, "post created");
    Ok(Json(post))
}

/// List all posts with author, comments (with authors) and likes
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostDetail>>, ApiError> {
    Ok(Json(state.posts.list_detailed().await?))
}

/// Get one post with author, comments (with authors) and likes; `null`
/// when absent
///
/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Option<PostDetail>>, ApiError> {
    Ok(Json(state.posts.find_detailed(id).await?))
}

/// Update a post's title and/or content
///
/// PUT /posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let changes = PostChanges {
        title: req.title,
        content: req.content,
    };

    Ok(Json(state.posts.update(id, changes).await?))
}

/// Delete a post
///
/// DELETE /posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.posts.delete(id).await?;

    tracing::info!(post_id = id, "post deleted");
    Ok(Json(MessageResponse::new("Post deleted")))
}
