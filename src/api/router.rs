use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{auth, comments, likes, posts, users};
use crate::api::state::AppState;

/// Builds the full route table with CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    // Any origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Users
        .route("/users", post(users::create_user).get(users::list_users))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/login", post(auth::login))
        // Posts
        .route("/posts", post(posts::create_post).get(posts::list_posts))
        .route(
            "/posts/:id",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        // Comments
        .route(
            "/comments",
            post(comments::create_comment).get(comments::list_comments),
        )
        .route(
            "/comments/:id",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        // Likes
        .route("/likes", post(likes::create_like))
        .route("/likes/:user_id/:post_id", delete(likes::delete_like))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
