//! Social API Library
//!
//! REST backend for users, posts, comments and likes: domain types,
//! repository contracts, PostgreSQL adapters and the axum HTTP layer.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
