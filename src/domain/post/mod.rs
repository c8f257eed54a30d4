// Post domain module
// Contains the post entity and its nested read model

#![allow(clippy::module_inception)]

pub mod detail;
pub mod post;

pub use detail::{assemble_post_details, PostDetail};
pub use post::{NewPost, Post, PostChanges};
