// Domain layer module exports
// Entities, value objects and repository contracts.
// Domain is independent of infrastructure concerns

pub mod comment;
pub mod errors;
pub mod like;
pub mod post;
pub mod repositories;
pub mod user;
