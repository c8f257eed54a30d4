// User domain module
// Contains the user entity, its public profile view and value objects

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

pub use user::{NewUser, User, UserChanges, UserProfile};
pub use value_objects::{Email, InvalidEmail};
