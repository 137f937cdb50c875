//! Data models for postboard.
//!
//! - [`User`]: a named author
//! - [`Post`]: a piece of content that references its author by id
//! - [`NewPost`]: the fields supplied when creating a post

mod post;
mod user;

pub use post::{NewPost, Post};
pub use user::User;
