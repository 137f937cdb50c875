//! In-memory storage for users and posts.
//!
//! Both collections live in a single [`Store`] value that keeps them in
//! insertion order. Posts reference their author by id only; nothing is
//! cascaded on delete, so a post can outlive its author.
//!
//! ## Components
//!
//! - [`Store`]: lookup, insert, update and delete primitives
//! - [`SharedStore`]: the lock-guarded handle handed to the GraphQL schema
//! - [`seed`]: the demo data set the server starts with by default

mod memory_store;
pub mod seed;

pub use memory_store::{SharedStore, Store};
