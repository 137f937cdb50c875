//! GraphQL schema and resolvers for postboard.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! postboard serve --port 4000
//!
//! # Execute a query from the CLI against a fresh demo store
//! postboard query '{ users { name posts { title } } }'
//!
//! # Execute a mutation from the CLI
//! postboard mutate 'createUser(name: "Alice") { id name }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `users`, `posts`
//! - **Derived fields**: `User.posts`, `Post.author`
//! - **Mutations**: `createUser`, `createPost`, `updateUser`, `deleteUser`,
//!   `updatePost`, `deletePost`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, PostboardSchema, QueryRoot, build_schema, build_schema_with};
pub use server::{router, run_server};
pub use types::*;
