//! # Postboard - an in-memory GraphQL endpoint for users and posts
//!
//! Postboard keeps two related collections, users and the posts they write,
//! in memory and exposes them through a GraphQL API with full CRUD
//! mutations. Nothing is persisted: every process starts from either the demo
//! data set or an empty store.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API and GraphiQL on http://127.0.0.1:4000/
//! postboard serve
//!
//! # Run a single query without starting a server
//! postboard query '{ posts { title author { name } } }'
//!
//! # Print the schema
//! postboard schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Data models (User, Post)
//! - [`store`]: In-memory storage

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles the optional `postboard.yml` file and its defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PostboardError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server that hosts it.
pub mod graphql;

pub mod logging;

/// Data models for postboard.
pub mod model;

/// In-memory storage layer.
///
/// Holds users and posts and enforces the lookups between them.
pub mod store;
