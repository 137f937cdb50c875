//! Command-line interface for postboard.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
