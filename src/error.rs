use std::fmt;

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Which collection a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Post,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "User"),
            EntityKind::Post => write!(f, "Post"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PostboardError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PostboardError {
    pub fn user_not_found(id: impl Into<String>) -> Self {
        PostboardError::NotFound {
            kind: EntityKind::User,
            id: id.into(),
        }
    }

    pub fn post_not_found(id: impl Into<String>) -> Self {
        PostboardError::NotFound {
            kind: EntityKind::Post,
            id: id.into(),
        }
    }

    /// Machine-readable code reported in the GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            PostboardError::NotFound { .. } => "NOT_FOUND",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for PostboardError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code().to_string()))
    }
}

pub type Result<T> = std::result::Result<T, PostboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_kind_and_id() {
        let err = PostboardError::user_not_found("42");
        assert_eq!(err.to_string(), "User not found: 42");

        let err = PostboardError::post_not_found("7");
        assert_eq!(err.to_string(), "Post not found: 7");
    }

    #[test]
    fn test_graphql_extension_carries_code() {
        let err = PostboardError::post_not_found("9").extend();
        assert_eq!(err.message, "Post not found: 9");

        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::String("NOT_FOUND".to_string()))
        );
    }

    #[test]
    fn test_config_error_is_internal() {
        let err = PostboardError::Config("bad port".to_string());
        assert_eq!(err.code(), "INTERNAL");
    }
}
