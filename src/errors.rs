// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for resource operations

use thiserror::Error;

/// Errors that can occur while building or converting a resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// A mandatory constructor argument (type or title) was not supplied
    #[error("wrong number of arguments: {argument} is required")]
    Arity {
        /// Name of the missing argument
        argument: &'static str,
    },

    /// Tag name does not satisfy the tag grammar
    #[error("Invalid tag: {0:?}")]
    InvalidTag(String),

    /// String could not be parsed as `Type[title]`
    #[error("Invalid resource reference: {0:?}")]
    InvalidReference(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Result type for resource operations
pub type ResourceResult<T> = Result<T, ResourceError>;

impl ResourceError {
    pub(crate) fn missing(argument: &'static str) -> Self {
        Self::Arity { argument }
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(err: serde_json::Error) -> Self {
        ResourceError::Serialization(err.to_string())
    }
}
