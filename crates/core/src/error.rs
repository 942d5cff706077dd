//! Error types shared by widgets and image resolvers

use thiserror::Error;

/// Failure of a widget operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The widget handle is stale, of the wrong type, or a value has the wrong kind
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Unknown property or widget type name
    #[error("not found: {0}")]
    NotFound(String),
}

impl WidgetError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        WidgetError::InvalidArgument(reason.into())
    }
}

/// Failure to resolve an image by name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),
    #[error("failed to decode image {name}: {reason}")]
    Decode { name: String, reason: String },
}
