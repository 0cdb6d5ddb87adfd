//! Error types for Fixline

/// Result type alias using Fixline's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Fixline operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Category catalog access errors
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Routing/classification errors
    #[error("routing error: {0}")]
    Routing(String),

    /// Complaint validation errors
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a new routing error
    pub fn routing(msg: impl Into<String>) -> Self {
        Self::Routing(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
