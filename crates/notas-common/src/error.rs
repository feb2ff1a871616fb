//! Common error types used throughout notas.
//!
//! This module provides a unified error type that covers the failure cases of
//! the runtime connection lifecycle: engine errors, storage capability errors,
//! seed asset fetch failures, and text encoding errors.

/// Common error type for notas.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested row was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An embedded database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The private storage capability failed a stat, read, or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The bundled seed database could not be fetched.
    #[error("Asset fetch failed: {0}")]
    AssetFetch(String),

    /// Stored text could not be decoded back into bytes.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The connection has not been initialized yet.
    #[error("Database connection is not initialized")]
    NotInitialized,

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a new AssetFetch error.
    pub fn asset_fetch<S: Into<String>>(msg: S) -> Self {
        Self::AssetFetch(msg.into())
    }

    /// Create a new Encoding error.
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Self::Encoding(msg.into())
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
