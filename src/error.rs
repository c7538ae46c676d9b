//! Error types for the page models
//!
//! One crate-wide error enum shared by the page models, the proxy seams,
//! and snapshot loading. Configuration loading has its own error type in
//! [`crate::config`] and converts into this one.

use thiserror::Error;

/// Main error type for page-model operations
#[derive(Debug, Error)]
pub enum PageError {
    #[error("site group '{etld_plus_one}' has no origins")]
    EmptySiteGroup { etld_plus_one: String },

    #[error("invalid origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("missing load-time resource: {key}")]
    MissingResource { key: String },

    #[error("proxy call failed: {message}")]
    ProxyError { message: String },

    #[error("snapshot error: {0}")]
    SnapshotError(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
}

impl PageError {
    /// Create an empty-site-group error (representative-origin precondition)
    pub fn empty_site_group<S: Into<String>>(etld_plus_one: S) -> Self {
        Self::EmptySiteGroup {
            etld_plus_one: etld_plus_one.into(),
        }
    }

    /// Create an invalid-origin error
    pub fn invalid_origin<S: Into<String>, R: Into<String>>(origin: S, reason: R) -> Self {
        Self::InvalidOrigin {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    /// Create an index-out-of-bounds error for list splices
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create a missing-resource error for load-time data lookups
    pub fn missing_resource<S: Into<String>>(key: S) -> Self {
        Self::MissingResource { key: key.into() }
    }

    /// Create a proxy error
    pub fn proxy<S: Into<String>>(message: S) -> Self {
        Self::ProxyError {
            message: message.into(),
        }
    }
}

/// Result type for page-model operations
pub type PageResult<T> = Result<T, PageError>;
