//! Error types for the distplot library.
//!
//! This module defines a comprehensive error enum that covers all possible
//! error conditions in the library.

use thiserror::Error;

/// The main error type for distplot operations.
#[derive(Error, Debug)]
pub enum DistplotError {
    /// Malformed hex color string or unknown export format
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    /// Numeric input outside the documented domain
    #[error("Invalid range: {message}")]
    InvalidRange { message: String },

    /// All-zero histogram passed to zero-bin trimming
    #[error("Empty histogram: {message}")]
    EmptyHistogram { message: String },

    /// Chart backend failure while drawing a figure
    #[error("Render error: {message}")]
    Render { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with DistplotError
pub type Result<T> = std::result::Result<T, DistplotError>;
