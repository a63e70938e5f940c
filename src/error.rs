//! Error types for golinks
//!
//! Provides a unified error type for all store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using LinkError
pub type Result<T> = std::result::Result<T, LinkError>;

/// Unified error type for golinks operations
#[derive(Debug, Error)]
pub enum LinkError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Log Errors
    // -------------------------------------------------------------------------
    /// A record in the log could not be parsed. Fatal to `open`.
    #[error("invalid line {line_number} in {}: {line:?}", path.display())]
    Format {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    /// A write was rejected before reaching the log.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    // -------------------------------------------------------------------------
    // Iteration Errors
    // -------------------------------------------------------------------------
    /// Returned by iterate callbacks that want to stop early.
    #[error("Iteration aborted: {0}")]
    Aborted(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
