//! Error types for blockdown

use thiserror::Error;

/// Main error type for blockdown operations
#[derive(Error, Debug)]
pub enum BlockdownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal invariant violation. This is a bug in the parser, never
    /// something a document can trigger.
    #[error("Invariant violation: {0}")]
    Invariant(String),
}

/// Result type alias for blockdown operations
pub type Result<T> = std::result::Result<T, BlockdownError>;
