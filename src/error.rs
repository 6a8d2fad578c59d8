//! Error types for the jewelry placement library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Raw landmark input was absent or unindexable
    #[error("Malformed landmark input: {0}")]
    MalformedInput(String),

    /// A jewelry slot configuration is invalid for its category
    #[error("Invalid slot configuration: {0}")]
    InvalidSlotConfig(String),

    /// The external landmark detector is not available (model not loaded)
    #[error("Detector unavailable: {0}")]
    DetectionUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
