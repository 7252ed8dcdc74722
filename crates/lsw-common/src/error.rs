//! Error types for Lendsweep.

use thiserror::Error;

/// Result type alias for Lendsweep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Lendsweep.
///
/// An undefined per-class accuracy (zero denominator at some threshold) is
/// deliberately not an error: it degrades that one metric cell to `None`
/// while the sweep continues, so it lives on `ThresholdResult` rather than
/// here.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration / input-document errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid evaluation input: {0}")]
    InvalidInput(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidInput(_) => 11,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
