//! Unified error types for odtquery.
//!
//! All fallible operations in the crate return the unified [`Error`] type so
//! that callers (including the CLI driver) see a single consistent surface.

use thiserror::Error;

/// Main error type for odtquery operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The target is not a readable ODT package
    #[error("invalid ODT package: {0}")]
    InvalidPackage(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),
}

/// Result type for odtquery operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}
