//! Error types for the Sibyl library.
//!
//! All errors are represented by the [`SibylError`] enum. The vectorizer and
//! the Naive Bayes model are non-throwing given well-typed inputs; fallible
//! operations are concentrated in the store collaborators, so the taxonomy
//! is small by design.
//!
//! # Examples
//!
//! ```
//! use sibyl::error::{Result, SibylError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SibylError::store("connection lost"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Sibyl operations.
#[derive(Error, Debug)]
pub enum SibylError {
    /// I/O errors from store implementations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Annotation/document store access errors
    #[error("Store error: {0}")]
    Store(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SibylError.
pub type Result<T> = std::result::Result<T, SibylError>;

impl SibylError {
    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        SibylError::Store(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SibylError::Other(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SibylError::Other(format!("Not found: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SibylError::store("Test store error");
        assert_eq!(error.to_string(), "Store error: Test store error");

        let error = SibylError::other("Test generic error");
        assert_eq!(error.to_string(), "Error: Test generic error");

        let error = SibylError::not_found("document 7");
        assert_eq!(error.to_string(), "Error: Not found: document 7");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sibyl_error = SibylError::from(io_error);

        match sibyl_error {
            SibylError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
