//! Error types for the Lectern library.
//!
//! All fallible operations return [`Result`], whose error side is
//! [`LecternError`]. Errors are local to the operation that raised them:
//! a tokenizer that fails validation is never built, and a build that fails
//! part-way never hands back a partially populated index.
//!
//! # Examples
//!
//! ```
//! use lectern::analysis::tokenizer::ngram::NGramTokenizer;
//! use lectern::error::LecternError;
//!
//! let err = NGramTokenizer::new(3, 2).unwrap_err();
//! assert!(matches!(err, LecternError::Validation(_)));
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lectern operations.
#[derive(Error, Debug)]
pub enum LecternError {
    /// I/O errors (reading stop-word lists, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed configuration detected before any work was done.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LecternError.
pub type Result<T> = std::result::Result<T, LecternError>;

impl LecternError {
    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        LecternError::Validation(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LecternError::Analysis(msg.into())
    }

    /// Validation errors are configuration mistakes; retrying with the same
    /// arguments can never succeed.
    pub fn is_validation(&self) -> bool {
        matches!(self, LecternError::Validation(_))
    }
}
