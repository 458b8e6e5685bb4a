//! # Core Error Types
//!
//! Construction and parsing failures for the foundational types. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.

use thiserror::Error;

/// Errors produced when constructing or parsing core types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The account identifier string is not acceptable.
    #[error("invalid account id {input:?}: {reason}")]
    InvalidAccountId {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The credential identifier string is not a decimal integer.
    #[error("invalid credential id {input:?}")]
    InvalidCredentialId {
        /// The rejected input.
        input: String,
    },

    /// The timestamp string is not acceptable.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}
