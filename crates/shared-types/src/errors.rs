//! # Error Types
//!
//! Validation errors for the shared value types.

use thiserror::Error;

/// Rejection of malformed input at type-construction time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Unit number does not match the ISO 6346 shape (4 letters + 7 digits).
    #[error("malformed unit number {0:?}: expected 4 uppercase letters followed by 7 digits")]
    MalformedUnitNumber(String),

    /// Party identity is not 20 hex-encoded bytes.
    #[error("malformed party id {0:?}: expected 20 hex-encoded bytes")]
    MalformedPartyId(String),
}
