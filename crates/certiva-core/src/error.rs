//! # Error Types
//!
//! Construction-time validation errors for the core newtypes. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Note that "certificate not found" is deliberately **not** an error
//! anywhere in this workspace: lookups return `Option::None` and callers
//! treat the miss as a normal branch.

use thiserror::Error;

/// Validation failures raised when constructing core domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A required identifier or label was empty or whitespace-only.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A calendar date string did not parse as `YYYY-MM-DD`.
    #[error("invalid calendar date {value:?}: {reason}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A status string was not one of `active`, `expired`, `revoked`.
    #[error("unknown certificate status {0:?} (expected active, expired, or revoked)")]
    UnknownStatus(String),
}
