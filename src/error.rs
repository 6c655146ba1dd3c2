//! Error types for aros operations.
//!
//! This module defines [`ArosError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! Checks themselves never fail: expected problems are encoded as `warn` or
//! `error` results. `ArosError` covers the few things that can go wrong
//! outside a check.

use thiserror::Error;

/// Core error type for aros operations.
#[derive(Debug, Error)]
pub enum ArosError {
    /// A check result was built from a status string outside `ok`/`warn`/`error`.
    #[error("Unsupported status '{status}' for check '{check}'")]
    InvalidStatus { status: String, check: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for aros operations.
pub type Result<T> = std::result::Result<T, ArosError>;
