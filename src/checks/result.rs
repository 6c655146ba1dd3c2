//! Check result types.
//!
//! Every check produces a [`CheckResult`] carrying a [`Status`]. Status is a
//! closed set, so a result can only hold `ok`, `warn` or `error`; parsing a
//! status from text is the one place an invalid value can be rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::{ArosError, Result};

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Healthy.
    Ok,
    /// Non-fatal concern.
    Warn,
    /// Fatal concern; fails the run.
    Error,
}

impl Status {
    /// Lowercase name used in text and parsing.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Glyph shown in front of a report line.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Ok => "✅",
            Self::Warn => "⚠️",
            Self::Error => "❌",
        }
    }

    /// Whether this status should fail the run.
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ArosError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ok" => Ok(Self::Ok),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ArosError::InvalidStatus {
                status: other.to_string(),
                check: String::new(),
            }),
        }
    }
}

/// The immutable outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    name: String,
    status: Status,
    details: String,
}

impl CheckResult {
    /// Create a result with the given status.
    pub fn new(name: impl Into<String>, status: Status, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            details: details.into(),
        }
    }

    /// Create a passing result.
    pub fn ok(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, Status::Ok, details)
    }

    /// Create a warning result.
    pub fn warn(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, Status::Warn, details)
    }

    /// Create a failing result.
    pub fn error(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, Status::Error, details)
    }

    /// Create a result from an untyped status string.
    ///
    /// Fails with [`ArosError::InvalidStatus`] unless `status` is exactly
    /// `ok`, `warn` or `error`.
    pub fn parse(
        name: impl Into<String>,
        status: &str,
        details: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let status = match status.parse::<Status>() {
            Ok(status) => status,
            Err(_) => {
                return Err(ArosError::InvalidStatus {
                    status: status.to_string(),
                    check: name,
                })
            }
        };
        Ok(Self::new(name, status, details))
    }

    /// Short identifier of the check.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outcome of the check.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Human-readable explanation.
    pub fn details(&self) -> &str {
        &self.details
    }
}
