//! aros - Environment diagnostics for Agent Runtime OS.
//!
//! Runs a fixed set of checks (interpreter version, README presence, temp
//! directory writability), renders a report, and maps the results to a
//! process exit code.
//!
//! # Modules
//!
//! - [`checks`] - Individual checks and the runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`report`] - Report rendering and exit code mapping
//!
//! # Example
//!
//! ```
//! use aros::checks::CheckResult;
//! use aros::report::{exit_code_from_results, format_report};
//!
//! let results = vec![
//!     CheckResult::ok("alpha", "all good"),
//!     CheckResult::warn("beta", "something to note"),
//! ];
//! assert_eq!(format_report(&results), "✅ alpha: all good\n⚠️ beta: something to note");
//! assert_eq!(exit_code_from_results(&results), 0);
//! ```

pub mod checks;
pub mod cli;
pub mod error;
pub mod report;

pub use error::{ArosError, Result};
