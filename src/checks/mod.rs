//! Environment checks.
//!
//! Each check is a free function returning one [`CheckResult`]. Checks never
//! fail outright; problems are reported as `warn` or `error` results.
//!
//! # Modules
//!
//! - [`result`] - `Status` and `CheckResult` types
//! - [`interpreter`] - Python interpreter version check
//! - [`readme`] - README presence check
//! - [`tmp_dir`] - Temporary directory writability check

pub mod interpreter;
pub mod readme;
pub mod result;
pub mod tmp_dir;

use std::path::Path;

pub use interpreter::{
    interpreter_version_check, interpreter_version_check_with, InterpreterVersion,
    MINIMUM_INTERPRETER,
};
pub use readme::readme_check;
pub use result::{CheckResult, Status};
pub use tmp_dir::{tmp_write_check, tmp_write_check_in};

/// Run every check in order: interpreter version, README presence, temp
/// directory writability.
///
/// Only the README check looks at `base_dir`.
pub fn run_checks(base_dir: &Path) -> Vec<CheckResult> {
    let results = vec![
        interpreter_version_check(),
        readme_check(base_dir),
        tmp_write_check(),
    ];

    for result in &results {
        tracing::debug!("Check {} finished: {}", result.name(), result.status());
    }

    results
}
