//! README presence check.

use std::path::Path;

use super::result::CheckResult;

/// Name of the README presence check.
pub const README_CHECK: &str = "readme-present";

/// File expected directly under the project root.
pub const README_FILE: &str = "README.md";

/// Check that `base_dir` contains a `README.md`.
///
/// A missing README is a warning, not an error.
pub fn readme_check(base_dir: &Path) -> CheckResult {
    if !base_dir.join(README_FILE).exists() {
        return CheckResult::warn(
            README_CHECK,
            "README.md is missing; add one to describe the project",
        );
    }
    CheckResult::ok(README_CHECK, "README.md detected")
}
