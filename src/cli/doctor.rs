//! The diagnostic command.
//!
//! Runs every check against the project root, writes the report, and hands
//! back the exit code derived from the same results.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checks::run_checks;
use crate::error::Result;
use crate::report::{exit_code_from_results, format_report};

/// Runs the environment checks for one project root.
pub struct DoctorCommand {
    project_root: PathBuf,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run the checks, write the report to `out`, and return the exit code.
    pub fn execute(&self, out: &mut dyn Write) -> Result<i32> {
        let results = run_checks(&self.project_root);
        writeln!(out, "{}", format_report(&results))?;
        out.flush()?;
        Ok(exit_code_from_results(&results))
    }
}
