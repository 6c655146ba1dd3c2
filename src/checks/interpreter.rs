//! Python interpreter version check.
//!
//! The interpreter is discovered the same way a shell would find it: each
//! candidate name is run with `--version` from PATH and the first one that
//! reports a parseable version wins.

use std::cmp::Ordering;
use std::fmt;
use std::process::Command;
use std::sync::LazyLock;

use anyhow::{bail, Context};
use regex::Regex;

use super::result::CheckResult;

/// Name of the interpreter version check.
pub const INTERPRETER_CHECK: &str = "python-version";

/// Oldest supported interpreter.
pub const MINIMUM_INTERPRETER: InterpreterVersion = InterpreterVersion::new(3, 10);

/// Executables tried, in order, when looking for an interpreter.
const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+)\.(\d+)").unwrap());

/// A `major.minor` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterpreterVersion {
    pub major: u32,
    pub minor: u32,
}

impl InterpreterVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl PartialOrd for InterpreterVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InterpreterVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor).cmp(&(other.major, other.minor))
    }
}

impl fmt::Display for InterpreterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Extract the interpreter version from `--version` output.
///
/// Accepts forms like `Python 3.11.4` and `Python 3.13.0rc1`.
pub fn parse_interpreter_version(output: &str) -> Option<InterpreterVersion> {
    let caps = VERSION_REGEX.captures(output)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some(InterpreterVersion::new(major, minor))
}

/// Run `<program> --version` and parse the reported version.
fn query_interpreter(program: &str) -> anyhow::Result<InterpreterVersion> {
    let output = Command::new(program)
        .arg("--version")
        .output()
        .with_context(|| format!("Failed to run {} --version", program))?;

    if !output.status.success() {
        bail!("{} --version exited with {}", program, output.status);
    }

    // Python 2 prints its version on stderr.
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    parse_interpreter_version(&text)
        .with_context(|| format!("Unrecognized version output from {}: {}", program, text.trim()))
}

/// Find the first interpreter on PATH that reports its version.
pub fn detect_interpreter() -> Option<InterpreterVersion> {
    INTERPRETER_CANDIDATES
        .iter()
        .find_map(|program| match query_interpreter(program) {
            Ok(version) => Some(version),
            Err(e) => {
                tracing::debug!("Interpreter probe failed: {:#}", e);
                None
            }
        })
}

/// Check the interpreter found on PATH against [`MINIMUM_INTERPRETER`].
pub fn interpreter_version_check() -> CheckResult {
    interpreter_version_check_with(detect_interpreter)
}

/// Check an interpreter version reported by a custom probe.
pub fn interpreter_version_check_with<F>(probe: F) -> CheckResult
where
    F: FnOnce() -> Option<InterpreterVersion>,
{
    match probe() {
        None => CheckResult::error(
            INTERPRETER_CHECK,
            format!(
                "No Python interpreter found on PATH; {} or newer is required",
                MINIMUM_INTERPRETER
            ),
        ),
        Some(version) if version < MINIMUM_INTERPRETER => CheckResult::error(
            INTERPRETER_CHECK,
            format!(
                "Python {} is below required {}",
                version, MINIMUM_INTERPRETER
            ),
        ),
        Some(version) => {
            CheckResult::ok(INTERPRETER_CHECK, format!("Python {} detected", version))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::result::Status;

    #[test]
    fn parse_full_version() {
        assert_eq!(
            parse_interpreter_version("Python 3.11.4"),
            Some(InterpreterVersion::new(3, 11))
        );
    }

    #[test]
    fn parse_legacy_version() {
        assert_eq!(
            parse_interpreter_version("Python 2.7.18\n"),
            Some(InterpreterVersion::new(2, 7))
        );
    }

    #[test]
    fn parse_prerelease_version() {
        assert_eq!(
            parse_interpreter_version("Python 3.13.0rc1"),
            Some(InterpreterVersion::new(3, 13))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_interpreter_version("no version here").is_none());
        assert!(parse_interpreter_version("ruby 3.2.1").is_none());
        assert!(parse_interpreter_version("").is_none());
    }

    #[test]
    fn versions_compare_numerically() {
        assert!(InterpreterVersion::new(3, 9) < InterpreterVersion::new(3, 10));
        assert!(InterpreterVersion::new(4, 0) > InterpreterVersion::new(3, 99));
        assert_eq!(InterpreterVersion::new(3, 10), MINIMUM_INTERPRETER);
    }

    #[test]
    fn version_displays_major_minor() {
        assert_eq!(InterpreterVersion::new(3, 12).to_string(), "3.12");
    }

    #[test]
    fn supported_version_is_ok() {
        let result = interpreter_version_check_with(|| Some(InterpreterVersion::new(3, 12)));
        assert_eq!(result.name(), INTERPRETER_CHECK);
        assert_eq!(result.status(), Status::Ok);
        assert_eq!(result.details(), "Python 3.12 detected");
    }

    #[test]
    fn minimum_version_is_ok() {
        let result = interpreter_version_check_with(|| Some(MINIMUM_INTERPRETER));
        assert_eq!(result.status(), Status::Ok);
    }

    #[test]
    fn old_version_is_error_naming_both_versions() {
        let result = interpreter_version_check_with(|| Some(InterpreterVersion::new(3, 8)));
        assert_eq!(result.status(), Status::Error);
        assert_eq!(result.details(), "Python 3.8 is below required 3.10");
    }

    #[test]
    fn missing_interpreter_is_error() {
        let result = interpreter_version_check_with(|| None);
        assert_eq!(result.status(), Status::Error);
        assert!(result.details().contains("3.10"));
    }

    #[test]
    fn query_unknown_program_fails() {
        assert!(query_interpreter("this-command-does-not-exist-12345").is_err());
    }
}
