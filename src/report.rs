//! Report rendering and exit code mapping.

use crate::checks::CheckResult;

/// Exit code when no check reported an error.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when at least one check reported an error.
pub const EXIT_CHECK_FAILED: i32 = 1;

/// Render one line per result as `<icon> <name>: <details>`.
///
/// Lines keep the input order and are joined without a trailing newline.
pub fn format_report(results: &[CheckResult]) -> String {
    results
        .iter()
        .map(|result| {
            format!(
                "{} {}: {}",
                result.status().icon(),
                result.name(),
                result.details()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Map results to a process exit code. Only `error` results count.
pub fn exit_code_from_results(results: &[CheckResult]) -> i32 {
    if results.iter().any(|r| r.status().is_error()) {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CheckResult> {
        vec![
            CheckResult::ok("alpha", "all good"),
            CheckResult::warn("beta", "something to note"),
            CheckResult::error("gamma", "needs attention"),
        ]
    }

    #[test]
    fn format_report_renders_each_status() {
        assert_eq!(
            format_report(&sample()),
            "✅ alpha: all good\n⚠️ beta: something to note\n❌ gamma: needs attention"
        );
    }

    #[test]
    fn format_report_preserves_order() {
        let mut results = sample();
        results.reverse();

        let report = format_report(&results);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("gamma"));
        assert!(lines[1].contains("beta"));
        assert!(lines[2].contains("alpha"));
    }

    #[test]
    fn format_report_has_no_trailing_newline() {
        assert!(!format_report(&sample()).ends_with('\n'));
    }

    #[test]
    fn format_report_empty_is_empty() {
        assert_eq!(format_report(&[]), "");
    }

    #[test]
    fn exit_code_empty_is_success() {
        assert_eq!(exit_code_from_results(&[]), 0);
    }

    #[test]
    fn exit_code_all_ok_is_success() {
        let results = vec![CheckResult::ok("a", "fine"), CheckResult::ok("b", "fine")];
        assert_eq!(exit_code_from_results(&results), 0);
    }

    #[test]
    fn exit_code_warnings_are_success() {
        let results = vec![CheckResult::ok("a", "fine"), CheckResult::warn("b", "warning")];
        assert_eq!(exit_code_from_results(&results), 0);
    }

    #[test]
    fn exit_code_any_error_is_failure() {
        assert_eq!(exit_code_from_results(&sample()), 1);

        let mut results = sample();
        results.rotate_left(2);
        assert_eq!(exit_code_from_results(&results), 1);
    }
}
