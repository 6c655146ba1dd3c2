//! Temporary directory writability check.
//!
//! Writes a small probe file into the temp directory and removes it again.
//! Probe names include the process id and a per-process counter so that
//! concurrent checks never touch each other's files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::result::CheckResult;

/// Name of the temp directory check.
pub const TMP_CHECK: &str = "tmp-writeable";

const PROBE_PAYLOAD: &str = "ok";

static PROBE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn probe_path(dir: &Path) -> PathBuf {
    let n = PROBE_COUNTER.fetch_add(1, Ordering::Relaxed);
    dir.join(format!("aros-tmp-probe-{}-{}.txt", std::process::id(), n))
}

fn write_and_remove(path: &Path) -> io::Result<()> {
    if let Err(e) = fs::write(path, PROBE_PAYLOAD) {
        let _ = fs::remove_file(path);
        return Err(e);
    }
    fs::remove_file(path)
}

/// Check that the platform temp directory accepts writes.
pub fn tmp_write_check() -> CheckResult {
    tmp_write_check_in(&std::env::temp_dir())
}

/// Check that `dir` accepts a write followed by a delete.
pub fn tmp_write_check_in(dir: &Path) -> CheckResult {
    if !dir.exists() {
        return CheckResult::warn(
            TMP_CHECK,
            format!(
                "{} is missing; cannot verify temporary file writes",
                dir.display()
            ),
        );
    }

    let probe = probe_path(dir);
    if let Err(e) = write_and_remove(&probe) {
        tracing::debug!("Probe {} failed: {}", probe.display(), e);
        return CheckResult::error(
            TMP_CHECK,
            format!("Failed to write to {}: {}", dir.display(), e),
        );
    }

    CheckResult::ok(TMP_CHECK, "Temporary directory is writeable")
}
