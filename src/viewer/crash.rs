//! Append-only crash log for the viewer
//!
//! Every viewer failure is written here and a short notice goes to stderr.

use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::constants::{crash, paths};

#[derive(Debug, Clone)]
pub struct CrashLog {
    path: PathBuf,
}

impl CrashLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Crash log inside `dir`, normally the config document's directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(paths::CRASH_LOG_FILENAME))
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry: marker, local timestamp, details, trace
    pub fn append(&self, details: &str, trace: &Backtrace) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open crash log {:?}", self.path))?;

        let entry = format_entry(&chrono::Local::now().to_string(), details, &trace.to_string());
        file.write_all(entry.as_bytes())
            .with_context(|| format!("Failed to write crash log {:?}", self.path))?;

        info!(path = ?self.path, "Crash details appended");
        Ok(())
    }

    /// Record an error with its full cause chain and tell the terminal
    pub fn report(&self, err: &anyhow::Error) {
        error!(error = ?err, "Viewer failed");
        let details = format!("{err:?}");
        self.append_or_warn(&details, &Backtrace::force_capture());
    }

    fn append_or_warn(&self, details: &str, trace: &Backtrace) {
        match self.append(details, trace) {
            Ok(()) => eprintln!(
                "An error occurred while running the BSOD screen. Details have been logged to {}.",
                self.path.display()
            ),
            Err(log_err) => eprintln!(
                "An error occurred while running the BSOD screen ({details}); \
                 writing the crash log also failed: {log_err:#}"
            ),
        }
    }

    /// Run `body`, recording a returned error here
    ///
    /// Panics are caught and swallowed; the hook from `install_panic_hook`
    /// has already written them. Returns true when `body` succeeded.
    pub fn guard(&self, body: impl FnOnce() -> Result<()>) -> bool {
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                self.report(&err);
                false
            }
            Err(_) => {
                warn!(path = ?self.path, "Viewer panicked");
                false
            }
        }
    }

    /// Record panics in the log before the default hook prints them
    pub fn install_panic_hook(&self) {
        let log = self.clone();
        let default_hook = panic::take_hook();

        panic::set_hook(Box::new(move |panic_info| {
            let payload = panic_info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".to_string());

            let location = panic_info
                .location()
                .map(|loc| format!(" at {}:{}", loc.file(), loc.line()))
                .unwrap_or_default();

            log.append_or_warn(
                &format!("panic: {payload}{location}"),
                &Backtrace::force_capture(),
            );
            default_hook(panic_info);
        }));
    }
}

fn format_entry(timestamp: &str, details: &str, trace: &str) -> String {
    format!(
        "\n{}\n{}\n{}\n{}\n\n",
        crash::ENTRY_MARKER,
        timestamp,
        details.trim_end(),
        trace.trim_end()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_entry_layout() {
        let entry = format_entry("2026-01-01 00:00:00", "boom\n", "0: main\n");
        assert_eq!(
            entry,
            "\n===== BSOD Crash Log =====\n2026-01-01 00:00:00\nboom\n0: main\n\n"
        );
    }

    #[test]
    fn test_append_keeps_previous_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log = CrashLog::in_dir(temp_dir.path());
        assert_eq!(log.path(), temp_dir.path().join("bsod_error.log"));

        log.append("first failure", &Backtrace::disabled()).unwrap();
        log.append("second failure", &Backtrace::disabled()).unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents.matches(crash::ENTRY_MARKER).count(), 2);
        let first = contents.find("first failure").unwrap();
        let second = contents.find("second failure").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_report_writes_cause_chain() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log = CrashLog::in_dir(temp_dir.path());

        let err = anyhow::anyhow!("expected value at line 1").context("Failed to parse JSON");
        log.report(&err);

        let contents = fs::read_to_string(log.path()).unwrap();
        assert!(contents.contains("Failed to parse JSON"));
        assert!(contents.contains("expected value at line 1"));
    }

    #[test]
    fn test_guard_reports_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log = CrashLog::in_dir(temp_dir.path());

        assert!(log.guard(|| Ok(())));
        assert!(!log.path().exists());

        assert!(!log.guard(|| anyhow::bail!("window creation failed")));
        let contents = fs::read_to_string(log.path()).unwrap();
        assert!(contents.contains("window creation failed"));
    }

    #[test]
    fn test_guard_swallows_panics_logged_by_hook() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log = CrashLog::in_dir(temp_dir.path());
        log.install_panic_hook();

        let completed = log.guard(|| panic!("glyph too large"));

        // Restores the default hook
        drop(panic::take_hook());

        assert!(!completed);
        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents.matches(crash::ENTRY_MARKER).count(), 1);
        assert!(contents.contains("panic: glyph too large"));
    }
}
