//! Viewer - the fullscreen fake stop-error screen
//!
//! Reads the config once at startup (or uses the stock preset), paints it,
//! and optionally asks the host to restart a few seconds later.

mod app;
pub mod crash;
pub mod shutdown;

use anyhow::Result;
use tracing::info;

use crate::config::{ConfigStore, DisplayConfig};
use crash::CrashLog;

/// Pick the config to display
///
/// Stock mode never touches the store and always has shutdown disabled.
pub fn resolve_config(stock: bool, store: &ConfigStore) -> Result<DisplayConfig> {
    if stock {
        info!("Stock mode: using built-in preset");
        return Ok(DisplayConfig::stock());
    }
    store.load()
}

/// Entry point for viewer mode
///
/// Errors and panics are recorded in the crash log next to the config and
/// summarized on stderr; they never propagate to the caller.
pub fn run_viewer(stock: bool) {
    let store = ConfigStore::beside_executable();
    let crash_log = CrashLog::in_dir(&store.dir());
    crash_log.install_panic_hook();

    crash_log.guard(|| run(stock, &store));
}

fn run(stock: bool, store: &ConfigStore) -> Result<()> {
    let config = resolve_config(stock, store)?;
    let schedule_shutdown = config.enable_shutdown && !stock;
    app::run(&config, schedule_shutdown)?;
    info!("Viewer exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_stock_mode_does_no_file_io() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("bsod_config.json"));

        let config = resolve_config(true, &store).unwrap();
        assert!(!config.enable_shutdown);
        assert!(!store.path().exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_stock_mode_ignores_stored_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("bsod_config.json"));
        let stored = "{\"enable_shutdown\": true, \"stop_code\": \"CUSTOM\"}";
        fs::write(store.path(), stored).unwrap();

        let config = resolve_config(true, &store).unwrap();
        assert!(!config.enable_shutdown);
        assert_eq!(config, DisplayConfig::stock());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), stored);
    }

    #[test]
    fn test_stock_mode_ignores_malformed_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("bsod_config.json"));
        fs::write(store.path(), "not json").unwrap();

        assert!(resolve_config(true, &store).is_ok());
        assert!(resolve_config(false, &store).is_err());
    }

    #[test]
    fn test_normal_mode_reads_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("bsod_config.json"));
        fs::write(store.path(), "{\"enable_shutdown\": true}").unwrap();

        let config = resolve_config(false, &store).unwrap();
        assert!(config.enable_shutdown);
    }
}
