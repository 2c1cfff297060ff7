//! Editor - form-based customization of the viewer's config with live preview

mod app;
pub mod form;
pub mod state;
pub mod validation;

use anyhow::{Context, Result};

use crate::config::ConfigStore;

/// Entry point for editor mode
///
/// Creates the config document with defaults on first run. A malformed
/// document is reported to the caller instead of being overwritten.
pub fn run_editor() -> Result<()> {
    let store = ConfigStore::beside_executable();
    let config = store
        .load()
        .with_context(|| format!("Cannot open the editor on {:?}", store.path()))?;
    app::run(store, config)
}
