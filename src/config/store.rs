//! On-disk home of the `DisplayConfig` document
//!
//! The viewer only reads it; the editor creates it on first run and
//! overwrites it in full on every save. There is no locking: two editors
//! saving at once simply race and the last write wins.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use super::DisplayConfig;
use crate::constants::paths;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard location next to the running executable
    pub fn beside_executable() -> Self {
        Self::new(home_dir().join(paths::CONFIG_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the document (and the crash log)
    pub fn dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load the document, creating it with defaults when absent
    ///
    /// Missing keys are filled from defaults; present keys are kept even when
    /// out of range. Malformed JSON is returned as an error, never repaired.
    pub fn load(&self) -> Result<DisplayConfig> {
        if !self.path.exists() {
            info!(path = ?self.path, "Config file not found, creating default config");
            let config = DisplayConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config from {:?}", self.path))?;

        let config: DisplayConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", self.path))?;

        info!(path = ?self.path, "Loaded display config");
        debug!(?config, "Resolved display config");
        Ok(config)
    }

    /// Overwrite the document with the complete field set
    pub fn save(&self, config: &DisplayConfig) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json_string = to_json_string(config).context("Failed to serialize config to JSON")?;

        fs::write(&self.path, json_string)
            .with_context(|| format!("Failed to write config to {:?}", self.path))?;

        info!(path = ?self.path, "Saved display config");
        Ok(())
    }
}

/// Pretty JSON with four-space indentation, matching hand-edited files
fn to_json_string(config: &DisplayConfig) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Directory the config document and crash log live in
///
/// `BSOD_HOME` wins, then the executable's directory, then the platform
/// config dir.
pub fn home_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(paths::HOME_ENV_VAR) {
        return PathBuf::from(dir);
    }

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return dir;
    }

    let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push(paths::FALLBACK_APP_DIR);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join(paths::CONFIG_FILENAME))
    }

    #[test]
    fn test_load_creates_default_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        assert!(!store.path().exists());

        let config = store.load().unwrap();
        assert_eq!(config, DisplayConfig::default());
        assert!(store.path().exists());

        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk.as_object().unwrap().len(), 10);
    }

    #[test]
    fn test_load_creates_missing_parent_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("nested/dir/bsod_config.json"));

        store.load().unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_merges_partial_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        let partial = json!({ "stop_code": "MANUALLY_INITIATED_CRASH", "bg_color": "#000000" });
        fs::write(store.path(), partial.to_string()).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.stop_code, "MANUALLY_INITIATED_CRASH");
        assert_eq!(config.bg_color, "#000000");
        assert_eq!(config.face_text, DisplayConfig::default().face_text);
        assert_eq!(config.percentage, DisplayConfig::default().percentage);

        // Loading never writes the merged result back
        assert_eq!(fs::read_to_string(store.path()).unwrap(), partial.to_string());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "{ \"face_text\": ").unwrap();

        let err = store.load().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse JSON"));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        let mut config = DisplayConfig::default();
        config.face_text = ":O".to_string();
        config.face_size = 200;
        config.percentage = 0;
        config.enable_shutdown = true;
        config.is_old = true;
        config.classic_font = "Courier New".to_string();
        config.extra.insert("text_color".to_string(), json!("#FFFFFF"));

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        store.save(&DisplayConfig::default()).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("\n    \"face_text\": \":(\""));
    }

    #[test]
    fn test_dir_is_parent_of_document() {
        let store = ConfigStore::new("/tmp/somewhere/bsod_config.json");
        assert_eq!(store.dir(), PathBuf::from("/tmp/somewhere"));
    }
}
