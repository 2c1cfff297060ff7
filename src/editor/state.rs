//! Editor state: the form, the store it saves to, and user-facing status

use eframe::egui;
use tracing::{error, info, warn};

use super::form::EditorForm;
use super::validation::ValidationError;
use crate::config::{ConfigStore, DisplayConfig};
use crate::constants::editor::*;

pub struct StatusMessage {
    pub text: String,
    pub color: egui::Color32,
}

pub struct EditorState {
    pub store: ConfigStore,
    pub form: EditorForm,
    /// What the document on disk currently holds
    pub last_saved: DisplayConfig,
    pub status_message: Option<StatusMessage>,
    /// Errors from the last failed save, shown in a modal until dismissed
    pub validation_errors: Vec<ValidationError>,
}

impl EditorState {
    pub fn new(store: ConfigStore, config: DisplayConfig) -> Self {
        Self {
            store,
            form: EditorForm::from_config(&config),
            last_saved: config,
            status_message: None,
            validation_errors: Vec::new(),
        }
    }

    /// Validate the form and write it to the store
    ///
    /// Returns false, leaving the file untouched, when any numeric field is
    /// invalid or the write fails.
    pub fn save(&mut self) -> bool {
        let config = match self.form.validate() {
            Ok(config) => config,
            Err(errors) => {
                warn!(count = errors.len(), "Save aborted: invalid fields");
                self.validation_errors = errors;
                self.status_message = Some(StatusMessage {
                    text: "Not saved: some values are invalid".to_string(),
                    color: COLOR_ERROR,
                });
                return false;
            }
        };

        if let Err(err) = self.store.save(&config) {
            error!(error = ?err, "Failed to save config");
            self.status_message = Some(StatusMessage {
                text: format!("Save failed: {err}"),
                color: COLOR_ERROR,
            });
            return false;
        }

        self.last_saved = config;
        self.validation_errors.clear();
        self.status_message = Some(StatusMessage {
            text: "Configuration saved successfully".to_string(),
            color: COLOR_SUCCESS,
        });
        info!(path = ?self.store.path(), "Editor saved configuration");
        true
    }

    /// Form differs from what was last written (or is not savable at all)
    pub fn has_unsaved_changes(&self) -> bool {
        match self.form.validate() {
            Ok(config) => config != self.last_saved,
            Err(_) => true,
        }
    }

    /// Config the preview pane should draw right now
    pub fn preview_config(&self) -> DisplayConfig {
        self.form.preview_config(&self.last_saved)
    }
}
