//! Editable copy of a `DisplayConfig`
//!
//! Text fields keep exactly what the user typed so a half-entered number
//! does not get rewritten under the cursor. Conversion back to a config
//! happens only through `validate` (for saving) or `preview_config`.

use serde_json::{Map, Value};

use super::validation::{NumericField, ValidationError};
use crate::config::DisplayConfig;
use crate::constants::defaults;
use crate::display::DisplayStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorForm {
    pub face_text: String,
    pub face_size: String,
    pub text_size: String,
    pub stop_code: String,
    pub percentage: String,
    pub bg_color: String,
    pub enable_shutdown: bool,
    pub style: DisplayStyle,
    pub classic_font: String,

    /// Unknown document keys, written back on save
    extra: Map<String, Value>,
}

impl EditorForm {
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            face_text: config.face_text.clone(),
            face_size: config.face_size.to_string(),
            text_size: config.text_size.to_string(),
            stop_code: config.stop_code.clone(),
            percentage: config.percentage.to_string(),
            bg_color: config.bg_color.clone(),
            enable_shutdown: config.enable_shutdown,
            style: DisplayStyle::from_is_old(config.is_old),
            classic_font: config.classic_font.clone(),
            extra: config.extra.clone(),
        }
    }

    /// Build the config to save, reporting every invalid numeric field
    ///
    /// The message is always reset to the default; it is not editable.
    pub fn validate(&self) -> Result<DisplayConfig, Vec<ValidationError>> {
        let face_size = NumericField::FACE_SIZE.validate(&self.face_size);
        let text_size = NumericField::TEXT_SIZE.validate(&self.text_size);
        let percentage = NumericField::PERCENTAGE.validate(&self.percentage);

        match (face_size, text_size, percentage) {
            (Ok(face_size), Ok(text_size), Ok(percentage)) => {
                Ok(self.to_config(face_size, text_size, percentage))
            }
            (face_size, text_size, percentage) => Err([
                face_size.err(),
                text_size.err(),
                percentage.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }

    /// Config reflecting the unsaved form, for the live preview
    ///
    /// A numeric field that does not parse keeps `fallback`'s value. Either
    /// way the result is clamped to the field's bounds.
    pub fn preview_config(&self, fallback: &DisplayConfig) -> DisplayConfig {
        let lenient = |field: NumericField, raw: &str, last: u32| {
            field.clamp(raw.trim().parse::<u32>().unwrap_or(last))
        };

        self.to_config(
            lenient(NumericField::FACE_SIZE, &self.face_size, fallback.face_size),
            lenient(NumericField::TEXT_SIZE, &self.text_size, fallback.text_size),
            lenient(NumericField::PERCENTAGE, &self.percentage, fallback.percentage),
        )
    }

    fn to_config(&self, face_size: u32, text_size: u32, percentage: u32) -> DisplayConfig {
        DisplayConfig {
            face_text: self.face_text.clone(),
            face_size,
            text_size,
            stop_code: self.stop_code.clone(),
            percentage,
            bg_color: self.bg_color.clone(),
            enable_shutdown: self.enable_shutdown,
            message: defaults::MESSAGE.to_string(),
            is_old: self.style.is_old(),
            classic_font: self.classic_font.clone(),
            extra: self.extra.clone(),
        }
    }
}
