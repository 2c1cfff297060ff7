//! Display options persisted in the config document
//!
//! Every field has a fixed default. Documents written by older versions or
//! edited by hand may omit any of them; deserialization layers whatever is
//! present over `DisplayConfig::default()` and keeps unknown keys aside so a
//! later save writes them back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::defaults;

/// The full set of display and behavior options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DisplayConfigHelper")]
pub struct DisplayConfig {
    /// Large glyph shown above the message in the modern style
    pub face_text: String,
    pub face_size: u32,
    pub text_size: u32,
    pub stop_code: String,
    pub percentage: u32,
    /// Background color as a hex string; not validated on load
    pub bg_color: String,
    /// Request a real host restart a few seconds after the screen appears
    pub enable_shutdown: bool,
    pub message: String,
    /// Classic style (legacy technical text) instead of the modern layout
    pub is_old: bool,
    pub classic_font: String,

    /// Keys this version does not know about, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Every known field optional, used to detect which ones the document omits
#[derive(Deserialize)]
struct DisplayConfigHelper {
    face_text: Option<String>,
    face_size: Option<u32>,
    text_size: Option<u32>,
    stop_code: Option<String>,
    percentage: Option<u32>,
    bg_color: Option<String>,
    enable_shutdown: Option<bool>,
    message: Option<String>,
    is_old: Option<bool>,
    classic_font: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<DisplayConfigHelper> for DisplayConfig {
    fn from(helper: DisplayConfigHelper) -> Self {
        let base = DisplayConfig::default();

        DisplayConfig {
            face_text: helper.face_text.unwrap_or(base.face_text),
            face_size: helper.face_size.unwrap_or(base.face_size),
            text_size: helper.text_size.unwrap_or(base.text_size),
            stop_code: helper.stop_code.unwrap_or(base.stop_code),
            percentage: helper.percentage.unwrap_or(base.percentage),
            bg_color: helper.bg_color.unwrap_or(base.bg_color),
            enable_shutdown: helper.enable_shutdown.unwrap_or(base.enable_shutdown),
            message: helper.message.unwrap_or(base.message),
            is_old: helper.is_old.unwrap_or(base.is_old),
            classic_font: helper.classic_font.unwrap_or(base.classic_font),
            extra: helper.extra,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            face_text: defaults::FACE_TEXT.to_string(),
            face_size: defaults::FACE_SIZE,
            text_size: defaults::TEXT_SIZE,
            stop_code: defaults::STOP_CODE.to_string(),
            percentage: defaults::PERCENTAGE,
            bg_color: defaults::BG_COLOR.to_string(),
            enable_shutdown: defaults::ENABLE_SHUTDOWN,
            message: defaults::MESSAGE.to_string(),
            is_old: defaults::IS_OLD,
            classic_font: defaults::CLASSIC_FONT.to_string(),
            extra: Map::new(),
        }
    }
}

impl DisplayConfig {
    /// Built-in preset used by stock mode. Never schedules a shutdown.
    pub fn stock() -> Self {
        Self {
            enable_shutdown: false,
            ..Self::default()
        }
    }
}
