//! Pure derivation of what the screen shows from a `DisplayConfig`
//!
//! The viewer and the editor preview both paint the result of `render`, so
//! the two can never disagree about the text or sizes on screen.

use tracing::warn;

use crate::common::color::hex_to_color32;
use crate::config::DisplayConfig;
use crate::constants::{defaults, layout, limits};

/// Which of the two screen variants to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Face glyph, restart message, stop code and progress
    Modern,
    /// Fixed legacy technical error block
    Classic,
}

impl DisplayStyle {
    pub fn from_is_old(is_old: bool) -> Self {
        if is_old { Self::Classic } else { Self::Modern }
    }

    pub fn is_old(self) -> bool {
        matches!(self, Self::Classic)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern (Windows 8/10/11)",
            Self::Classic => "Classic (Windows XP/Vista/7/98)",
        }
    }
}

/// One run of text with its typography
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    /// Point size before any preview scaling
    pub size: u32,
    /// Requested font face name
    pub font: String,
    pub bold: bool,
}

/// Everything needed to paint one screen
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLayout {
    pub background: egui::Color32,
    pub style: DisplayStyle,
    /// Large glyph above the body; modern style only
    pub face: Option<TextBlock>,
    pub body: TextBlock,
}

impl DisplayLayout {
    pub fn text_color(&self) -> egui::Color32 {
        egui::Color32::WHITE
    }
}

pub fn render(config: &DisplayConfig) -> DisplayLayout {
    let background = background_color(&config.bg_color);
    let style = DisplayStyle::from_is_old(config.is_old);

    match style {
        DisplayStyle::Modern => DisplayLayout {
            background,
            style,
            face: Some(TextBlock {
                text: config.face_text.clone(),
                size: paintable_size(config.face_size, limits::FACE_SIZE),
                font: layout::MODERN_FONT.to_string(),
                bold: false,
            }),
            body: TextBlock {
                text: modern_body(config),
                size: paintable_size(config.text_size, limits::TEXT_SIZE),
                font: layout::MODERN_FONT.to_string(),
                bold: false,
            },
        },
        DisplayStyle::Classic => DisplayLayout {
            background,
            style,
            face: None,
            body: TextBlock {
                text: layout::CLASSIC_BODY.to_string(),
                size: layout::CLASSIC_TEXT_SIZE,
                font: config.classic_font.clone(),
                bold: true,
            },
        },
    }
}

/// Message, stop code and progress separated by blank lines
pub fn modern_body(config: &DisplayConfig) -> String {
    format!(
        "{}\n\n{}{}\n\n{}{}",
        config.message,
        layout::STOP_CODE_PREFIX,
        config.stop_code,
        config.percentage,
        layout::PERCENTAGE_SUFFIX
    )
}

/// Sizes from a hand-edited file are not range checked on load, and the
/// glyph atlas cannot hold arbitrarily large text
fn paintable_size(size: u32, (min, max): (u32, u32)) -> u32 {
    let clamped = size.clamp(min, max);
    if clamped != size {
        warn!(size, clamped, "Font size outside the supported range");
    }
    clamped
}

fn background_color(hex: &str) -> egui::Color32 {
    hex_to_color32(hex).unwrap_or_else(|| {
        warn!(bg_color = %hex, fallback = defaults::BG_COLOR, "Invalid background color");
        hex_to_color32(defaults::BG_COLOR).unwrap_or(egui::Color32::from_rgb(0x00, 0x78, 0xD7))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_body_contains_stop_code_and_percentage() {
        let config = DisplayConfig {
            face_text: ":(".to_string(),
            stop_code: "TEST_CODE".to_string(),
            percentage: 42,
            ..DisplayConfig::default()
        };

        let layout = render(&config);
        assert_eq!(layout.style, DisplayStyle::Modern);
        assert!(layout.body.text.contains("Stop code: TEST_CODE"));
        assert!(layout.body.text.contains("42% complete"));
        assert_eq!(layout.body.text.matches("Stop code: ").count(), 1);
    }

    #[test]
    fn test_modern_body_exact_shape() {
        let config = DisplayConfig {
            message: "Oops.".to_string(),
            stop_code: "X".to_string(),
            percentage: 7,
            ..DisplayConfig::default()
        };
        assert_eq!(modern_body(&config), "Oops.\n\nStop code: X\n\n7% complete");
    }

    #[test]
    fn test_modern_sizes_and_face() {
        let config = DisplayConfig {
            face_text: ":O".to_string(),
            face_size: 150,
            text_size: 30,
            ..DisplayConfig::default()
        };

        let layout = render(&config);
        let face = layout.face.unwrap();
        assert_eq!(face.text, ":O");
        assert_eq!(face.size, 150);
        assert_eq!(face.font, layout::MODERN_FONT);
        assert_eq!(layout.body.size, 30);
    }

    #[test]
    fn test_classic_ignores_modern_fields() {
        let a = DisplayConfig {
            is_old: true,
            ..DisplayConfig::default()
        };
        let b = DisplayConfig {
            is_old: true,
            face_text: "XD".to_string(),
            stop_code: "SOMETHING_ELSE".to_string(),
            percentage: 3,
            message: "different".to_string(),
            text_size: 99,
            ..DisplayConfig::default()
        };

        let layout_a = render(&a);
        let layout_b = render(&b);
        assert_eq!(layout_a.body, layout_b.body);
        assert_eq!(layout_a.body.text, layout::CLASSIC_BODY);
        assert_eq!(layout_a.body.size, layout::CLASSIC_TEXT_SIZE);
        assert!(layout_a.body.bold);
        assert!(layout_a.face.is_none());
    }

    #[test]
    fn test_classic_uses_configured_font() {
        let config = DisplayConfig {
            is_old: true,
            classic_font: "Courier New".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(render(&config).body.font, "Courier New");
    }

    #[test]
    fn test_background_color() {
        let config = DisplayConfig {
            bg_color: "#000000".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(render(&config).background, egui::Color32::BLACK);
    }

    #[test]
    fn test_invalid_background_falls_back_to_default_blue() {
        let config = DisplayConfig {
            bg_color: "not a color".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(
            render(&config).background,
            egui::Color32::from_rgb(0x00, 0x78, 0xD7)
        );
    }

    #[test]
    fn test_out_of_range_sizes_are_clamped() {
        let config: DisplayConfig =
            serde_json::from_str(r#"{"face_size": 5000, "text_size": 1}"#).unwrap();
        assert_eq!(config.face_size, 5000);

        let layout = render(&config);
        assert_eq!(layout.face.unwrap().size, limits::FACE_SIZE.1);
        assert_eq!(layout.body.size, limits::TEXT_SIZE.0);
    }

    #[test]
    fn test_style_round_trips_is_old() {
        assert_eq!(DisplayStyle::from_is_old(true), DisplayStyle::Classic);
        assert!(!DisplayStyle::Modern.is_old());
        assert!(DisplayStyle::Classic.is_old());
    }
}
