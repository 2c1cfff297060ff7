//! Hex color parsing for the configured background
//!
//! Accepts the formats a color picker or a hand-edited config produces:
//! - 6 digits: RRGGBB (full opacity assumed)
//! - 8 digits: AARRGGBB (explicit alpha)
//! - Optional '#' prefix

/// Color in ARGB32 format (#AARRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(u32);

impl HexColor {
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let argb = match hex.len() {
            6 => 0xFF_00_00_00 | u32::from_str_radix(hex, 16).ok()?,
            8 => u32::from_str_radix(hex, 16).ok()?,
            _ => return None,
        };

        Some(Self(argb))
    }

    /// Get raw ARGB32 value
    #[cfg(test)]
    pub fn argb32(self) -> u32 {
        self.0
    }

    pub fn to_color32(self) -> egui::Color32 {
        let a = (self.0 >> 24) & 0xFF;
        let r = (self.0 >> 16) & 0xFF;
        let g = (self.0 >> 8) & 0xFF;
        let b = self.0 & 0xFF;
        egui::Color32::from_rgba_unmultiplied(r as u8, g as u8, b as u8, a as u8)
    }
}

/// Convert HEX string to egui::Color32
pub fn hex_to_color32(hex: &str) -> Option<egui::Color32> {
    HexColor::parse(hex).map(HexColor::to_color32)
}
