//! Key combination that dismisses the fullscreen screen

use eframe::egui;

/// A keyboard binding with modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillSwitch {
    pub key: egui::Key,

    /// Control key pressed (Cmd also counts on macOS)
    pub ctrl: bool,

    pub shift: bool,
    pub alt: bool,
}

impl KillSwitch {
    pub const fn new(key: egui::Key, ctrl: bool, shift: bool, alt: bool) -> Self {
        Self {
            key,
            ctrl,
            shift,
            alt,
        }
    }

    /// Check a single key press against this binding
    ///
    /// Letter case is irrelevant: egui reports the same `Key` with or
    /// without Shift/Caps Lock, and the modifiers are compared exactly.
    pub fn matches(&self, modifiers: egui::Modifiers, key: egui::Key) -> bool {
        key == self.key
            && (modifiers.ctrl || modifiers.command) == self.ctrl
            && modifiers.shift == self.shift
            && modifiers.alt == self.alt
    }

    /// True if any key press this frame triggers the binding
    pub fn pressed(&self, input: &egui::InputState) -> bool {
        input.events.iter().any(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => self.matches(*modifiers, *key),
            _ => false,
        })
    }

    /// Get human-readable display name for this binding (for UI)
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();

        if self.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.shift {
            parts.push("Shift".to_string());
        }
        if self.alt {
            parts.push("Alt".to_string());
        }
        parts.push(self.key.name().to_string());

        parts.join("+")
    }
}

impl Default for KillSwitch {
    /// Ctrl+Shift+Q
    fn default() -> Self {
        Self::new(egui::Key::Q, true, true, false)
    }
}
