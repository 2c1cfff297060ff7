//! Application-wide constants
//!
//! Every literal the viewer and editor share lives here, so the on-disk
//! defaults, the stock preset and the rendered text cannot drift apart.

/// File locations, all resolved relative to the executable's directory
pub mod paths {
    /// Configuration document filename
    pub const CONFIG_FILENAME: &str = "bsod_config.json";

    /// Append-only crash log filename
    pub const CRASH_LOG_FILENAME: &str = "bsod_error.log";

    /// Environment variable overriding the directory both files live in
    pub const HOME_ENV_VAR: &str = "BSOD_HOME";

    /// Fallback directory name under the platform config dir
    pub const FALLBACK_APP_DIR: &str = "bsod";
}

/// Default value for every `DisplayConfig` field
pub mod defaults {
    pub const FACE_TEXT: &str = ":(";
    pub const FACE_SIZE: u32 = 96;
    pub const TEXT_SIZE: u32 = 26;
    pub const STOP_CODE: &str = "CRITICAL_PROCESS_DIED";
    pub const PERCENTAGE: u32 = 100;
    pub const BG_COLOR: &str = "#0078D7";
    pub const ENABLE_SHUTDOWN: bool = false;
    pub const IS_OLD: bool = false;
    pub const CLASSIC_FONT: &str = "Lucida Console";

    /// Restart notice shown above the stop code. Not user editable.
    pub const MESSAGE: &str = "Your PC ran into a problem and needs to restart.\n\
                               We're just collecting some error info, and then we'll shut down.";
}

/// Inclusive bounds for the numeric fields the editor accepts
pub mod limits {
    pub const FACE_SIZE: (u32, u32) = (10, 400);
    pub const TEXT_SIZE: (u32, u32) = (8, 100);
    pub const PERCENTAGE: (u32, u32) = (0, 100);
}

/// Rendered text of both screen styles
pub mod layout {
    /// Font used by the modern style
    pub const MODERN_FONT: &str = "Segoe UI";

    /// Fixed point size of the classic body
    pub const CLASSIC_TEXT_SIZE: u32 = 16;

    pub const STOP_CODE_PREFIX: &str = "Stop code: ";
    pub const PERCENTAGE_SUFFIX: &str = "% complete";

    /// Margin between the screen edge and the first text block
    pub const SCREEN_MARGIN: i8 = 80;

    /// Vertical gap between the face glyph and the body
    pub const FACE_GAP: f32 = 20.0;

    /// Legacy technical error block of the classic style
    pub const CLASSIC_BODY: &str = "\
A problem has been detected and Windows has been shut down to prevent damage
to your computer.

The problem seems to be caused by the following file: FAKE_DRIVER.SYS

PAGE_FAULT_IN_NONPAGED_AREA

If this is the first time you've seen this Stop error screen,
restart your computer. If this screen appears again, follow
these steps:

Check to make sure any new hardware or software is properly installed.
If this is a new installation, ask your hardware or software manufacturer
for any Windows updates you might need.

If problems continue, disable or remove any newly installed hardware
or software. Disable BIOS memory options such as caching or shadowing.
If you need to use Safe Mode to remove or disable components, restart
your computer, press F8 to select Advanced Startup Options, and then
select Safe Mode.

Technical Information:
*** STOP: 0x00000050 (0xFFFFF880009AA000, 0x0000000000000000, 0xFFFFF80002ACD123, 0x0000000000000000)
*** FAKE_DRIVER.SYS - Address FFFFF880009AA000 base at FFFFF880009A0000, DateStamp 4a5bc11e";
}

/// Delayed shutdown timings
pub mod shutdown {
    use std::time::Duration;

    /// Time between the screen appearing and the shutdown request
    pub const TRIGGER_DELAY: Duration = Duration::from_secs(3);

    /// Countdown the host shutdown utility is asked to wait
    pub const GRACE_PERIOD: Duration = Duration::from_secs(30);
}

/// Crash log formatting
pub mod crash {
    /// Separator written before every entry
    pub const ENTRY_MARKER: &str = "===== BSOD Crash Log =====";
}

/// Editor window constants
pub mod editor {
    pub const WINDOW_TITLE: &str = "BSOD Editor";
    pub const WINDOW_WIDTH: f32 = 1100.0;
    pub const WINDOW_HEIGHT: f32 = 650.0;

    /// Width of the controls column
    pub const CONTROLS_WIDTH: f32 = 240.0;

    /// Preview is drawn at this fraction of the real screen size
    pub const PREVIEW_SCALE: f32 = 0.5;
    pub const PREVIEW_MARGIN: i8 = 40;

    /// Layout spacing
    pub const SECTION_SPACING: f32 = 10.0;
    pub const ITEM_SPACING: f32 = 8.0;

    /// Classic desktop palette
    pub const PANEL_GRAY: egui::Color32 = egui::Color32::from_rgb(0xC0, 0xC0, 0xC0);
    pub const BORDER_DARK: egui::Color32 = egui::Color32::from_rgb(0x80, 0x80, 0x80);
    pub const TITLE_BLUE: egui::Color32 = egui::Color32::from_rgb(0x00, 0x00, 0x80);

    /// Alert level colors
    pub const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 128, 0);
    pub const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(170, 0, 0);
}
