//! Screen model shared by the viewer and the editor preview
//!
//! `layout` derives the text blocks from a config, `painter` draws them with
//! egui, and `kill_switch` defines the gesture that closes the viewer.

pub mod kill_switch;
pub mod layout;
pub mod painter;

pub use kill_switch::KillSwitch;
pub use layout::{DisplayLayout, DisplayStyle, render};
