//! Configuration management
//!
//! A single JSON document beside the executable holds every display option.
//! The editor writes it, the viewer reads it once at startup.

pub mod display;
pub mod store;

pub use display::DisplayConfig;
pub use store::ConfigStore;
