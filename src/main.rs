#![deny(unsafe_code)]

mod common;
mod config;
mod constants;
mod display;
mod editor;
mod viewer;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "bsod")]
#[command(version)]
#[command(about = "Fullscreen fake stop-error screen", long_about = None)]
struct Cli {
    /// Show the built-in preset, ignoring the config file (never shuts down)
    #[arg(long, conflicts_with = "editor")]
    stock: bool,

    /// Open the appearance editor instead of the screen
    #[arg(long)]
    editor: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let cli = Cli::parse();

    if cli.editor {
        editor::run_editor()
    } else {
        // Viewer failures go to the crash log; the process still exits cleanly
        viewer::run_viewer(cli.stock);
        Ok(())
    }
}
