//! SoundForge Studio - audio editor surface
//!
//! Entry point for the GUI application. It:
//! 1. Initializes logging
//! 2. Loads `~/.config/soundforge-studio/config.yaml` (defaults if missing)
//! 3. Launches the iced application
//!
//! ## Command line flags
//!
//! - `--write-default-config`: write the effective configuration back to disk and continue

mod ui;

use std::path::Path;

use anyhow::Context;
use iced::{Size, Task};
use soundforge_core::config::{self, StudioConfig};

use ui::app::{Message, StudioApp};

const CONFIG_FILENAME: &str = "config.yaml";

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();
    let write_default_config = args.iter().any(|arg| arg == "--write-default-config");

    // Initialize logger - set RUST_LOG=debug for per-render output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("soundforge-studio starting up");

    let config_path = config::default_config_path(CONFIG_FILENAME);
    let studio_config: StudioConfig = config::load_config(&config_path);

    if write_default_config {
        if let Err(e) = write_config(&studio_config, &config_path) {
            log::warn!("{:#}", e);
        }
    }

    iced::application(
        move || (StudioApp::new(studio_config.clone()), Task::none()),
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("SoundForge Studio")
    .window_size(Size::new(1400.0, 900.0))
    .run()
}

fn write_config(studio_config: &StudioConfig, path: &Path) -> anyhow::Result<()> {
    config::save_config(studio_config, path)
        .with_context(|| format!("Could not write default config to {:?}", path))?;
    log::info!("Wrote config to {:?}", path);
    Ok(())
}

/// Update function for iced
fn update(app: &mut StudioApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &StudioApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &StudioApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &StudioApp) -> iced::Theme {
    app.theme()
}
