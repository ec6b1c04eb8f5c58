//! NIRD Village library
//!
//! A terminal onboarding wizard for the NIRD digital resilience campaign.
//! The binary picks between the TUI and the headless runner; both drive the
//! same `nird_app::Engine`.

pub mod headless;

use std::path::Path;

use nird_app::config::{load_settings, Settings};
use nird_core::prelude::*;
use nird_core::ThemeMode;

pub use headless::run_headless;

/// Run the interactive terminal wizard
pub async fn run(settings: Settings) -> Result<()> {
    nird_tui::run(settings).await
}

/// Settings from `config_path` (defaults when absent), with `--light` applied
pub fn resolve_settings(config_path: Option<&Path>, light: bool) -> Settings {
    let mut settings = config_path.map(load_settings).unwrap_or_default();
    if light {
        settings.ui.theme = ThemeMode::Light;
    }
    info!(
        "Settings resolved: theme={}, key_hints={}, selection_delay={}ms",
        settings.ui.theme,
        settings.ui.show_key_hints,
        settings.behavior.selection_delay().as_millis()
    );
    settings
}
