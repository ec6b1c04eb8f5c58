//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use nird_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "nird-village";

/// Commented default configuration written by `--init-config`
pub const DEFAULT_CONFIG: &str = r#"# NIRD Village configuration

[ui]
# Theme the wizard starts in: "dark" or "light"
theme = "dark"

# Show key hints in the navigation bar
show_key_hints = true

[behavior]
# Pause (ms) between choosing a profile and moving to its content (max 2000)
selection_delay_ms = 300
"#;

/// Default config file location (`<config_dir>/nird-village/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write the default config file at `path` unless one already exists
///
/// Returns `true` when a file was written.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        debug!("Config file already exists at {:?}", path);
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", path))?;

    info!("Created default config at {:?}", path);
    Ok(true)
}
