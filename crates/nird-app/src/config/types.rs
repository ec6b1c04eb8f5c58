//! Configuration types for the NIRD wizard
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings`, `BehaviorSettings` - Its sections

use std::time::Duration;

use nird_core::ThemeMode;
use serde::{Deserialize, Serialize};

/// Longest accepted profile-selection delay
pub const MAX_SELECTION_DELAY_MS: u64 = 2000;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme the session starts in
    #[serde(default)]
    pub theme: ThemeMode,

    /// Show key hints in the navigation bar
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            show_key_hints: true,
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Pause between choosing a profile and moving on, so the
    /// selection acknowledgment is visible
    #[serde(default = "default_selection_delay_ms")]
    pub selection_delay_ms: u64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            selection_delay_ms: default_selection_delay_ms(),
        }
    }
}

impl BehaviorSettings {
    /// Selection delay, clamped to [`MAX_SELECTION_DELAY_MS`]
    pub fn selection_delay(&self) -> Duration {
        Duration::from_millis(self.selection_delay_ms.min(MAX_SELECTION_DELAY_MS))
    }
}

fn default_true() -> bool {
    true
}

fn default_selection_delay_ms() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.theme, ThemeMode::Dark);
        assert!(settings.ui.show_key_hints);
        assert_eq!(settings.behavior.selection_delay_ms, 300);
        assert_eq!(
            settings.behavior.selection_delay(),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn test_selection_delay_is_clamped() {
        let behavior = BehaviorSettings {
            selection_delay_ms: 60_000,
        };
        assert_eq!(
            behavior.selection_delay(),
            Duration::from_millis(MAX_SELECTION_DELAY_MS)
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("[ui]\ntheme = \"light\"\n").unwrap();
        assert_eq!(settings.ui.theme, ThemeMode::Light);
        assert!(settings.ui.show_key_hints);
        assert_eq!(settings.behavior.selection_delay_ms, 300);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
