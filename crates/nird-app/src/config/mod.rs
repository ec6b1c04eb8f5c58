//! Configuration file parsing for the NIRD wizard
//!
//! Supports:
//! - `<config_dir>/nird-village/config.toml` - Global settings
//! - An explicit path passed with `--config`

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, DEFAULT_CONFIG};
pub use types::*;
