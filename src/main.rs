//! NIRD Village - terminal onboarding wizard
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use nird_app::config::{default_config_path, init_config_file};
use nird_core::{logging, Error};

/// NIRD Village - discover the digital resilience campaign step by step
#[derive(Parser, Debug)]
#[command(name = "nird", version)]
#[command(about = "A terminal onboarding wizard for the NIRD campaign", long_about = None)]
struct Args {
    /// Start in the light theme
    #[arg(long)]
    light: bool,

    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Run in headless mode (stdin commands, JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let config_path = args.config.or_else(default_config_path);

    if args.init_config {
        let path = config_path
            .ok_or_else(|| Error::config("no configuration directory on this platform"))?;
        if init_config_file(&path)? {
            eprintln!("Wrote default configuration to {}", path.display());
        } else {
            eprintln!("Configuration already exists at {}", path.display());
        }
        return Ok(());
    }

    let settings = nird_village::resolve_settings(config_path.as_deref(), args.light);

    let result = if args.headless {
        nird_village::run_headless(settings).await
    } else {
        nird_village::run(settings).await
    };

    if result.is_err() {
        eprintln!("Logs are in {}", logging::log_directory().display());
    }
    Ok(result?)
}
