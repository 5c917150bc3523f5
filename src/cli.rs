//! Command-line argument parsing
//!
//! Supports:
//! - Pointing at an alternative settings file
//! - Forcing a hidden start without touching the saved preference

use clap::Parser;
use std::path::PathBuf;

/// A sidebar that docks to the screen edge
#[derive(Parser, Debug)]
#[command(name = "edgebar", version, about = "A sidebar that docks to the screen edge")]
pub struct CliArgs {
    /// Settings file to use instead of settings.yaml next to the executable
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start hidden behind the edge indicator (this run only)
    #[arg(long)]
    pub hidden: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Where settings are read from and saved to
    pub settings_path: PathBuf,
    /// Hide on startup regardless of the saved preference
    pub force_hidden: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let settings_path = match self.config {
            Some(path) => path,
            None => crate::config_paths::settings_file()
                .ok_or_else(|| "Cannot locate the executable's directory".to_string())?,
        };

        if settings_path.is_dir() {
            return Err(format!(
                "Settings path {} is a directory",
                settings_path.display()
            ));
        }

        Ok(StartupConfig {
            settings_path,
            force_hidden: self.hidden,
        })
    }
}
