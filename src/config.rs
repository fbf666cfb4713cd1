//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "calctty")]
#[command(about = "Scientific calculator for the terminal", long_about = None)]
pub struct Cli {
    /// Start in radian mode instead of degrees
    #[arg(long)]
    pub radians: bool,

    /// Keypad color animation interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Keep the keypad colors still
    #[arg(long)]
    pub no_color_cycle: bool,

    /// Write logs to this file (the TUI owns stdout)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Press these keys without starting the TUI and print the display
    #[arg(long, value_name = "SEQUENCE")]
    pub keys: Option<String>,
}

/// Settings for the interactive application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub degree_mode: bool,
    pub tick_interval: Duration,
    pub color_cycle: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            degree_mode: true,
            tick_interval: Duration::from_millis(100),
            color_cycle: true,
        }
    }
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        AppConfig {
            degree_mode: !cli.radians,
            tick_interval: Duration::from_millis(cli.tick_ms),
            color_cycle: !cli.no_color_cycle,
        }
    }
}
