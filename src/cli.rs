//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::settings::GameSettings;

/// Two-player chess in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "hotseat-chess", version, about)]
pub struct Cli {
    /// Draw the board from Black's side
    #[arg(long)]
    pub flipped: bool,

    /// Do not mark legal destinations of the held piece
    #[arg(long)]
    pub no_hints: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "chess_rules=trace")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Settings file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    pub save_settings: bool,
}

impl Cli {
    /// Apply flags on top of settings loaded from file
    pub fn apply_overrides(&self, settings: &mut GameSettings) {
        if self.flipped {
            settings.flipped = true;
        }
        if self.no_hints {
            settings.show_hints = false;
        }
        if let Some(filter) = &self.log_filter {
            settings.log_filter = filter.clone();
        }
    }
}
