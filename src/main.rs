use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hotseat_chess::settings::{load_settings, resolve_settings_path, save_settings};
use hotseat_chess::{Cli, GameSettings, Session};

fn init_tracing(settings: &GameSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings_path = resolve_settings_path(cli.settings.as_deref()).ok();
    let mut settings = settings_path
        .as_deref()
        .map(load_settings)
        .unwrap_or_default();
    cli.apply_overrides(&mut settings);

    init_tracing(&settings);
    info!("[STARTUP] Settings: {:?}", settings);

    if cli.save_settings {
        let path = settings_path.context("no settings path available to save to")?;
        save_settings(&settings, &path)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(settings).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
