//! tic_tac_theme - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tic_tac_theme::{
    AppConfig, GameMode, GameSession, MemoryStore, SettingsStore, SqliteStore, StatsStore,
    ThemeStore, run_tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Log file used while the terminal UI owns the screen.
const LOG_FILE: &str = "tic_tac_theme.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let interactive = matches!(cli.command, Command::Play { .. });
    initialize_tracing(interactive)?;

    let config = AppConfig::load_or_default(&cli.config)?.with_overrides(cli.db_path, None);

    match cli.command {
        Command::Play { mode, ephemeral } => run_play(config, mode, ephemeral),
        Command::Stats => run_stats(&config),
        Command::Theme { toggle } => run_theme(&config, toggle),
    }
}

/// Run the interactive game.
#[instrument(skip(config))]
fn run_play(config: AppConfig, mode: Option<GameMode>, ephemeral: bool) -> Result<()> {
    let config = config.with_overrides(None, mode);

    let store: Box<dyn SettingsStore> = if ephemeral {
        info!("Using in-memory settings");
        Box::new(MemoryStore::new())
    } else {
        Box::new(SqliteStore::open(config.db_path())?)
    };

    run_tui(GameSession::new(*config.mode(), store))
}

/// Print the statistics line.
#[instrument(skip(config))]
fn run_stats(config: &AppConfig) -> Result<()> {
    let store = SqliteStore::open(config.db_path())?;
    let stats = store.load_stats();
    println!("{}", stats);
    println!("Games played: {}", stats.total_games());
    Ok(())
}

/// Print, and optionally flip, the theme.
#[instrument(skip(config))]
fn run_theme(config: &AppConfig, toggle: bool) -> Result<()> {
    let mut store = SqliteStore::open(config.db_path())?;
    let theme = if toggle {
        let theme = store.toggle_theme()?;
        println!("{}", theme.switched_message());
        theme
    } else {
        store.init_theme()?
    };
    println!("Theme: {}", theme);
    Ok(())
}

/// Filter used when `RUST_LOG` is unset.
fn default_filter(interactive: bool) -> &'static str {
    if interactive { "info" } else { "warn" }
}

/// Interactive runs log to a file so output does not tear the screen.
fn initialize_tracing(interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(interactive)));
    if interactive {
        let log_file = std::fs::File::create(LOG_FILE)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
