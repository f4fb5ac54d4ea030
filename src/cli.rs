//! Command-line interface for tic_tac_theme.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tic_tac_theme::{DEFAULT_CONFIG_FILE, GameMode};

/// Tic-tac-toe with a random bot, persisted statistics and a light/dark theme
#[derive(Parser, Debug)]
#[command(name = "tic_tac_theme")]
#[command(about = "Terminal tic-tac-toe with persisted stats and theme", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Path to the settings database (overrides the config file)
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Who plays O (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Keep settings in memory only; nothing is written to disk
        #[arg(long)]
        ephemeral: bool,
    },

    /// Print win/draw statistics
    Stats,

    /// Print the current theme
    Theme {
        /// Flip between light and dark before printing
        #[arg(long)]
        toggle: bool,
    },
}
