//! tic_tac_theme - tic-tac-toe with a random bot, persisted statistics
//! and a persisted light/dark theme.
//!
//! # Architecture
//!
//! - **Games**: pure board types, rules and the game-state engine
//! - **Session**: turns UI events into engine calls, bot replies and
//!   stats updates
//! - **Settings**: namespaced key-value store (in memory or SQLite) with
//!   the stats counters and theme flag built on it
//! - **Tui**: a ratatui front end that renders the session
//!
//! # Example
//!
//! ```
//! use tic_tac_theme::{GameMode, GameSession, MemoryStore, Outcome};
//!
//! let mut session = GameSession::new(GameMode::PlayerVsPlayer, MemoryStore::new());
//! for cell in [0, 4, 1, 5] {
//!     session.on_cell_tapped(cell).unwrap();
//! }
//! let report = session.on_cell_tapped(2).unwrap();
//! assert_eq!(*report.outcome(), Some(Outcome::XWin));
//! assert!(session.state().status().is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod db;
mod games;
mod session;
mod settings;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, GameInvariants, GameState, GameStatus, Invariant,
    InvariantSet, InvariantViolation, InvalidMove, Player, Position, SingleWinnerInvariant,
    Square, StatusMatchesBoardInvariant, apply_move, evaluate, reset, rules, select_move,
};

// Crate-level exports - Session
pub use session::{GameMode, GameSession, MoveReport};

// Crate-level exports - Settings
pub use db::{NewSetting, Setting, SqliteStore};
pub use settings::{
    ErrorScope, MemoryStore, NIGHT_MODE_KEY, Outcome, STATS_NAMESPACE, SettingsStore, StatsRecord,
    StatsStore, StoreError, THEME_NAMESPACE, Theme, ThemeStore,
};

// Crate-level exports - Terminal front end
pub use tui::{App, Command, command_for, move_cursor, run_tui};
