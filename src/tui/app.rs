//! Application state and logic.

use tracing::{debug, instrument, warn};

use super::input::Command;
use crate::games::tictactoe::{GameState, GameStatus, Position};
use crate::session::{GameMode, GameSession, MoveReport};
use crate::settings::{SettingsStore, StatsRecord, Theme, ThemeStore};

/// Main application state.
pub struct App<S> {
    session: GameSession<S>,
    cursor: Position,
    theme: Theme,
    status_message: String,
    should_quit: bool,
}

impl<S: SettingsStore> App<S> {
    /// Creates the app around a session, reading (and on first run
    /// writing) the persisted theme.
    #[instrument(skip(session))]
    pub fn new(mut session: GameSession<S>) -> Self {
        let theme = match session.store_mut().init_theme() {
            Ok(theme) => theme,
            Err(e) => {
                warn!(error = %e, "Failed to initialise theme, using light");
                Theme::Light
            }
        };
        let status_message = session.mode().label().to_string();

        Self {
            session,
            cursor: Position::Center,
            theme,
            status_message,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn game(&self) -> &GameState {
        self.session.state()
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.session.mode()
    }

    /// Totals shown in the stats line.
    pub fn stats(&self) -> StatsRecord {
        self.session.stats()
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Latest notification.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Prompt for the side to move, or the result once the game is over.
    pub fn turn_line(&self) -> String {
        match self.game().status() {
            GameStatus::InProgress => format!("{} to move", self.game().current_turn()),
            GameStatus::Won(player) => format!("{} won", player),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::MoveCursor(pos) => self.cursor = pos,
            Command::Tap(index) => self.tap(index),
            Command::Reset => {
                self.session.on_reset_tapped();
                self.status_message = "New game".to_string();
            }
            Command::SelectMode(mode) => {
                self.session.on_mode_selected(mode);
                self.status_message = mode.label().to_string();
            }
            Command::ToggleTheme => self.toggle_theme(),
            Command::Quit => self.should_quit = true,
        }
    }

    fn tap(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
        }

        match self.session.on_cell_tapped(index) {
            Ok(report) => self.status_message = describe(&report),
            // Rejected taps leave the board and the message as they were.
            Err(e) => debug!(error = %e, "Tap ignored"),
        }
    }

    fn toggle_theme(&mut self) {
        match self.session.store_mut().toggle_theme() {
            Ok(theme) => {
                self.theme = theme;
                self.status_message = theme.switched_message().to_string();
            }
            Err(e) => {
                // Keep the session usable; the flag just won't persist.
                warn!(error = %e, "Failed to persist theme");
                self.theme = self.theme.toggled();
                self.status_message = self.theme.switched_message().to_string();
            }
        }
    }
}

fn describe(report: &MoveReport) -> String {
    match report.outcome() {
        Some(outcome) => format!("{}! Press r for a new game", outcome),
        None => match report.bot_move().and_then(Position::from_index) {
            Some(pos) => format!("Bot played {}", pos),
            None => String::new(),
        },
    }
}
