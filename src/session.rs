//! Game session: one game at a time, driven by UI events.
//!
//! The session owns the canonical [`GameState`], runs the bot in
//! player-vs-bot mode, and records each finished game in the stats store
//! exactly once. Front ends only forward events and render what comes
//! back.

use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::games::tictactoe::{GameState, InvalidMove, Player, apply_move, reset, select_move};
use crate::settings::{Outcome, StatsRecord, StatsStore};

/// Who plays the O side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    PlayerVsPlayer,
    /// The bot answers every human move as O.
    PlayerVsBot,
}

impl GameMode {
    /// Notification shown when the mode is selected.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "Mode: two players",
            Self::PlayerVsBot => "Mode: playing the bot",
        }
    }
}

/// What happened in response to one cell tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct MoveReport {
    /// Cell the human marked.
    human_move: usize,
    /// Cell the bot answered with, if it moved.
    bot_move: Option<usize>,
    /// Set when this tap (or the bot's answer) finished the game.
    outcome: Option<Outcome>,
    /// Totals after recording `outcome`.
    stats: Option<StatsRecord>,
}

/// A single-player-context game session.
#[derive(Debug)]
pub struct GameSession<S, R = StdRng> {
    state: GameState,
    mode: GameMode,
    store: S,
    rng: R,
    stats: StatsRecord,
}

impl<S: StatsStore> GameSession<S, StdRng> {
    /// Creates a session whose bot draws from OS entropy.
    #[instrument(skip(store))]
    pub fn new(mode: GameMode, store: S) -> Self {
        Self::with_rng(mode, store, StdRng::from_os_rng())
    }
}

impl<S: StatsStore, R: rand::Rng> GameSession<S, R> {
    /// Creates a session with an explicit random source for the bot.
    #[instrument(skip(store, rng))]
    pub fn with_rng(mode: GameMode, store: S, rng: R) -> Self {
        let stats = store.load_stats();
        info!(%mode, %stats, "Creating game session");
        Self {
            state: reset(),
            mode,
            store,
            rng,
            stats,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Totals as of the last finished game (or session start).
    pub fn stats(&self) -> StatsRecord {
        self.stats
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The backing store, mutably (for settings outside the game).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Handles a tap on `index`.
    ///
    /// The human plays the side to move in two-player mode and always X
    /// against the bot. In bot mode the bot answers immediately when the
    /// game is still running.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] when the tap is rejected; the session is
    /// unchanged in that case.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn on_cell_tapped(&mut self, index: usize) -> Result<MoveReport, InvalidMove> {
        let human = match self.mode {
            GameMode::PlayerVsPlayer => self.state.current_turn(),
            GameMode::PlayerVsBot => Player::X,
        };

        self.state = apply_move(&self.state, index, human)?;
        debug!(index, player = %human, "Human move applied");

        let mut report = MoveReport {
            human_move: index,
            bot_move: None,
            outcome: None,
            stats: None,
        };

        if self.finish_if_over(&mut report) {
            return Ok(report);
        }

        if self.mode == GameMode::PlayerVsBot && self.state.current_turn() == Player::O {
            report.bot_move = self.play_bot();
            self.finish_if_over(&mut report);
        }

        Ok(report)
    }

    /// Starts a fresh game in the current mode.
    #[instrument(skip(self))]
    pub fn on_reset_tapped(&mut self) {
        info!("Game reset");
        self.state = reset();
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn on_mode_selected(&mut self, mode: GameMode) {
        info!(from = %self.mode, to = %mode, "Mode selected");
        self.mode = mode;
        self.state = reset();
    }

    /// Lets the bot play O. Returns the cell it marked.
    fn play_bot(&mut self) -> Option<usize> {
        let index = select_move(self.state.board(), &mut self.rng)?;
        match apply_move(&self.state, index, Player::O) {
            Ok(next) => {
                debug!(index, "Bot move applied");
                self.state = next;
                Some(index)
            }
            Err(e) => {
                warn!(error = %e, index, "Bot chose an invalid move");
                None
            }
        }
    }

    /// Records the outcome if the game just ended. Returns true when over.
    fn finish_if_over(&mut self, report: &mut MoveReport) -> bool {
        let Some(outcome) = Outcome::from_status(self.state.status()) else {
            return false;
        };

        match self.store.increment(outcome) {
            Ok(stats) => self.stats = stats,
            Err(e) => warn!(error = %e, %outcome, "Failed to record game result"),
        }

        info!(%outcome, stats = %self.stats, "Game over");
        report.outcome = Some(outcome);
        report.stats = Some(self.stats);
        true
    }
}
