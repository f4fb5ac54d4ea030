//! Win/draw statistics kept in the settings store.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{SettingsStore, StoreError};
use crate::games::tictactoe::{GameStatus, Player};

/// Namespace holding the statistics counters.
pub const STATS_NAMESPACE: &str = "stats";

/// Outcome of a finished game, as counted in the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// X completed a line.
    #[display("X wins")]
    XWin,
    /// O completed a line.
    #[display("O wins")]
    OWin,
    /// Board filled with no line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Maps a terminal status to its outcome; `None` while in progress.
    #[instrument]
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Won(Player::X) => Some(Self::XWin),
            GameStatus::Won(Player::O) => Some(Self::OWin),
            GameStatus::Draw => Some(Self::Draw),
            GameStatus::InProgress => None,
        }
    }

    /// Key of the counter this outcome increments.
    pub fn counter_key(self) -> &'static str {
        match self {
            Self::XWin => "xWins",
            Self::OWin => "oWins",
            Self::Draw => "draws",
        }
    }
}

/// Running totals of finished games.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Display,
)]
#[display("X wins: {} | O wins: {} | Draws: {}", x_wins, o_wins, draws)]
pub struct StatsRecord {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl StatsRecord {
    /// Creates a record from explicit totals.
    pub fn new(x_wins: u32, o_wins: u32, draws: u32) -> Self {
        Self {
            x_wins,
            o_wins,
            draws,
        }
    }

    /// Total number of finished games.
    pub fn total_games(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }

    /// Count for a single outcome.
    pub fn count(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::XWin => self.x_wins,
            Outcome::OWin => self.o_wins,
            Outcome::Draw => self.draws,
        }
    }
}

/// Increment-and-fetch access to the statistics counters.
pub trait StatsStore {
    /// Current totals; counters never written read as zero.
    fn load_stats(&self) -> StatsRecord;

    /// Bumps the counter for `outcome` and returns the updated totals.
    ///
    /// Call exactly once per finished game. A counter that cannot be read
    /// or parsed is left untouched and reported as an error.
    fn increment(&mut self, outcome: Outcome) -> Result<StatsRecord, StoreError>;
}

impl<S: SettingsStore + ?Sized> StatsStore for S {
    fn load_stats(&self) -> StatsRecord {
        let record = StatsRecord::new(
            self.get_u32(STATS_NAMESPACE, Outcome::XWin.counter_key(), 0),
            self.get_u32(STATS_NAMESPACE, Outcome::OWin.counter_key(), 0),
            self.get_u32(STATS_NAMESPACE, Outcome::Draw.counter_key(), 0),
        );
        debug!(%record, "Stats loaded");
        record
    }

    #[instrument(skip(self))]
    fn increment(&mut self, outcome: Outcome) -> Result<StatsRecord, StoreError> {
        let key = outcome.counter_key();
        self.update(STATS_NAMESPACE, key, &mut |current| {
            let count: u32 = match current {
                Some(text) => serde_json::from_str(text)
                    .map_err(|e| StoreError::from(e).with_setting(STATS_NAMESPACE, key))?,
                None => 0,
            };
            Ok(serde_json::to_string(&count.saturating_add(1))?)
        })?;

        let record = self.load_stats();
        info!(%outcome, %record, "Stats updated");
        Ok(record)
    }
}
