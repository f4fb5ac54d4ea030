//! First-class invariants for tic-tac-toe.
//!
//! Invariants are properties every reachable [`GameState`] satisfies.
//! The engine checks them in debug builds after each move, and the
//! property tests check them over random games.

use super::rules::{check_winner, is_full, line_owners};
use super::types::{GameState, GameStatus, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has either as many marks as O, or exactly one more,
/// and the player to move is the one with fewer marks (X on a tie).
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        match x.checked_sub(o) {
            Some(0) => state.current_turn() == Player::X,
            Some(1) => state.current_turn() == Player::O,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: at most one player owns a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        line_owners(state.board()).len() <= 1
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

/// Invariant: the stored status agrees with the board.
pub struct StatusMatchesBoardInvariant;

impl Invariant<GameState> for StatusMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::Won(player) => check_winner(board) == Some(player),
            GameStatus::Draw => is_full(board) && check_winner(board).is_none(),
            GameStatus::InProgress => !is_full(board) && check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Status is consistent with the board"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (
    AlternatingTurnInvariant,
    SingleWinnerInvariant,
    StatusMatchesBoardInvariant,
);
