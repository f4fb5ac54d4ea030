//! Game-state engine: validates and applies moves, evaluates the board.
//!
//! The engine is a set of pure functions over [`GameState`] values.
//! [`apply_move`] never touches its input; callers replace their state
//! with the returned value, which keeps rendering and persistence out of
//! the game logic entirely.

use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{check_winner, is_full};
use super::types::{Board, GameState, GameStatus, Player, Square};

/// Reasons a move is rejected.
///
/// Every variant is recoverable: the caller ignores the input and the
/// board stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Cell index outside 0-8.
    #[display("Cell {index} is out of range (must be 0-8)")]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// Target cell already holds a mark.
    #[display("Cell {index} is already occupied")]
    Occupied {
        /// The rejected index.
        index: usize,
    },
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// A player tried to move when it was the other player's turn.
    #[display("It is {expected}'s turn, not {attempted}'s")]
    OutOfTurn {
        /// Player whose turn it is.
        expected: Player,
        /// Player who attempted the move.
        attempted: Player,
    },
}

/// Evaluates the board.
///
/// Scans the eight lines (rows, columns, diagonal, anti-diagonal) and
/// returns `Won` for the first uniformly occupied one. A full board with
/// no such line is a `Draw`; anything else is `InProgress`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Returns a fresh game: empty board, X to move, in progress.
#[instrument]
pub fn reset() -> GameState {
    debug!("Resetting game state");
    GameState::new()
}

/// Places `player`'s mark at `index` and returns the resulting state.
///
/// # Errors
///
/// Returns [`InvalidMove`] if the game is over, the index is outside
/// 0-8, the cell is occupied, or it is not `player`'s turn. The input
/// state is left untouched in every case.
#[instrument(skip(state), fields(current_turn = %state.current_turn, status = ?state.status))]
pub fn apply_move(
    state: &GameState,
    index: usize,
    player: Player,
) -> Result<GameState, InvalidMove> {
    if state.status.is_terminal() {
        debug!("Rejecting move after game over");
        return Err(InvalidMove::GameOver);
    }

    if index >= Board::CELLS {
        debug!("Rejecting out-of-range move");
        return Err(InvalidMove::OutOfRange { index });
    }

    if !state.board.is_empty(index) {
        debug!("Rejecting move onto occupied cell");
        return Err(InvalidMove::Occupied { index });
    }

    if player != state.current_turn {
        debug!("Rejecting out-of-turn move");
        return Err(InvalidMove::OutOfTurn {
            expected: state.current_turn,
            attempted: player,
        });
    }

    let mut board = state.board.clone();
    board
        .set(index, Square::Occupied(player))
        .map_err(|_| InvalidMove::OutOfRange { index })?;

    let status = evaluate(&board);
    let next = GameState {
        board,
        current_turn: player.opponent(),
        status,
    };

    debug_assert!(
        GameInvariants::check_all(&next).is_ok(),
        "engine produced a state violating game invariants"
    );

    match status {
        GameStatus::Won(winner) => info!(%winner, "Game won"),
        GameStatus::Draw => info!("Game drawn"),
        GameStatus::InProgress => debug!(next = %next.current_turn, "Move applied"),
    }

    Ok(next)
}
