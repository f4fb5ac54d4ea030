//! Tic-tac-toe: board types, rules, the game-state engine and the bot.

mod bot;
mod engine;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use bot::select_move;
pub use engine::{InvalidMove, apply_move, evaluate, reset};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleWinnerInvariant, StatusMatchesBoardInvariant,
};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square};
