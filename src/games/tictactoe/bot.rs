//! Random-move bot.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use super::types::Board;

/// Picks a uniformly random empty cell.
///
/// Returns `None` on a full board. There is no look-ahead: the bot
/// neither blocks nor completes lines on purpose.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty = board.empty_indices();
    let choice = empty.choose(rng).copied();
    debug!(candidates = empty.len(), ?choice, "Bot chose cell");
    choice
}
