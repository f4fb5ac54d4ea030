//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines, in scan order: rows 0-2, columns 0-2,
/// the main diagonal, then the anti-diagonal.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first uniformly occupied line in [`LINES`]
/// order, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(player)
        }
        _ => None,
    })
}

/// Returns every player owning at least one complete line.
///
/// Reachable games have at most one; the result is used to check that.
pub fn line_owners(board: &Board) -> Vec<Player> {
    let squares = board.squares();
    let mut owners = Vec::new();
    for [a, b, c] in LINES {
        if let Square::Occupied(player) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
            && !owners.contains(&player)
        {
            owners.push(player);
        }
    }
    owners
}
