//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    fn board_from(marks: [char; 9]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks.into_iter().enumerate() {
            let square = match mark {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            board.set(pos, square).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(['.', '.', '.', '.', 'X', '.', '.', '.', '.']);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from(['X', 'O', 'X', 'O', 'X', 'X', 'O', 'X', 'O']);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X completed the top row.
        let board = board_from(['X', 'X', 'X', 'O', 'O', 'X', 'X', 'O', 'O']);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
