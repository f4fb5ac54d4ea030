//! Keyboard mapping for the board view.

use crate::games::tictactoe::Position;
use crate::session::GameMode;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    MoveCursor(Position),
    /// Tap a cell.
    Tap(usize),
    /// Start a new game.
    Reset,
    /// Select a mode (also starts a new game).
    SelectMode(GameMode),
    /// Flip light/dark theme.
    ToggleTheme,
    /// Leave the app.
    Quit,
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps a key to a command, given the cursor position.
pub fn command_for(cursor: Position, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::MoveCursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Tap(cursor.to_index())),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Command::Tap(digit as usize - 1)),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('b') => Some(Command::SelectMode(GameMode::PlayerVsBot)),
        KeyCode::Char('f') => Some(Command::SelectMode(GameMode::PlayerVsPlayer)),
        KeyCode::Char('t') => Some(Command::ToggleTheme),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
