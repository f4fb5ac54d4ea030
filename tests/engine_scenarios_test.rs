//! Scenario tests for the game-state engine, bot and stats.

use rand::SeedableRng;
use rand::rngs::StdRng;

use tic_tac_theme::{
    Board, GameMode, GameSession, GameState, GameStatus, InvalidMove, MemoryStore, Outcome,
    Player, Square, StatsStore, apply_move, evaluate, reset, select_move,
};

/// Plays `(cell, player)` pairs from a fresh game, panicking on rejection.
fn play(moves: &[(usize, Player)]) -> GameState {
    moves.iter().fold(reset(), |state, &(cell, player)| {
        apply_move(&state, cell, player).expect("Move rejected")
    })
}

#[test]
fn test_top_row_win() {
    let state = play(&[
        (0, Player::X),
        (4, Player::O),
        (1, Player::X),
        (5, Player::O),
        (2, Player::X),
    ]);
    assert_eq!(evaluate(state.board()), GameStatus::Won(Player::X));
    assert_eq!(state.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_top_row_win_counts_x_win() {
    let mut session = GameSession::new(GameMode::PlayerVsPlayer, MemoryStore::new());
    for cell in [0, 4, 1, 5, 2] {
        session.on_cell_tapped(cell).expect("Move rejected");
    }
    assert_eq!(*session.stats().x_wins(), 1);
    assert_eq!(*session.store().load_stats().x_wins(), 1);
}

#[test]
fn test_full_board_draw() {
    let state = play(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (4, Player::O),
        (3, Player::X),
        (5, Player::O),
        (7, Player::X),
        (6, Player::O),
        (8, Player::X),
    ]);
    assert_eq!(state.status(), GameStatus::Draw);
    assert!(state.board().empty_indices().is_empty());
}

#[test]
fn test_full_board_draw_counts_draw() {
    let mut session = GameSession::new(GameMode::PlayerVsPlayer, MemoryStore::new());
    for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.on_cell_tapped(cell).expect("Move rejected");
    }
    assert_eq!(*session.stats().draws(), 1);
    assert_eq!(session.stats().total_games(), 1);
}

#[test]
fn test_main_diagonal_win() {
    let state = play(&[
        (0, Player::X),
        (1, Player::O),
        (4, Player::X),
        (2, Player::O),
        (8, Player::X),
    ]);
    assert_eq!(state.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_o_wins_column() {
    let state = play(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (4, Player::O),
        (3, Player::X),
        (7, Player::O),
    ]);
    assert_eq!(state.status(), GameStatus::Won(Player::O));
    assert_eq!(Outcome::from_status(state.status()), Some(Outcome::OWin));
}

#[test]
fn test_bot_takes_last_cell() {
    let mut squares = [Square::Occupied(Player::X); 9];
    squares[1] = Square::Occupied(Player::O);
    squares[8] = Square::Empty;
    let board = Board::from_squares(squares);

    for seed in [0, 1, 2, 99, 12345] {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(select_move(&board, &mut rng), Some(8));
    }
}

#[test]
fn test_no_moves_after_terminal_state() {
    let state = play(&[
        (0, Player::X),
        (1, Player::O),
        (4, Player::X),
        (2, Player::O),
        (8, Player::X),
    ]);
    for cell in [3, 5, 6, 7] {
        assert_eq!(apply_move(&state, cell, Player::O), Err(InvalidMove::GameOver));
    }
}

#[test]
fn test_reset_returns_initial_state() {
    let state = reset();
    assert!(state.board().squares().iter().all(|sq| *sq == Square::Empty));
    assert_eq!(state.current_turn(), Player::X);
    assert_eq!(state.status(), GameStatus::InProgress);
}

#[test]
fn test_session_reset_after_win() {
    let mut session = GameSession::new(GameMode::PlayerVsPlayer, MemoryStore::new());
    for cell in [0, 4, 1, 5, 2] {
        session.on_cell_tapped(cell).expect("Move rejected");
    }
    session.on_reset_tapped();
    assert_eq!(session.state(), &reset());
    session.on_cell_tapped(0).expect("Move rejected after reset");
}

#[test]
fn test_bot_plays_o_only_in_bot_mode() {
    let mut session = GameSession::with_rng(
        GameMode::PlayerVsBot,
        MemoryStore::new(),
        StdRng::seed_from_u64(5),
    );
    let report = session.on_cell_tapped(0).expect("Move rejected");
    let bot = report.bot_move().expect("Bot did not move");
    assert_eq!(
        session.state().board().get(bot),
        Some(Square::Occupied(Player::O))
    );

    session.on_mode_selected(GameMode::PlayerVsPlayer);
    let report = session.on_cell_tapped(0).expect("Move rejected");
    assert_eq!(*report.bot_move(), None);
    assert_eq!(session.state().current_turn(), Player::O);
}
