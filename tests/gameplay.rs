//! Whole-game behaviour through the public API

use gess::rules::footprint_indices;
use gess::{Board, Game, GameState, MoveError, Pos, Stone};

fn p(s: &str) -> Pos {
    s.parse().unwrap()
}

fn ring_at(board: &mut Board, center: &str, stone: Stone) {
    for pos in footprint_indices(p(center)) {
        if pos != p(center) {
            board.set(pos, stone);
        }
    }
}

/// Black ring on E5, White ring on J12, and a two-stone Black piece on J8
/// pointing south at the White ring
fn attack_position() -> Game {
    let mut board = Board::new();
    ring_at(&mut board, "E5", Stone::Black);
    ring_at(&mut board, "J12", Stone::White);
    board.set(p("J8"), Stone::Black);
    board.set(p("J9"), Stone::Black);
    Game::from_position(board, Stone::Black)
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new();
    assert_eq!(game.make_move("C3", "C6"), Ok(GameState::InProgress));
    assert_eq!(game.turn(), Stone::White);
    assert_eq!(game.make_move("C18", "C15"), Ok(GameState::InProgress));
    assert_eq!(game.turn(), Stone::Black);
    assert_eq!(game.history(), &[(p("C3"), p("C6")), (p("C18"), p("C15"))]);
}

#[test]
fn test_rejected_moves_change_nothing() {
    let mut game = Game::new();
    let before = game.clone();

    let attempts = [
        ("C3", "C3", MoveError::NoOp),
        ("O3", "N3", MoveError::NoStoneInDirection),
        ("A3", "C3", MoveError::OutOfBounds(p("A3"))),
        ("C3", "C20", MoveError::OutOfBounds(p("C20"))),
        ("E3", "E8", MoveError::TooFar { distance: 5 }),
        ("N3", "M3", MoveError::LastRing),
        ("L3", "L2", MoveError::LastRing),
        ("C18", "C15", MoveError::ForeignStone),
    ];
    for (from, to, expected) in attempts {
        assert_eq!(game.make_move(from, to), Err(expected), "{}-{}", from, to);
        assert_eq!(game, before, "{}-{} mutated the game", from, to);
    }
}

#[test]
fn test_uncentered_range_limit() {
    let mut game = Game::new();
    // E3 has no center stone: five ranks is too far even though the
    // shorter move along the same file is open
    assert_eq!(
        game.make_move("E3", "E8"),
        Err(MoveError::TooFar { distance: 5 })
    );
    assert_eq!(game.make_move("E3", "E6"), Ok(GameState::InProgress));
}

#[test]
fn test_border_stones_removed() {
    let mut game = Game::new();
    let black_before = game.board().stone_count(Stone::Black);
    // The west column of B3's new footprint lies on file A
    assert_eq!(game.make_move("C3", "B3"), Ok(GameState::InProgress));
    assert!(game.board().border_is_clear());
    assert_eq!(game.board().stone_count(Stone::Black), black_before - 1);
    assert_eq!(game.rings().count(Stone::Black), 1);
}

#[test]
fn test_breaking_last_ring_ends_game() {
    let mut game = attack_position();
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.rings().white, vec![p("J12")]);

    // Rank 11 of the White ring lies in the path of the longer move
    assert_eq!(game.make_move("J8", "J11"), Err(MoveError::PathBlocked));

    // Landing on J10 overwrites rank 11 with the piece's south row
    assert_eq!(game.make_move("J8", "J10"), Ok(GameState::BlackWon));
    assert_eq!(game.rings().count(Stone::White), 0);
    assert_eq!(game.rings().black, vec![p("E5")]);
    assert_eq!(game.board().get(p("J11")), Stone::Black);
    assert!(game.board().is_empty(p("I11")));
    assert!(game.board().is_empty(p("K11")));
    assert_eq!(game.turn(), Stone::White);

    let after = game.clone();
    assert_eq!(
        game.make_move("I12", "I15"),
        Err(MoveError::GameOver(GameState::BlackWon))
    );
    assert_eq!(game, after);
}

#[test]
fn test_mover_wins_when_both_sides_lose_last_ring() {
    let mut board = Board::new();
    ring_at(&mut board, "E5", Stone::Black);
    ring_at(&mut board, "G5", Stone::Black);
    ring_at(&mut board, "F14", Stone::White);
    let mut game = Game::from_position(board, Stone::Black);
    assert_eq!(game.rings().count(Stone::Black), 2);

    // The F5 piece holds the shared file of both Black rings and lands its
    // south row on rank 13 of the White ring
    assert_eq!(game.make_move("F5", "F12"), Ok(GameState::BlackWon));
    assert_eq!(game.rings().count(Stone::Black), 0);
    assert_eq!(game.rings().count(Stone::White), 0);
    assert_eq!(game.state().winner(), Some(Stone::Black));
}

#[test]
fn test_resignation() {
    let mut game = Game::new();
    game.make_move("C3", "C6").unwrap();
    game.resign();
    assert_eq!(game.state(), GameState::BlackWon);
    assert_eq!(
        game.make_move("C18", "C15"),
        Err(MoveError::GameOver(GameState::BlackWon))
    );
}

#[test]
fn test_board_render_after_move() {
    let mut game = Game::new();
    game.make_move("C3", "C6").unwrap();
    let text = game.board().to_string();
    let rank6 = text
        .lines()
        .find(|line| line.trim_start().starts_with("6 "))
        .unwrap();
    assert!(rank6.contains('X'));
    assert_eq!(text.lines().count(), 22);
}
