use super::*;

fn p(s: &str) -> Pos {
    s.parse().unwrap()
}

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 20);
    assert_eq!(TOTAL_CELLS, 400);
    assert_eq!(INTERIOR_MIN, 1);
    assert_eq!(INTERIOR_MAX, 18);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(9, 9);
    assert_eq!(pos.to_index(), 189);
    assert_eq!(Pos::from_index(189), pos);
    assert_eq!(Pos::new(19, 19).to_index(), 399);
}

#[test]
fn test_notation_parse() {
    assert_eq!(p("A1"), Pos::new(0, 0));
    assert_eq!(p("C4"), Pos::new(3, 2));
    assert_eq!(p("l12"), Pos::new(11, 11));
    assert_eq!(p("T20"), Pos::new(19, 19));
}

#[test]
fn test_notation_rejects_garbage() {
    for bad in ["", "C", "4C", "U5", "C0", "C21", "CC4", "C-1"] {
        assert!(
            matches!(bad.parse::<Pos>(), Err(MoveError::InvalidCoordinate(_))),
            "{:?} should not parse",
            bad
        );
    }
}

#[test]
fn test_notation_display() {
    assert_eq!(Pos::new(2, 11).to_string(), "L3");
    assert_eq!(Pos::new(17, 11).to_string(), "L18");
    assert_eq!(p("S19").to_string(), "S19");
}

#[test]
fn test_interior() {
    assert!(p("B2").is_interior());
    assert!(p("S19").is_interior());
    assert!(p("A5").is_border());
    assert!(p("T5").is_border());
    assert!(p("C1").is_border());
    assert!(p("C20").is_border());
}

#[test]
fn test_pos_offset_and_distance() {
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(5, 5).offset(-2, 3), Some(Pos::new(3, 8)));
    assert_eq!(p("C3").distance(p("C6")), 3);
    assert_eq!(p("C3").distance(p("F7")), 4);
}

#[test]
fn test_starting_layout_counts() {
    let board = Board::starting();
    // 12 + 13 + 12 + 6 per side
    assert_eq!(board.stone_count(Stone::Black), 43);
    assert_eq!(board.stone_count(Stone::White), 43);
    assert!(board.border_is_clear());
}

#[test]
fn test_starting_layout_cells() {
    let board = Board::starting();
    for s in ["C2", "R2", "B3", "S3", "K3", "M3", "L4", "C7", "R7"] {
        assert_eq!(board.get(p(s)), Stone::Black, "{}", s);
    }
    for s in ["C19", "R19", "B18", "S18", "K18", "M18", "L17", "C14", "R14"] {
        assert_eq!(board.get(p(s)), Stone::White, "{}", s);
    }
    for s in ["L3", "L18", "D2", "E3", "G3", "C5", "K10"] {
        assert_eq!(board.get(p(s)), Stone::Empty, "{}", s);
    }
}

#[test]
fn test_set_overwrites() {
    let mut board = Board::new();
    let pos = Pos::new(4, 4);
    board.set(pos, Stone::Black);
    board.set(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(Stone::Black), 0);
    board.set(pos, Stone::Empty);
    assert!(board.is_empty(pos));
}

#[test]
fn test_relocate() {
    let mut board = Board::new();
    board.set(Pos::new(4, 4), Stone::Black);
    board.set(Pos::new(4, 5), Stone::White);
    board.relocate(Pos::new(4, 4), Pos::new(4, 5));
    assert_eq!(board.get(Pos::new(4, 5)), Stone::Black);
    assert!(board.is_empty(Pos::new(4, 4)));

    // Relocating an empty cell clears the destination
    board.relocate(Pos::new(4, 4), Pos::new(4, 5));
    assert!(board.is_empty(Pos::new(4, 5)));
}

#[test]
fn test_clear_border() {
    let mut board = Board::new();
    board.set(Pos::new(0, 7), Stone::Black);
    board.set(Pos::new(12, 19), Stone::White);
    board.set(Pos::new(19, 0), Stone::White);
    board.set(Pos::new(1, 1), Stone::Black);
    assert!(!board.border_is_clear());

    board.clear_border();
    assert!(board.border_is_clear());
    assert_eq!(board.get(Pos::new(1, 1)), Stone::Black);
    assert_eq!(board.stone_count(Stone::Black), 1);
    assert_eq!(board.stone_count(Stone::White), 0);
}

#[test]
fn test_positions_by_color() {
    let mut board = Board::new();
    board.set(Pos::new(19, 19), Stone::Black);
    board.set(Pos::new(3, 4), Stone::Black);
    board.set(Pos::new(0, 0), Stone::White);
    assert_eq!(
        board.positions(Stone::Black).collect::<Vec<_>>(),
        vec![Pos::new(3, 4), Pos::new(19, 19)]
    );
    assert_eq!(board.positions(Stone::White).collect::<Vec<_>>(), vec![Pos::new(0, 0)]);
    assert_eq!(board.positions(Stone::Empty).count(), 0);

    let starting = Board::starting();
    assert_eq!(starting.positions(Stone::White).count(), 43);
    assert!(starting.positions(Stone::Black).all(|pos| starting.get(pos) == Stone::Black));
}

#[test]
fn test_display_rows() {
    let text = Board::starting().to_string();
    let lines: Vec<&str> = text.lines().collect();
    // Header, 20 ranks, footer
    assert_eq!(lines.len(), 22);
    assert!(lines[1].starts_with("20"));
    assert!(lines[20].starts_with(" 1"));
}
