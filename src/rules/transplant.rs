//! Footprint transplantation
//!
//! Moving a piece copies all nine cells of the source footprint onto the
//! destination footprint, empty cells included, and leaves vacated source
//! cells empty. Stones already under the destination are overwritten.

use crate::board::{Board, Pos};

use super::footprint::{footprint_indices, Direction};

/// Relocate the footprint centered on `current` to `new`.
///
/// Both centers must be interior. Callers validate first; this only moves
/// cells and does not clear the border.
pub fn apply_move(board: &mut Board, current: Pos, new: Pos) {
    let Some(dir) = Direction::between(current, new) else {
        return;
    };
    let dr = new.row as i32 - current.row as i32;
    let dc = new.col as i32 - current.col as i32;
    let source = footprint_indices(current);

    // The sweep depends only on the sign of the deltas, so any offset moves
    // its far edge first
    for idx in dir.sweep().order() {
        let src = source[idx];
        let dst = Pos::new((src.row as i32 + dr) as u8, (src.col as i32 + dc) as u8);
        board.relocate(src, dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::rules::footprint::{sample_footprint, INDEX_CENTER};

    fn p(s: &str) -> Pos {
        s.parse().unwrap()
    }

    /// A lopsided pattern so every cell is distinguishable
    fn pattern_board(center: Pos) -> (Board, [Stone; 9]) {
        let mut board = Board::new();
        let cells = footprint_indices(center);
        let pattern = [
            Stone::Black,
            Stone::Empty,
            Stone::White,
            Stone::White,
            Stone::Black,
            Stone::Empty,
            Stone::Black,
            Stone::Black,
            Stone::Empty,
        ];
        for (pos, stone) in cells.iter().zip(pattern) {
            board.set(*pos, stone);
        }
        (board, pattern)
    }

    #[test]
    fn test_overlapping_moves_preserve_footprint() {
        let center = p("J10");
        for dir in Direction::ALL {
            for dist in 1..=3 {
                let (dr, dc) = dir.delta();
                let target = center.offset(dr * dist, dc * dist).unwrap();
                let (mut board, pattern) = pattern_board(center);
                apply_move(&mut board, center, target);

                for (pos, expected) in footprint_indices(target).iter().zip(pattern) {
                    assert_eq!(board.get(*pos), expected, "{:?} x{} at {}", dir, dist, pos);
                }
                let moved: usize = pattern.iter().filter(|s| s.is_stone()).count();
                let total = board.stone_count(Stone::Black) + board.stone_count(Stone::White);
                assert_eq!(total as usize, moved, "{:?} x{} left stones behind", dir, dist);
            }
        }
    }

    #[test]
    fn test_destination_stones_overwritten() {
        let (mut board, _) = pattern_board(p("J10"));
        // Stone under an empty cell of the moving piece is captured
        board.set(p("J14"), Stone::White);
        board.set(p("K14"), Stone::Black);
        apply_move(&mut board, p("J10"), p("J13"));
        // J14 receives the source S cell (J11), which is empty
        assert_eq!(board.get(p("J14")), Stone::Empty);
        // K14 receives the source SE cell (K11), which is white
        assert_eq!(board.get(p("K14")), Stone::White);
    }

    #[test]
    fn test_vacated_cells_cleared() {
        let (mut board, _) = pattern_board(p("J10"));
        apply_move(&mut board, p("J10"), p("J15"));
        for pos in footprint_indices(p("J10")) {
            assert!(board.is_empty(pos), "{} not cleared", pos);
        }
    }

    #[test]
    fn test_opening_piece_transplant() {
        let mut board = Board::starting();
        let before = sample_footprint(&board, p("C3"));
        apply_move(&mut board, p("C3"), p("C6"));
        assert_eq!(sample_footprint(&board, p("C6")), before);
        assert!(board.is_empty(p("C2")));
        assert!(board.is_empty(p("B3")));
        // C4 was the piece's south stone and is now vacated
        assert!(board.is_empty(p("C4")));
        assert_eq!(footprint_indices(p("C6"))[INDEX_CENTER], p("C6"));
    }

    #[test]
    fn test_noop_leaves_board() {
        let (mut board, _) = pattern_board(p("J10"));
        let copy = board.clone();
        apply_move(&mut board, p("J10"), p("J10"));
        assert_eq!(board, copy);
    }
}
