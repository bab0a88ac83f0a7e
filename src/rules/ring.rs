//! Ring detection
//!
//! A ring is an empty interior cell whose eight neighbours are all stones of
//! one color. Rings are never tracked incrementally: every move rescans the
//! whole board into a fresh [`Rings`] value.

use crate::board::{Board, Pos, Stone, INTERIOR_MAX, INTERIOR_MIN};

use super::footprint::{sample_footprint, SAMPLE_CENTER};

/// Ring centers per color, in row-major order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rings {
    pub black: Vec<Pos>,
    pub white: Vec<Pos>,
}

impl Rings {
    /// Ring centers of a color (empty slice for `Stone::Empty`)
    #[inline]
    pub fn of(&self, stone: Stone) -> &[Pos] {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
            Stone::Empty => &[],
        }
    }

    #[inline]
    pub fn count(&self, stone: Stone) -> usize {
        self.of(stone).len()
    }

    /// Is `pos` the center of a ring of either color
    pub fn contains(&self, pos: Pos) -> bool {
        self.black.contains(&pos) || self.white.contains(&pos)
    }
}

/// Color owning a ring centered on `center`, if any
pub fn ring_owner(board: &Board, center: Pos) -> Option<Stone> {
    let footprint = sample_footprint(board, center);
    if footprint[SAMPLE_CENTER] != Stone::Empty {
        return None;
    }
    let color = footprint[0];
    if color.is_stone() && footprint[..SAMPLE_CENTER].iter().all(|&s| s == color) {
        Some(color)
    } else {
        None
    }
}

/// Recount every ring on the board
pub fn rescan(board: &Board) -> Rings {
    let mut rings = Rings::default();
    for row in INTERIOR_MIN..=INTERIOR_MAX {
        for col in INTERIOR_MIN..=INTERIOR_MAX {
            let pos = Pos::new(row, col);
            match ring_owner(board, pos) {
                Some(Stone::Black) => rings.black.push(pos),
                Some(Stone::White) => rings.white.push(pos),
                _ => {}
            }
        }
    }
    rings
}
