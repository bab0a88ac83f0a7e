//! Footprint geometry: the 3x3 block around a piece center
//!
//! Two orderings are used and neither may be reordered:
//! - [`sample_footprint`] returns contents as `[NW, N, NE, E, SE, S, SW, W, Center]`;
//!   [`Direction::sample_slot`] indexes into it.
//! - [`footprint_indices`] returns positions as `[SW, S, SE, W, Center, E, NW, N, NE]`;
//!   the transplant sweep and the last-ring overlap test walk it by index, so
//!   equal indices in two lists mean the same offset from each center.
//!
//! North is towards rank 1 (decreasing row index).

use crate::board::{Board, Pos, Stone};

/// Slot of the center cell in [`sample_footprint`]
pub const SAMPLE_CENTER: usize = 8;
/// Slot of the center cell in [`footprint_indices`]
pub const INDEX_CENTER: usize = 4;

/// Row/column offsets in [`footprint_indices`] order
const INDEX_OFFSETS: [(i32, i32); 9] = [
    (1, -1),  // SW
    (1, 0),   // S
    (1, 1),   // SE
    (0, -1),  // W
    (0, 0),   // Center
    (0, 1),   // E
    (-1, -1), // NW
    (-1, 0),  // N
    (-1, 1),  // NE
];

/// Row/column offsets in [`sample_footprint`] order
const SAMPLE_OFFSETS: [(i32, i32); 9] = [
    (-1, -1), // NW
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
    (0, -1),  // W
    (0, 0),   // Center
];

/// Order in which the nine footprint cells are relocated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Index 0 to 8: southern row first, west to east within a row
    Forward,
    /// Index 8 to 0: northern row first, east to west within a row
    Reverse,
}

impl Sweep {
    /// Footprint indices in sweep order
    pub fn order(self) -> [usize; 9] {
        match self {
            Sweep::Forward => [0, 1, 2, 3, 4, 5, 6, 7, 8],
            Sweep::Reverse => [8, 7, 6, 5, 4, 3, 2, 1, 0],
        }
    }
}

/// The eight movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Direction from `from` towards `to` by sign of the deltas.
    /// Returns `None` when the positions are equal.
    pub fn between(from: Pos, to: Pos) -> Option<Direction> {
        let dr = (to.row as i32 - from.row as i32).signum();
        let dc = (to.col as i32 - from.col as i32).signum();
        match (dr, dc) {
            (-1, -1) => Some(Direction::NW),
            (-1, 0) => Some(Direction::N),
            (-1, 1) => Some(Direction::NE),
            (0, 1) => Some(Direction::E),
            (1, 1) => Some(Direction::SE),
            (1, 0) => Some(Direction::S),
            (1, -1) => Some(Direction::SW),
            (0, -1) => Some(Direction::W),
            _ => None,
        }
    }

    /// Unit (row, col) step
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }

    /// Slot of this direction in [`sample_footprint`] output
    #[inline]
    pub fn sample_slot(self) -> usize {
        match self {
            Direction::NW => 0,
            Direction::N => 1,
            Direction::NE => 2,
            Direction::E => 3,
            Direction::SE => 4,
            Direction::S => 5,
            Direction::SW => 6,
            Direction::W => 7,
        }
    }

    /// Relocation order that reads every source cell before it is written.
    ///
    /// Each relocated cell lands further along the direction of travel, so the
    /// cells furthest along must move first.
    pub fn sweep(self) -> Sweep {
        match self {
            Direction::S | Direction::SE | Direction::SW | Direction::W => Sweep::Forward,
            Direction::N | Direction::NE | Direction::NW | Direction::E => Sweep::Reverse,
        }
    }
}

/// Contents of the footprint around `center` as `[NW, N, NE, E, SE, S, SW, W, Center]`.
///
/// `center` must be an interior cell.
pub fn sample_footprint(board: &Board, center: Pos) -> [Stone; 9] {
    debug_assert!(center.is_interior());
    let mut out = [Stone::Empty; 9];
    for (slot, &(dr, dc)) in SAMPLE_OFFSETS.iter().enumerate() {
        if let Some(pos) = center.offset(dr, dc) {
            out[slot] = board.get(pos);
        }
    }
    out
}

/// Positions of the footprint around `center` as `[SW, S, SE, W, Center, E, NW, N, NE]`.
///
/// `center` must be an interior cell, which keeps every position on the grid.
pub fn footprint_indices(center: Pos) -> [Pos; 9] {
    debug_assert!(center.is_interior());
    INDEX_OFFSETS.map(|(dr, dc)| {
        Pos::new(
            (center.row as i32 + dr) as u8,
            (center.col as i32 + dc) as u8,
        )
    })
}

/// The stone in `current`'s footprint slot facing `new`, `Stone::Empty` if
/// there is none or the positions coincide.
pub fn direction_towards(board: &Board, current: Pos, new: Pos) -> Stone {
    match Direction::between(current, new) {
        Some(dir) => sample_footprint(board, current)[dir.sample_slot()],
        None => Stone::Empty,
    }
}
