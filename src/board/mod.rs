//! Board representation for Gess

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use crate::rules::MoveError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (20x20, including the one-cell border)
pub const BOARD_SIZE: usize = 20;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 400

/// First and last interior row/column index
pub const INTERIOR_MIN: u8 = 1;
pub const INTERIOR_MAX: u8 = BOARD_SIZE as u8 - 2;

/// Column letters A-T, indexed by column
pub const FILE_LABELS: [char; BOARD_SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T',
];

/// Cell contents, also used for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_stone(self) -> bool {
        self != Stone::Empty
    }

    /// Single-character symbol used by the text renderer
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// Position on the board. Row 0 is rank 1, column 0 is file A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// True for cells a piece center may occupy (files B-S, ranks 2-19)
    #[inline]
    pub fn is_interior(self) -> bool {
        (INTERIOR_MIN..=INTERIOR_MAX).contains(&self.row)
            && (INTERIOR_MIN..=INTERIOR_MAX).contains(&self.col)
    }

    #[inline]
    pub fn is_border(self) -> bool {
        !self.is_interior()
    }

    /// Offset by a signed delta, `None` when it leaves the grid
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// File letter (A-T)
    #[inline]
    pub fn file(self) -> char {
        FILE_LABELS[self.col as usize]
    }

    /// Rank number (1-20)
    #[inline]
    pub fn rank(self) -> u8 {
        self.row + 1
    }

    /// Chebyshev distance to another position
    #[inline]
    pub fn distance(self, other: Pos) -> u8 {
        let dr = (self.row as i32 - other.row as i32).unsigned_abs();
        let dc = (self.col as i32 - other.col as i32).unsigned_abs();
        dr.max(dc) as u8
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Parses "C4"-style notation. Any cell of the grid parses, border included;
/// move validation decides whether the cell is playable.
impl FromStr for Pos {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveError::InvalidCoordinate(s.to_string());
        let text = s.trim();
        let mut chars = text.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        let col = FILE_LABELS
            .iter()
            .position(|&c| c == letter)
            .ok_or_else(invalid)?;
        let rank: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        if rank == 0 || rank as usize > BOARD_SIZE {
            return Err(invalid());
        }
        Ok(Pos::new(rank - 1, col as u8))
    }
}
