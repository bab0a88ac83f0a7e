//! Board structure with the Gess starting layout

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, FILE_LABELS};

/// Files of the two solid belts (ranks 2 and 4 for Black)
const BELT_FILES: &str = "CEGHIJKLMNPR";
/// Files of the middle rank (rank 3 for Black); the gap at L is the ring
const MIDDLE_FILES: &str = "BCDFHIJKMOQRS";
/// Files of the forward rank (rank 7 for Black)
const FORWARD_FILES: &str = "CFILOR";

/// Game board: one bitboard per color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Canonical Gess opening position
    pub fn starting() -> Self {
        let mut board = Self::new();
        // (rank, files) for Black; White mirrors onto rank 21 - rank
        let rows: [(u8, &str); 4] = [
            (2, BELT_FILES),
            (3, MIDDLE_FILES),
            (4, BELT_FILES),
            (7, FORWARD_FILES),
        ];
        for (rank, files) in rows {
            for file in files.chars() {
                // Layout tables only use letters from FILE_LABELS
                let col = FILE_LABELS.iter().position(|&c| c == file).unwrap_or(0) as u8;
                board.set(Pos::new(rank - 1, col), Stone::Black);
                board.set(Pos::new(BOARD_SIZE as u8 - rank, col), Stone::White);
            }
        }
        board
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Overwrite a cell; `Stone::Empty` clears it
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        self.black.clear(pos);
        self.white.clear(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Copy `src` onto `dst`, then clear `src`.
    ///
    /// When `src == dst` the cell ends up empty, matching the copy-then-clear
    /// order; the transplant never relocates a cell onto itself.
    #[inline]
    pub fn relocate(&mut self, src: Pos, dst: Pos) {
        let stone = self.get(src);
        self.set(dst, stone);
        self.set(src, Stone::Empty);
    }

    /// Remove every stone on row 0, row 19, column 0 and column 19
    pub fn clear_border(&mut self) {
        let border = Bitboard::border();
        self.black.clear_mask(&border);
        self.white.clear_mask(&border);
    }

    /// True when no stone sits on the border
    pub fn border_is_clear(&self) -> bool {
        let border = Bitboard::border();
        !self.black.intersects(&border) && !self.white.intersects(&border)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Occupied cells of a color, in index order
    pub fn positions(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.stones(stone).into_iter().flat_map(Bitboard::iter_ones)
    }

    /// Number of stones of a color
    #[inline]
    pub fn stone_count(&self, stone: Stone) -> u32 {
        self.stones(stone).map_or(0, Bitboard::count)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// ASCII diagram, rank 20 at the top, files A-T left to right
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: String = FILE_LABELS.iter().map(|c| format!(" {}", c)).collect();
        writeln!(f, "   {}", labels)?;
        for row in (0..BOARD_SIZE as u8).rev() {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..BOARD_SIZE as u8 {
                write!(f, " {}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f, "  {}", row + 1)?;
        }
        write!(f, "   {}", labels)
    }
}
