//! Bitboard implementation for stone sets

use super::{Pos, BOARD_SIZE, TOTAL_CELLS};

const WORDS: usize = 7;

/// Bitboard representation of a set of cells
/// Uses 7 x u64 to represent 400 cells (7 * 64 = 448 >= 400)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Mask of every cell in row 0, row 19, column 0 and column 19
    pub fn border() -> Self {
        let mut mask = Self::new();
        let last = BOARD_SIZE as u8 - 1;
        for i in 0..BOARD_SIZE as u8 {
            mask.set(Pos::new(0, i));
            mask.set(Pos::new(last, i));
            mask.set(Pos::new(i, 0));
            mask.set(Pos::new(i, last));
        }
        mask
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = pos.to_index();
        let word = idx / 64;
        let bit = idx % 64;
        self.bits[word] |= 1u64 << bit;
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = pos.to_index();
        let word = idx / 64;
        let bit = idx % 64;
        self.bits[word] &= !(1u64 << bit);
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = pos.to_index();
        let word = idx / 64;
        let bit = idx % 64;
        (self.bits[word] >> bit) & 1 == 1
    }

    /// Clear every bit that is set in `mask`
    #[inline]
    pub fn clear_mask(&mut self, mask: &Bitboard) {
        for (word, m) in self.bits.iter_mut().zip(mask.bits.iter()) {
            *word &= !m;
        }
    }

    /// True when the two sets share at least one cell
    #[inline]
    pub fn intersects(&self, other: &Bitboard) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Iterate over set bit positions
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        // Find next set bit
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;
        self.current_word &= self.current_word - 1;

        // Bits past cell 399 are never set
        if idx < TOTAL_CELLS {
            Some(Pos::from_index(idx))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_mask_size() {
        // 4 sides of 20 minus the 4 shared corners
        assert_eq!(Bitboard::border().count(), 76);
        assert!(Bitboard::border().get(Pos::new(0, 0)));
        assert!(Bitboard::border().get(Pos::new(19, 7)));
        assert!(!Bitboard::border().get(Pos::new(1, 1)));
    }

    #[test]
    fn test_clear_mask() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(0, 5));
        bb.set(Pos::new(5, 5));
        bb.set(Pos::new(19, 19));
        bb.clear_mask(&Bitboard::border());
        assert_eq!(bb.count(), 1);
        assert!(bb.get(Pos::new(5, 5)));
    }

    #[test]
    fn test_iter_ones_last_cell() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(19, 19));
        bb.set(Pos::new(0, 0));
        let cells: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(cells, vec![Pos::new(0, 0), Pos::new(19, 19)]);
    }
}
