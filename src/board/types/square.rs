//! Square type and coordinate conversions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::codec::{file_glyph, rank_kanji};
use crate::board::error::BoardError;

/// Number of files and ranks on a standard board.
pub const BOARD_SIZE: usize = 9;

/// A square on the shogi board, represented as (row, col).
///
/// Row 0 is the first player's far rank (SFEN rank `a`, KIF rank 一) and
/// col 0 is KIF file ９, so the board reads left to right exactly as an SFEN
/// rank string does. Bounds are checked by the grid, not by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Create a square from 1-based KIF file and rank numbers.
    ///
    /// File 1 is the rightmost column from the first player's view, so
    /// `from_kif(7, 7)` is `Square(6, 2)`.
    #[must_use]
    pub fn from_kif(file: u8, rank: u8) -> Option<Self> {
        if !(1..=9).contains(&file) || !(1..=9).contains(&rank) {
            return None;
        }
        Some(Square(rank as usize - 1, BOARD_SIZE - file as usize))
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    /// 1-based KIF file number (9 on the left, 1 on the right). 0 for a
    /// column off the board.
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        if self.1 < BOARD_SIZE {
            (BOARD_SIZE - self.1) as u8
        } else {
            0
        }
    }

    /// 1-based KIF rank number. 0 for a row off the board.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        if self.0 < BOARD_SIZE {
            (self.0 + 1) as u8
        } else {
            0
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    /// Format the square as a KIF destination, e.g. `７六`. Empty for a
    /// square off the board.
    #[must_use]
    pub fn to_kif(self) -> String {
        let mut out = String::new();
        if !self.is_valid() {
            return out;
        }
        if let Some(c) = file_glyph(self.file()) {
            out.push(c);
        }
        if let Some(c) = rank_kanji(self.rank()) {
            out.push(c);
        }
        out
    }
}

/// USI style: file digit followed by rank letter, e.g. `7g`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", self.file(), (b'a' + self.0 as u8) as char)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(BoardError::OutOfBounds { row, col })
    }
}
