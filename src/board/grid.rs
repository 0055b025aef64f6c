//! Generic square grid with bounds-checked access.
//!
//! `Grid` knows nothing about shogi; `Field` layers occupancy and promotion
//! rules on top of it.

use super::error::BoardError;
use super::types::Square;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T, const N: usize> {
    cells: [[T; N]; N],
}

impl<T: Copy + Default, const N: usize> Grid<T, N> {
    #[must_use]
    pub fn new() -> Self {
        Grid {
            cells: [[T::default(); N]; N],
        }
    }

    /// Build a grid from row-major cell data.
    #[must_use]
    pub const fn from_rows(cells: [[T; N]; N]) -> Self {
        Grid { cells }
    }

    #[inline]
    pub fn check(&self, sq: Square) -> Result<(), BoardError> {
        if sq.0 < N && sq.1 < N {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row: sq.0,
                col: sq.1,
            })
        }
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Result<T, BoardError> {
        self.check(sq)?;
        Ok(self.cells[sq.0][sq.1])
    }

    /// Overwrite a cell, returning its previous value.
    #[inline]
    pub fn set(&mut self, sq: Square, value: T) -> Result<T, BoardError> {
        self.check(sq)?;
        Ok(std::mem::replace(&mut self.cells[sq.0][sq.1], value))
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, T)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &value)| (Square(row, col), value))
        })
    }

    #[must_use]
    pub fn rows(&self) -> &[[T; N]; N] {
        &self.cells
    }
}

impl<T: Copy + Default, const N: usize> Default for Grid<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
