//! Shogi board representation.
//!
//! A [`Position`] owns the 9x9 [`Field`], one [`Stand`] per side and the
//! move history. Positions are built from SFEN and advanced with board
//! moves, drops and KIF notation.
//!
//! # Example
//! ```
//! use shogi_board::board::{Position, Side};
//!
//! let mut pos = Position::new();
//! pos.apply_kif("７六歩(77)").unwrap();
//! assert_eq!(pos.side_to_move(), Side::White);
//! ```

pub mod codec;
mod display;
mod error;
mod field;
mod grid;
pub mod kif;
pub mod prelude;
mod position;
mod record;
mod sfen;
mod stand;
mod types;

#[cfg(test)]
mod tests;

pub use display::DisplayOptions;
pub use error::{BoardError, SfenError};
pub use field::Field;
pub use grid::Grid;
pub use kif::{KifDestination, KifMove};
pub use position::Position;
pub use record::MoveRecord;
pub use sfen::STARTPOS_SFEN;
pub use stand::Stand;
pub use types::{Piece, PieceType, Side, Square, BOARD_SIZE};
