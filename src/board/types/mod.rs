//! Core shogi types.
//!
//! - `PieceType`, `Side` and `Piece` - tagged piece values
//! - `Square` - (row, col) board coordinate

mod piece;
mod square;

pub use piece::{Piece, PieceType, Side};
pub use square::{Square, BOARD_SIZE};
