pub mod board;
pub mod sync;
mod zobrist;

pub use board::{BoardError, Piece, PieceType, Position, SfenError, Side, Square};
pub use sync::SharedPosition;
