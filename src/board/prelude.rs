//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use shogi_board::board::prelude::*;
//!
//! let pos = Position::try_from_sfen(STARTPOS_SFEN).unwrap();
//! assert_eq!(pos.side_to_move(), Side::Black);
//! ```

pub use super::{
    BoardError, DisplayOptions, KifMove, MoveRecord, Piece, PieceType, Position, SfenError, Side,
    Square, STARTPOS_SFEN,
};
