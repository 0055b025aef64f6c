//! Records of applied moves.
//!
//! A `MoveRecord` carries everything needed to take the move back and to
//! print it again in KIF or USI notation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Piece, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveRecord {
    Normal {
        from: Square,
        to: Square,
        /// The moving piece as it stood on `from`.
        piece: Piece,
        /// The captured piece as it stood on `to`, promotion included.
        captured: Option<Piece>,
        promoted: bool,
    },
    Drop {
        to: Square,
        piece: Piece,
    },
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        match *self {
            MoveRecord::Normal { to, .. } | MoveRecord::Drop { to, .. } => to,
        }
    }

    /// The piece that moved or was dropped.
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        match *self {
            MoveRecord::Normal { piece, .. } | MoveRecord::Drop { piece, .. } => piece,
        }
    }

    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        match *self {
            MoveRecord::Normal { captured, .. } => captured,
            MoveRecord::Drop { .. } => None,
        }
    }

    /// USI move text: `7g7f`, `8h2b+`, `P*5e`.
    #[must_use]
    pub fn to_usi(&self) -> String {
        match *self {
            MoveRecord::Normal {
                from, to, promoted, ..
            } => format!("{from}{to}{}", if promoted { "+" } else { "" }),
            MoveRecord::Drop { to, piece } => {
                format!("{}*{to}", piece.piece_type.to_char().to_ascii_uppercase())
            }
        }
    }

    /// KIF move text, e.g. `７六歩(77)`, `同　銀成(34)`, `５五角打`.
    ///
    /// `previous` is the destination of the move before this one; when it
    /// matches, the destination is written as `同　`.
    #[must_use]
    pub fn to_kif(&self, previous: Option<Square>) -> String {
        match *self {
            MoveRecord::Normal {
                from,
                to,
                piece,
                promoted,
                ..
            } => {
                let dest = if previous == Some(to) {
                    "同　".to_string()
                } else {
                    to.to_kif()
                };
                let promote = if promoted { "成" } else { "" };
                format!(
                    "{dest}{}{promote}({}{})",
                    piece.piece_type.kif_name(),
                    from.file(),
                    from.rank()
                )
            }
            MoveRecord::Drop { to, piece } => {
                format!("{}{}打", to.to_kif(), piece.piece_type.kif_name())
            }
        }
    }
}
