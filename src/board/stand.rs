//! Captured-piece reserve ("piece stand") for one side.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::codec::symbol_to_piece;
use super::error::{BoardError, SfenError};
use super::types::{PieceType, Side};

/// SFEN lists stand pieces from the most to the least valuable.
const SFEN_ORDER: [PieceType; 7] = [
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
    PieceType::Pawn,
];

/// Counts of captured pieces, indexed by unpromoted kind.
///
/// A stand has no owner of its own: the `Position` holding it decides which
/// side it belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stand {
    counts: [u32; 7],
}

impl Stand {
    #[must_use]
    pub fn new() -> Self {
        Stand::default()
    }

    /// Number of pieces of `kind` held. Promoted kinds resolve to their base
    /// kind; the king is never held.
    #[must_use]
    pub fn count(&self, kind: PieceType) -> u32 {
        kind.unpromoted()
            .hand_index()
            .map_or(0, |idx| self.counts[idx])
    }

    /// Credit `n` pieces of `kind`, reverted to its unpromoted form.
    pub fn add(&mut self, kind: PieceType, n: u32) -> Result<(), BoardError> {
        let idx = kind
            .unpromoted()
            .hand_index()
            .ok_or(BoardError::NotHandPiece { piece_type: kind })?;
        self.counts[idx] = self.counts[idx].saturating_add(n);
        Ok(())
    }

    /// Remove `n` pieces of `kind`.
    pub fn take(&mut self, kind: PieceType, n: u32) -> Result<(), BoardError> {
        self.check_take(kind, n)?;
        if let Some(idx) = kind.hand_index() {
            self.counts[idx] -= n;
        }
        Ok(())
    }

    /// Validate a `take` without performing it.
    pub fn check_take(&self, kind: PieceType, n: u32) -> Result<(), BoardError> {
        let idx = kind
            .hand_index()
            .ok_or(BoardError::NotHandPiece { piece_type: kind })?;
        let available = self.counts[idx];
        if available < n {
            return Err(BoardError::InsufficientPieces {
                piece_type: kind,
                requested: n,
                available,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Held kinds with non-zero counts, in pawn-to-rook order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceType, u32)> + '_ {
        PieceType::HAND
            .iter()
            .zip(self.counts.iter())
            .filter(|&(_, &count)| count > 0)
            .map(|(&kind, &count)| (kind, count))
    }

    /// Decode one side's share of an SFEN stand field.
    ///
    /// Each letter may be preceded by a repeat count. Letter case is not
    /// checked here; `Position` splits the field by case before calling this.
    pub fn from_sfen(text: &str) -> Result<Self, SfenError> {
        let invalid = || SfenError::InvalidStand {
            found: text.to_string(),
        };
        let mut stand = Stand::new();
        let mut amount: Option<u32> = None;
        for c in text.chars() {
            if let Some(digit) = c.to_digit(10) {
                let next = amount
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|a| a.checked_add(digit))
                    .ok_or_else(invalid)?;
                amount = Some(next);
            } else {
                let piece = symbol_to_piece(c).map_err(|_| SfenError::InvalidPiece { char: c })?;
                let n = amount.take().unwrap_or(1);
                if n == 0 {
                    return Err(invalid());
                }
                stand.add(piece.piece_type, n).map_err(|_| invalid())?;
            }
        }
        if amount.is_some() {
            return Err(invalid());
        }
        Ok(stand)
    }

    /// Encode the stand for `side` (uppercase for Black), empty when no
    /// pieces are held.
    #[must_use]
    pub fn to_sfen(&self, side: Side) -> String {
        let mut out = String::new();
        for kind in SFEN_ORDER {
            let count = self.count(kind);
            if count == 0 {
                continue;
            }
            if count > 1 {
                out.push_str(&count.to_string());
            }
            out.push(match side {
                Side::Black => kind.to_char().to_ascii_uppercase(),
                Side::White => kind.to_char(),
            });
        }
        out
    }
}

impl fmt::Display for Stand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(kind, count)| format!("{}x{count}", kind.kif_name()))
            .collect();
        f.write_str(&parts.join(" "))
    }
}
