//! Piece, piece type and side types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shogi piece types, unpromoted and promoted.
///
/// Gold and king have no promoted variant, so an invalid promoted form can
/// never be constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Knight,
    Lance,
    Silver,
    Gold,
    Bishop,
    Rook,
    King,
    ProPawn,
    ProKnight,
    ProLance,
    ProSilver,
    Horse,
    Dragon,
}

impl PieceType {
    /// All piece types in index order
    pub const ALL: [PieceType; 14] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Silver,
        PieceType::Gold,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::King,
        PieceType::ProPawn,
        PieceType::ProKnight,
        PieceType::ProLance,
        PieceType::ProSilver,
        PieceType::Horse,
        PieceType::Dragon,
    ];

    /// Kinds that can be held in a stand, in stand index order.
    pub const HAND: [PieceType; 7] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Silver,
        PieceType::Gold,
        PieceType::Bishop,
        PieceType::Rook,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceType::Pawn => 0,
            PieceType::Knight => 1,
            PieceType::Lance => 2,
            PieceType::Silver => 3,
            PieceType::Gold => 4,
            PieceType::Bishop => 5,
            PieceType::Rook => 6,
            PieceType::King => 7,
            PieceType::ProPawn => 8,
            PieceType::ProKnight => 9,
            PieceType::ProLance => 10,
            PieceType::ProSilver => 11,
            PieceType::Horse => 12,
            PieceType::Dragon => 13,
        }
    }

    /// Position of the kind in a stand, `None` for the king and promoted kinds.
    #[inline]
    #[must_use]
    pub const fn hand_index(self) -> Option<usize> {
        match self {
            PieceType::Pawn => Some(0),
            PieceType::Knight => Some(1),
            PieceType::Lance => Some(2),
            PieceType::Silver => Some(3),
            PieceType::Gold => Some(4),
            PieceType::Bishop => Some(5),
            PieceType::Rook => Some(6),
            _ => None,
        }
    }

    /// Magnitude of the signed integer identifier (1-8, 11-14, 16, 17).
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight => 2,
            PieceType::Lance => 3,
            PieceType::Silver => 4,
            PieceType::Gold => 5,
            PieceType::Bishop => 6,
            PieceType::Rook => 7,
            PieceType::King => 8,
            PieceType::ProPawn => 11,
            PieceType::ProKnight => 12,
            PieceType::ProLance => 13,
            PieceType::ProSilver => 14,
            PieceType::Horse => 16,
            PieceType::Dragon => 17,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<PieceType> {
        match code {
            1 => Some(PieceType::Pawn),
            2 => Some(PieceType::Knight),
            3 => Some(PieceType::Lance),
            4 => Some(PieceType::Silver),
            5 => Some(PieceType::Gold),
            6 => Some(PieceType::Bishop),
            7 => Some(PieceType::Rook),
            8 => Some(PieceType::King),
            11 => Some(PieceType::ProPawn),
            12 => Some(PieceType::ProKnight),
            13 => Some(PieceType::ProLance),
            14 => Some(PieceType::ProSilver),
            16 => Some(PieceType::Horse),
            17 => Some(PieceType::Dragon),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promoted(self) -> bool {
        matches!(
            self,
            PieceType::ProPawn
                | PieceType::ProKnight
                | PieceType::ProLance
                | PieceType::ProSilver
                | PieceType::Horse
                | PieceType::Dragon
        )
    }

    /// Gold and king have no promoted form.
    #[inline]
    #[must_use]
    pub const fn is_flippable(self) -> bool {
        !matches!(self, PieceType::Gold | PieceType::King)
    }

    /// The promoted form, or `None` if the type is already promoted or has none.
    #[must_use]
    pub const fn promote(self) -> Option<PieceType> {
        match self {
            PieceType::Pawn => Some(PieceType::ProPawn),
            PieceType::Knight => Some(PieceType::ProKnight),
            PieceType::Lance => Some(PieceType::ProLance),
            PieceType::Silver => Some(PieceType::ProSilver),
            PieceType::Bishop => Some(PieceType::Horse),
            PieceType::Rook => Some(PieceType::Dragon),
            _ => None,
        }
    }

    /// The unpromoted form, or `None` if the type is not promoted.
    #[must_use]
    pub const fn unpromote(self) -> Option<PieceType> {
        match self {
            PieceType::ProPawn => Some(PieceType::Pawn),
            PieceType::ProKnight => Some(PieceType::Knight),
            PieceType::ProLance => Some(PieceType::Lance),
            PieceType::ProSilver => Some(PieceType::Silver),
            PieceType::Horse => Some(PieceType::Bishop),
            PieceType::Dragon => Some(PieceType::Rook),
            _ => None,
        }
    }

    /// The base kind: itself when unpromoted, the demoted kind otherwise.
    #[inline]
    #[must_use]
    pub const fn unpromoted(self) -> PieceType {
        match self.unpromote() {
            Some(base) => base,
            None => self,
        }
    }

    /// Parse an unpromoted type from its SFEN letter (either case).
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'l' => Some(PieceType::Lance),
            's' => Some(PieceType::Silver),
            'g' => Some(PieceType::Gold),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Lowercase SFEN letter of the base kind.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self.unpromoted() {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Lance => 'l',
            PieceType::Silver => 's',
            PieceType::Gold => 'g',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            _ => 'k',
        }
    }

    /// Japanese name used in KIF records.
    #[must_use]
    pub const fn kif_name(self) -> &'static str {
        match self {
            PieceType::Pawn => "歩",
            PieceType::Knight => "桂",
            PieceType::Lance => "香",
            PieceType::Silver => "銀",
            PieceType::Gold => "金",
            PieceType::Bishop => "角",
            PieceType::Rook => "飛",
            PieceType::King => "玉",
            PieceType::ProPawn => "と",
            PieceType::ProKnight => "成桂",
            PieceType::ProLance => "成香",
            PieceType::ProSilver => "成銀",
            PieceType::Horse => "馬",
            PieceType::Dragon => "龍",
        }
    }

    /// Number of pieces of this base kind in a standard game.
    #[must_use]
    pub const fn standard_total(self) -> u32 {
        match self.unpromoted() {
            PieceType::Pawn => 18,
            PieceType::Bishop | PieceType::Rook | PieceType::King => 2,
            _ => 4,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_promoted() {
            write!(f, "+{}", self.to_char())
        } else {
            write!(f, "{}", self.to_char())
        }
    }
}

/// The two players. Black moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// First player (sente), uppercase in SFEN, positive identifiers.
    Black,
    /// Second player (gote), lowercase in SFEN, negative identifiers.
    White,
}

impl Side {
    /// Both sides in index order (Black=0, White=1)
    pub const BOTH: [Side; 2] = [Side::Black, Side::White];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// +1 for Black, -1 for White
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }

    /// SFEN side-to-move token
    #[inline]
    #[must_use]
    pub const fn to_sfen(self) -> &'static str {
        match self {
            Side::Black => "b",
            Side::White => "w",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// A piece owned by one side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(piece_type: PieceType, side: Side) -> Self {
        Piece { piece_type, side }
    }

    /// Signed integer identifier: magnitude from the type, sign from the side.
    #[inline]
    #[must_use]
    pub const fn id(self) -> i8 {
        self.piece_type.code() as i8 * self.side.sign()
    }

    /// Inverse of [`Piece::id`].
    pub fn from_id(id: i8) -> Result<Piece, crate::board::BoardError> {
        crate::board::codec::piece_from_id(id)
    }

    #[must_use]
    pub const fn promoted(self) -> Option<Piece> {
        match self.piece_type.promote() {
            Some(piece_type) => Some(Piece::new(piece_type, self.side)),
            None => None,
        }
    }

    /// The same piece reverted to its base kind.
    #[inline]
    #[must_use]
    pub const fn unpromoted(self) -> Piece {
        Piece::new(self.piece_type.unpromoted(), self.side)
    }

    /// SFEN symbol, uppercase for Black, with a `+` prefix when promoted.
    #[must_use]
    pub fn to_sfen(self) -> String {
        let c = match self.side {
            Side::Black => self.piece_type.to_char().to_ascii_uppercase(),
            Side::White => self.piece_type.to_char(),
        };
        if self.piece_type.is_promoted() {
            format!("+{c}")
        } else {
            c.to_string()
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sfen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_unpromote_inverse() {
        for pt in PieceType::ALL {
            if let Some(promoted) = pt.promote() {
                assert!(promoted.is_promoted());
                assert_eq!(promoted.unpromote(), Some(pt));
                assert_eq!(promoted.code(), pt.code() + 10);
            }
        }
    }

    #[test]
    fn test_gold_and_king_never_promote() {
        assert_eq!(PieceType::Gold.promote(), None);
        assert_eq!(PieceType::King.promote(), None);
        assert!(!PieceType::Gold.is_flippable());
        assert!(!PieceType::King.is_flippable());
        assert_eq!(PieceType::from_code(15), None);
        assert_eq!(PieceType::from_code(18), None);
    }

    #[test]
    fn test_code_round_trip() {
        for pt in PieceType::ALL {
            assert_eq!(PieceType::from_code(pt.code()), Some(pt));
        }
    }

    #[test]
    fn test_hand_index_matches_hand_table() {
        for (i, pt) in PieceType::HAND.iter().enumerate() {
            assert_eq!(pt.hand_index(), Some(i));
        }
        assert_eq!(PieceType::King.hand_index(), None);
        assert_eq!(PieceType::Dragon.hand_index(), None);
    }

    #[test]
    fn test_piece_id_sign() {
        assert_eq!(Piece::new(PieceType::Pawn, Side::Black).id(), 1);
        assert_eq!(Piece::new(PieceType::Dragon, Side::White).id(), -17);
        assert_eq!(Piece::new(PieceType::King, Side::White).id(), -8);
    }

    #[test]
    fn test_piece_to_sfen() {
        assert_eq!(Piece::new(PieceType::Horse, Side::Black).to_sfen(), "+B");
        assert_eq!(Piece::new(PieceType::Lance, Side::White).to_sfen(), "l");
    }

    #[test]
    fn test_standard_totals_sum_to_forty() {
        let total: u32 = PieceType::ALL
            .iter()
            .filter(|pt| !pt.is_promoted())
            .map(|pt| pt.standard_total())
            .sum();
        assert_eq!(total, 40);
    }
}
