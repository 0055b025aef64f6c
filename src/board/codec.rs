//! Conversions between notation symbols and piece / coordinate values.
//!
//! SFEN uses ASCII letters (`P` for a Black pawn, `+r` for a White dragon);
//! KIF uses full-width digits for files, kanji numerals for ranks and kanji
//! piece names. All tables here are constant.

use super::error::BoardError;
use super::types::{Piece, PieceType, Side};

const FULL_WIDTH_DIGITS: [char; 9] = ['１', '２', '３', '４', '５', '６', '７', '８', '９'];
const KANJI_NUMERALS: [char; 9] = ['一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// KIF piece names, longest first so `成香` wins over a bare `成`.
const KIF_PIECE_NAMES: [(&str, PieceType); 19] = [
    ("成銀", PieceType::ProSilver),
    ("成桂", PieceType::ProKnight),
    ("成香", PieceType::ProLance),
    ("歩", PieceType::Pawn),
    ("香", PieceType::Lance),
    ("桂", PieceType::Knight),
    ("銀", PieceType::Silver),
    ("金", PieceType::Gold),
    ("角", PieceType::Bishop),
    ("飛", PieceType::Rook),
    ("玉", PieceType::King),
    ("王", PieceType::King),
    ("と", PieceType::ProPawn),
    ("杏", PieceType::ProLance),
    ("圭", PieceType::ProKnight),
    ("全", PieceType::ProSilver),
    ("馬", PieceType::Horse),
    ("龍", PieceType::Dragon),
    ("竜", PieceType::Dragon),
];

/// Decode one SFEN piece letter. Case selects the side.
pub fn symbol_to_piece(c: char) -> Result<Piece, BoardError> {
    if !c.is_ascii_alphabetic() {
        return Err(BoardError::UnknownSymbol { char: c });
    }
    let piece_type = PieceType::from_char(c).ok_or(BoardError::UnknownSymbol { char: c })?;
    let side = if c.is_ascii_uppercase() {
        Side::Black
    } else {
        Side::White
    };
    Ok(Piece::new(piece_type, side))
}

/// Decode one SFEN piece letter to its signed identifier.
pub fn symbol_to_id(c: char) -> Result<i8, BoardError> {
    symbol_to_piece(c).map(Piece::id)
}

/// Decode a signed identifier. Zero, 15, 18 and anything past 17 are rejected.
pub fn piece_from_id(id: i8) -> Result<Piece, BoardError> {
    let side = match id.signum() {
        1 => Side::Black,
        -1 => Side::White,
        _ => return Err(BoardError::InvalidPieceId { id }),
    };
    let piece_type =
        PieceType::from_code(id.unsigned_abs()).ok_or(BoardError::InvalidPieceId { id })?;
    Ok(Piece::new(piece_type, side))
}

/// Encode a signed identifier as its SFEN symbol (`P`, `+p`, ...).
pub fn id_to_symbol(id: i8) -> Result<String, BoardError> {
    piece_from_id(id).map(Piece::to_sfen)
}

#[inline]
#[must_use]
pub fn is_coordinate_glyph(c: char) -> bool {
    FULL_WIDTH_DIGITS.contains(&c) || KANJI_NUMERALS.contains(&c)
}

/// Map `１`-`９` or `一`-`九` to 1-9.
pub fn coordinate_from_glyph(c: char) -> Result<u8, BoardError> {
    FULL_WIDTH_DIGITS
        .iter()
        .position(|&g| g == c)
        .or_else(|| KANJI_NUMERALS.iter().position(|&g| g == c))
        .map(|i| i as u8 + 1)
        .ok_or(BoardError::UnknownCoordinateSymbol { char: c })
}

/// Full-width digit for a 1-based file number.
#[must_use]
pub fn file_glyph(file: u8) -> Option<char> {
    FULL_WIDTH_DIGITS.get(usize::from(file).checked_sub(1)?).copied()
}

/// Kanji numeral for a 1-based rank number.
#[must_use]
pub fn rank_kanji(rank: u8) -> Option<char> {
    KANJI_NUMERALS.get(usize::from(rank).checked_sub(1)?).copied()
}

/// Match a KIF piece name at the start of `text`.
///
/// Returns the piece type and the number of bytes the name occupies.
#[must_use]
pub fn piece_type_from_kif(text: &str) -> Option<(PieceType, usize)> {
    KIF_PIECE_NAMES
        .iter()
        .find(|(name, _)| text.starts_with(name))
        .map(|&(name, piece_type)| (piece_type, name.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_alphabet() {
        let letters = "PNLSGBRK";
        for (i, c) in letters.chars().enumerate() {
            let id = symbol_to_id(c).unwrap();
            assert_eq!(id, i as i8 + 1);
            assert_eq!(symbol_to_id(c.to_ascii_lowercase()).unwrap(), -id);
        }
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(
            symbol_to_id('x'),
            Err(BoardError::UnknownSymbol { char: 'x' })
        );
        assert_eq!(
            symbol_to_id('+'),
            Err(BoardError::UnknownSymbol { char: '+' })
        );
        assert!(symbol_to_piece('歩').is_err());
    }

    #[test]
    fn test_id_to_symbol_inverse() {
        for c in "PNLSGBRKpnlsgbrk".chars() {
            let id = symbol_to_id(c).unwrap();
            assert_eq!(id_to_symbol(id).unwrap(), c.to_string());
        }
    }

    #[test]
    fn test_id_to_symbol_promoted() {
        assert_eq!(id_to_symbol(11).unwrap(), "+P");
        assert_eq!(id_to_symbol(-17).unwrap(), "+r");
        assert_eq!(id_to_symbol(16).unwrap(), "+B");
    }

    #[test]
    fn test_id_to_symbol_rejects_promoted_gold_and_king() {
        for id in [0, 9, 10, 15, -15, 18, -18, 19, i8::MIN] {
            assert_eq!(id_to_symbol(id), Err(BoardError::InvalidPieceId { id }));
        }
    }

    #[test]
    fn test_coordinate_glyphs() {
        assert_eq!(coordinate_from_glyph('１'), Ok(1));
        assert_eq!(coordinate_from_glyph('９'), Ok(9));
        assert_eq!(coordinate_from_glyph('一'), Ok(1));
        assert_eq!(coordinate_from_glyph('六'), Ok(6));
        assert_eq!(
            coordinate_from_glyph('7'),
            Err(BoardError::UnknownCoordinateSymbol { char: '7' })
        );
        assert_eq!(
            coordinate_from_glyph('十'),
            Err(BoardError::UnknownCoordinateSymbol { char: '十' })
        );
    }

    #[test]
    fn test_glyph_helpers_invert() {
        for n in 1..=9u8 {
            assert_eq!(coordinate_from_glyph(file_glyph(n).unwrap()), Ok(n));
            assert_eq!(coordinate_from_glyph(rank_kanji(n).unwrap()), Ok(n));
        }
        assert_eq!(file_glyph(0), None);
        assert_eq!(rank_kanji(10), None);
    }

    #[test]
    fn test_kif_piece_names() {
        assert_eq!(piece_type_from_kif("歩(77)"), Some((PieceType::Pawn, 3)));
        assert_eq!(piece_type_from_kif("成香(13)"), Some((PieceType::ProLance, 6)));
        assert_eq!(piece_type_from_kif("竜"), Some((PieceType::Dragon, 3)));
        assert_eq!(piece_type_from_kif("成(77)"), None);
        assert_eq!(piece_type_from_kif(""), None);
    }

    #[test]
    fn test_kif_name_parses_back() {
        for pt in PieceType::ALL {
            let (parsed, len) = piece_type_from_kif(pt.kif_name()).unwrap();
            assert_eq!(parsed, pt);
            assert_eq!(len, pt.kif_name().len());
        }
    }
}
