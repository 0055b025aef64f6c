use std::str::FromStr;

use log::debug;

use super::error::SfenError;
use super::field::Field;
use super::position::Position;
use super::stand::Stand;
use super::types::Side;

/// SFEN of the standard starting position.
pub const STARTPOS_SFEN: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

impl Position {
    /// Parse a position from SFEN, with or without a leading `sfen` token.
    ///
    /// Returns an error if any of the four fields is malformed.
    pub fn try_from_sfen(sfen: &str) -> Result<Self, SfenError> {
        let mut parts: Vec<&str> = sfen.split_whitespace().collect();
        if parts.first() == Some(&"sfen") {
            parts.remove(0);
        }
        if parts.len() < 4 {
            return Err(SfenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 4 {
            return Err(SfenError::TooManyParts { found: parts.len() });
        }

        let field = Field::from_sfen(parts[0])?;

        let side_to_move = match parts[1] {
            "b" => Side::Black,
            "w" => Side::White,
            other => {
                return Err(SfenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let stands = parse_stands(parts[2])?;

        let move_count = match parts[3].parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(SfenError::InvalidMoveCount {
                    found: parts[3].to_string(),
                })
            }
        };

        debug!("decoded sfen: {side_to_move} to move, move {move_count}");
        Ok(Position::from_parts(field, stands, side_to_move, move_count))
    }

    /// Encode the position as SFEN (without the `sfen` token).
    #[must_use]
    pub fn to_sfen(&self) -> String {
        let black = self.stand(Side::Black).to_sfen(Side::Black);
        let white = self.stand(Side::White).to_sfen(Side::White);
        let stands = if black.is_empty() && white.is_empty() {
            "-".to_string()
        } else {
            format!("{black}{white}")
        };
        format!(
            "{} {} {stands} {}",
            self.field().to_sfen(),
            self.side_to_move().to_sfen(),
            self.move_count()
        )
    }
}

/// Split the stand field at its last uppercase letter: everything up to and
/// including it belongs to Black, the rest to White.
fn parse_stands(text: &str) -> Result<[Stand; 2], SfenError> {
    if text == "-" {
        return Ok([Stand::new(); 2]);
    }
    if text.is_empty() {
        return Err(SfenError::InvalidStand {
            found: text.to_string(),
        });
    }
    let split = text
        .char_indices()
        .filter(|(_, c)| c.is_ascii_uppercase())
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    let (black, white) = text.split_at(split);
    Ok([Stand::from_sfen(black)?, Stand::from_sfen(white)?])
}

impl FromStr for Position {
    type Err = SfenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_sfen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{PieceType, Square};

    #[test]
    fn test_startpos_matches_new() {
        let pos = Position::try_from_sfen(STARTPOS_SFEN).unwrap();
        assert_eq!(pos, Position::new());
        assert_eq!(pos.to_sfen(), STARTPOS_SFEN);
    }

    #[test]
    fn test_leading_sfen_token() {
        let pos: Position = format!("sfen {STARTPOS_SFEN}").parse().unwrap();
        assert_eq!(pos, Position::new());
    }

    #[test]
    fn test_stands_split_by_case() {
        let pos =
            Position::try_from_sfen("4k4/9/9/9/9/9/9/9/4K4 w RG2Pb3p 12").unwrap();
        let black = pos.stand(Side::Black);
        let white = pos.stand(Side::White);
        assert_eq!(black.count(PieceType::Rook), 1);
        assert_eq!(black.count(PieceType::Gold), 1);
        assert_eq!(black.count(PieceType::Pawn), 2);
        assert_eq!(white.count(PieceType::Bishop), 1);
        assert_eq!(white.count(PieceType::Pawn), 3);
        assert_eq!(pos.side_to_move(), Side::White);
        assert_eq!(pos.move_count(), 12);
        assert_eq!(pos.to_sfen(), "4k4/9/9/9/9/9/9/9/4K4 w RG2Pb3p 12");
    }

    #[test]
    fn test_lowercase_before_last_uppercase_is_black() {
        let pos = Position::try_from_sfen("4k4/9/9/9/9/9/9/9/4K4 b pPs 1").unwrap();
        assert_eq!(pos.stand(Side::Black).count(PieceType::Pawn), 2);
        assert_eq!(pos.stand(Side::White).count(PieceType::Silver), 1);
    }

    #[test]
    fn test_white_only_stand() {
        let pos = Position::try_from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 2p 1").unwrap();
        assert!(pos.stand(Side::Black).is_empty());
        assert_eq!(pos.stand(Side::White).count(PieceType::Pawn), 2);
    }

    #[test]
    fn test_promoted_pieces_survive_round_trip() {
        let sfen = "4k4/9/9/9/4+r4/9/9/+P8/4K4 b - 7";
        let pos = Position::try_from_sfen(sfen).unwrap();
        assert_eq!(pos.id_at(Square(4, 4)).unwrap(), -17);
        assert_eq!(pos.to_sfen(), sfen);
    }

    #[test]
    fn test_part_count_errors() {
        assert_eq!(
            Position::try_from_sfen("9/9/9/9/9/9/9/9/9 b -"),
            Err(SfenError::TooFewParts { found: 3 })
        );
        assert_eq!(
            Position::try_from_sfen("sfen 9/9/9/9/9/9/9/9/9 b - 1 extra"),
            Err(SfenError::TooManyParts { found: 5 })
        );
    }

    #[test]
    fn test_field_errors() {
        assert_eq!(
            Position::try_from_sfen("9/9/9/9/9/9/9/9/9 x - 1"),
            Err(SfenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Position::try_from_sfen("9/9/9/9/9/9/9/9/9 b - 0"),
            Err(SfenError::InvalidMoveCount {
                found: "0".to_string()
            })
        );
        assert_eq!(
            Position::try_from_sfen("9/9/9/9/9/9/9/9/9 b - one"),
            Err(SfenError::InvalidMoveCount {
                found: "one".to_string()
            })
        );
        assert_eq!(
            Position::try_from_sfen("9/9/9/9/9/9/9/9/9 b 2 1"),
            Err(SfenError::InvalidStand {
                found: "2".to_string()
            })
        );
        assert_eq!(
            Position::try_from_sfen("9/9/9/9/9/9/9/8 b - 1"),
            Err(SfenError::InvalidRankCount { found: 8 })
        );
    }
}
