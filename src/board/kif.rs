//! KIF move notation.
//!
//! KIF is the plain-text record format used by most Japanese shogi software.
//! A move line names the destination, the piece and, for board moves, the
//! source square: `７六歩(77)`, `同　銀成(34)`, `５五角打`.
//!
//! # Examples
//! ```
//! use shogi_board::board::{Position, Square};
//!
//! let mut pos = Position::new();
//! pos.apply_kif("７六歩(77)").unwrap();
//! assert!(pos.piece_at(Square(5, 2)).unwrap().is_some());
//! ```

use std::str::FromStr;

use log::debug;

use super::codec::{coordinate_from_glyph, is_coordinate_glyph, piece_type_from_kif};
use super::error::BoardError;
use super::position::Position;
use super::types::{PieceType, Square};

const DROP_MARK: char = '打';
const SAME_MARK: char = '同';
const PROMOTE_MARK: &str = "成";

/// Game results that end the main line of a record.
const TERMINALS: [&str; 11] = [
    "投了",
    "中断",
    "詰み",
    "千日手",
    "切れ負け",
    "反則勝ち",
    "反則負け",
    "持将棋",
    "入玉勝ち",
    "不戦勝",
    "不戦敗",
];

/// Opens the closing summary line, e.g. `まで64手で先手の勝ち`.
const SUMMARY_MARK: &str = "まで";

/// Where a KIF move lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KifDestination {
    Square(Square),
    /// `同`: the destination of the previous move.
    Same,
}

/// A parsed KIF move, not yet checked against any position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KifMove {
    Move {
        to: KifDestination,
        piece_type: PieceType,
        from: Square,
        promote: bool,
    },
    Drop {
        to: Square,
        piece_type: PieceType,
    },
}

impl KifMove {
    /// Parse one KIF move. Move numbers and timestamps around the move are
    /// ignored.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let malformed = |reason: &'static str| BoardError::MalformedNotation {
            notation: text.to_string(),
            reason,
        };

        let (to, rest) = match find_destination(text)? {
            Some((sq, rest)) => (KifDestination::Square(sq), rest),
            None => match text.find(SAME_MARK) {
                Some(idx) => (KifDestination::Same, &text[idx + SAME_MARK.len_utf8()..]),
                None => return Err(malformed("missing destination")),
            },
        };

        let rest = rest.trim_start_matches([' ', '\u{3000}']);
        let (piece_type, len) = piece_type_from_kif(rest).ok_or_else(|| malformed("unknown piece"))?;
        let rest = &rest[len..];

        if text.contains(DROP_MARK) {
            let KifDestination::Square(to) = to else {
                return Err(malformed("drop without a destination square"));
            };
            if piece_type.hand_index().is_none() {
                return Err(malformed("piece cannot be dropped"));
            }
            return Ok(KifMove::Drop { to, piece_type });
        }

        // 不成 leaves `rest` starting with 不, so it never promotes
        let promote = rest.starts_with(PROMOTE_MARK);
        let from = find_source(text).ok_or_else(|| malformed("missing source square"))?;
        Ok(KifMove::Move {
            to,
            piece_type,
            from,
            promote,
        })
    }
}

impl FromStr for KifMove {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The first adjacent file/rank glyph pair and the text after it.
fn find_destination(text: &str) -> Result<Option<(Square, &str)>, BoardError> {
    let glyphs: Vec<(usize, char)> = text.char_indices().collect();
    for pair in glyphs.windows(2) {
        let (_, file) = pair[0];
        let (idx, rank) = pair[1];
        if is_coordinate_glyph(file) && is_coordinate_glyph(rank) {
            let sq = Square::from_kif(coordinate_from_glyph(file)?, coordinate_from_glyph(rank)?)
                .ok_or(BoardError::UnknownCoordinateSymbol { char: rank })?;
            return Ok(Some((sq, &text[idx + rank.len_utf8()..])));
        }
    }
    Ok(None)
}

/// `(fr)` with two ASCII digits 1-9.
fn find_source(text: &str) -> Option<Square> {
    let is_digit = |b: u8| (b'1'..=b'9').contains(&b);
    text.as_bytes()
        .windows(4)
        .find(|w| w[0] == b'(' && is_digit(w[1]) && is_digit(w[2]) && w[3] == b')')
        .and_then(|w| Square::from_kif(w[1] - b'0', w[2] - b'0'))
}

impl Position {
    /// Parse and apply one KIF move.
    ///
    /// `同` resolves to the destination of the previous move; it is an error
    /// when no move has been made yet.
    pub fn apply_kif(&mut self, text: &str) -> Result<(), BoardError> {
        match KifMove::parse(text)? {
            KifMove::Drop { to, piece_type } => {
                debug!("kif {text:?}: drop {} at {to}", piece_type.kif_name());
                self.drop_piece(to, piece_type)
            }
            KifMove::Move {
                to,
                from,
                promote,
                ..
            } => {
                let to = match to {
                    KifDestination::Square(sq) => sq,
                    KifDestination::Same => {
                        self.last_move()
                            .ok_or_else(|| BoardError::MalformedNotation {
                                notation: text.to_string(),
                                reason: "no previous move for 同",
                            })?
                    }
                };
                debug!("kif {text:?}: {from} -> {to}{}", if promote { " +" } else { "" });
                self.make_move(from, to, promote)
            }
        }
    }
}

fn is_header(line: &str) -> bool {
    line.contains('：')
}

fn is_comment(line: &str) -> bool {
    line.starts_with('*') || line.starts_with('#')
}

fn is_terminal(line: &str) -> bool {
    line.starts_with("変化")
        || line.starts_with(SUMMARY_MARK)
        || (!is_header(line) && TERMINALS.iter().any(|t| line.contains(t)))
}

/// Move lines of a KIF record, in order.
///
/// Header, comment and column-title lines are skipped. Iteration stops at the
/// first line that ends the game or opens a variation.
pub fn move_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_comment(line) && !line.starts_with("手数"))
        .take_while(|line| !is_terminal(line))
        .filter(|line| !is_header(line))
}
