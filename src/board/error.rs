//! Error types for shogi board operations.

use std::fmt;

use super::types::{PieceType, Square};

/// Error type for board, stand and notation operations.
///
/// A call that returns one of these has not modified the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the 9x9 grid
    OutOfBounds { row: usize, col: usize },
    /// The square holds no piece
    SquareEmpty { square: Square },
    /// The square already holds a piece
    SquareOccupied { square: Square },
    /// The piece on the square is already promoted
    AlreadyPromoted { square: Square },
    /// The piece on the square is not promoted
    NotPromoted { square: Square },
    /// Gold and king have no promoted side
    Unflippable {
        square: Square,
        piece_type: PieceType,
    },
    /// The stand holds fewer pieces than requested
    InsufficientPieces {
        piece_type: PieceType,
        requested: u32,
        available: u32,
    },
    /// The king and promoted kinds cannot be held in a stand
    NotHandPiece { piece_type: PieceType },
    /// The destination holds a piece of the side to move
    FriendlyFire { square: Square },
    /// Character outside the piece letter alphabet
    UnknownSymbol { char: char },
    /// Character outside the full-width digit / kanji numeral alphabet
    UnknownCoordinateSymbol { char: char },
    /// Integer that is not a valid piece identifier
    InvalidPieceId { id: i8 },
    /// KIF text that cannot be resolved to a move or drop
    MalformedNotation {
        notation: String,
        reason: &'static str,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate (row {row}, col {col}) is outside the board")
            }
            BoardError::SquareEmpty { square } => write!(f, "No piece on {square}"),
            BoardError::SquareOccupied { square } => {
                write!(f, "Square {square} is already occupied")
            }
            BoardError::AlreadyPromoted { square } => {
                write!(f, "Piece on {square} is already promoted")
            }
            BoardError::NotPromoted { square } => {
                write!(f, "Piece on {square} is not promoted")
            }
            BoardError::Unflippable { square, piece_type } => {
                write!(f, "Piece '{piece_type}' on {square} cannot be promoted")
            }
            BoardError::InsufficientPieces {
                piece_type,
                requested,
                available,
            } => write!(
                f,
                "Stand holds {available} of '{piece_type}', {requested} requested"
            ),
            BoardError::NotHandPiece { piece_type } => {
                write!(f, "Piece '{piece_type}' cannot be held in a stand")
            }
            BoardError::FriendlyFire { square } => {
                write!(f, "Cannot capture own piece on {square}")
            }
            BoardError::UnknownSymbol { char } => write!(f, "Unknown piece symbol '{char}'"),
            BoardError::UnknownCoordinateSymbol { char } => {
                write!(f, "Unknown coordinate symbol '{char}'")
            }
            BoardError::InvalidPieceId { id } => write!(f, "Invalid piece identifier {id}"),
            BoardError::MalformedNotation { notation, reason } => {
                write!(f, "Malformed notation '{notation}': {reason}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for SFEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SfenError {
    /// SFEN string has too few fields (needs board, side, stands, move count)
    TooFewParts { found: usize },
    /// SFEN string has trailing fields
    TooManyParts { found: usize },
    /// Board must have exactly 9 ranks
    InvalidRankCount { found: usize },
    /// A rank does not describe exactly 9 files
    InvalidRankWidth { rank: usize, files: usize },
    /// Empty runs are 1-9, never 0
    ZeroEmptyRun { rank: usize },
    /// Invalid piece character in board or stand
    InvalidPiece { char: char },
    /// `+` not followed by a piece letter
    DanglingPromotion { rank: usize },
    /// `+` applied to gold or king
    Unpromotable { char: char },
    /// Invalid side to move (must be 'b' or 'w')
    InvalidSideToMove { found: String },
    /// Malformed stand field
    InvalidStand { found: String },
    /// Move count must be a positive integer
    InvalidMoveCount { found: String },
}

impl fmt::Display for SfenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SfenError::TooFewParts { found } => {
                write!(f, "SFEN must have 4 parts, found {found}")
            }
            SfenError::TooManyParts { found } => {
                write!(f, "SFEN must have 4 parts, found {found}")
            }
            SfenError::InvalidRankCount { found } => {
                write!(f, "SFEN board must have 9 ranks, found {found}")
            }
            SfenError::InvalidRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 9")
            }
            SfenError::ZeroEmptyRun { rank } => {
                write!(f, "Rank {rank} contains an empty run of 0")
            }
            SfenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in SFEN")
            }
            SfenError::DanglingPromotion { rank } => {
                write!(f, "Promotion marker without a piece in rank {rank}")
            }
            SfenError::Unpromotable { char } => {
                write!(f, "Piece '{char}' cannot be promoted")
            }
            SfenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'b' or 'w'")
            }
            SfenError::InvalidStand { found } => write!(f, "Invalid stand '{found}'"),
            SfenError::InvalidMoveCount { found } => {
                write!(f, "Invalid move count '{found}'")
            }
        }
    }
}

impl std::error::Error for SfenError {}
