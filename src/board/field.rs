//! The 9x9 playing field.

use super::codec::symbol_to_piece;
use super::error::{BoardError, SfenError};
use super::grid::Grid;
use super::types::{Piece, PieceType, Side, Square, BOARD_SIZE};

const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Lance,
    PieceType::Knight,
    PieceType::Silver,
    PieceType::Gold,
    PieceType::King,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
];

/// The 81 squares of a shogi board.
///
/// Every mutation checks its preconditions first and then writes the grid,
/// so a failed call never leaves a half-moved piece behind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Field {
    grid: Grid<Option<Piece>, BOARD_SIZE>,
}

impl Field {
    /// An empty field.
    #[must_use]
    pub fn new() -> Self {
        Field { grid: Grid::new() }
    }

    /// The standard starting arrangement.
    #[must_use]
    pub fn startpos() -> Self {
        let mut rows = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            rows[0][col] = Some(Piece::new(kind, Side::White));
            rows[2][col] = Some(Piece::new(PieceType::Pawn, Side::White));
            rows[6][col] = Some(Piece::new(PieceType::Pawn, Side::Black));
            rows[8][col] = Some(Piece::new(kind, Side::Black));
        }
        rows[1][1] = Some(Piece::new(PieceType::Rook, Side::White));
        rows[1][7] = Some(Piece::new(PieceType::Bishop, Side::White));
        rows[7][1] = Some(Piece::new(PieceType::Bishop, Side::Black));
        rows[7][7] = Some(Piece::new(PieceType::Rook, Side::Black));
        Field {
            grid: Grid::from_rows(rows),
        }
    }

    pub fn get(&self, sq: Square) -> Result<Option<Piece>, BoardError> {
        self.grid.get(sq)
    }

    /// Signed identifier of the piece on `sq`, 0 when empty.
    pub fn id_at(&self, sq: Square) -> Result<i8, BoardError> {
        Ok(self.get(sq)?.map_or(0, Piece::id))
    }

    fn occupant(&self, sq: Square) -> Result<Piece, BoardError> {
        self.get(sq)?.ok_or(BoardError::SquareEmpty { square: sq })
    }

    /// Put a piece on an empty square.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<(), BoardError> {
        if self.get(sq)?.is_some() {
            return Err(BoardError::SquareOccupied { square: sq });
        }
        self.grid.set(sq, Some(piece))?;
        Ok(())
    }

    /// Take the piece off `sq`, returned in its unpromoted form.
    pub fn remove(&mut self, sq: Square) -> Result<Piece, BoardError> {
        let piece = self.occupant(sq)?;
        self.grid.set(sq, None)?;
        Ok(piece.unpromoted())
    }

    /// Move the piece on `src` to the empty square `dst`.
    pub fn relocate(&mut self, src: Square, dst: Square) -> Result<(), BoardError> {
        let piece = self.get(src)?;
        let target = self.get(dst)?;
        let piece = piece.ok_or(BoardError::SquareEmpty { square: src })?;
        if target.is_some() {
            return Err(BoardError::SquareOccupied { square: dst });
        }
        self.grid.set(src, None)?;
        self.grid.set(dst, Some(piece))?;
        Ok(())
    }

    /// Promote the piece on `sq`, returning the promoted piece.
    pub fn promote(&mut self, sq: Square) -> Result<Piece, BoardError> {
        let piece = self.occupant(sq)?;
        let promoted = piece_promoted(sq, piece)?;
        self.grid.set(sq, Some(promoted))?;
        Ok(promoted)
    }

    /// Revert the promoted piece on `sq`, returning the unpromoted piece.
    pub fn unpromote(&mut self, sq: Square) -> Result<Piece, BoardError> {
        let piece = self.occupant(sq)?;
        if !piece.piece_type.is_promoted() {
            return Err(BoardError::NotPromoted { square: sq });
        }
        let base = piece.unpromoted();
        self.grid.set(sq, Some(base))?;
        Ok(base)
    }

    /// Turn the piece on `sq` over: promote it or revert it.
    pub fn toggle_promotion(&mut self, sq: Square) -> Result<Piece, BoardError> {
        let piece = self.occupant(sq)?;
        if !piece.piece_type.is_flippable() {
            return Err(BoardError::Unflippable {
                square: sq,
                piece_type: piece.piece_type,
            });
        }
        if piece.piece_type.is_promoted() {
            self.unpromote(sq)
        } else {
            self.promote(sq)
        }
    }

    /// All cells, row 0 first.
    pub(crate) fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        self.grid.rows()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid
            .iter()
            .filter_map(|(sq, cell)| cell.map(|piece| (sq, piece)))
    }

    /// Count pieces on the board whose base kind is `kind`, both sides.
    #[must_use]
    pub fn count_kind(&self, kind: PieceType) -> u32 {
        let base = kind.unpromoted();
        self.pieces()
            .filter(|(_, piece)| piece.piece_type.unpromoted() == base)
            .count() as u32
    }

    /// Overwrite a cell without occupancy checks. Used to restore state on undo.
    pub(crate) fn put(&mut self, sq: Square, cell: Option<Piece>) -> Result<(), BoardError> {
        self.grid.set(sq, cell)?;
        Ok(())
    }

    /// Decode the board segment of an SFEN string.
    pub fn from_sfen(board: &str) -> Result<Self, SfenError> {
        let ranks: Vec<&str> = board.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(SfenError::InvalidRankCount { found: ranks.len() });
        }

        let mut field = Field::new();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            let mut promote = false;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if promote {
                        return Err(SfenError::DanglingPromotion { rank: row });
                    }
                    if run == 0 {
                        return Err(SfenError::ZeroEmptyRun { rank: row });
                    }
                    col += run as usize;
                } else if c == '+' {
                    if promote {
                        return Err(SfenError::DanglingPromotion { rank: row });
                    }
                    promote = true;
                } else {
                    let mut piece =
                        symbol_to_piece(c).map_err(|_| SfenError::InvalidPiece { char: c })?;
                    if promote {
                        piece = piece
                            .promoted()
                            .ok_or(SfenError::Unpromotable { char: c })?;
                        promote = false;
                    }
                    field
                        .grid
                        .set(Square(row, col), Some(piece))
                        .map_err(|_| SfenError::InvalidRankWidth {
                            rank: row,
                            files: col + 1,
                        })?;
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(SfenError::InvalidRankWidth {
                        rank: row,
                        files: col,
                    });
                }
            }
            if promote {
                return Err(SfenError::DanglingPromotion { rank: row });
            }
            if col != BOARD_SIZE {
                return Err(SfenError::InvalidRankWidth {
                    rank: row,
                    files: col,
                });
            }
        }
        Ok(field)
    }

    /// Encode the field as an SFEN board segment.
    #[must_use]
    pub fn to_sfen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for cells in self.grid.rows() {
            let mut row = String::new();
            let mut empty = 0;
            for cell in cells {
                if let Some(piece) = cell {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push_str(&piece.to_sfen());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

fn piece_promoted(sq: Square, piece: Piece) -> Result<Piece, BoardError> {
    if piece.piece_type.is_promoted() {
        return Err(BoardError::AlreadyPromoted { square: sq });
    }
    piece.promoted().ok_or(BoardError::Unflippable {
        square: sq,
        piece_type: piece.piece_type,
    })
}

/// Check that `piece` can promote on `sq` without touching the field.
pub(crate) fn check_promotable(sq: Square, piece: Piece) -> Result<(), BoardError> {
    piece_promoted(sq, piece).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL";

    fn black(piece_type: PieceType) -> Piece {
        Piece::new(piece_type, Side::Black)
    }

    #[test]
    fn test_from_sfen_startpos() {
        let field = Field::from_sfen(STARTPOS).unwrap();
        assert_eq!(field.id_at(Square(0, 0)).unwrap(), -3);
        assert_eq!(field.id_at(Square(0, 4)).unwrap(), -8);
        assert_eq!(field.id_at(Square(1, 1)).unwrap(), -7);
        assert_eq!(field.id_at(Square(7, 1)).unwrap(), 6);
        assert_eq!(field.id_at(Square(7, 7)).unwrap(), 7);
        assert_eq!(field.id_at(Square(6, 2)).unwrap(), 1);
        assert_eq!(field.id_at(Square(4, 4)).unwrap(), 0);
        assert_eq!(field.pieces().count(), 40);
    }

    #[test]
    fn test_startpos_matches_sfen() {
        assert_eq!(Field::startpos(), Field::from_sfen(STARTPOS).unwrap());
        assert_eq!(Field::startpos().to_sfen(), STARTPOS);
    }

    #[test]
    fn test_rows_match_get() {
        let field = Field::startpos();
        for (row, cells) in field.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                assert_eq!(*cell, field.get(Square(row, col)).unwrap());
            }
        }
        assert_eq!(field.rows()[8][4], Some(black(PieceType::King)));
    }

    #[test]
    fn test_from_sfen_promoted_prefix() {
        let field = Field::from_sfen("4k4/9/9/9/4+r4/9/9/+P8/4K4").unwrap();
        assert_eq!(field.id_at(Square(4, 4)).unwrap(), -17);
        assert_eq!(field.id_at(Square(7, 0)).unwrap(), 11);
    }

    #[test]
    fn test_to_sfen_round_trip() {
        for board in [STARTPOS, "4k4/9/9/9/4+r4/9/9/+P8/4K4", "9/9/9/9/9/9/9/9/9"] {
            assert_eq!(Field::from_sfen(board).unwrap().to_sfen(), board);
        }
    }

    #[test]
    fn test_from_sfen_errors() {
        assert_eq!(
            Field::from_sfen("9/9/9"),
            Err(SfenError::InvalidRankCount { found: 3 })
        );
        assert_eq!(
            Field::from_sfen("9/9/9/9/9/9/9/9/8"),
            Err(SfenError::InvalidRankWidth { rank: 8, files: 8 })
        );
        assert_eq!(
            Field::from_sfen("9/9/9/9/9/9/9/9/9P"),
            Err(SfenError::InvalidRankWidth { rank: 8, files: 10 })
        );
        assert_eq!(
            Field::from_sfen("9/9/9/9/9/9/9/9/09"),
            Err(SfenError::ZeroEmptyRun { rank: 8 })
        );
        assert_eq!(
            Field::from_sfen("9/9/9/9/9/9/9/9/8x"),
            Err(SfenError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Field::from_sfen("9/9/9/9/9/9/9/9/8+"),
            Err(SfenError::DanglingPromotion { rank: 8 })
        );
        assert_eq!(
            Field::from_sfen("9/9/9/9/9/9/9/9/8+G"),
            Err(SfenError::Unpromotable { char: 'G' })
        );
    }

    #[test]
    fn test_place_and_get() {
        let mut field = Field::new();
        field.place(Square(4, 4), black(PieceType::Silver)).unwrap();
        assert_eq!(field.get(Square(4, 4)).unwrap(), Some(black(PieceType::Silver)));
        assert_eq!(
            field.place(Square(4, 4), black(PieceType::Gold)),
            Err(BoardError::SquareOccupied {
                square: Square(4, 4)
            })
        );
        assert_eq!(
            field.get(Square(9, 0)),
            Err(BoardError::OutOfBounds { row: 9, col: 0 })
        );
    }

    #[test]
    fn test_remove_demotes() {
        let mut field = Field::new();
        field.place(Square(2, 3), black(PieceType::Dragon)).unwrap();
        assert_eq!(field.remove(Square(2, 3)).unwrap(), black(PieceType::Rook));
        assert_eq!(field.get(Square(2, 3)).unwrap(), None);
        assert_eq!(
            field.remove(Square(2, 3)),
            Err(BoardError::SquareEmpty {
                square: Square(2, 3)
            })
        );
    }

    #[test]
    fn test_relocate() {
        let mut field = Field::new();
        field.place(Square(6, 2), black(PieceType::Pawn)).unwrap();
        field.place(Square(8, 0), black(PieceType::Lance)).unwrap();

        field.relocate(Square(6, 2), Square(5, 2)).unwrap();
        assert_eq!(field.get(Square(6, 2)).unwrap(), None);
        assert_eq!(field.get(Square(5, 2)).unwrap(), Some(black(PieceType::Pawn)));

        assert_eq!(
            field.relocate(Square(6, 2), Square(4, 2)),
            Err(BoardError::SquareEmpty {
                square: Square(6, 2)
            })
        );
        assert_eq!(
            field.relocate(Square(5, 2), Square(8, 0)),
            Err(BoardError::SquareOccupied {
                square: Square(8, 0)
            })
        );
        assert_eq!(
            field.relocate(Square(5, 2), Square(5, 9)),
            Err(BoardError::OutOfBounds { row: 5, col: 9 })
        );
        assert_eq!(field.get(Square(5, 2)).unwrap(), Some(black(PieceType::Pawn)));
    }

    #[test]
    fn test_promote_and_unpromote() {
        let mut field = Field::new();
        field.place(Square(1, 1), black(PieceType::Bishop)).unwrap();
        assert_eq!(field.promote(Square(1, 1)).unwrap(), black(PieceType::Horse));
        assert_eq!(field.id_at(Square(1, 1)).unwrap(), 16);
        assert_eq!(
            field.promote(Square(1, 1)),
            Err(BoardError::AlreadyPromoted {
                square: Square(1, 1)
            })
        );
        assert_eq!(field.unpromote(Square(1, 1)).unwrap(), black(PieceType::Bishop));
        assert_eq!(
            field.unpromote(Square(1, 1)),
            Err(BoardError::NotPromoted {
                square: Square(1, 1)
            })
        );
        assert_eq!(
            field.promote(Square(0, 0)),
            Err(BoardError::SquareEmpty {
                square: Square(0, 0)
            })
        );
    }

    #[test]
    fn test_toggle_promotion() {
        let mut field = Field::from_sfen(STARTPOS).unwrap();
        let knight = Square(0, 1);
        assert_eq!(field.toggle_promotion(knight).unwrap().id(), -12);
        assert_eq!(field.toggle_promotion(knight).unwrap().id(), -2);

        for sq in [Square(0, 3), Square(0, 4), Square(8, 4)] {
            let before = field.get(sq).unwrap().unwrap();
            assert_eq!(
                field.toggle_promotion(sq),
                Err(BoardError::Unflippable {
                    square: sq,
                    piece_type: before.piece_type,
                })
            );
            assert_eq!(field.get(sq).unwrap(), Some(before));
        }
    }

    #[test]
    fn test_count_kind_includes_promoted() {
        let field = Field::from_sfen("4k4/9/9/9/4+r4/9/9/+P8/4K4").unwrap();
        assert_eq!(field.count_kind(PieceType::Rook), 1);
        assert_eq!(field.count_kind(PieceType::Dragon), 1);
        assert_eq!(field.count_kind(PieceType::Pawn), 1);
        assert_eq!(field.count_kind(PieceType::King), 2);
    }
}
