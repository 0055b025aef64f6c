use log::trace;

use crate::zobrist::{hand_key, piece_key, side_key};

use super::error::BoardError;
use super::field::{check_promotable, Field};
use super::record::MoveRecord;
use super::stand::Stand;
use super::types::{Piece, PieceType, Side, Square};

/// A shogi position: the field, both stands, the side to move and the
/// moves applied so far.
///
/// Mutating calls check every precondition before touching any state, so a
/// call that returns an error leaves the position exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    field: Field,
    stands: [Stand; 2],
    side_to_move: Side,
    move_count: u32,
    last_move: Option<Square>,
    history: Vec<MoveRecord>,
}

impl Position {
    /// The standard starting position, Black to move, move 1.
    #[must_use]
    pub fn new() -> Self {
        Position::from_parts(Field::startpos(), [Stand::new(); 2], Side::Black, 1)
    }

    pub(crate) fn from_parts(
        field: Field,
        stands: [Stand; 2],
        side_to_move: Side,
        move_count: u32,
    ) -> Self {
        Position {
            field,
            stands,
            side_to_move,
            move_count,
            last_move: None,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[inline]
    #[must_use]
    pub fn stand(&self, side: Side) -> &Stand {
        &self.stands[side.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Destination of the most recent move or drop.
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Square> {
        self.last_move
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn piece_at(&self, sq: Square) -> Result<Option<Piece>, BoardError> {
        self.field.get(sq)
    }

    /// Signed identifier on `sq`, 0 when empty.
    pub fn id_at(&self, sq: Square) -> Result<i8, BoardError> {
        self.field.id_at(sq)
    }

    /// Moves and drops never advance the counter; the driver does.
    pub fn increment_move_count(&mut self) {
        self.move_count = self.move_count.saturating_add(1);
    }

    /// Drop a piece of `kind` from the mover's stand onto `dst`.
    pub fn drop_piece(&mut self, dst: Square, kind: PieceType) -> Result<(), BoardError> {
        if self.field.get(dst)?.is_some() {
            return Err(BoardError::SquareOccupied { square: dst });
        }
        let mover = self.side_to_move;
        self.stands[mover.index()].check_take(kind, 1)?;

        let piece = Piece::new(kind, mover);
        self.stands[mover.index()].take(kind, 1)?;
        self.field.place(dst, piece)?;
        self.commit(MoveRecord::Drop { to: dst, piece });
        Ok(())
    }

    /// Move the piece on `src` to `dst`, capturing whatever stands there and
    /// optionally promoting it on arrival.
    pub fn make_move(&mut self, src: Square, dst: Square, promote: bool) -> Result<(), BoardError> {
        let mover = self.side_to_move;

        let captured = self.field.get(dst)?;
        if let Some(target) = captured {
            if target.side == mover {
                return Err(BoardError::FriendlyFire { square: dst });
            }
            if target.piece_type == PieceType::King {
                return Err(BoardError::NotHandPiece {
                    piece_type: PieceType::King,
                });
            }
        }

        let piece = match self.field.get(src)? {
            Some(piece) if src != dst => piece,
            _ => return Err(BoardError::SquareEmpty { square: src }),
        };
        if promote {
            check_promotable(dst, piece)?;
        }

        if captured.is_some() {
            let taken = self.field.remove(dst)?;
            self.stands[mover.index()].add(taken.piece_type, 1)?;
        }
        self.field.relocate(src, dst)?;
        if promote {
            self.field.promote(dst)?;
        }
        self.commit(MoveRecord::Normal {
            from: src,
            to: dst,
            piece,
            captured,
            promoted: promote,
        });
        Ok(())
    }

    /// Turn the piece on `sq` over. The side to move is unchanged.
    pub fn flip(&mut self, sq: Square) -> Result<Piece, BoardError> {
        self.field.toggle_promotion(sq)
    }

    /// Take back the most recent move or drop.
    ///
    /// Returns `Ok(None)` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Result<Option<MoveRecord>, BoardError> {
        let Some(&record) = self.history.last() else {
            return Ok(None);
        };
        let mover = self.side_to_move.opponent();

        match record {
            MoveRecord::Normal {
                from,
                to,
                piece,
                captured,
                ..
            } => {
                if let Some(taken) = captured {
                    self.stands[mover.index()].check_take(taken.piece_type.unpromoted(), 1)?;
                }
                self.field.get(from)?;
                if let Some(taken) = captured {
                    self.stands[mover.index()].take(taken.piece_type.unpromoted(), 1)?;
                }
                self.field.put(to, captured)?;
                self.field.put(from, Some(piece))?;
            }
            MoveRecord::Drop { to, piece } => {
                self.field.get(to)?;
                self.stands[mover.index()].add(piece.piece_type, 1)?;
                self.field.put(to, None)?;
            }
        }

        self.history.pop();
        self.side_to_move = mover;
        self.last_move = self.history.last().map(MoveRecord::to);
        trace!("undo {}", record.to_usi());
        Ok(Some(record))
    }

    /// Zobrist hash over placement, stand counts and side to move.
    #[must_use]
    pub fn hash(&self) -> u64 {
        let mut hash = side_key(self.side_to_move);
        for (sq, piece) in self.field.pieces() {
            hash ^= piece_key(piece, sq);
        }
        for side in Side::BOTH {
            for (kind, count) in self.stands[side.index()].iter() {
                hash ^= hand_key(side, kind, count);
            }
        }
        hash
    }

    /// Board plus stand count of every base kind, both sides together.
    #[must_use]
    pub fn material_total(&self, kind: PieceType) -> u32 {
        self.field.count_kind(kind)
            + Side::BOTH
                .iter()
                .map(|&side| self.stand(side).count(kind))
                .sum::<u32>()
    }

    fn commit(&mut self, record: MoveRecord) {
        trace!("{} {}", self.side_to_move, record.to_usi());
        self.last_move = Some(record.to());
        self.history.push(record);
        self.side_to_move = self.side_to_move.opponent();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
