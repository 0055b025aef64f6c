//! Zobrist hashing for shogi positions.
//!
//! Keys cover board placement, stand counts and the side to move. The table
//! is generated once from a fixed seed so hashes are stable across runs.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Piece, PieceType, Side, Square, BOARD_SIZE};

const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Stand counts above this share the last key.
const MAX_HAND_COUNT: usize = 18;

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][side][square_index]
    piece_keys: [[[u64; SQUARES]; 2]; 14],
    // hand_keys[side][hand_index][count]
    hand_keys: [[[u64; MAX_HAND_COUNT + 1]; 7]; 2],
    white_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x5348_4f47_4931_u64);
        let mut piece_keys = [[[0; SQUARES]; 2]; 14];
        let mut hand_keys = [[[0; MAX_HAND_COUNT + 1]; 7]; 2];

        for kind in &mut piece_keys {
            for side in kind.iter_mut() {
                for key in side.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        for side in &mut hand_keys {
            for kind in side.iter_mut() {
                // count 0 hashes to nothing
                for key in kind.iter_mut().skip(1) {
                    *key = rng.gen();
                }
            }
        }

        ZobristKeys {
            piece_keys,
            hand_keys,
            white_to_move_key: rng.gen(),
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn piece_key(piece: Piece, sq: Square) -> u64 {
    ZOBRIST.piece_keys[piece.piece_type.index()][piece.side.index()][sq.index()]
}

#[inline]
pub(crate) fn hand_key(side: Side, kind: PieceType, count: u32) -> u64 {
    match kind.hand_index() {
        Some(idx) => {
            let count = (count as usize).min(MAX_HAND_COUNT);
            ZOBRIST.hand_keys[side.index()][idx][count]
        }
        None => 0,
    }
}

#[inline]
pub(crate) fn side_key(side: Side) -> u64 {
    match side {
        Side::Black => 0,
        Side::White => ZOBRIST.white_to_move_key,
    }
}
