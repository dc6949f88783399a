//! Rook move generation: orthogonal rays

use super::sliding::generate_sliding_moves;
use crate::board::Board;
use crate::piece::Piece;
use crate::types::*;

pub fn generate_rook_moves(_rook: &Piece, from: Square, board: &Board, moves: &mut Vec<Square>) {
    generate_sliding_moves(from, &ROOK_DIRS, board, moves);
}
