//! Bishop move generation: diagonal rays

use super::sliding::generate_sliding_moves;
use crate::board::Board;
use crate::piece::Piece;
use crate::types::*;

pub fn generate_bishop_moves(_bishop: &Piece, from: Square, board: &Board, moves: &mut Vec<Square>) {
    generate_sliding_moves(from, &BISHOP_DIRS, board, moves);
}
