//! Queen move generation
//!
//! The queen combines rook and bishop movement. Rook rays are emitted first,
//! then bishop rays, so move lists keep a stable order.

use super::bishop::generate_bishop_moves;
use super::rook::generate_rook_moves;
use crate::board::Board;
use crate::piece::Piece;
use crate::types::*;

pub fn generate_queen_moves(queen: &Piece, from: Square, board: &Board, moves: &mut Vec<Square>) {
    generate_rook_moves(queen, from, board, moves);
    generate_bishop_moves(queen, from, board, moves);
}
