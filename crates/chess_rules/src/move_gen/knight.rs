//! Knight move generation
//!
//! Knights jump in an L-shape (two squares one way, one square
//! perpendicular) and cannot be blocked. All eight offsets are emitted;
//! off-board ones are filtered by the caller.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::*;

pub fn generate_knight_moves(_knight: &Piece, from: Square, _board: &Board, moves: &mut Vec<Square>) {
    moves.extend(KNIGHT_OFFSETS.iter().map(|&(dx, dy)| from.offset(dx, dy)));
}
