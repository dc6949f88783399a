//! Sliding piece move generation
//!
//! Common ray casting for bishops, rooks and queens. Each ray runs to the
//! board edge and stops at the first occupied square, which is included as a
//! candidate whatever its colour (a friendly blocker is still defended, and
//! the legality filter drops it from move lists).

use crate::board::Board;
use crate::types::*;

/// Cast one ray per direction from `from`, appending every reached square
pub fn generate_sliding_moves(
    from: Square,
    directions: &[(i32, i32)],
    board: &Board,
    moves: &mut Vec<Square>,
) {
    for &(dx, dy) in directions {
        let mut current = from.offset(dx, dy);

        while let Ok(occupant) = board.piece_at(current) {
            moves.push(current);
            if !occupant.is_empty() {
                break;
            }
            current = current.offset(dx, dy);
        }
    }
}
