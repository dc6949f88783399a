//! King move generation
//!
//! ## King Movement Rules
//!
//! - One square in any direction (8 destinations, fewer at an edge)
//! - Castling while the king has never moved: scanning outward along the
//!   king's rank, the first occupant in a direction must be a friendly rook
//!   that has never moved. The king then lands two squares toward that rook
//!   and the rook lands on the square the king crossed.
//!
//! ## Note on Castling
//!
//! Only the piece conditions above are checked. Whether the king is in
//! check, passes through an attacked square or lands on one (beyond the
//! usual self-check filter on the landing square) is not tested.
//!
//! The rook must stand beyond the king's landing square; a rook two squares
//! away would be jumped onto and is not a castling partner.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::*;

pub fn generate_king_moves(king: &Piece, from: Square, board: &Board, moves: &mut Vec<Square>) {
    moves.extend(KING_OFFSETS.iter().map(|&(dx, dy)| from.offset(dx, dy)));
    moves.extend(castle_options(king, from, board).iter().map(|op| op.king_to));
}

/// Castling options for `king` on `from`, left side first
pub fn castle_options(king: &Piece, from: Square, board: &Board) -> Vec<CastleOption> {
    if king.moved {
        return Vec::new();
    }

    let mut options = Vec::new();

    for dx in [-1, 1] {
        let mut current = from.offset(dx, 0);

        while let Ok(occupant) = board.piece_at(current) {
            if occupant.is_empty() {
                current = current.offset(dx, 0);
                continue;
            }

            let partner = occupant.kind == PieceKind::Rook
                && occupant.color == king.color
                && !occupant.moved
                && (current.x - from.x).abs() >= 3;

            if partner {
                options.push(CastleOption {
                    king_to: from.offset(2 * dx, 0),
                    rook_from: current,
                    rook_to: from.offset(dx, 0),
                });
            }
            break;
        }
    }

    options
}
