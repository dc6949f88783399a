//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, blocked by any occupant
//! - **Double push**: two squares while the pawn has never moved, both squares
//!   empty
//! - **Captures**: diagonally forward one square, only onto an enemy piece
//! - **En passant**: diagonally forward onto an empty square when the enemy
//!   pawn beside it on the same rank has just advanced two squares
//! - **Promotion**: detected on release, see [`Piece::on_release`]
//!
//! White advances toward increasing `y`, black toward decreasing `y`.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::*;

fn is_vacant(board: &Board, square: Square) -> bool {
    board.piece_at(square).map(Piece::is_empty).unwrap_or(false)
}

/// Generate pawn move candidates from `from`
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&pawn, Square::new(4, 1), &board, &mut moves);
/// // (4, 2), (4, 3) plus any diagonal captures
/// ```
pub fn generate_pawn_moves(pawn: &Piece, from: Square, board: &Board, moves: &mut Vec<Square>) {
    let dir = pawn.color.forward();
    let one = from.offset(0, dir);

    if is_vacant(board, one) {
        moves.push(one);

        if !pawn.moved {
            let two = from.offset(0, 2 * dir);
            if is_vacant(board, two) {
                moves.push(two);
            }
        }
    }

    for dx in [-1, 1] {
        let diagonal = from.offset(dx, dir);
        if let Ok(target) = board.piece_at(diagonal) {
            if !target.is_empty() {
                moves.push(diagonal);
            }
        }
    }

    moves.extend(en_passant_options(pawn, from, board).iter().map(|op| op.landing));
}

/// Diagonal-forward squares this pawn threatens, whether or not it could move there
pub fn generate_pawn_attacks(pawn: &Piece, from: Square, board: &Board, moves: &mut Vec<Square>) {
    let (width, _) = board.size();
    let dir = pawn.color.forward();

    for dx in [-1, 1] {
        let x = from.x + dx;
        if x >= 0 && x < width {
            moves.push(Square::new(x, from.y + dir));
        }
    }
}

/// En passant captures available to `pawn` on `from`
pub fn en_passant_options(pawn: &Piece, from: Square, board: &Board) -> Vec<EnPassantOption> {
    let dir = pawn.color.forward();
    let mut options = Vec::new();

    for dx in [-1, 1] {
        let beside = from.offset(dx, 0);
        let Ok(neighbour) = board.piece_at(beside) else {
            continue;
        };

        let capturable = neighbour.kind == PieceKind::Pawn
            && neighbour.color != pawn.color
            && neighbour.pawn.moved_two_squares;
        let landing = beside.offset(0, dir);

        if capturable && is_vacant(board, landing) {
            options.push(EnPassantOption {
                landing,
                captured: beside,
            });
        }
    }

    options
}
