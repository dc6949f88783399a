//! Attack sets and square checking
//!
//! Each piece caches the squares it attacks in `Piece::attacking`. These
//! caches are what check detection reads, so they must be refreshed after
//! every committed move ([`update_all_attacks`]).
//!
//! Attacked squares are filtered to the board only. A square occupied by a
//! friendly piece still counts: it is defended, and the enemy king may not
//! take it.
//!
//! Hypothetical positions (during simulate-and-restore) are evaluated with
//! [`is_attacked_by`], which recomputes patterns from geometry without
//! touching any cache.

use std::collections::HashSet;

use super::attack_pattern;
use crate::board::Board;
use crate::types::*;

/// Refresh the `attacking` cache of every piece on the board
pub fn update_all_attacks(board: &mut Board) {
    let refreshed: Vec<(Square, Vec<Square>)> = board
        .iter_occupied()
        .map(|(square, piece)| {
            let pattern = attack_pattern(piece, square, board);
            (square, board.retain_on_board(pattern))
        })
        .collect();

    for (square, attacking) in refreshed {
        if let Ok(piece) = board.piece_at_mut(square) {
            piece.attacking = attacking;
        }
    }
}

/// Squares attacked by the opponents of `color`, from the cached sets.
///
/// Each square appears once, in first-seen order.
pub fn attacked_squares(board: &Board, color: Color) -> Vec<Square> {
    let mut seen = HashSet::new();

    board
        .iter_occupied()
        .filter(|(_, piece)| piece.color != color)
        .flat_map(|(_, piece)| piece.attacking.iter().copied())
        .filter(|square| seen.insert(*square))
        .collect()
}

/// Whether any piece of `by` attacks `target` in the position as it stands,
/// ignoring cached sets
pub fn is_attacked_by(board: &Board, target: Square, by: Color) -> bool {
    board
        .iter_occupied()
        .filter(|(_, piece)| piece.color == by)
        .any(|(square, piece)| attack_pattern(piece, square, board).contains(&target))
}
