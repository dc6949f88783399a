//! Pawn promotion
//!
//! A pawn that lands on its farthest rank leaves a [`PendingPromotion`]
//! behind. Until the player chooses a replacement the controller accepts no
//! other input.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::Board;
use crate::error::{ChessRulesError, RulesResult};
use crate::piece::Piece;
use crate::types::*;

/// A pawn waiting to be replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPromotion {
    pub color: Color,
    pub square: Square,
}

impl PendingPromotion {
    /// Replace the pawn with a fresh piece of `kind`.
    ///
    /// Only Queen, Rook, Bishop and Knight are accepted; on any other kind
    /// the board is left untouched.
    pub fn apply(&self, board: &mut Board, kind: PieceKind) -> RulesResult<()> {
        if !kind.is_promotion_target() {
            return Err(ChessRulesError::InvalidPromotion { kind });
        }

        board.set(
            self.square.x,
            self.square.y,
            Piece::promoted(kind, self.color, self.square),
        )?;

        info!(
            "[PROMOTION] {} pawn at {} promoted to {:?}",
            self.color, self.square, kind
        );
        Ok(())
    }
}
