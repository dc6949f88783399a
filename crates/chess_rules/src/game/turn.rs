//! Turn tracking
//!
//! Whose turn it is, the move number and the phase within the current turn.
//!
//! # Turn Flow
//!
//! ```text
//! WaitingForInput -> PieceSelected -> WaitingForInput       (cancel, returned piece, committed move)
//!                                  -> AwaitingPromotion -> WaitingForInput
//!                                  -> GameOver
//! WaitingForInput -> GameOver                                (position loaded already mated)
//! ```
//!
//! Move numbers follow chess notation: move 1 is White's first move and
//! Black's reply, and the number increments once Black has moved.

use tracing::{debug, error};

use crate::board::Board;
use crate::types::*;

/// Phase within a single player's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    /// Waiting for the side to move to pick up a piece
    #[default]
    WaitingForInput,
    /// A piece is held
    PieceSelected,
    /// A pawn reached the last rank; all other input is blocked
    AwaitingPromotion,
    /// Checkmate, terminal
    GameOver,
}

/// Side to move, move number and turn phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub color: Color,
    pub move_number: u32,
    phase: TurnPhase,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl TurnState {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            move_number: 1,
            phase: TurnPhase::WaitingForInput,
        }
    }

    #[inline]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Move to `next` if the transition is allowed.
    ///
    /// Invalid transitions are logged and refused, leaving the phase as it
    /// was. Returns whether the phase changed.
    pub fn transition_to(&mut self, next: TurnPhase) -> bool {
        let valid = matches!(
            (self.phase, next),
            (TurnPhase::WaitingForInput, TurnPhase::PieceSelected)
                | (TurnPhase::WaitingForInput, TurnPhase::GameOver)
                | (TurnPhase::PieceSelected, TurnPhase::WaitingForInput)
                | (TurnPhase::PieceSelected, TurnPhase::AwaitingPromotion)
                | (TurnPhase::PieceSelected, TurnPhase::GameOver)
                | (TurnPhase::AwaitingPromotion, TurnPhase::WaitingForInput)
                | (TurnPhase::AwaitingPromotion, TurnPhase::GameOver)
        );

        if !valid {
            error!(
                "[TURN_STATE] Invalid turn state transition: {:?} -> {:?}",
                self.phase, next
            );
            return false;
        }

        debug!("[TURN_STATE] {:?} -> {:?}", self.phase, next);
        self.phase = next;
        true
    }

    /// Hand the move to the other side
    pub fn switch(&mut self) {
        self.color = match self.color {
            Color::White => Color::Black,
            Color::Black => {
                self.move_number += 1;
                Color::White
            }
        };
    }
}

/// End-of-turn expiry of the pawn double-step flags.
///
/// A pawn that advanced two squares this turn keeps `moved_two_squares`
/// through the opponent's reply; after that sweep it is cleared.
pub fn sweep_pawn_flags(board: &mut Board) {
    for piece in board.pieces_mut() {
        if piece.kind != PieceKind::Pawn {
            continue;
        }
        if !piece.pawn.moved_last_turn {
            piece.pawn.moved_two_squares = false;
        }
        piece.pawn.moved_last_turn = false;
    }
}
