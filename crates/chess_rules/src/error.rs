//! Error types for the rules engine
//!
//! Only structurally invalid requests are errors: squares outside the grid,
//! malformed pieces, or controller calls made in the wrong phase. A move that
//! is merely against the rules of chess is never an error, it is simply
//! absent from the legal-move list.

use thiserror::Error;

use crate::types::PieceKind;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessRulesError {
    /// Square addressed outside `[0, width) x [0, height)`
    #[error("Position ({x}, {y}) is outside of the {width}x{height} board")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// Value placed on the board is not a recognised piece or the empty sentinel
    #[error("Invalid piece: {reason}")]
    InvalidPiece { reason: String },

    /// Board constructed with a zero-sized dimension
    #[error("Invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Controller asked to act on a vacant square
    #[error("No piece at position ({x}, {y})")]
    EmptySquare { x: i32, y: i32 },

    /// Promotion choice supplied while no pawn is waiting for one
    #[error("No promotion is pending")]
    NoPendingPromotion,

    /// Promotion to a kind a pawn cannot become
    #[error("A pawn cannot be promoted to {kind:?}")]
    InvalidPromotion { kind: PieceKind },
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, ChessRulesError>;
