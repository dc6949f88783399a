//! Chess rules engine for hot-seat play
//!
//! A rules-only library: board storage, per-piece move generation, legality
//! filtering, check and checkmate detection, the castling, en passant and
//! promotion state machines, and a turn controller that enforces them
//! across sequential turns. Rendering and input mapping belong to the shell
//! that drives it.
//!
//! # Architecture
//!
//! - [`board`]: fixed-size grid of [`Piece`]s, no rules
//! - [`piece`]: per-piece state and lifecycle hooks
//! - [`move_gen`]: candidate moves and attack patterns, one module per kind
//! - [`rules`]: legal moves, check, checkmate
//! - [`game`]: the turn controller
//!
//! # Coordinates
//!
//! Squares are `(x, y)` with `x` in `[0, width)` and `y` in `[0, height)`.
//! White starts on ranks 0 and 1 and advances toward increasing `y`. In the
//! standard setup kings stand on `x = 3` and queens on `x = 4`.
//!
//! # Example
//!
//! ```rust,ignore
//! use chess_rules::{Game, GamePhase, Square};
//!
//! let mut game = Game::new();
//! game.play(Square::new(3, 1), Square::new(3, 3))?;
//! assert_eq!(game.status(), GamePhase::Playing);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod move_gen;
pub mod piece;
pub mod rules;
pub mod types;

pub use board::Board;
pub use error::{ChessRulesError, RulesResult};
pub use game::{
    Game, GamePhase, MoveRecord, PendingPromotion, ReleaseOutcome, TurnPhase, TurnState,
};
pub use piece::{PawnState, Piece, ReleaseEffects};
pub use types::{CastleOption, Color, EnPassantOption, PieceKind, Square};
