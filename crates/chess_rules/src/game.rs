//! Turn controller
//!
//! [`Game`] owns the board and drives a hot-seat game through
//! pick up / release requests. Every committed move runs the same sequence:
//!
//! 1. [`Board::move_piece`] relocates the held piece
//! 2. the piece's release hook commits its side effects (rook relocation,
//!    en passant removal, pawn flags, promotion eligibility)
//! 3. every attack set is refreshed
//! 4. the turn advances: pawn double-step flags expire, the side to move
//!    switches and the move number is updated
//! 5. a pawn on its last rank opens a promotion and blocks further input
//! 6. otherwise check and checkmate are evaluated for the side now to move
//!
//! Requests that are merely against the rules are not errors. Picking up an
//! opponent's piece is ignored and releasing onto a square outside the
//! held piece's legal moves returns it to where it stood.

mod promotion;
mod turn;

pub use promotion::PendingPromotion;
pub use turn::{sweep_pawn_flags, TurnPhase, TurnState};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{ChessRulesError, RulesResult};
use crate::rules;
use crate::types::*;

/// Check status of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// The given side is in check and has a legal reply
    Check(Color),
    /// The given side has no legal move; the game is over
    Checkmate(Color),
}

/// A committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub color: Color,
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    /// `PieceKind::None` when nothing was taken
    pub captured: PieceKind,
    pub castle: Option<CastleOption>,
    /// Square of the pawn taken en passant
    pub en_passant: Option<Square>,
    /// Filled in once the pending promotion is resolved
    pub promotion: Option<PieceKind>,
}

/// What a release request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The move was legal and has been committed
    Moved(MoveRecord),
    /// The destination was not a legal move; the piece went back
    Returned,
    /// No piece was held
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: TurnState,
    status: GamePhase,
    held: Option<Square>,
    pending_promotion: Option<PendingPromotion>,
    last_move: Option<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position, White to move
    pub fn new() -> Self {
        let mut board = Board::standard();
        rules::update_all_attacks(&mut board);

        Self {
            board,
            turn: TurnState::default(),
            status: GamePhase::Playing,
            held: None,
            pending_promotion: None,
            last_move: None,
        }
    }

    /// A game from an arbitrary position with `turn` to move
    pub fn from_board(mut board: Board, turn: Color) -> RulesResult<Self> {
        rules::update_all_attacks(&mut board);

        let mut game = Self {
            board,
            turn: TurnState::new(turn),
            status: GamePhase::Playing,
            held: None,
            pending_promotion: None,
            last_move: None,
        };
        game.evaluate_status()?;
        if matches!(game.status, GamePhase::Checkmate(_)) {
            game.turn.transition_to(TurnPhase::GameOver);
        }
        Ok(game)
    }

    /// Back to the starting position
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("[GAME] Reset to starting position");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GamePhase {
        self.status
    }

    /// Side to move
    pub fn turn(&self) -> Color {
        self.turn.color
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    pub fn move_number(&self) -> u32 {
        self.turn.move_number
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Square of the held piece
    pub fn held(&self) -> Option<Square> {
        self.held
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    pub fn is_over(&self) -> bool {
        self.turn.phase() == TurnPhase::GameOver
    }

    /// Pick up the piece on `(x, y)`.
    ///
    /// Returns its legal moves, or `None` when the request is ignored: a
    /// piece is already held, a promotion is pending, the game is over or
    /// the piece belongs to the side not on move.
    pub fn pick_up(&mut self, x: i32, y: i32) -> RulesResult<Option<Vec<Square>>> {
        let square = Square::new(x, y);
        let piece = self.board.piece_at(square)?;

        if self.turn.phase() != TurnPhase::WaitingForInput {
            debug!("[INPUT] Pick up ignored during {:?}", self.turn.phase());
            return Ok(None);
        }
        if piece.is_empty() {
            return Err(ChessRulesError::EmptySquare { x, y });
        }
        if !piece.belongs_to(self.turn.color) {
            debug!("[INPUT] {} cannot pick up a {} piece", self.turn.color, piece.color);
            return Ok(None);
        }

        let moves = rules::on_pickup(&mut self.board, square)?;
        self.held = Some(square);
        self.turn.transition_to(TurnPhase::PieceSelected);

        debug!("[INPUT] Picked up piece on {} with {} moves", square, moves.len());
        Ok(Some(moves))
    }

    /// Drop the held piece on `(x, y)`, committing the move when it is legal
    pub fn release(&mut self, x: i32, y: i32) -> RulesResult<ReleaseOutcome> {
        let Some(from) = self.held else {
            return Ok(ReleaseOutcome::Ignored);
        };
        let to = Square::new(x, y);
        let captured = self.board.piece_at(to)?.kind;

        let (color, kind, legal) = {
            let mover = self.board.piece_at(from)?;
            (mover.color, mover.kind, mover.can_move_to(to))
        };
        if !legal {
            self.put_back(from)?;
            debug!("[INPUT] {} is not a legal destination, piece returned", to);
            return Ok(ReleaseOutcome::Returned);
        }

        self.board.move_piece(from.x, from.y, to.x, to.y)?;
        let effects = rules::release(&mut self.board, to)?;
        rules::update_all_attacks(&mut self.board);
        self.held = None;

        sweep_pawn_flags(&mut self.board);
        self.turn.switch();

        let record = MoveRecord {
            color,
            kind,
            from,
            to,
            captured: if effects.en_passant_capture.is_some() {
                PieceKind::Pawn
            } else {
                captured
            },
            castle: effects.castle,
            en_passant: effects.en_passant_capture,
            promotion: None,
        };
        self.last_move = Some(record);
        info!("[MOVE] {} {:?} {} -> {}", color, kind, from, to);

        if effects.needs_promotion {
            self.pending_promotion = Some(PendingPromotion { color, square: to });
            self.turn.transition_to(TurnPhase::AwaitingPromotion);
            info!("[PROMOTION] {} pawn on {} awaits promotion", color, to);
        } else {
            self.finish_turn()?;
        }

        Ok(ReleaseOutcome::Moved(record))
    }

    /// Pick up on `from` and release on `to` in one request
    pub fn play(&mut self, from: Square, to: Square) -> RulesResult<ReleaseOutcome> {
        if self.pick_up(from.x, from.y)?.is_none() {
            return Ok(ReleaseOutcome::Ignored);
        }
        self.release(to.x, to.y)
    }

    /// Put the held piece back without moving. Returns whether a piece was held.
    pub fn cancel(&mut self) -> RulesResult<bool> {
        match self.held {
            Some(square) => {
                self.put_back(square)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the pawn waiting for promotion with a piece of `kind`
    pub fn promote(&mut self, kind: PieceKind) -> RulesResult<()> {
        let pending = self
            .pending_promotion
            .ok_or(ChessRulesError::NoPendingPromotion)?;

        pending.apply(&mut self.board, kind)?;
        self.pending_promotion = None;
        rules::update_all_attacks(&mut self.board);

        if let Some(record) = self.last_move.as_mut() {
            record.promotion = Some(kind);
        }

        self.finish_turn()
    }

    /// Legal moves of every piece of the side to move, skipping pieces
    /// without any
    pub fn legal_moves(&mut self) -> RulesResult<Vec<(Square, Vec<Square>)>> {
        let mut all = Vec::new();
        for square in self.board.squares_of(self.turn.color) {
            let moves = rules::compute_legal_moves(&mut self.board, square)?;
            if !moves.is_empty() {
                all.push((square, moves));
            }
        }
        Ok(all)
    }

    fn put_back(&mut self, square: Square) -> RulesResult<()> {
        let piece = self.board.piece_at_mut(square)?;
        piece.valid_moves.clear();
        piece.castle_options.clear();
        piece.pawn.en_passant.clear();
        piece.start_drawing();

        self.held = None;
        self.turn.transition_to(TurnPhase::WaitingForInput);
        Ok(())
    }

    fn finish_turn(&mut self) -> RulesResult<()> {
        self.evaluate_status()?;

        let next = match self.status {
            GamePhase::Checkmate(_) => TurnPhase::GameOver,
            _ => TurnPhase::WaitingForInput,
        };
        self.turn.transition_to(next);
        Ok(())
    }

    fn evaluate_status(&mut self) -> RulesResult<()> {
        let color = self.turn.color;

        self.status = if rules::is_checkmate(&mut self.board, color)? {
            info!("[GAME_OVER] Checkmate, {} has no legal moves", color);
            GamePhase::Checkmate(color)
        } else if rules::is_in_check(&self.board, color) {
            info!("[CHECK] {} is in check", color);
            GamePhase::Check(color)
        } else {
            GamePhase::Playing
        };
        Ok(())
    }
}
