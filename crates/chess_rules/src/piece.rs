//! Piece model
//!
//! Every square of a [`Board`] holds a [`Piece`]. Vacant squares hold the
//! empty sentinel (`PieceKind::None`) rather than a missing value, so readers
//! only ever compare kinds.
//!
//! Pieces carry their own move history (`moved`, the pawn double-step flags)
//! and two caches:
//! - `valid_moves`: legal destinations, refreshed by
//!   [`compute_legal_moves`](crate::rules::compute_legal_moves)
//! - `attacking`: squares the piece threatens by geometry alone, refreshed by
//!   [`update_all_attacks`](crate::move_gen::attack::update_all_attacks)
//!
//! The two differ: attacked squares ignore self-check and occupancy, and a
//! pawn attacks its forward diagonals even when it cannot move there.

use tracing::debug;

use crate::board::Board;
use crate::error::{ChessRulesError, RulesResult};
use crate::move_gen;
use crate::types::*;

/// Position recorded on the empty sentinel, never a real square
const SENTINEL_POSITION: Square = Square::new(-1, -1);

/// Pawn-only move history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PawnState {
    /// True only during the opponent turn right after a two-square advance
    pub moved_two_squares: bool,
    /// Drives expiry of `moved_two_squares` in the end-of-turn sweep
    pub moved_last_turn: bool,
    /// Set when the pawn lands on the farthest rank for its colour
    pub needs_promotion: bool,
    /// En passant captures found by the last legal-move query
    pub en_passant: Vec<EnPassantOption>,
}

/// A board occupant: a chess piece or the empty sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    /// Meaningless on the empty sentinel; use [`Piece::owner`] when the
    /// square may be vacant.
    pub color: Color,
    pub position: Square,
    /// Ever moved (castling and pawn double-step eligibility)
    pub moved: bool,
    pub valid_moves: Vec<Square>,
    pub attacking: Vec<Square>,
    /// False while the piece is held by a player
    pub is_drawing: bool,
    pub pawn: PawnState,
    /// King-only, recomputed on every legal-move query
    pub castle_options: Vec<CastleOption>,
}

/// Side effects committed by a release hook, reported to the controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseEffects {
    /// Square of the pawn removed by an en passant capture
    pub en_passant_capture: Option<Square>,
    /// Castling option executed by a king
    pub castle: Option<CastleOption>,
    pub needs_promotion: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, x: i32, y: i32) -> Self {
        Self {
            kind,
            color,
            position: Square::new(x, y),
            moved: false,
            valid_moves: Vec::new(),
            attacking: Vec::new(),
            is_drawing: true,
            pawn: PawnState::default(),
            castle_options: Vec::new(),
        }
    }

    /// The empty sentinel
    pub fn none() -> Self {
        Self::new(PieceKind::None, Color::White, SENTINEL_POSITION.x, SENTINEL_POSITION.y)
    }

    /// A piece created by promotion. It counts as having moved, so a promoted
    /// rook never becomes a castling partner.
    pub fn promoted(kind: PieceKind, color: Color, at: Square) -> Self {
        Self {
            moved: true,
            ..Self::new(kind, color, at.x, at.y)
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind == PieceKind::None
    }

    /// Colour of the occupant, `None` for the sentinel
    #[inline]
    pub fn owner(&self) -> Option<Color> {
        if self.is_empty() {
            None
        } else {
            Some(self.color)
        }
    }

    #[inline]
    pub fn belongs_to(&self, color: Color) -> bool {
        self.owner() == Some(color)
    }

    /// Whether the cached legal moves include `target`
    pub fn can_move_to(&self, target: Square) -> bool {
        self.valid_moves.contains(&target)
    }

    pub fn needs_promotion(&self) -> bool {
        self.kind == PieceKind::Pawn && self.pawn.needs_promotion
    }

    /// Reject combinations no constructor produces: per-kind state on the
    /// wrong kind, or any state on the empty sentinel.
    pub fn validate(&self) -> RulesResult<()> {
        if self.is_empty() {
            let carries_state = self.moved
                || !self.valid_moves.is_empty()
                || !self.attacking.is_empty()
                || self.pawn != PawnState::default()
                || !self.castle_options.is_empty();
            if carries_state {
                return Err(ChessRulesError::InvalidPiece {
                    reason: "empty square sentinel carries piece state".to_string(),
                });
            }
            return Ok(());
        }

        if self.kind != PieceKind::Pawn && self.pawn != PawnState::default() {
            return Err(ChessRulesError::InvalidPiece {
                reason: format!("{:?} carries pawn state", self.kind),
            });
        }

        if self.kind != PieceKind::King && !self.castle_options.is_empty() {
            return Err(ChessRulesError::InvalidPiece {
                reason: format!("{:?} carries castle options", self.kind),
            });
        }

        Ok(())
    }

    /// Raw squares this piece threatens from its recorded position
    pub fn generate_attack_pattern(&self, board: &Board) -> Vec<Square> {
        move_gen::attack_pattern(self, self.position, board)
    }

    /// Recompute `attacking`, keeping only on-board squares
    pub fn update_attack_moves(&mut self, board: &Board) {
        let pattern = self.generate_attack_pattern(board);
        self.attacking = board.retain_on_board(pattern);
    }

    /// Stop drawing the piece on its square while it is held
    pub fn stop_drawing(&mut self) {
        self.is_drawing = false;
    }

    pub fn start_drawing(&mut self) {
        self.is_drawing = true;
    }

    /// Commit post-move effects for a piece that now stands on `target`.
    ///
    /// The piece must already have been lifted off the board (see
    /// [`release`](crate::rules::release)); `board` reflects the position
    /// after [`Board::move_piece`].
    pub fn on_release(&mut self, target: Square, board: &mut Board) -> RulesResult<ReleaseEffects> {
        let mut effects = ReleaseEffects::default();

        match self.kind {
            PieceKind::Pawn => self.release_pawn(target, board, &mut effects)?,
            PieceKind::King => self.release_king(target, board, &mut effects)?,
            _ => {}
        }

        if self.position != target {
            self.moved = true;
        }
        self.valid_moves.clear();
        self.castle_options.clear();
        self.pawn.en_passant.clear();
        self.position = target;
        self.start_drawing();

        Ok(effects)
    }

    fn release_pawn(
        &mut self,
        target: Square,
        board: &mut Board,
        effects: &mut ReleaseEffects,
    ) -> RulesResult<()> {
        let distance = self.position.squared_distance(target);
        let en_passant = self.pawn.en_passant.iter().find(|op| op.landing == target).copied();

        if distance >= 4 {
            self.pawn.moved_two_squares = true;
            self.pawn.moved_last_turn = true;
        } else {
            if let Some(op) = en_passant.filter(|_| distance == 2) {
                board.set(op.captured.x, op.captured.y, Piece::none())?;
                effects.en_passant_capture = Some(op.captured);
                debug!("[EN_PASSANT] Pawn captured on {}", op.captured);
            }
            self.pawn.moved_two_squares = false;
            self.pawn.moved_last_turn = false;
        }

        let (_, height) = board.size();
        if self.position != target && target.y == self.color.promotion_rank(height) {
            self.pawn.needs_promotion = true;
            effects.needs_promotion = true;
        }

        Ok(())
    }

    fn release_king(
        &mut self,
        target: Square,
        board: &mut Board,
        effects: &mut ReleaseEffects,
    ) -> RulesResult<()> {
        if self.position.squared_distance(target) < 4 {
            return Ok(());
        }

        let Some(op) = self.castle_options.iter().find(|op| op.king_to == target).copied() else {
            return Ok(());
        };

        board.move_piece(op.rook_from.x, op.rook_from.y, op.rook_to.x, op.rook_to.y)?;
        crate::rules::release(board, op.rook_to)?;
        effects.castle = Some(op);
        debug!(
            "[CASTLE] {} king to {}, rook {} -> {}",
            self.color, op.king_to, op.rook_from, op.rook_to
        );

        Ok(())
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}
