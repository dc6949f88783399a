//! Rules engine
//!
//! Legality on top of raw move generation. A candidate is legal when it
//! stays on the board, does not land on a piece of the mover's colour and
//! does not leave the mover's king attacked.
//!
//! # Check Detection
//!
//! Two sources of attack information exist:
//!
//! - The cached `attacking` sets, refreshed after every committed move by
//!   [`update_all_attacks`]. [`is_in_check`] reads these.
//! - Fresh geometry for hypothetical positions. [`would_resolve_check`]
//!   plays the move provisionally, asks [`is_attacked_by`] about the king and
//!   takes the move back. Caches are never written while a move is
//!   provisional, so the board compares equal before and after.
//!
//! # Stalemate
//!
//! [`is_checkmate`] only asks whether the side has any legal move. A side
//! with no legal move that is not in check is reported the same way.

mod undo;


use tracing::{debug, warn};

use crate::board::Board;
use crate::error::RulesResult;
use crate::move_gen::{self, king, pawn};
use crate::piece::ReleaseEffects;
use crate::types::*;

pub use crate::move_gen::attack::{attacked_squares, is_attacked_by, update_all_attacks};

/// Legal destinations of the piece on `at` plus the special moves among them
struct LegalMoves {
    moves: Vec<Square>,
    castle: Vec<CastleOption>,
    en_passant: Vec<EnPassantOption>,
}

fn legal_moves(board: &mut Board, at: Square) -> RulesResult<LegalMoves> {
    let (color, candidates, castle, en_passant) = {
        let piece = board.piece_at(at)?;
        if piece.is_empty() {
            return Ok(LegalMoves {
                moves: Vec::new(),
                castle: Vec::new(),
                en_passant: Vec::new(),
            });
        }

        let castle = match piece.kind {
            PieceKind::King => king::castle_options(piece, at, board),
            _ => Vec::new(),
        };
        let en_passant = match piece.kind {
            PieceKind::Pawn => pawn::en_passant_options(piece, at, board),
            _ => Vec::new(),
        };

        (piece.color, move_gen::move_candidates(piece, at, board), castle, en_passant)
    };

    let mut moves = Vec::with_capacity(candidates.len());
    for target in candidates {
        let Ok(occupant) = board.piece_at(target) else {
            continue;
        };
        if occupant.belongs_to(color) || moves.contains(&target) {
            continue;
        }
        if would_resolve_check(board, at, target, color)? {
            moves.push(target);
        }
    }

    Ok(LegalMoves {
        castle: castle.into_iter().filter(|op| moves.contains(&op.king_to)).collect(),
        en_passant: en_passant.into_iter().filter(|op| moves.contains(&op.landing)).collect(),
        moves,
    })
}

/// Compute the legal destinations of the piece on `at` and cache them on
/// the piece (`valid_moves`, plus castle options for a king and en passant
/// options for a pawn).
///
/// The empty sentinel has no moves. Calling this twice without an
/// intervening commit yields the same list.
///
/// # Examples
///
/// ```rust,ignore
/// let mut board = Board::standard();
/// update_all_attacks(&mut board);
/// let moves = compute_legal_moves(&mut board, Square::new(1, 0))?;
/// // knight: (0, 2) and (2, 2)
/// ```
pub fn compute_legal_moves(board: &mut Board, at: Square) -> RulesResult<Vec<Square>> {
    let legal = legal_moves(board, at)?;

    let piece = board.piece_at_mut(at)?;
    if piece.is_empty() {
        return Ok(Vec::new());
    }

    piece.valid_moves = legal.moves.clone();
    if piece.kind == PieceKind::King {
        piece.castle_options = legal.castle;
    }
    if piece.kind == PieceKind::Pawn {
        piece.pawn.en_passant = legal.en_passant;
    }

    debug!(
        "[MOVE_GEN] {} {:?} on {}: {} legal moves",
        piece.color,
        piece.kind,
        at,
        legal.moves.len()
    );

    Ok(legal.moves)
}

/// Lift hook: cache legal moves and hide the piece while it is held
pub fn on_pickup(board: &mut Board, at: Square) -> RulesResult<Vec<Square>> {
    let moves = compute_legal_moves(board, at)?;
    board.piece_at_mut(at)?.stop_drawing();
    Ok(moves)
}

/// Run the release hook of the piece standing on `at`.
///
/// Call after [`Board::move_piece`] has carried the piece to `at`; the piece
/// still records the square it came from.
pub fn release(board: &mut Board, at: Square) -> RulesResult<ReleaseEffects> {
    let mut piece = board.take(at.x, at.y)?;
    if piece.is_empty() {
        return Ok(ReleaseEffects::default());
    }

    let effects = piece.on_release(at, board);
    board.replace(at, piece)?;
    effects
}

/// Whether the king of `color` stands on a square the opponent attacks,
/// according to the cached attack sets.
///
/// A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.find_king(color) else {
        warn!("[CHECK] No {} king on the board", color);
        return false;
    };

    board
        .iter_occupied()
        .filter(|(_, piece)| piece.color != color)
        .any(|(_, piece)| piece.attacking.contains(&king))
}

/// Play `from -> to` provisionally and report whether `color` is out of
/// check afterwards. The board is restored exactly before returning.
pub fn would_resolve_check(
    board: &mut Board,
    from: Square,
    to: Square,
    color: Color,
) -> RulesResult<bool> {
    let provisional = undo::make_move(board, from, to)?;

    let safe = match board.find_king(color) {
        Some(king) => !is_attacked_by(board, king, color.opponent()),
        None => true,
    };

    undo::unmake_move(board, provisional)?;
    Ok(safe)
}

/// Number of legal moves available to `color`, leaving caches untouched
pub fn legal_move_count(board: &mut Board, color: Color) -> RulesResult<usize> {
    let mut count = 0;
    for square in board.squares_of(color) {
        count += legal_moves(board, square)?.moves.len();
    }
    Ok(count)
}

/// True when no piece of `color` has a legal move
pub fn is_checkmate(board: &mut Board, color: Color) -> RulesResult<bool> {
    for square in board.squares_of(color) {
        if !legal_moves(board, square)?.moves.is_empty() {
            return Ok(false);
        }
    }

    debug!("[CHECKMATE] {} has no legal moves", color);
    Ok(true)
}

/// Pieces of `color` that currently have at least one legal move
pub fn movable_pieces(board: &mut Board, color: Color) -> RulesResult<Vec<Square>> {
    let mut movable = Vec::new();
    for square in board.squares_of(color) {
        if !legal_moves(board, square)?.moves.is_empty() {
            movable.push(square);
        }
    }
    Ok(movable)
}
