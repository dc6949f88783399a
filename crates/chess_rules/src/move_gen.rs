//! Move generation
//!
//! Candidate generation is split per piece kind, one module each, and
//! dispatched through two explicit tables keyed by [`PieceKind::index`]:
//!
//! - [`MOVE_GENERATORS`] produce move candidates (before legality filtering)
//! - [`ATTACK_GENERATORS`] produce attack patterns (squares threatened by
//!   geometry, used for check detection)
//!
//! Only the pawn differs between the two tables: it moves forward but
//! attacks diagonally.
//!
//! Generators may emit off-board squares (knight and king offsets near an
//! edge); callers filter them.

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

use crate::board::Board;
use crate::piece::Piece;
use crate::types::*;

/// Appends candidate squares for `piece` standing on `from`
pub type Generator = fn(&Piece, Square, &Board, &mut Vec<Square>);

fn generate_nothing(_piece: &Piece, _from: Square, _board: &Board, _moves: &mut Vec<Square>) {}

/// Move candidate generators, indexed by kind
pub const MOVE_GENERATORS: [Generator; 7] = [
    generate_nothing,
    pawn::generate_pawn_moves,
    knight::generate_knight_moves,
    bishop::generate_bishop_moves,
    rook::generate_rook_moves,
    queen::generate_queen_moves,
    king::generate_king_moves,
];

/// Attack pattern generators, indexed by kind
pub const ATTACK_GENERATORS: [Generator; 7] = [
    generate_nothing,
    pawn::generate_pawn_attacks,
    knight::generate_knight_moves,
    bishop::generate_bishop_moves,
    rook::generate_rook_moves,
    queen::generate_queen_moves,
    king::generate_king_moves,
];

/// Raw move candidates for `piece` as if it stood on `from`
pub fn move_candidates(piece: &Piece, from: Square, board: &Board) -> Vec<Square> {
    let mut moves = Vec::new();
    MOVE_GENERATORS[piece.kind.index()](piece, from, board, &mut moves);
    moves
}

/// Raw attack pattern for `piece` as if it stood on `from`
pub fn attack_pattern(piece: &Piece, from: Square, board: &Board) -> Vec<Square> {
    let mut moves = Vec::new();
    ATTACK_GENERATORS[piece.kind.index()](piece, from, board, &mut moves);
    moves
}
