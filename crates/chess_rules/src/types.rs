//! Core value types shared by the board, the piece model and move generation
//!
//! Coordinates are signed so that move generators can produce off-board
//! candidates and filter them afterwards; the board itself only ever stores
//! pieces at in-range squares.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Y step a pawn of this colour advances by.
    ///
    /// White starts on the low ranks and moves toward increasing `y`.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Farthest rank for a pawn of this colour on a board of `height` ranks
    #[inline]
    pub fn promotion_rank(self, height: i32) -> i32 {
        match self {
            Color::White => height - 1,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Kind of a board occupant.
///
/// `None` is the empty sentinel that fills vacant squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PieceKind {
    #[default]
    None,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may be promoted to
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Index into per-kind tables (the sentinel is 0)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PieceKind::None => 0,
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

/// A board coordinate, `x` = file, `y` = rank, both 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared euclidean distance, used to classify pawn and king moves
    #[inline]
    pub fn squared_distance(self, other: Square) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Square {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A castling move available to a king, recomputed on every legal-move query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastleOption {
    /// Where the king lands, two squares toward the rook
    pub king_to: Square,
    /// Where the paired rook stands now
    pub rook_from: Square,
    /// Where the rook lands, adjacent to the king on the inside
    pub rook_to: Square,
}

/// An en passant capture available to a pawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnPassantOption {
    /// Empty square the capturing pawn moves onto
    pub landing: Square,
    /// Square of the pawn that just advanced two squares
    pub captured: Square,
}

/// Orthogonal ray directions (rook)
pub const ROOK_DIRS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Diagonal ray directions (bishop)
pub const BISHOP_DIRS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Knight L offsets
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-1, 2),
    (1, 2),
    (-2, 1),
    (2, 1),
];

/// The 8 king steps
pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
