//! Board storage
//!
//! A fixed-size, rules-agnostic grid of [`Piece`]s. Every square holds
//! exactly one occupant (possibly the empty sentinel). Legality is never
//! checked here; that is the rules engine's job.

use crate::error::{ChessRulesError, RulesResult};
use crate::piece::Piece;
use crate::types::*;

/// Back rank of the standard setup, indexed by `x`
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major, `y * width + x`
    squares: Vec<Piece>,
}

impl Board {
    /// Create a board of the given size with every square empty
    pub fn empty(width: i32, height: i32) -> RulesResult<Self> {
        let area = match width.checked_mul(height) {
            Some(area) if width > 0 && height > 0 => area,
            _ => return Err(ChessRulesError::InvalidDimensions { width, height }),
        };

        let squares = (0..area).map(|_| Piece::none()).collect();
        Ok(Self {
            width,
            height,
            squares,
        })
    }

    /// The standard 8x8 starting position.
    ///
    /// White occupies ranks 0 and 1, black ranks 7 and 6; kings stand on
    /// `x = 3`, queens on `x = 4`.
    pub fn standard() -> Self {
        let mut board = Self {
            width: 8,
            height: 8,
            squares: (0..64).map(|_| Piece::none()).collect(),
        };

        for (x, &kind) in BACK_ROW.iter().enumerate() {
            let x = x as i32;
            board.put(Square::new(x, 0), Piece::new(kind, Color::White, x, 0));
            board.put(Square::new(x, 1), Piece::new(PieceKind::Pawn, Color::White, x, 1));
            board.put(Square::new(x, 7), Piece::new(kind, Color::Black, x, 7));
            board.put(Square::new(x, 6), Piece::new(PieceKind::Pawn, Color::Black, x, 6));
        }

        board
    }

    /// `(width, height)`
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        square.x >= 0 && square.x < self.width && square.y >= 0 && square.y < self.height
    }

    fn index(&self, x: i32, y: i32) -> RulesResult<usize> {
        if !self.contains(Square::new(x, y)) {
            return Err(ChessRulesError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y * self.width + x) as usize)
    }

    /// Occupant of `(x, y)`, the empty sentinel when vacant
    pub fn get(&self, x: i32, y: i32) -> RulesResult<&Piece> {
        let index = self.index(x, y)?;
        Ok(&self.squares[index])
    }

    pub fn piece_at(&self, square: Square) -> RulesResult<&Piece> {
        self.get(square.x, square.y)
    }

    pub(crate) fn piece_at_mut(&mut self, square: Square) -> RulesResult<&mut Piece> {
        let index = self.index(square.x, square.y)?;
        Ok(&mut self.squares[index])
    }

    /// Replace the occupant of `(x, y)`
    pub fn set(&mut self, x: i32, y: i32, piece: Piece) -> RulesResult<()> {
        let index = self.index(x, y)?;
        piece.validate()?;
        self.squares[index] = piece;
        Ok(())
    }

    /// Create a fresh piece of `kind` at `(x, y)`
    pub fn place(&mut self, kind: PieceKind, color: Color, x: i32, y: i32) -> RulesResult<()> {
        self.set(x, y, Piece::new(kind, color, x, y))
    }

    /// Relocate the occupant of `(x1, y1)` to `(x2, y2)`, leaving the source
    /// empty. Whatever stood on the destination is overwritten; read it
    /// beforehand if it matters.
    pub fn move_piece(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> RulesResult<()> {
        let from = self.index(x1, y1)?;
        let to = self.index(x2, y2)?;
        if from == to {
            return Ok(());
        }

        let piece = std::mem::take(&mut self.squares[from]);
        self.squares[to] = piece;
        Ok(())
    }

    /// Lift the occupant off `(x, y)`, leaving the empty sentinel behind
    pub fn take(&mut self, x: i32, y: i32) -> RulesResult<Piece> {
        let index = self.index(x, y)?;
        Ok(std::mem::take(&mut self.squares[index]))
    }

    /// Swap in a piece that came off this board, skipping validation
    pub(crate) fn replace(&mut self, square: Square, piece: Piece) -> RulesResult<Piece> {
        let index = self.index(square.x, square.y)?;
        Ok(std::mem::replace(&mut self.squares[index], piece))
    }

    /// Store at a square known to be on the board
    fn put(&mut self, square: Square, piece: Piece) {
        let index = (square.y * self.width + square.x) as usize;
        self.squares[index] = piece;
    }

    /// All squares in row-major order
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Square::new(x, y)))
    }

    /// Occupied squares with their pieces, row-major
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_empty())
            .map(move |(i, piece)| {
                let i = i as i32;
                (Square::new(i % self.width, i / self.width), piece)
            })
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.squares.iter_mut().filter(|piece| !piece.is_empty())
    }

    /// Squares holding a piece of `color`
    pub fn squares_of(&self, color: Color) -> Vec<Square> {
        self.iter_occupied()
            .filter(|(_, piece)| piece.belongs_to(color))
            .map(|(square, _)| square)
            .collect()
    }

    /// Square of the king of `color`, scanning row-major
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.iter_occupied()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(square, _)| square)
    }

    /// Drop squares that fall outside the grid
    pub fn retain_on_board(&self, mut squares: Vec<Square>) -> Vec<Square> {
        squares.retain(|&square| self.contains(square));
        squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
