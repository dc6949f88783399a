//! Text rendering of the board and game status
//!
//! White pieces are upper case, black pieces lower case. Each cell is three
//! characters wide:
//!
//! ```text
//!  P    piece            .    empty square
//! [P]   held piece       *    legal destination
//! (p)   legal capture   <P>   last move
//! ```

use std::fmt::Write;

use chess_rules::{Color, Game, GamePhase, Piece, PieceKind, Square, TurnPhase};

use crate::input::square_name;
use crate::settings::GameSettings;

fn glyph(piece: &Piece) -> char {
    let letter = match piece.kind {
        PieceKind::None => return '.',
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

fn cell(piece: &Piece, square: Square, hints: &[Square], last_move: &[Square]) -> String {
    let g = glyph(piece);

    if !piece.is_empty() && !piece.is_drawing {
        format!("[{g}]")
    } else if hints.contains(&square) {
        if piece.is_empty() {
            " * ".to_string()
        } else {
            format!("({g})")
        }
    } else if last_move.contains(&square) {
        format!("<{}>", if piece.is_empty() { ' ' } else { g })
    } else {
        format!(" {g} ")
    }
}

/// Draw the board with rank numbers and file letters.
///
/// White's back rank is at the bottom unless `settings.flipped`.
pub fn render_board(game: &Game, settings: &GameSettings, hints: &[Square]) -> String {
    let board = game.board();
    let (width, height) = board.size();
    let hints: &[Square] = if settings.show_hints { hints } else { &[] };
    let last_move: Vec<Square> = match game.last_move() {
        Some(record) if settings.highlight_last_move => vec![record.from, record.to],
        _ => Vec::new(),
    };

    // file `a` is the highest x
    let columns: Vec<i32> = if settings.flipped {
        (0..width).collect()
    } else {
        (0..width).rev().collect()
    };
    let rows: Vec<i32> = if settings.flipped {
        (0..height).collect()
    } else {
        (0..height).rev().collect()
    };

    let files: String = columns
        .iter()
        .map(|&x| {
            let name = square_name(Square::new(x, 0), width);
            format!(" {} ", &name[..1])
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "    {files}");
    for &y in &rows {
        let _ = write!(out, "{:>2}  ", y + 1);
        for &x in &columns {
            let square = Square::new(x, y);
            if let Ok(piece) = board.piece_at(square) {
                out.push_str(&cell(piece, square, hints, &last_move));
            }
        }
        let _ = writeln!(out, "  {}", y + 1);
    }
    let _ = writeln!(out, "    {files}");
    out
}

/// One line describing whose turn it is and any check or promotion
pub fn render_status(game: &Game) -> String {
    let width = game.board().size().0;

    if let Some(pending) = game.pending_promotion() {
        return format!(
            "{} pawn on {} must be promoted: promote q|r|b|n",
            pending.color,
            square_name(pending.square, width)
        );
    }

    match game.status() {
        GamePhase::Checkmate(loser) => {
            format!("Checkmate! {} wins.", loser.opponent())
        }
        GamePhase::Check(color) => {
            format!("{} to move (move {}), in check", color, game.move_number())
        }
        GamePhase::Playing if game.phase() == TurnPhase::PieceSelected => {
            let held = game
                .held()
                .map(|square| square_name(square, width))
                .unwrap_or_default();
            format!("{} to move (move {}), holding {}", game.turn(), game.move_number(), held)
        }
        GamePhase::Playing => format!("{} to move (move {})", game.turn(), game.move_number()),
    }
}
