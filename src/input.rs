//! Command parsing
//!
//! Squares are named the way players read the board from White's side:
//! files `a`, `b`, ... from left to right and ranks `1`, `2`, ... from
//! White's back rank. On the standard board the white king starts on `e1`,
//! which is board cell `(3, 0)`: files run opposite to `x`.

use chess_rules::{PieceKind, Square};

use crate::error::{ShellError, ShellResult};

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick up and release in one step
    Move(Square, Square),
    Pick(Square),
    Drop(Square),
    Cancel,
    Promote(PieceKind),
    /// Start over from the starting position
    NewGame,
    /// List legal moves of the held piece, or of every piece when none is held
    Moves,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <from> <to>      move a piece, e.g. e2 e4 (or e2e4)
  pick <square>    pick up a piece and show where it can go
  drop <square>    put the held piece down
  cancel           put the held piece back
  promote q|r|b|n  choose the piece a promoted pawn becomes
  moves            list legal moves
  new              start a new game
  help             show this text
  quit             leave the game";

/// Parse a square name such as `e4` on a `width` x `height` board
pub fn parse_square(name: &str, width: i32, height: i32) -> ShellResult<Square> {
    let invalid = || ShellError::InvalidSquare {
        name: name.to_string(),
    };

    let mut chars = name.chars();
    let file = chars.next().filter(char::is_ascii_lowercase).ok_or_else(invalid)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let rank: i32 = digits.parse().map_err(|_| invalid())?;

    let file = (file as u8 - b'a') as i32;
    if file >= width || rank < 1 || rank > height {
        return Err(invalid());
    }
    Ok(Square::new(width - 1 - file, rank - 1))
}

/// Name of `square` on a board `width` files wide
pub fn square_name(square: Square, width: i32) -> String {
    let file = (b'a' + (width - 1 - square.x) as u8) as char;
    format!("{}{}", file, square.y + 1)
}

/// Split `e2e4` into `e2` and `e4`
fn split_joined(token: &str) -> Option<(&str, &str)> {
    let second = token
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)?;
    Some(token.split_at(second))
}

fn parse_promotion(choice: &str) -> ShellResult<PieceKind> {
    match choice {
        "q" | "queen" => Ok(PieceKind::Queen),
        "r" | "rook" => Ok(PieceKind::Rook),
        "b" | "bishop" => Ok(PieceKind::Bishop),
        "n" | "knight" => Ok(PieceKind::Knight),
        _ => Err(ShellError::InvalidPromotionChoice {
            choice: choice.to_string(),
        }),
    }
}

/// Parse one input line for a `width` x `height` board
pub fn parse_command(line: &str, width: i32, height: i32) -> ShellResult<Command> {
    let line = line.trim().to_ascii_lowercase();
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let square = |name: &str| parse_square(name, width, height);

    match tokens.as_slice() {
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["help"] | ["?"] => Ok(Command::Help),
        ["moves"] => Ok(Command::Moves),
        ["cancel"] => Ok(Command::Cancel),
        ["new"] | ["restart"] => Ok(Command::NewGame),
        ["pick", at] => Ok(Command::Pick(square(*at)?)),
        ["drop", at] => Ok(Command::Drop(square(*at)?)),
        ["promote", choice] => Ok(Command::Promote(parse_promotion(choice)?)),
        [from, to] => Ok(Command::Move(square(*from)?, square(*to)?)),
        [joined] => match split_joined(joined) {
            Some((from, to)) => Ok(Command::Move(square(from)?, square(to)?)),
            None => Err(ShellError::UnknownCommand { input: line.clone() }),
        },
        _ => Err(ShellError::UnknownCommand { input: line.clone() }),
    }
}
