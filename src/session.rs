//! Interactive session loop
//!
//! Reads one command per line, forwards it to the [`Game`] and prints the
//! board after every change. The loop ends on `quit` or end of input.

use std::io::{self, BufRead, Write};

use chess_rules::{Game, MoveRecord, PieceKind, ReleaseOutcome, Square};
use tracing::debug;

use crate::error::ShellResult;
use crate::input::{parse_command, square_name, Command, HELP};
use crate::render::{render_board, render_status};
use crate::settings::GameSettings;

/// Whether the loop keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: Game,
    settings: GameSettings,
    hints: Vec<Square>,
}

impl Session {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            game: Game::new(),
            settings,
            hints: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn name(&self, square: Square) -> String {
        square_name(square, self.game.board().size().0)
    }

    fn describe(&self, record: &MoveRecord) -> String {
        let mut text = format!(
            "{} {:?} {} -> {}",
            record.color,
            record.kind,
            self.name(record.from),
            self.name(record.to)
        );
        if record.castle.is_some() {
            text.push_str(", castles");
        }
        if record.en_passant.is_some() {
            text.push_str(", en passant");
        }
        if record.captured != PieceKind::None {
            text.push_str(&format!(", takes {:?}", record.captured));
        }
        text
    }

    fn describe_outcome(&self, outcome: ReleaseOutcome) -> String {
        match outcome {
            ReleaseOutcome::Moved(record) => self.describe(&record),
            ReleaseOutcome::Returned => "Not a legal move, piece returned".to_string(),
            ReleaseOutcome::Ignored => "Nothing to move right now".to_string(),
        }
    }

    /// Run one command against the game and describe what happened
    pub fn execute(&mut self, command: Command) -> ShellResult<(Flow, String)> {
        let message = match command {
            Command::Quit => return Ok((Flow::Quit, "Goodbye".to_string())),
            Command::Help => HELP.to_string(),
            Command::Move(from, to) => {
                self.game.cancel()?;
                self.hints.clear();
                let outcome = self.game.play(from, to)?;
                self.describe_outcome(outcome)
            }
            Command::Pick(at) => match self.game.pick_up(at.x, at.y)? {
                Some(moves) => {
                    let count = moves.len();
                    self.hints = moves;
                    format!("Holding {}, {} legal moves", self.name(at), count)
                }
                None => "That piece cannot be picked up now".to_string(),
            },
            Command::Drop(at) => {
                self.hints.clear();
                let outcome = self.game.release(at.x, at.y)?;
                self.describe_outcome(outcome)
            }
            Command::Cancel => {
                self.hints.clear();
                if self.game.cancel()? {
                    "Piece put back".to_string()
                } else {
                    "No piece is held".to_string()
                }
            }
            Command::Promote(kind) => {
                self.game.promote(kind)?;
                format!("Promoted to {:?}", kind)
            }
            Command::NewGame => {
                self.hints.clear();
                self.game.reset();
                "New game, White to move".to_string()
            }
            Command::Moves => self.list_moves()?,
        };

        Ok((Flow::Continue, message))
    }

    fn list_moves(&mut self) -> ShellResult<String> {
        let moves = match self.game.held() {
            Some(square) => {
                let targets = self.game.board().piece_at(square)?.valid_moves.clone();
                vec![(square, targets)]
            }
            None => self.game.legal_moves()?,
        };

        if moves.is_empty() {
            return Ok("No legal moves".to_string());
        }

        let lines: Vec<String> = moves
            .iter()
            .map(|(from, targets)| {
                let targets: Vec<String> = targets.iter().map(|&to| self.name(to)).collect();
                format!("{}: {}", self.name(*from), targets.join(" "))
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Parse and run a line; errors become the reply text
    pub fn handle_line(&mut self, line: &str) -> (Flow, String) {
        let (width, height) = self.game.board().size();

        let result = parse_command(line, width, height).and_then(|command| {
            debug!("[INPUT] {:?}", command);
            self.execute(command)
        });

        match result {
            Ok(reply) => reply,
            Err(e) => (Flow::Continue, e.to_string()),
        }
    }

    fn print_position<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output)?;
        write!(output, "{}", render_board(&self.game, &self.settings, &self.hints))?;
        writeln!(output, "{}", render_status(&self.game))
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "--- Hot-seat chess ---")?;
        writeln!(output, "Enter moves like e2 e4. Type 'help' for all commands.")?;
        self.print_position(&mut output)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let (flow, reply) = self.handle_line(&line);
            writeln!(output, "{reply}")?;
            if flow == Flow::Quit {
                break;
            }
            self.print_position(&mut output)?;
            output.flush()?;
        }

        Ok(())
    }
}
