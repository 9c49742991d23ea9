//! Console game loop.
//!
//! Alternates a human, who types moves in long algebraic form, with an
//! engine. A typed move is accepted only when it appears in the generated
//! move list for the side to move; anything else re-prompts with the list.
//! Input and output are any `BufRead`/`Write` pair so the loop can be
//! driven from tests.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, Move, Piece, PieceKind};
use crate::game_state::position::Position;
use crate::utils::render_position::{render_position, RenderStyle};

#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Side typed by the human; `None` lets the engine play both sides.
    pub human: Option<Color>,
    /// Stop after this many plies from the initial position.
    pub max_plies: Option<u16>,
    pub style: RenderStyle,
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Quit,
    InputClosed,
    /// The side to move had no pseudo-legal moves.
    NoMoves(Color),
    /// This side's king was taken.
    KingCaptured(Color),
    MaxPlies,
}

impl GameEnd {
    /// Result token for a game record.
    pub fn result_token(self) -> &'static str {
        match self {
            GameEnd::NoMoves(Color::Light) | GameEnd::KingCaptured(Color::Light) => "0-1",
            GameEnd::NoMoves(Color::Dark) | GameEnd::KingCaptured(Color::Dark) => "1-0",
            GameEnd::Quit | GameEnd::InputClosed | GameEnd::MaxPlies => "*",
        }
    }
}

enum HumanInput {
    Move(Move),
    Quit,
    Closed,
}

pub struct GameLoop {
    initial: Position,
    position: Position,
    engine: Box<dyn Engine>,
    config: GameConfig,
}

impl GameLoop {
    pub fn new(initial: Position, engine: Box<dyn Engine>, config: GameConfig) -> Self {
        Self {
            position: initial.clone(),
            initial,
            engine,
            config,
        }
    }

    pub fn initial(&self) -> &Position {
        &self.initial
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves played since the initial position.
    pub fn moves_played(&self) -> &[Move] {
        &self.position.history()[self.initial.history().len()..]
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> ChessResult<GameEnd> {
        self.engine.new_game();

        let end = loop {
            if let Some(end) = self.check_finished()? {
                break end;
            }

            let mover = self.position.side_to_move();
            writeln!(out, "{}", render_position(&self.position, self.config.style))?;

            let mv = if self.config.human == Some(mover) {
                match self.read_human_move(input, out)? {
                    HumanInput::Move(mv) => mv,
                    HumanInput::Quit => break GameEnd::Quit,
                    HumanInput::Closed => break GameEnd::InputClosed,
                }
            } else {
                let output = self.engine.choose_move(&self.position)?;
                let Some(mv) = output.best_move else {
                    break GameEnd::NoMoves(mover);
                };
                match output.score {
                    Some(score) => writeln!(out, "{} plays {mv} scoring {score}", self.engine.name())?,
                    None => writeln!(out, "{} plays {mv}", self.engine.name())?,
                }
                mv
            };

            self.position = self.position.apply_move(mv)?;
            info!(ply = self.position.ply(), ?mover, %mv, "move played");
        };

        writeln!(out, "{}", render_position(&self.position, self.config.style))?;
        writeln!(out, "Game over: {end:?} ({})", end.result_token())?;
        out.flush()?;
        info!(?end, plies = self.moves_played().len(), "game finished");
        Ok(end)
    }

    fn check_finished(&self) -> ChessResult<Option<GameEnd>> {
        for color in [Color::Light, Color::Dark] {
            let king = Piece::new(color, PieceKind::King);
            let had_king = self.initial.pieces().any(|(_, piece)| piece == king);
            if had_king && !self.position.pieces().any(|(_, piece)| piece == king) {
                return Ok(Some(GameEnd::KingCaptured(color)));
            }
        }

        if let Some(max) = self.config.max_plies {
            if self.moves_played().len() >= usize::from(max) {
                return Ok(Some(GameEnd::MaxPlies));
            }
        }

        let mover = self.position.side_to_move();
        if self.position.moves(mover)?.is_empty() {
            return Ok(Some(GameEnd::NoMoves(mover)));
        }

        Ok(None)
    }

    fn read_human_move<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> ChessResult<HumanInput> {
        let available = self.position.moves(self.position.side_to_move())?;
        let mut line = String::new();

        loop {
            write!(out, "Enter your move: ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(HumanInput::Closed);
            }

            let text = line.trim();
            if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("q") {
                return Ok(HumanInput::Quit);
            }

            match text.parse::<Move>() {
                Ok(mv) if available.contains(&mv) => return Ok(HumanInput::Move(mv)),
                _ => {
                    warn!(input = text, "rejected move");
                    let listed: Vec<String> = available.iter().map(|mv| mv.to_string()).collect();
                    writeln!(out, "Error, available moves are {}", listed.join(" "))?;
                }
            }
        }
    }
}
