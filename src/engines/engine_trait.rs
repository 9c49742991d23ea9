//! Engine abstraction used by the console game loop.
//!
//! A move-selection policy sees only a position and answers with a move.
//! Different strategies can be selected at runtime behind one trait.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has no moves.
    pub best_move: Option<Move>,
    /// Light-minus-dark evaluation after `best_move`, when the engine scores.
    pub score: Option<i32>,
    /// Number of moves the engine chose from.
    pub candidates: usize,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, position: &Position) -> ChessResult<EngineOutput>;
}
