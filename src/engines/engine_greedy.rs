//! One-ply engine: evaluate the position after every candidate and keep the
//! best for the side to move. Light maximizes, dark minimizes. Ties are
//! broken uniformly at random.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::position::Position;
use crate::search::board_scoring::{BoardScorer, StaticEvaluator};

pub struct GreedyEngine {
    scorer: Box<dyn BoardScorer>,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_scorer(Box::new(StaticEvaluator::default()), StdRng::from_os_rng())
    }

    /// Deterministic tie-breaking.
    pub fn seeded(seed: u64) -> Self {
        Self::with_scorer(Box::new(StaticEvaluator::default()), StdRng::seed_from_u64(seed))
    }

    pub fn with_scorer(scorer: Box<dyn BoardScorer>, rng: StdRng) -> Self {
        Self { scorer, rng }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, position: &Position) -> ChessResult<EngineOutput> {
        let color = position.side_to_move();
        let candidates = position.moves(color)?;

        let mut out = EngineOutput {
            candidates: candidates.len(),
            ..EngineOutput::default()
        };
        if candidates.is_empty() {
            debug!(?color, "greedy engine has no moves");
            return Ok(out);
        }

        let mut best_value = i32::MIN;
        let mut best_moves: Vec<Move> = Vec::new();

        for &mv in candidates {
            let after = position.apply_move(mv)?;
            let score = self.scorer.score(&after)?;
            // Compare from the mover's point of view.
            let value = match color {
                Color::Light => score,
                Color::Dark => -score,
            };

            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }

        let picked = *best_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or_else(|| ChessError::InternalConsistency("greedy engine lost its candidates".to_owned()))?;

        let score = match color {
            Color::Light => best_value,
            Color::Dark => -best_value,
        };
        debug!(
            candidates = out.candidates,
            ties = best_moves.len(),
            chosen = %picked,
            score,
            "greedy engine chose a move"
        );

        out.best_move = Some(picked);
        out.score = Some(score);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::evaluate;

    #[test]
    fn light_takes_the_undefended_queen() {
        let position = Position::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let output = GreedyEngine::seeded(7).choose_move(&position).expect("engine");
        assert_eq!(output.best_move.map(|mv| mv.to_string()).as_deref(), Some("d1d5"));
        assert_eq!(output.candidates, position.moves(Color::Light).expect("moves").len());
    }

    #[test]
    fn dark_minimizes_the_score() {
        let position = Position::from_fen("3rk3/8/8/8/3Q4/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let output = GreedyEngine::seeded(7).choose_move(&position).expect("engine");
        let best = output.best_move.expect("a move");
        assert_eq!(best.to_string(), "d8d4");

        let after = position.apply_move(best).expect("applies");
        assert_eq!(output.score, Some(evaluate(&after).expect("evaluation")));
    }

    #[test]
    fn no_moves_gives_no_best_move() {
        let position = Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").expect("FEN should parse");
        let output = GreedyEngine::seeded(1).choose_move(&position).expect("engine");
        assert_eq!(output, EngineOutput::default());
    }

    #[test]
    fn same_seed_gives_same_choice() {
        let start = Position::new_game();
        let first = GreedyEngine::seeded(42).choose_move(&start).expect("engine");
        let second = GreedyEngine::seeded(42).choose_move(&start).expect("engine");
        assert_eq!(first, second);
    }
}
