//! Pluggable board evaluation interfaces and the static evaluator.
//!
//! Every scorer reports light-minus-dark in hundredths of a pawn, whatever
//! the side to move. Features are written for light only; the dark half is
//! the same feature on the mirrored position.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::search::eval_weights::EvalWeights;
use crate::search::mobility::mobility;
use crate::search::pawn_structure::pawn_structure;

pub trait BoardScorer: Send + Sync {
    /// Light-minus-dark score.
    fn score(&self, position: &Position) -> ChessResult<i32>;
}

/// Signed sum of piece values over the playable squares.
pub fn material(position: &Position, weights: &EvalWeights) -> i32 {
    position
        .pieces()
        .map(|(_, piece)| {
            let value = weights.piece_value(piece.kind);
            match piece.color {
                Color::Light => value,
                Color::Dark => -value,
            }
        })
        .sum()
}

#[derive(Debug, Clone, Default)]
pub struct MaterialScorer {
    pub weights: EvalWeights,
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> ChessResult<i32> {
        Ok(material(position, &self.weights))
    }
}

/// Material, pawn structure and mobility, added together.
#[derive(Debug, Clone, Default)]
pub struct StaticEvaluator {
    pub weights: EvalWeights,
}

impl StaticEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

impl BoardScorer for StaticEvaluator {
    fn score(&self, position: &Position) -> ChessResult<i32> {
        let material = material(position, &self.weights);
        let pawns = pawn_structure(position, &self.weights);
        let mobility = mobility(position, &self.weights)?;
        Ok(material + pawns + mobility)
    }
}

/// Static evaluation with the default weights.
pub fn evaluate(position: &Position) -> ChessResult<i32> {
    StaticEvaluator::default().score(position)
}
