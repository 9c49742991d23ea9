//! Mobility and king-attack feature.
//!
//! Every pseudo-legal destination is worth the importance of its square.
//! Central squares and squares near the enemy king are worth more.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::position::Position;
use crate::game_state::square::{Square, BOARD_CELLS, PLAYABLE_SQUARES};
use crate::search::board_scoring::BoardScorer;
use crate::search::eval_weights::EvalWeights;

const INNER_CENTRE: [(u8, u8); 4] = [(4, 4), (4, 5), (5, 4), (5, 5)];

const OUTER_CENTRE: [(u8, u8); 12] = [
    (3, 3),
    (3, 4),
    (3, 5),
    (3, 6),
    (4, 3),
    (4, 6),
    (5, 3),
    (5, 6),
    (6, 3),
    (6, 4),
    (6, 5),
    (6, 6),
];

/// Per-cell importance for attacks by light, indexed by `Square::index()`.
/// Off-board cells weigh zero. Without a dark king there is no proximity
/// bonus.
pub fn square_importance(position: &Position, weights: &EvalWeights) -> [i32; BOARD_CELLS] {
    let mut importance = [0i32; BOARD_CELLS];

    for sq in PLAYABLE_SQUARES {
        importance[sq.index()] = weights.importance_base;
    }
    for (file, rank) in INNER_CENTRE {
        importance[Square::at(file, rank).index()] += weights.importance_inner_centre;
    }
    for (file, rank) in OUTER_CENTRE {
        importance[Square::at(file, rank).index()] += weights.importance_outer_centre;
    }

    let enemy_king = Piece::new(Color::Dark, PieceKind::King);
    if let Some((king_square, _)) = position.pieces().find(|&(_, piece)| piece == enemy_king) {
        for sq in PLAYABLE_SQUARES {
            importance[sq.index()] += match sq.chebyshev_distance(king_square) {
                0 => weights.importance_enemy_king,
                1 => weights.importance_king_one_away,
                2 => weights.importance_king_two_away,
                _ => 0,
            };
        }
    }

    importance
}

/// Weighted destinations of every light pseudo-legal move.
pub fn mobility_light(position: &Position, weights: &EvalWeights) -> ChessResult<i32> {
    let importance = square_importance(position, weights);
    let total: i32 = position
        .moves(Color::Light)?
        .iter()
        .map(|mv| importance[mv.to.index()])
        .sum();
    Ok(total * weights.mobility_multiplier)
}

/// Light-minus-dark mobility.
pub fn mobility(position: &Position, weights: &EvalWeights) -> ChessResult<i32> {
    Ok(mobility_light(position, weights)? - mobility_light(position.mirror(), weights)?)
}

#[derive(Debug, Clone, Default)]
pub struct MobilityScorer {
    pub weights: EvalWeights,
}

impl BoardScorer for MobilityScorer {
    fn score(&self, position: &Position) -> ChessResult<i32> {
        mobility(position, &self.weights)
    }
}
