//! Doubled, isolated and passed pawn features.
//!
//! Only light pawns are examined directly. The dark score is the light score
//! of the mirrored position.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::position::Position;
use crate::game_state::square::Square;
use crate::search::board_scoring::BoardScorer;
use crate::search::eval_weights::EvalWeights;

const LIGHT_PAWN: Piece = Piece::new(Color::Light, PieceKind::Pawn);
const DARK_PAWN: Piece = Piece::new(Color::Dark, PieceKind::Pawn);

/// Light-minus-dark pawn structure.
pub fn pawn_structure(position: &Position, weights: &EvalWeights) -> i32 {
    pawn_structure_light(position, weights) - pawn_structure_light(position.mirror(), weights)
}

/// Pawn structure of the light pawns alone.
pub fn pawn_structure_light(position: &Position, weights: &EvalWeights) -> i32 {
    // Index 0 and 9 stay zero so neighbour lookups need no edge checks.
    let mut pawns_on_file = [0i32; 10];
    let mut most_advanced = [0u8; 10];

    for file in 1..=8u8 {
        for rank in (1..=8u8).rev() {
            if position.cell(Square::at(file, rank)).piece() == Some(LIGHT_PAWN) {
                pawns_on_file[file as usize] += 1;
                if most_advanced[file as usize] == 0 {
                    most_advanced[file as usize] = rank;
                }
            }
        }
    }

    let mut score = 0;

    for file in 1..=8usize {
        let count = pawns_on_file[file];
        if count == 0 {
            continue;
        }
        let neighbours = pawns_on_file[file - 1] + pawns_on_file[file + 1];

        score += weights.doubled * (count - 1);
        if neighbours == 0 {
            score += weights.isolated * count;
        }

        let rank = most_advanced[file];
        if !dark_pawn_blocks(position, file as u8, rank) {
            score += weights.passed;
            if neighbours > 0 {
                score += weights.protected_passed;
            }
            score += weights.passed_advance[rank as usize];
        }
    }

    score
}

/// A dark pawn on the same or an adjacent file, at or beyond `rank`.
fn dark_pawn_blocks(position: &Position, file: u8, rank: u8) -> bool {
    let first_file = file.saturating_sub(1).max(1);
    let last_file = (file + 1).min(8);

    (first_file..=last_file).any(|f| {
        (rank..=8).any(|r| position.cell(Square::at(f, r)).piece() == Some(DARK_PAWN))
    })
}

#[derive(Debug, Clone, Default)]
pub struct PawnStructureScorer {
    pub weights: EvalWeights,
}

impl BoardScorer for PawnStructureScorer {
    fn score(&self, position: &Position) -> ChessResult<i32> {
        Ok(pawn_structure(position, &self.weights))
    }
}
