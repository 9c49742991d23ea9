//! Tunable constants of the static evaluator.

use crate::game_state::chess_types::PieceKind;

/// Evaluation constants, in hundredths of a pawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalWeights {
    /// Indexed by `PieceKind::index()`.
    pub piece_values: [i32; 6],
    /// Applied once per pawn beyond the first on a file.
    pub doubled: i32,
    /// Applied once per pawn on a file with no friendly neighbours.
    pub isolated: i32,
    pub passed: i32,
    pub protected_passed: i32,
    /// Extra passed-pawn bonus, indexed by the pawn's rank.
    pub passed_advance: [i32; 9],
    pub importance_base: i32,
    pub importance_inner_centre: i32,
    pub importance_outer_centre: i32,
    pub importance_enemy_king: i32,
    pub importance_king_one_away: i32,
    pub importance_king_two_away: i32,
    pub mobility_multiplier: i32,
}

impl EvalWeights {
    #[inline]
    pub const fn piece_value(&self, kind: PieceKind) -> i32 {
        self.piece_values[kind.index()]
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece_values: [100, 300, 310, 490, 900, 9000],
            doubled: -20,
            isolated: -40,
            passed: 20,
            protected_passed: 30,
            passed_advance: [0, 0, 0, 5, 10, 40, 80, 200, 0],
            importance_base: 1,
            importance_inner_centre: 2,
            importance_outer_centre: 1,
            importance_enemy_king: 4,
            importance_king_one_away: 2,
            importance_king_two_away: 1,
            mobility_multiplier: 1,
        }
    }
}
