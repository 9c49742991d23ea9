//! Random-move engine.
//!
//! Selects uniformly from the pseudo-legal moves and is mostly used for
//! diagnostics and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::position::Position;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, position: &Position) -> ChessResult<EngineOutput> {
        let moves = position.moves(position.side_to_move())?;

        let picked = moves.choose(&mut self.rng).copied();
        if let Some(mv) = picked {
            debug!(candidates = moves.len(), chosen = %mv, "random engine chose a move");
        }

        Ok(EngineOutput {
            best_move: picked,
            score: None,
            candidates: moves.len(),
        })
    }
}
