//! Crate root module declarations for the Mirror Chess project.
//!
//! Exposes the position model, pseudo-legal move generation, the
//! mirror-based static evaluator, move-selection engines, text utilities and
//! the console game loop so the binary, tests and benches share stable
//! module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod mirror;
    pub mod position;
    pub mod square;
}

pub mod moves {
    pub mod move_offsets;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_sliding;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod eval_weights;
    pub mod mobility;
    pub mod pawn_structure;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_record;
    pub mod long_algebraic;
    pub mod render_position;
}

pub mod console {
    pub mod game_loop;
}
