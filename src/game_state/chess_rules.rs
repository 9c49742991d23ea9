//! Canonical chess-rule constants.
//!
//! The standard starting position and the home squares used to recompute
//! castling rights.

use crate::game_state::chess_types::*;
use crate::game_state::square::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank roles from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Each castling flag with the king and rook squares it depends on.
pub const CASTLING_HOMES: [(CastlingRights, Color, Square, Square); 4] = [
    (CASTLE_LIGHT_KINGSIDE, Color::Light, Square::at(5, 1), Square::at(8, 1)),
    (CASTLE_LIGHT_QUEENSIDE, Color::Light, Square::at(5, 1), Square::at(1, 1)),
    (CASTLE_DARK_KINGSIDE, Color::Dark, Square::at(5, 8), Square::at(8, 8)),
    (CASTLE_DARK_QUEENSIDE, Color::Dark, Square::at(5, 8), Square::at(1, 8)),
];
