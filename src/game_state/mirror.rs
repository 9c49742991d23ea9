//! Color-swapping reflection of a position.
//!
//! Every evaluation feature is written once, from the light side. The dark
//! side's value is the same feature computed on the mirror, so the scorers
//! contain no dark-specific branches.

use crate::game_state::chess_types::{mirror_castling_rights, Cell};
use crate::game_state::position::{ply_for_side, Position};
use crate::game_state::square::PLAYABLE_SQUARES;

/// Reflect ranks (`r` to `9 - r`), swap piece colors, swap castling flags
/// and flip the side to move. The half-move clock and full-move number are
/// kept, the ply parity follows the new side, and the history is reflected.
pub fn mirror_position(position: &Position) -> Position {
    let mut out = Position::new_empty();

    for sq in PLAYABLE_SQUARES {
        let reflected = match position.cell(sq) {
            Cell::Occupied(piece) => Some(piece.flipped()),
            _ => None,
        };
        out.put(sq.mirrored(), reflected);
    }

    out.side_to_move = position.side_to_move().opposite();
    out.castling_rights = mirror_castling_rights(position.castling_rights());
    out.halfmove_clock = position.halfmove_clock();
    out.ply = ply_for_side(position.ply(), out.side_to_move);
    out.history = position.history().iter().map(|mv| mv.mirrored()).collect();

    out
}
