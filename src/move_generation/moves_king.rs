use crate::game_state::chess_types::{Color, Move};
use crate::game_state::position::Position;
use crate::game_state::square::Square;
use crate::moves::move_offsets::KING_OFFSETS;

/// Single steps only; castling is never generated.
pub fn generate_king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    for delta in KING_OFFSETS {
        if let Some(to) = from.offset(delta) {
            if position.cell(to).is_open_for(color) {
                out.push(Move::new(from, to));
            }
        }
    }
}
