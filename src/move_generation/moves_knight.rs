use crate::game_state::chess_types::{Color, Move};
use crate::game_state::position::Position;
use crate::game_state::square::Square;
use crate::moves::move_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    for delta in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(delta) {
            if position.cell(to).is_open_for(color) {
                out.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;
    use crate::game_state::square::to_square;

    fn knight_targets(fen: &str, square: &str) -> Vec<String> {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&position, to_square(square).expect("square"), Color::Light, &mut out);
        let mut targets: Vec<String> = out.iter().map(|mv| mv.to.to_string()).collect();
        targets.sort();
        targets
    }

    #[test]
    fn centralized_knight_has_eight_targets() {
        assert_eq!(knight_targets("8/8/8/8/3N4/8/8/8 w - - 0 1", "d4").len(), 8);
    }

    #[test]
    fn corner_knight_has_two_targets() {
        assert_eq!(knight_targets("8/8/8/8/8/8/8/N7 w - - 0 1", "a1"), ["b3", "c2"]);
        assert_eq!(knight_targets("7N/8/8/8/8/8/8/8 w - - 0 1", "h8"), ["f7", "g6"]);
    }

    #[test]
    fn friendly_pieces_block_and_enemies_are_captured() {
        assert_eq!(knight_targets("8/8/8/8/8/1P6/2p5/N7 w - - 0 1", "a1"), ["c2"]);
    }
}
