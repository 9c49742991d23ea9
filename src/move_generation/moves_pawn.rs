//! Pawn pushes, double pushes from the start rank, and diagonal captures.
//! No en passant.

use crate::game_state::chess_types::{Color, Move};
use crate::game_state::position::Position;
use crate::game_state::square::Square;

pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let forward = color.pawn_forward();

    let one_step = from.offset(forward);
    let one_step_empty = one_step.is_some_and(|to| position.cell(to).is_empty());
    if let (Some(to), true) = (one_step, one_step_empty) {
        out.push(Move::new(from, to));
    }

    for delta in color.pawn_captures() {
        if let Some(to) = from.offset(delta) {
            if position.cell(to).is_opponent_of(color) {
                out.push(Move::new(from, to));
            }
        }
    }

    if from.rank() == color.pawn_start_rank() && one_step_empty {
        if let Some(to) = from.offset(forward * 2) {
            if position.cell(to).is_empty() {
                out.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::game_state::square::to_square;

    fn pawn_moves(fen: &str, square: &str, color: Color) -> Vec<String> {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&position, to_square(square).expect("square"), color, &mut out);
        out.iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn light_pawn_on_start_rank_pushes_once_or_twice() {
        assert_eq!(pawn_moves("8/8/8/8/8/8/4P3/8 w - - 0 1", "e2", Color::Light), ["e2e3", "e2e4"]);
    }

    #[test]
    fn dark_pawn_on_start_rank_pushes_once_or_twice() {
        assert_eq!(pawn_moves("8/3p4/8/8/8/8/8/8 b - - 0 1", "d7", Color::Dark), ["d7d6", "d7d5"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        assert!(pawn_moves("8/8/8/8/8/4n3/4P3/8 w - - 0 1", "e2", Color::Light).is_empty());
        assert_eq!(pawn_moves("8/8/8/8/4n3/8/4P3/8 w - - 0 1", "e2", Color::Light), ["e2e3"]);
    }

    #[test]
    fn pawns_capture_diagonally_forward_only() {
        assert_eq!(
            pawn_moves("8/8/8/3r1N2/4P3/3b1n2/8/8 w - - 0 1", "e4", Color::Light),
            ["e4e5", "e4d5"]
        );
        assert_eq!(
            pawn_moves("8/8/8/4p3/3B1N2/8/8/8 b - - 0 1", "e5", Color::Dark),
            ["e5e4", "e5d4", "e5f4"]
        );
    }

    #[test]
    fn edge_pawns_do_not_wrap_around_the_board() {
        assert_eq!(pawn_moves("8/8/8/8/8/7n/P7/8 w - - 0 1", "a2", Color::Light), ["a2a3", "a2a4"]);
        assert_eq!(pawn_moves("8/7p/8/8/8/8/8/8 b - - 0 1", "h7", Color::Dark), ["h7h6", "h7h5"]);
    }

    #[test]
    fn pawn_on_the_last_rank_has_nowhere_to_go() {
        assert!(pawn_moves("P7/8/8/8/8/8/8/8 w - - 0 1", "a8", Color::Light).is_empty());
    }
}
