//! Ray walking for bishops, rooks and queens.
//!
//! A ray ends before a sentinel or a friendly piece, and ends on (after
//! recording) the first enemy piece.

use crate::game_state::chess_types::{Cell, Color, Move};
use crate::game_state::position::Position;
use crate::game_state::square::Square;

pub fn generate_sliding_moves(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[i8],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        let mut current = from;

        while let Some(to) = current.offset(direction) {
            match position.cell(to) {
                Cell::OffBoard => break,
                Cell::Empty => out.push(Move::new(from, to)),
                Cell::Occupied(piece) if piece.color == color => break,
                Cell::Occupied(_) => {
                    out.push(Move::new(from, to));
                    break;
                }
            }
            current = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_sliding_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;
    use crate::game_state::square::to_square;
    use crate::moves::move_offsets::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

    fn ray_count(fen: &str, square: &str, directions: &[i8]) -> usize {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_sliding_moves(&position, to_square(square).expect("square"), Color::Light, directions, &mut out);
        out.len()
    }

    #[test]
    fn open_board_ray_lengths_from_d4() {
        let fen = "8/8/8/8/3Q4/8/8/8 w - - 0 1";
        assert_eq!(ray_count(fen, "d4", &BISHOP_DIRECTIONS), 13);
        assert_eq!(ray_count(fen, "d4", &ROOK_DIRECTIONS), 14);
        assert_eq!(ray_count(fen, "d4", &QUEEN_DIRECTIONS), 27);
    }

    #[test]
    fn rook_in_the_corner_sees_fourteen_squares() {
        assert_eq!(ray_count("8/8/8/8/8/8/8/R7 w - - 0 1", "a1", &ROOK_DIRECTIONS), 14);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        // Enemy on e3 is captured, friend on b2 blocks entirely.
        assert_eq!(ray_count("8/8/8/8/8/4n3/1P6/2B5 w - - 0 1", "c1", &BISHOP_DIRECTIONS), 2);
    }
}
