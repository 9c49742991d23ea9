//! Pseudo-legal move generation pipeline.
//!
//! Scans the playable squares in order and dispatches each piece of the
//! requested color to its per-kind generator. Moves that leave the mover's
//! king capturable are not filtered out.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::square::{Square, PLAYABLE_SQUARES};
use crate::move_generation::moves_king::generate_king_moves;
use crate::move_generation::moves_knight::generate_knight_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_sliding::generate_sliding_moves;
use crate::moves::move_offsets::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, position: &Position, color: Color) -> ChessResult<Vec<Move>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, position: &Position, color: Color) -> ChessResult<Vec<Move>> {
        generate_moves(position, color)
    }
}

/// Every pseudo-legal move for `color`, in square-scan order.
pub fn generate_moves(position: &Position, color: Color) -> ChessResult<Vec<Move>> {
    let mut out = Vec::<Move>::with_capacity(64);

    for from in PLAYABLE_SQUARES {
        match position.cell(from) {
            Cell::Empty => {}
            Cell::Occupied(piece) if piece.color == color => {
                generate_piece_moves(position, from, piece, &mut out);
            }
            Cell::Occupied(_) => {}
            Cell::OffBoard => {
                return Err(ChessError::InternalConsistency(format!(
                    "playable square {from} holds the off-board sentinel"
                )));
            }
        }
    }

    Ok(out)
}

/// Moves for a single piece standing on `from`.
pub fn generate_piece_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(position, from, piece.color, out),
        PieceKind::Bishop => generate_sliding_moves(position, from, piece.color, &BISHOP_DIRECTIONS, out),
        PieceKind::Rook => generate_sliding_moves(position, from, piece.color, &ROOK_DIRECTIONS, out),
        PieceKind::Queen => generate_sliding_moves(position, from, piece.color, &QUEEN_DIRECTIONS, out),
        PieceKind::King => generate_king_moves(position, from, piece.color, out),
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_moves, MoveGenerator, PseudoLegalMoveGenerator};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::game_state::square::to_square;

    fn texts(moves: &[Move]) -> Vec<String> {
        let mut out: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        out.sort();
        out
    }

    fn place(position: &Position, square: &str, letter: char) -> Position {
        position
            .with_piece(square, Piece::from_fen_char(letter))
            .expect("placement should succeed")
    }

    #[test]
    fn empty_board_has_no_moves() {
        let empty = Position::new_empty();
        assert!(generate_moves(&empty, Color::Light).expect("generation").is_empty());
        assert!(generate_moves(&empty, Color::Dark).expect("generation").is_empty());
    }

    #[test]
    fn start_position_has_twenty_moves_per_side() {
        let start = Position::new_game();
        assert_eq!(generate_moves(&start, Color::Light).expect("generation").len(), 20);
        assert_eq!(generate_moves(&start, Color::Dark).expect("generation").len(), 20);
        assert_eq!(
            PseudoLegalMoveGenerator
                .generate_moves(&start, Color::Light)
                .expect("generation")
                .len(),
            20
        );
    }

    #[test]
    fn moves_follow_square_scan_order() {
        let start = Position::new_game();
        let moves = generate_moves(&start, Color::Light).expect("generation");
        let first: Vec<String> = moves.iter().take(3).map(|mv| mv.to_string()).collect();
        assert_eq!(first, ["a2a3", "a2a4", "b1a3"]);
        assert_eq!(moves.last().map(|mv| mv.to_string()).as_deref(), Some("h2h4"));
    }

    #[test]
    fn lone_king_on_a3_has_five_moves() {
        let position = place(&Position::new_empty(), "a3", 'K');
        let moves = generate_moves(&position, Color::Light).expect("generation");
        assert_eq!(texts(&moves), ["a3a2", "a3a4", "a3b2", "a3b3", "a3b4"]);
    }

    #[test]
    fn king_with_friendly_and_enemy_neighbours_has_four_moves() {
        let mut position = place(&Position::new_empty(), "a3", 'K');
        position = place(&position, "a2", 'P');
        position = place(&position, "b4", 'r');

        let moves = generate_moves(&position, Color::Light).expect("generation");
        let king_moves: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|mv| mv.from == to_square("a3").expect("a3"))
            .collect();
        assert_eq!(texts(&king_moves), ["a3a4", "a3b2", "a3b3", "a3b4"]);

        let captures = king_moves
            .iter()
            .filter(|mv| position.cell(mv.to).is_opponent_of(Color::Light))
            .count();
        assert_eq!(captures, 1);
    }

    #[test]
    fn queen_rays_stop_before_friends_and_on_enemies() {
        let mut position = place(&Position::new_empty(), "c2", 'Q');
        position = place(&position, "c4", 'P');
        position = place(&position, "e4", 'n');

        let moves = generate_moves(&position, Color::Light).expect("generation");
        let c2 = to_square("c2").expect("c2");
        let queen_moves: Vec<Move> = moves.iter().copied().filter(|mv| mv.from == c2).collect();

        let mut expected = vec![
            "c2b1", "c2b2", "c2a2", "c2b3", "c2a4", "c2c3", "c2d3", "c2e4", "c2d2", "c2e2", "c2f2",
            "c2g2", "c2h2", "c2d1", "c2c1",
        ];
        expected.sort();
        assert_eq!(texts(&queen_moves), expected);

        let captures: Vec<String> = queen_moves
            .iter()
            .filter(|mv| position.cell(mv.to).is_opponent_of(Color::Light))
            .map(|mv| mv.to_string())
            .collect();
        assert_eq!(captures, ["c2e4"]);

        let pawn_moves: Vec<String> = moves
            .iter()
            .filter(|mv| mv.from == to_square("c4").expect("c4"))
            .map(|mv| mv.to_string())
            .collect();
        assert_eq!(pawn_moves, ["c4c5"]);
    }

    #[test]
    fn only_the_requested_color_moves() {
        let mut position = place(&Position::new_empty(), "d4", 'N');
        position = place(&position, "h8", 'k');
        let dark = generate_moves(&position, Color::Dark).expect("generation");
        assert_eq!(texts(&dark), ["h8g7", "h8g8", "h8h7"]);
    }

    #[test]
    fn sentinel_on_a_playable_square_is_an_internal_error() {
        let mut corrupted = Position::new_empty();
        let e4 = to_square("e4").expect("e4");
        corrupted.cells[e4.index()] = Cell::OffBoard;
        assert!(matches!(
            generate_moves(&corrupted, Color::Light),
            Err(ChessError::InternalConsistency(_))
        ));
    }
}
