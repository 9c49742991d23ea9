//! Cell offsets for piece movement on the padded board.
//!
//! One rank is `±1` and one file is `±10`. Pawn offsets depend on color and
//! live on `Color`.

/// Knight jumps, in generation order.
pub const KNIGHT_OFFSETS: [i8; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];

/// Diagonal rays.
pub const BISHOP_DIRECTIONS: [i8; 4] = [-11, -9, 9, 11];

/// Orthogonal rays.
pub const ROOK_DIRECTIONS: [i8; 4] = [-10, -1, 1, 10];

/// Diagonal then orthogonal rays.
pub const QUEEN_DIRECTIONS: [i8; 8] = [-11, -9, 9, 11, -10, -1, 1, 10];

/// Single king steps.
pub const KING_OFFSETS: [i8; 8] = QUEEN_DIRECTIONS;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::square::to_square;

    #[test]
    fn knight_offsets_from_d4_reach_the_eight_knight_squares() {
        let d4 = to_square("d4").expect("d4");
        let mut targets: Vec<String> = KNIGHT_OFFSETS
            .iter()
            .filter_map(|&d| d4.offset(d))
            .map(|sq| sq.to_string())
            .collect();
        targets.sort();
        assert_eq!(targets, ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]);
    }

    #[test]
    fn queen_directions_are_bishop_and_rook_directions() {
        assert_eq!(&QUEEN_DIRECTIONS[..4], &BISHOP_DIRECTIONS);
        assert_eq!(&QUEEN_DIRECTIONS[4..], &ROOK_DIRECTIONS);
    }
}
