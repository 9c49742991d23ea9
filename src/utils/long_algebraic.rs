//! Four-character move text such as `e2e4`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> ChessResult<String> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    Ok(out)
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<Move> {
    if long_algebraic.len() != 4 || !long_algebraic.is_ascii() {
        return Err(ChessError::InvalidMove(format!(
            "move text must be four characters: {long_algebraic:?}"
        )));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    Ok(Move::new(from, to))
}
