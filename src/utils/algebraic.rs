//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and padded
//! mailbox squares, reused by FEN, move text and rendering.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::square::{IntoSquare, Square};

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::Address(format!(
            "algebraic square must be two characters: {square:?}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::Address(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::Address(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    Square::from_file_rank(file - b'a' + 1, rank - b'0')
}

/// Convert a playable square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !square.is_playable() {
        return Err(ChessError::Address(format!(
            "cell {} is off the board",
            square.index()
        )));
    }

    let (file, rank) = square.file_rank();
    let file_char = char::from(b'a' + (file as u8 - 1));
    let rank_char = char::from(b'0' + rank as u8);

    Ok(format!("{file_char}{rank_char}"))
}

/// Convert any location form to algebraic notation. Identity on valid text.
#[inline]
pub fn to_algebraic(location: impl IntoSquare) -> ChessResult<String> {
    square_to_algebraic(location.into_square()?)
}
