//! FEN-to-Position parser.
//!
//! Builds a position from Forsyth-Edwards Notation: placement, side to move,
//! castling rights, en-passant field (validated, then ignored), half-move
//! clock and full-move number.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::square::Square;
use crate::utils::algebraic::algebraic_to_square;

const FEN_FIELDS: usize = 6;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        parts.as_slice()
    else {
        return Err(ChessError::Format(format!(
            "expected {FEN_FIELDS} space-separated fields, found {}",
            parts.len()
        )));
    };

    let mut position = Position::new_empty();

    parse_board(board_part, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    parse_en_passant_square(en_passant_part)?;
    position.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::Format(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::Format(format!("invalid fullmove number: {fullmove_part}")))?;

    if fullmove_number == 0 {
        return Err(ChessError::Format("fullmove number must start at 1".to_owned()));
    }

    let dark_offset = u16::from(position.side_to_move == Color::Dark);
    position.ply = (fullmove_number - 1)
        .checked_mul(2)
        .and_then(|ply| ply.checked_add(dark_offset))
        .ok_or_else(|| ChessError::Format(format!("fullmove number too large: {fullmove_number}")))?;

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::Format(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - fen_rank_idx as u8;
        let mut file = 1u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::Format(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 9 {
                    return Err(ChessError::Format(format!("rank {rank} has too many files")));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessError::Format(format!("invalid piece character '{ch}' in board layout"))
            })?;

            if file > 8 {
                return Err(ChessError::Format(format!("rank {rank} has too many files")));
            }

            position.put(Square::at(file, rank), Some(piece));
            file += 1;
        }

        if file != 9 {
            return Err(ChessError::Format(format!("rank {rank} does not sum to 8 files")));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::Format(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(ChessError::Format(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

// En passant is never generated, so a target square is only checked for form.
fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<()> {
    if en_passant_part == "-" {
        return Ok(());
    }

    algebraic_to_square(en_passant_part)
        .map(|_| ())
        .map_err(|_| ChessError::Format(format!("invalid en-passant field: {en_passant_part}")))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_position::{render_position, RenderStyle};

    #[test]
    fn parse_starting_fen_and_render_board() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_position(&position, RenderStyle::Unicode));

        assert_eq!(position.side_to_move(), Color::Light);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.castling_rights(), CASTLE_ALL);
    }

    #[test]
    fn fullmove_number_and_side_determine_ply() {
        let position = parse_fen("8/8/8/8/8/8/8/4K3 b - - 3 12").expect("FEN should parse");
        assert_eq!(position.ply(), 23);
        assert_eq!(position.fullmove_number(), 12);
        assert_eq!(position.halfmove_clock(), 3);
    }

    #[test]
    fn en_passant_square_is_accepted_and_ignored() {
        let position = parse_fen("8/8/8/3pP3/8/8/8/8 w - d6 0 1").expect("FEN should parse");
        assert!(position.get_fen().contains(" - - 0 1"));
    }

    #[test]
    fn wrong_field_or_rank_counts_are_format_errors() {
        let bad = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 one",
            "8/8/8/8/8/8/8/8 w - - 0 0",
            "8/8/8/8/8/8/8/8 w - - 0 32769",
            "8/8/8/8/8/8/8/8 b - - 0 65535",
            "",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::Format(_))),
                "{fen:?} should be rejected"
            );
        }
    }
    #[test]
    fn largest_fullmove_numbers_still_fit_the_ply_counter() {
        let light = parse_fen("8/8/8/8/8/8/8/8 w - - 0 32768").expect("FEN should parse");
        assert_eq!(light.ply(), 65534);
        let dark = parse_fen("8/8/8/8/8/8/8/8 b - - 0 32768").expect("FEN should parse");
        assert_eq!(dark.ply(), 65535);
        assert_eq!(dark.get_fen(), "8/8/8/8/8/8/8/8 b - - 0 32768");
    }
}
