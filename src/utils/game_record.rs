//! PGN-style game records.
//!
//! Tag pairs followed by numbered long-algebraic move text. The history is
//! replayed from the initial position so a move that cannot be applied is
//! reported instead of written.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;

const RESULT_TOKENS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Record dated today, with generic player names.
pub fn write_game_record(initial: &Position, history: &[Move], result: &str) -> ChessResult<String> {
    let headers = record_headers(initial, "Light", "Dark", result, Local::now().date_naive());
    write_game_record_with_headers(initial, history, &headers)
}

/// Standard tag pairs. `SetUp` and `FEN` are added when the game did not
/// begin from the standard starting position.
pub fn record_headers(
    initial: &Position,
    white: &str,
    black: &str,
    result: &str,
    date: NaiveDate,
) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Mirror Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), white.to_owned());
    headers.insert("Black".to_owned(), black.to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    headers
}

pub fn write_game_record_with_headers(
    initial: &Position,
    history: &[Move],
    headers: &BTreeMap<String, String>,
) -> ChessResult<String> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_tag_value(value)));
    }
    out.push('\n');

    let mut position = initial.clone();
    let first_ply = usize::from(position.ply());
    let mut movetext_parts = Vec::<String>::with_capacity(history.len() + 1);

    for (offset, &mv) in history.iter().enumerate() {
        let ply = first_ply + offset;
        let text = mv.to_string();
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", ply / 2 + 1, text));
        } else if offset == 0 {
            movetext_parts.push(format!("{}... {}", ply / 2 + 1, text));
        } else {
            movetext_parts.push(text);
        }
        position = position
            .apply_move(mv)
            .map_err(|err| ChessError::InvalidMove(format!("history move {} ({mv}): {err}", offset + 1)))?;
    }

    let result = headers.get("Result").map(|x| normalize_result(x)).unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

fn normalize_result(result: &str) -> &str {
    if RESULT_TOKENS.contains(&result) {
        result
    } else {
        "*"
    }
}

fn escape_tag_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
    }

    fn moves(texts: &[&str]) -> Vec<Move> {
        texts.iter().map(|t| t.parse().expect("move text")).collect()
    }

    #[test]
    fn start_position_record() {
        let start = Position::new_game();
        let headers = record_headers(&start, "Alice", "Greedy", "1-0", date());
        let record = write_game_record_with_headers(&start, &moves(&["e2e4", "e7e5", "g1f3"]), &headers)
            .expect("record");

        assert!(record.contains("[Date \"2024.03.09\"]\n"));
        assert!(record.contains("[White \"Alice\"]\n"));
        assert!(record.contains("[Black \"Greedy\"]\n"));
        assert!(!record.contains("[FEN"));
        assert!(record.ends_with("\n1. e2e4 e7e5 2. g1f3 1-0\n"));
    }

    #[test]
    fn custom_start_adds_fen_and_numbers_from_dark() {
        let fen = "4k3/8/8/8/8/8/4P3/4K3 b - - 0 7";
        let initial = Position::from_fen(fen).expect("FEN should parse");
        let headers = record_headers(&initial, "Light", "Dark", "bogus", date());
        let record =
            write_game_record_with_headers(&initial, &moves(&["e8d8", "e2e4"]), &headers).expect("record");

        assert!(record.contains(&format!("[FEN \"{fen}\"]\n")));
        assert!(record.contains("[SetUp \"1\"]\n"));
        assert!(record.contains("[Result \"*\"]\n"));
        assert!(record.ends_with("\n7... e8d8 8. e2e4 *\n"));
    }

    #[test]
    fn unplayable_history_is_rejected() {
        let start = Position::new_game();
        let err = write_game_record(&start, &moves(&["e3e4"]), "*").expect_err("empty origin");
        assert!(matches!(err, ChessError::InvalidMove(_)));
    }
}
