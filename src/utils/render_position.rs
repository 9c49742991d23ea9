//! Text board renderers for the console and for debugging.
//!
//! Both styles print rank 8 at the top, a header naming the side to move and
//! the moves played so far, and file letters underneath.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// FEN letters, `#` on empty dark squares, ASCII frame.
    #[default]
    Plain,
    /// Chess glyphs, shaded empty dark squares, box-drawing frame.
    Unicode,
}

pub fn render_position(position: &Position, style: RenderStyle) -> String {
    let (top, side, bottom) = match style {
        RenderStyle::Plain => ("  +-----------------+", '|', "  +-----------------+"),
        RenderStyle::Unicode => ("  ╔═════════════════╗", '║', "  ╚═════════════════╝"),
    };

    let mut out = render_header(position);
    out.push_str("    a b c d e f g h\n");
    out.push_str(top);
    out.push('\n');

    for rank in (1..=8u8).rev() {
        out.push(char::from(b'0' + rank));
        out.push(' ');
        out.push(side);
        out.push(' ');

        for file in 1..=8u8 {
            let dark_square = (file + rank) % 2 == 0;
            let symbol = match (position.cell(Square::at(file, rank)).piece(), style) {
                (Some(piece), RenderStyle::Plain) => piece.fen_char(),
                (Some(piece), RenderStyle::Unicode) => piece_to_unicode(piece),
                (None, RenderStyle::Plain) if dark_square => '#',
                (None, RenderStyle::Unicode) if dark_square => '░',
                (None, _) => ' ',
            };
            out.push(symbol);
            out.push(' ');
        }

        out.push(side);
        out.push('\n');
    }

    out.push_str(bottom);
    out.push('\n');
    out.push_str("    a b c d e f g h");

    out
}

fn render_header(position: &Position) -> String {
    let mover = match position.side_to_move() {
        Color::Light => "Light",
        Color::Dark => "Dark",
    };
    let previous: Vec<String> = position.history().iter().map(|mv| mv.to_string()).collect();
    format!("{mover} to move; previous: {}\n", previous.join(" "))
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
