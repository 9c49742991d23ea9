//! Core value types shared by every subsystem: colors, piece kinds, board
//! cells, castling flags and moves.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::square::Square;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Cell offset of a single pawn push.
    #[inline]
    pub const fn pawn_forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Cell offsets of the two diagonal pawn captures.
    #[inline]
    pub const fn pawn_captures(self) -> [i8; 2] {
        match self {
            Color::Light => [-9, 11],
            Color::Dark => [-11, 9],
        }
    }

    /// Rank from which a pawn may advance two squares.
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::Light => 2,
            Color::Dark => 7,
        }
    }

    /// Farthest rank from this color's side; pawns arriving here promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::Light => 8,
            Color::Dark => 1,
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// One of the twelve piece identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// The same role in the other color.
    #[inline]
    pub const fn flipped(self) -> Self {
        Self::new(self.color.opposite(), self.kind)
    }

    /// FEN letter: uppercase for light, lowercase for dark.
    pub const fn fen_char(self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self::new(color, kind))
    }
}

/// Contents of one cell of the padded board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    OffBoard,
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline]
    pub fn is_opponent_of(self, color: Color) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.color != color)
    }

    /// Knight/king destination rule: empty or held by the other side.
    #[inline]
    pub fn is_open_for(self, color: Color) -> bool {
        self.is_empty() || self.is_opponent_of(color)
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Self {
        piece.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE;

/// Swap light and dark castling flags.
#[inline]
pub const fn mirror_castling_rights(rights: CastlingRights) -> CastlingRights {
    ((rights & 0b0011) << 2) | ((rights & 0b1100) >> 2)
}

/// Origin and destination. Captures and promotions are derived from the
/// position the move is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// The same move seen on the mirrored board.
    #[inline]
    pub const fn mirrored(self) -> Self {
        Self::new(self.from.mirrored(), self.to.mirrored())
    }
}

impl From<(Square, Square)> for Move {
    fn from((from, to): (Square, Square)) -> Self {
        Self::new(from, to)
    }
}

impl From<Move> for (Square, Square) {
    fn from(mv: Move) -> Self {
        (mv.from, mv.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match move_to_long_algebraic(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}{}", self.from, self.to),
        }
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        long_algebraic_to_move(s)
    }
}
