//! Immutable position snapshot.
//!
//! `Position` is the central model of the engine. It stores the padded cell
//! array, side to move, castling flags, clocks and the move history. Every
//! transition (placing a piece, applying a move, mirroring) returns a new
//! value, so the lazily computed mirror and move lists cached on a position
//! never need invalidation.

use std::sync::OnceLock;

use tracing::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{BACK_RANK, CASTLING_HOMES};
use crate::game_state::chess_types::*;
use crate::game_state::mirror::mirror_position;
use crate::game_state::square::{IntoSquare, Square, BOARD_CELLS, PLAYABLE_SQUARES};
use crate::move_generation::move_generator::generate_moves;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug)]
pub struct Position {
    // Border cells hold `Cell::OffBoard` for the lifetime of the value.
    pub(crate) cells: [Cell; BOARD_CELLS],

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,

    pub(crate) halfmove_clock: u16,
    pub(crate) ply: u16,
    pub(crate) history: Vec<Move>,

    mirror_cache: OnceLock<Box<Position>>,
    move_cache: [OnceLock<Vec<Move>>; 2],
}

impl Default for Position {
    fn default() -> Self {
        let mut cells = [Cell::OffBoard; BOARD_CELLS];
        for sq in PLAYABLE_SQUARES {
            cells[sq.index()] = Cell::Empty;
        }

        Self {
            cells,
            side_to_move: Color::Light,
            castling_rights: 0,
            halfmove_clock: 0,
            ply: 0,
            history: Vec::new(),
            mirror_cache: OnceLock::new(),
            move_cache: [OnceLock::new(), OnceLock::new()],
        }
    }
}

impl Clone for Position {
    fn clone(&self) -> Self {
        self.detached()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.halfmove_clock == other.halfmove_clock
            && self.ply == other.ply
    }
}

impl Eq for Position {}

impl Position {
    /// All 64 playable cells empty, light to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard starting arrangement.
    pub fn new_game() -> Self {
        let mut position = Self::new_empty();
        for (file, kind) in (1u8..=8).zip(BACK_RANK) {
            position.put(Square::at(file, 1), Some(Piece::new(Color::Light, kind)));
            position.put(Square::at(file, 2), Some(Piece::new(Color::Light, PieceKind::Pawn)));
            position.put(Square::at(file, 7), Some(Piece::new(Color::Dark, PieceKind::Pawn)));
            position.put(Square::at(file, 8), Some(Piece::new(Color::Dark, kind)));
        }
        position.castling_rights = CASTLE_ALL;
        position
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Copy of the placement, flags and history with empty caches.
    pub(crate) fn detached(&self) -> Self {
        Self {
            cells: self.cells,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            halfmove_clock: self.halfmove_clock,
            ply: self.ply,
            history: self.history.clone(),
            mirror_cache: OnceLock::new(),
            move_cache: [OnceLock::new(), OnceLock::new()],
        }
    }

    /// Write a playable cell of a position that has not been shared yet.
    #[inline]
    pub(crate) fn put(&mut self, square: Square, piece: Option<Piece>) {
        debug_assert!(square.is_playable(), "sentinel cell {} written", square.index());
        self.cells[square.index()] = Cell::from(piece);
    }

    /// Contents of any cell, sentinels included.
    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Contents of the cell at any location form.
    pub fn get(&self, location: impl IntoSquare) -> ChessResult<Cell> {
        Ok(self.cell(location.into_square()?))
    }

    pub fn piece_at(&self, location: impl IntoSquare) -> ChessResult<Option<Piece>> {
        Ok(self.get(location)?.piece())
    }

    /// New position with one playable square set to `piece` (or emptied).
    pub fn with_piece(&self, location: impl IntoSquare, piece: Option<Piece>) -> ChessResult<Self> {
        let square = location.into_square()?;
        if !square.is_playable() {
            return Err(ChessError::Address(format!(
                "cell {} is a border sentinel and cannot hold a piece",
                square.index()
            )));
        }

        let mut next = self.detached();
        next.put(square, piece);
        Ok(next)
    }

    /// New position with `color` to move. The full-move number is kept and
    /// the ply parity follows the side.
    pub fn with_side_to_move(&self, color: Color) -> Self {
        let mut next = self.detached();
        next.side_to_move = color;
        next.ply = ply_for_side(self.ply, color);
        next
    }

    pub fn with_castling_rights(&self, rights: CastlingRights) -> Self {
        let mut next = self.detached();
        next.castling_rights = rights & CASTLE_ALL;
        next
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.ply / 2 + 1
    }

    /// Moves played to reach this position, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Occupied playable squares in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        PLAYABLE_SQUARES
            .into_iter()
            .filter_map(|sq| self.cell(sq).piece().map(|piece| (sq, piece)))
    }

    /// Apply a move: relocate the piece (overwriting any capture), promote a
    /// pawn reaching its last rank to a queen, flip the side to move, update
    /// the clocks and history, and drop castling flags whose king or rook has
    /// left home.
    pub fn apply_move(&self, mv: Move) -> ChessResult<Self> {
        for square in [mv.from, mv.to] {
            if !square.is_playable() {
                return Err(ChessError::Address(format!(
                    "move {mv} touches off-board cell {}",
                    square.index()
                )));
            }
        }

        let moving = self
            .cell(mv.from)
            .piece()
            .ok_or_else(|| ChessError::InvalidMove(format!("no piece on origin square {}", mv.from)))?;
        let captured = self.cell(mv.to).piece();

        let mut next = self.detached();
        next.put(mv.from, None);

        let placed = if moving.kind == PieceKind::Pawn && mv.to.rank() == moving.color.promotion_rank() {
            Piece::new(moving.color, PieceKind::Queen)
        } else {
            moving
        };
        next.put(mv.to, Some(placed));

        next.side_to_move = self.side_to_move.opposite();
        next.history.push(mv);
        next.ply = self
            .ply
            .checked_add(1)
            .ok_or_else(|| ChessError::InvalidMove(format!("ply counter overflows after {mv}")))?;

        if moving.kind == PieceKind::Pawn || captured.is_some() {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        next.castling_rights &= next.castling_rights_on_board();

        trace!(
            %mv,
            piece = %moving.fen_char(),
            capture = captured.is_some(),
            promotion = placed != moving,
            ply = next.ply,
            "applied move"
        );

        Ok(next)
    }

    /// Castling flags whose king and rook still stand on their home squares.
    fn castling_rights_on_board(&self) -> CastlingRights {
        let mut rights = 0;
        for (flag, color, king_home, rook_home) in CASTLING_HOMES {
            let king_home_ok = self.cell(king_home) == Cell::Occupied(Piece::new(color, PieceKind::King));
            let rook_home_ok = self.cell(rook_home) == Cell::Occupied(Piece::new(color, PieceKind::Rook));
            if king_home_ok && rook_home_ok {
                rights |= flag;
            }
        }
        rights
    }

    /// The color-swapped reflection of this position, computed once.
    pub fn mirror(&self) -> &Position {
        self.mirror_cache.get_or_init(|| Box::new(mirror_position(self)))
    }

    /// Pseudo-legal moves for `color`, computed once per color.
    pub fn moves(&self, color: Color) -> ChessResult<&[Move]> {
        let cache = &self.move_cache[color.index()];
        if let Some(moves) = cache.get() {
            return Ok(moves);
        }

        let moves = generate_moves(self, color)?;
        Ok(cache.get_or_init(|| moves))
    }
}

/// Ply within the same full move whose parity matches `side`: even for
/// light, odd for dark.
#[inline]
pub(crate) fn ply_for_side(ply: u16, side: Color) -> u16 {
    (ply & !1) | u16::from(side == Color::Dark)
}
