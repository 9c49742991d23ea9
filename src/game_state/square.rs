//! Padded mailbox addressing.
//!
//! A square is an index into a 120-cell array laid out as
//! `10 + 10 * file + rank`, where files (a..h) and ranks are both 1-based on
//! the playable board. Stepping one rank is `±1`, stepping one file is `±10`.
//! Every cell outside files 1..=8 / ranks 1..=8 is an off-board sentinel, and
//! the padding is wide enough that every knight or king offset taken from a
//! playable square still lands inside the array.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Total number of cells in the padded board array.
pub const BOARD_CELLS: usize = 120;

/// Index of a cell in the padded board array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Wrap a raw cell index. Fails if the index lies outside the array.
    pub fn new(index: u8) -> ChessResult<Self> {
        if (index as usize) < BOARD_CELLS {
            Ok(Square(index))
        } else {
            Err(ChessError::Address(format!(
                "cell index {index} outside 0..{BOARD_CELLS}"
            )))
        }
    }

    /// Square for a playable file/rank pair (both `1..=8`).
    pub fn from_file_rank(file: u8, rank: u8) -> ChessResult<Self> {
        if !(1..=8).contains(&file) {
            return Err(ChessError::Address(format!("file {file} outside 1..=8")));
        }
        if !(1..=8).contains(&rank) {
            return Err(ChessError::Address(format!("rank {rank} outside 1..=8")));
        }
        Ok(Self::at(file, rank))
    }

    /// Square for a file/rank pair already known to lie in `0..=9`.
    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        Square(10 + 10 * file + rank)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Decode to `(file, rank)`. Off-board cells decode to values outside
    /// `1..=8` (the lowest row of padding decodes to file `-1`).
    #[inline]
    pub const fn file_rank(self) -> (i8, i8) {
        ((self.0 / 10) as i8 - 1, (self.0 % 10) as i8)
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file_rank().0
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.file_rank().1
    }

    #[inline]
    pub const fn is_playable(self) -> bool {
        let (file, rank) = self.file_rank();
        file >= 1 && file <= 8 && rank >= 1 && rank <= 8
    }

    /// Step by a raw cell offset, or `None` if the result leaves the array.
    #[inline]
    pub fn offset(self, delta: i8) -> Option<Square> {
        let target = self.0 as i16 + delta as i16;
        if (0..BOARD_CELLS as i16).contains(&target) {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Reflection across the line between ranks 4 and 5 (rank `r` becomes
    /// `9 - r`, file unchanged).
    #[inline]
    pub const fn mirrored(self) -> Square {
        let rank = self.0 % 10;
        Square(self.0 - rank + (9 - rank))
    }

    /// Number of king steps between two squares.
    #[inline]
    pub fn chebyshev_distance(self, other: Square) -> u8 {
        let (f1, r1) = self.file_rank();
        let (f2, r2) = other.file_rank();
        (f1 - f2).unsigned_abs().max((r1 - r2).unsigned_abs())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match square_to_algebraic(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "#{}", self.0),
        }
    }
}

/// The 64 playable squares in scan order: a1, a2, .., a8, b1, .., h8.
pub const PLAYABLE_SQUARES: [Square; 64] = playable_squares();

const fn playable_squares() -> [Square; 64] {
    let mut out = [Square(0); 64];
    let mut file = 1u8;
    while file <= 8 {
        let mut rank = 1u8;
        while rank <= 8 {
            out[((file - 1) * 8 + (rank - 1)) as usize] = Square::at(file, rank);
            rank += 1;
        }
        file += 1;
    }
    out
}

/// Any of the interchangeable location forms: a `Square`, a `(file, rank)`
/// pair, or two-character algebraic text.
pub trait IntoSquare {
    fn into_square(self) -> ChessResult<Square>;
}

impl IntoSquare for Square {
    #[inline]
    fn into_square(self) -> ChessResult<Square> {
        Ok(self)
    }
}

impl IntoSquare for (u8, u8) {
    #[inline]
    fn into_square(self) -> ChessResult<Square> {
        Square::from_file_rank(self.0, self.1)
    }
}

impl IntoSquare for &str {
    #[inline]
    fn into_square(self) -> ChessResult<Square> {
        algebraic_to_square(self)
    }
}

impl IntoSquare for &String {
    #[inline]
    fn into_square(self) -> ChessResult<Square> {
        algebraic_to_square(self)
    }
}

impl IntoSquare for String {
    #[inline]
    fn into_square(self) -> ChessResult<Square> {
        algebraic_to_square(&self)
    }
}

/// Convert any location form to a square index. Identity on squares.
#[inline]
pub fn to_square(location: impl IntoSquare) -> ChessResult<Square> {
    location.into_square()
}
