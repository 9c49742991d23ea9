//! Crate-wide error type.
//!
//! Addressing and format failures come from caller input and are always
//! surfaced to whoever requested the parse. `InternalConsistency` signals a
//! corrupted position and is not expected in normal operation.

/// Unified error type for addressing, parsing, move application and generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Malformed algebraic text, out-of-range file/rank, or a sentinel cell
    /// used where a playable square is required.
    #[error("invalid square address: {0}")]
    Address(String),

    /// Serialized position with the wrong number of fields or ranks, or an
    /// unreadable field.
    #[error("invalid position format: {0}")]
    Format(String),

    /// A move that cannot be applied or parsed.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// A position whose cells disagree with the board layout.
    #[error("internal consistency failure: {0}")]
    InternalConsistency(String),

    /// Reading commands or writing output failed.
    #[error("i/o failure: {0}")]
    Io(String),
}

impl From<std::io::Error> for ChessError {
    fn from(err: std::io::Error) -> Self {
        ChessError::Io(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type ChessResult<T> = Result<T, ChessError>;
