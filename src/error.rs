//! Typed failures surfaced by the codec, the rules session and the
//! evaluation pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Position text that does not describe an 8x8 piece placement:
    /// wrong segment count, a rank not covering exactly 8 files, or an
    /// invalid piece character.
    #[error("malformed position text: {0}")]
    MalformedPosition(String),

    /// The rules engine refused the position it was asked to load.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// Score normalization was asked for a board with no Black pieces.
    #[error("cannot normalize score: no pieces for the minimizing side")]
    DivisionByZero,

    /// The side to move has nothing to play. A terminal-position signal,
    /// not a fault; callers check for it before displaying a move.
    #[error("no legal moves for the side to move")]
    NoLegalMoves,
}
