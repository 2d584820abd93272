//! Single-line terminal-state classifier.
//!
//! Walks a short, fixed-depth line through the rules session to detect an
//! imminent checkmate, stalemate or draw before numeric evaluation runs. At
//! every step only the *first* legal move the session enumerates is applied,
//! so forced outcomes are detected along that single line only; this is a
//! deterministic follow-one-line traversal, not a tree search.

use std::fmt;

use crate::board::{Board, Color};
use crate::error::EngineError;
use crate::rules::Arbiter;

/// Terminal outcomes the classifier can report, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    Repetition,
    InsufficientMaterial,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Checkmate => "checkmate",
            Verdict::Stalemate => "stalemate",
            Verdict::FiftyMoveRule => "fifty-move rule",
            Verdict::Repetition => "repetition",
            Verdict::InsufficientMaterial => "insufficient material",
        };
        write!(f, "{name}")
    }
}

/// Follow one line for `lookahead + 1` plies, reporting the first verdict
/// reached. Each applied move flips the side to move inside the session;
/// the session keeps its history, so repetition and the fifty-move clock
/// accumulate along the walked line. A step with no legal move ends the
/// walk with no verdict. Nothing observable survives the call.
pub fn classify(
    board: &Board,
    side: Color,
    lookahead: u32,
) -> Result<Option<Verdict>, EngineError> {
    let mut arbiter = Arbiter::from_board(board, side)?;
    let mut remaining = lookahead;
    loop {
        let Some(first) = arbiter.legal_moves().into_iter().next() else {
            return Ok(None);
        };
        arbiter.apply(&first);
        if let Some(verdict) = verdict_of(&arbiter) {
            return Ok(Some(verdict));
        }
        if remaining == 0 {
            return Ok(None);
        }
        remaining -= 1;
    }
}

// Fixed priority order; simultaneous conditions resolve to the first match.
fn verdict_of(arbiter: &Arbiter) -> Option<Verdict> {
    if arbiter.is_checkmate() {
        Some(Verdict::Checkmate)
    } else if arbiter.is_stalemate() {
        Some(Verdict::Stalemate)
    } else if arbiter.is_fifty_moves() {
        Some(Verdict::FiftyMoveRule)
    } else if arbiter.is_repetition() {
        Some(Verdict::Repetition)
    } else if arbiter.is_insufficient_material() {
        Some(Verdict::InsufficientMaterial)
    } else {
        None
    }
}
