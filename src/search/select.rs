//! Combined evaluation pipeline and single-ply best-move selector.

use super::mate::{find_forced_mate, MateSearchMode};
use crate::board::{decode, Board, Color, RankOrder};
use crate::classify::{classify, Verdict};
use crate::error::EngineError;
use crate::eval::normalized_score;
use crate::rules::{Arbiter, Move};

/// Fixed depth of the forced-mate prover, in plies.
pub const MATE_SEARCH_DEPTH: u32 = 5;
/// Fixed classifier lookahead, in plies beyond the first examined move.
pub const CLASSIFY_LOOKAHEAD: u32 = 2;

/// Outcome of the combined pipeline: a proven mate, a terminal verdict, or a
/// numeric score. Verdicts are distinct terminal outcomes, never folded into
/// the numeric scale.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// A forced mate was proven from the position.
    ForcedMate,
    /// The classifier's short walk hit a terminal outcome.
    Verdict(Verdict),
    /// Static score normalized by Black's piece count. Positive favors the
    /// side whose pieces carry positive material values.
    Score(f64),
}

impl Evaluation {
    /// Candidate ordering used by the selector: a proven mate beats any
    /// numeric score, a strictly greater score beats a smaller one, and the
    /// first candidate seen keeps ties. Terminal verdicts never displace a
    /// best candidate.
    pub fn improves_on(&self, best: Option<&Evaluation>) -> bool {
        match (self, best) {
            (Evaluation::Verdict(_), _) => false,
            (Evaluation::ForcedMate, Some(Evaluation::ForcedMate)) => false,
            (Evaluation::ForcedMate, _) => true,
            (Evaluation::Score(_), None) => true,
            (Evaluation::Score(s), Some(Evaluation::Score(b))) => s > b,
            (Evaluation::Score(_), Some(_)) => false,
        }
    }
}

/// How good is this position for the side to move?
///
/// 1. Prove a forced mate within [`MATE_SEARCH_DEPTH`] plies - stop if found.
/// 2. Classify the position with [`CLASSIFY_LOOKAHEAD`] - stop on a verdict.
/// 3. Fall back to the normalized static score.
pub fn evaluate_position(board: &Board, side: Color) -> Result<Evaluation, EngineError> {
    if find_forced_mate(board, side, MATE_SEARCH_DEPTH, MateSearchMode::default())?.is_some() {
        return Ok(Evaluation::ForcedMate);
    }
    if let Some(verdict) = classify(board, side, CLASSIFY_LOOKAHEAD)? {
        return Ok(Evaluation::Verdict(verdict));
    }
    Ok(Evaluation::Score(normalized_score(board)?))
}

/// Enumerate the side's legal moves, evaluate each resulting position from
/// the opponent's perspective, and return the best move together with the
/// board it leads to. Every applied move is undone before returning,
/// success or failure. A terminal position - or a candidate set with no
/// rankable outcome - surfaces [`EngineError::NoLegalMoves`].
pub fn select_best_move(board: &Board, side: Color) -> Result<(Move, Board), EngineError> {
    let mut arbiter = Arbiter::from_board(board, side)?;
    let mut best: Option<(Move, Board, Evaluation)> = None;

    for m in arbiter.legal_moves() {
        arbiter.apply(&m);
        let evaluated = evaluate_applied(&arbiter);
        arbiter.undo_last();

        let (resulting, outcome) = evaluated?;
        if outcome.improves_on(best.as_ref().map(|(_, _, e)| e)) {
            best = Some((m, resulting, outcome));
        }
    }

    match best {
        Some((m, resulting, _)) => Ok((m, resulting)),
        None => Err(EngineError::NoLegalMoves),
    }
}

// The side to move in the live position is already the opponent of the side
// that played the candidate move.
fn evaluate_applied(arbiter: &Arbiter) -> Result<(Board, Evaluation), EngineError> {
    let resulting = decode(&arbiter.position_text(), RankOrder::TopRankFirst)?;
    let outcome = evaluate_position(&resulting, arbiter.side_to_move())?;
    Ok((resulting, outcome))
}
