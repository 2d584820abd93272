//! Forced-mate prover.
//!
//! A position is a forced mate within `depth` plies when, however the
//! defender replies, checkmate is unavoidable before the horizon. The
//! recursion is tagged with an explicit [`NodeKind`]: existential nodes
//! (the attacker picks one good move) and universal nodes (every reply of
//! the defender must still be doomed).

use crate::board::{Board, Color};
use crate::error::EngineError;
use crate::rules::{Arbiter, Move};

/// Quantifier applied at one ply of the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// One successful continuation proves the node.
    Existential,
    /// Every continuation must be proven; one escape disproves the node.
    Universal,
}

impl NodeKind {
    fn flipped(self) -> NodeKind {
        match self {
            NodeKind::Existential => NodeKind::Universal,
            NodeKind::Universal => NodeKind::Existential,
        }
    }
}

/// How the quantifier evolves below the root.
///
/// `Alternating` is the standard prover: existential at the attacker's
/// turns, universal at the defender's, flipping each ply. `UniformUniversal`
/// keeps the universal rule at every ply below the root, which also demands
/// that the *attacker* has no way out of delivering mate; it proves fewer
/// mates than the alternating rule and exists for parity with engines that
/// search that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MateSearchMode {
    #[default]
    Alternating,
    UniformUniversal,
}

/// Root step, existential over the attacker's moves: return the first move
/// after which the defender is provably mated within `depth - 1` plies.
/// There is no comparison across candidates - the first success wins. Every
/// applied move is undone before the call returns.
pub fn find_forced_mate(
    board: &Board,
    side: Color,
    depth: u32,
    mode: MateSearchMode,
) -> Result<Option<Move>, EngineError> {
    if depth == 0 {
        return Ok(None);
    }
    let mut arbiter = Arbiter::from_board(board, side)?;
    for m in arbiter.legal_moves() {
        arbiter.apply(&m);
        let doomed = proven(&mut arbiter, depth - 1, NodeKind::Universal, mode);
        arbiter.undo_last();
        if doomed {
            return Ok(Some(m));
        }
    }
    Ok(None)
}

/// Defender step: is the side to move on this board provably mated within
/// `depth` plies? Starts universal, like the node below the root.
pub fn is_forced_mate(
    board: &Board,
    side: Color,
    depth: u32,
    mode: MateSearchMode,
) -> Result<bool, EngineError> {
    let mut arbiter = Arbiter::from_board(board, side)?;
    Ok(proven(&mut arbiter, depth, NodeKind::Universal, mode))
}

fn proven(arbiter: &mut Arbiter, depth: u32, kind: NodeKind, mode: MateSearchMode) -> bool {
    if depth == 0 {
        // Horizon: success exactly when the position is already checkmate.
        // Stalemate with no depth left reports failure, never an error.
        return arbiter.is_checkmate();
    }

    let moves = arbiter.legal_moves();
    if moves.is_empty() {
        // Mate before the horizon still counts at a universal node;
        // stalemate disproves it. An existential node with no moves has
        // nothing left to try.
        return match kind {
            NodeKind::Universal => arbiter.is_checkmate(),
            NodeKind::Existential => false,
        };
    }

    let child_kind = match mode {
        MateSearchMode::Alternating => kind.flipped(),
        MateSearchMode::UniformUniversal => NodeKind::Universal,
    };

    match kind {
        NodeKind::Universal => {
            for m in moves {
                arbiter.apply(&m);
                let ok = proven(arbiter, depth - 1, child_kind, mode);
                arbiter.undo_last();
                if !ok {
                    return false;
                }
            }
            true
        }
        NodeKind::Existential => {
            for m in moves {
                arbiter.apply(&m);
                let ok = proven(arbiter, depth - 1, child_kind, mode);
                arbiter.undo_last();
                if ok {
                    return true;
                }
            }
            false
        }
    }
}
