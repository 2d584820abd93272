//! Rules-engine session on top of shakmaty.
//!
//! The core never generates moves or detects terminal states itself: every
//! legality question goes through an [`Arbiter`], a live position with a
//! clone-per-ply stack so that `undo_last` exactly reverses the most recent
//! `apply`. One session is exclusively owned by the search call that created
//! it; branches never share a live position.

use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Bitboard, CastlingMode, Chess, EnPassantMode, Position};

use crate::board::{encode, Board, Color, RankOrder};
use crate::error::EngineError;

/// Opaque move value, produced and consumed by the rules engine only.
pub type Move = shakmaty::Move;

#[derive(Debug)]
pub struct Arbiter {
    // Invariant: never empty; index 0 is the loaded position.
    stack: Vec<Chess>,
}

impl Arbiter {
    /// Load a placement text with an explicit side to move. The side is
    /// never inferred from board contents. Castling rights and en-passant
    /// are not part of the placement text, so the session starts with
    /// neither, and with fresh move clocks.
    pub fn load(text: &str, side: Color) -> Result<Arbiter, EngineError> {
        let turn = match side {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let fen: Fen = format!("{text} {turn} - - 0 1")
            .parse()
            .map_err(|e: shakmaty::fen::ParseFenError| EngineError::InvalidPosition(e.to_string()))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| EngineError::InvalidPosition(e.to_string()))?;
        Ok(Arbiter {
            stack: vec![position],
        })
    }

    /// Encode an internal board and load it, top rank first.
    pub fn from_board(board: &Board, side: Color) -> Result<Arbiter, EngineError> {
        Arbiter::load(&encode(board, RankOrder::TopRankFirst), side)
    }

    fn current(&self) -> &Chess {
        self.stack.last().expect("session keeps at least the loaded position")
    }

    /// Legal moves for the side to move, in the engine's deterministic order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.current().legal_moves().into_iter().collect()
    }

    /// Play a move on the live position. Must come from [`legal_moves`] of
    /// the current position.
    pub fn apply(&mut self, m: &Move) {
        let mut next = self.current().clone();
        next.play_unchecked(m);
        self.stack.push(next);
    }

    /// Exactly reverse the most recent [`apply`]. Popping past the loaded
    /// position is a no-op.
    pub fn undo_last(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    pub fn is_checkmate(&self) -> bool {
        self.current().is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.current().is_stalemate()
    }

    /// Fifty-move rule over the session's own clock (loads start at zero).
    pub fn is_fifty_moves(&self) -> bool {
        self.current().halfmoves() >= 100
    }

    /// Threefold repetition over the line walked in this session.
    pub fn is_repetition(&self) -> bool {
        let current = hash_of(self.current());
        self.stack.iter().filter(|p| hash_of(p) == current).count() >= 3
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.current().is_insufficient_material()
    }

    /// Placement text of the live position, top rank first. Inverse of
    /// [`Arbiter::load`]'s parsing.
    pub fn position_text(&self) -> String {
        self.current().board().board_fen(Bitboard::EMPTY).to_string()
    }

    pub fn side_to_move(&self) -> Color {
        match self.current().turn() {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        }
    }
}

fn hash_of(position: &Chess) -> Zobrist64 {
    position.zobrist_hash(EnPassantMode::Legal)
}

/// Move text in coordinate notation, e.g. `e2e4` or `e7e8q`.
pub fn move_text(m: &Move) -> String {
    m.to_uci(CastlingMode::Standard).to_string()
}

/// How many legal moves the given side has on this board.
pub fn count_legal_moves(board: &Board, side: Color) -> Result<usize, EngineError> {
    Ok(Arbiter::from_board(board, side)?.legal_moves().len())
}
