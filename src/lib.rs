pub mod board;
pub mod classify;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

pub use board::{decode, encode, Board, Color, Piece, PieceKind, RankOrder, START_BOARD_TEXT};
pub use classify::{classify, Verdict};
pub use error::EngineError;
pub use eval::{evaluate, normalized_score};
pub use rules::{count_legal_moves, move_text, Arbiter, Move};
pub use search::{
    evaluate_position, find_forced_mate, is_forced_mate, select_best_move, Evaluation,
    MateSearchMode,
};
