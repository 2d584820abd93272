//! Forced-mate proving and single-ply move selection.

pub mod mate;
pub mod select;

pub use self::mate::{find_forced_mate, is_forced_mate, MateSearchMode, NodeKind};
pub use self::select::{
    evaluate_position, select_best_move, Evaluation, CLASSIFY_LOOKAHEAD, MATE_SEARCH_DEPTH,
};
