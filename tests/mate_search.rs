use scaccomatto::board::{decode, Board, Color, RankOrder};
use scaccomatto::rules::{move_text, Arbiter};
use scaccomatto::search::{find_forced_mate, is_forced_mate, MateSearchMode};

fn board(text: &str) -> Board {
    decode(text, RankOrder::TopRankFirst).unwrap()
}

// Black queen a7, Black king h3, White king h1. Qa1 is the only mate in
// one: the queen reaches the back rank only on a1, and the Black king
// already covers both flight squares g2 and h2.
const MATE_IN_ONE: &str = "8/q7/8/8/8/7k/8/7K";

#[test]
fn finds_the_unique_mate_in_one() {
    for mode in [MateSearchMode::Alternating, MateSearchMode::UniformUniversal] {
        let m = find_forced_mate(&board(MATE_IN_ONE), Color::Black, 1, mode)
            .unwrap()
            .expect("mate in one must be found");
        assert_eq!(move_text(&m), "a7a1");
    }
}

#[test]
fn deep_search_result_is_sound() {
    let b = board(MATE_IN_ONE);
    let m = find_forced_mate(&b, Color::Black, 5, MateSearchMode::Alternating)
        .unwrap()
        .expect("a forced mate within 5 plies exists");

    // Whatever move the root returned, the defender must be provably mated
    // within the remaining depth.
    let mut arbiter = Arbiter::from_board(&b, Color::Black).unwrap();
    let chosen = arbiter
        .legal_moves()
        .into_iter()
        .find(|c| move_text(c) == move_text(&m))
        .expect("returned move must be legal");
    arbiter.apply(&chosen);

    let after = decode(&arbiter.position_text(), RankOrder::TopRankFirst).unwrap();
    assert!(
        is_forced_mate(&after, arbiter.side_to_move(), 4, MateSearchMode::Alternating).unwrap()
    );
}

#[test]
fn no_mate_from_the_start_position() {
    for mode in [MateSearchMode::Alternating, MateSearchMode::UniformUniversal] {
        let found = find_forced_mate(&Board::starting_position(), Color::White, 5, mode).unwrap();
        assert!(found.is_none(), "{mode:?} found a mate that does not exist");
    }
}

#[test]
fn stalemating_the_defender_is_not_mate() {
    // White queen b6 boxes the lone Black king on a8; several queen moves
    // stalemate, none mates within one ply.
    let b = board("k7/8/1Q6/8/8/8/8/7K");
    for mode in [MateSearchMode::Alternating, MateSearchMode::UniformUniversal] {
        assert!(find_forced_mate(&b, Color::White, 1, mode).unwrap().is_none());
    }
}

#[test]
fn depth_zero_root_proves_nothing() {
    let found =
        find_forced_mate(&board(MATE_IN_ONE), Color::Black, 0, MateSearchMode::Alternating)
            .unwrap();
    assert!(found.is_none());
}

#[test]
fn already_mated_defender_reports_true() {
    // The position after Qa1#: White to move, checkmated.
    let after = board("8/8/8/8/8/7k/8/q6K");
    assert!(is_forced_mate(&after, Color::White, 4, MateSearchMode::Alternating).unwrap());
    assert!(is_forced_mate(&after, Color::White, 0, MateSearchMode::Alternating).unwrap());
}
