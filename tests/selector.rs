use scaccomatto::board::{decode, Board, Color, RankOrder};
use scaccomatto::classify::Verdict;
use scaccomatto::error::EngineError;
use scaccomatto::rules::move_text;
use scaccomatto::search::{evaluate_position, select_best_move, Evaluation};

fn board(text: &str) -> Board {
    decode(text, RankOrder::TopRankFirst).unwrap()
}

#[test]
fn pipeline_scores_the_start_position_at_zero() {
    let outcome = evaluate_position(&Board::starting_position(), Color::White).unwrap();
    assert_eq!(outcome, Evaluation::Score(0.0));
}

#[test]
fn pipeline_reports_forced_mate_first() {
    // Mate in one for Black: the prover preempts classifier and score.
    let outcome = evaluate_position(&board("8/q7/8/8/8/7k/8/7K"), Color::Black).unwrap();
    assert_eq!(outcome, Evaluation::ForcedMate);
}

#[test]
fn pipeline_reports_verdicts_before_scores() {
    let outcome = evaluate_position(&board("kb6/8/8/8/8/8/8/7K"), Color::Black).unwrap();
    assert_eq!(outcome, Evaluation::Verdict(Verdict::InsufficientMaterial));
}

#[test]
fn selector_takes_the_hanging_queen() {
    // Rxb7 wins the queen; no reply line allows a forced mate, so every
    // candidate ranks numerically and the capture scores best.
    let b = board("7k/1q6/8/1R6/8/8/8/K7");
    let (best, resulting) = select_best_move(&b, Color::White).unwrap();
    assert_eq!(move_text(&best), "b5b7");
    assert_eq!(resulting, board("7k/1R6/8/8/8/8/8/K7"));
}

#[test]
fn selector_surfaces_terminal_positions() {
    // Stalemated side to move.
    let err = select_best_move(&board("k7/8/1Q6/8/8/8/8/7K"), Color::Black).unwrap_err();
    assert!(matches!(err, EngineError::NoLegalMoves), "{err}");

    // Checkmated side to move.
    let err = select_best_move(&board("4r1k1/5ppp/8/8/8/8/3P1P2/3RKR2"), Color::White).unwrap_err();
    assert!(matches!(err, EngineError::NoLegalMoves), "{err}");
}

#[test]
fn outcome_ordering_prefers_mates_and_first_seen_ties() {
    let mate = Evaluation::ForcedMate;
    let low = Evaluation::Score(1.0);
    let high = Evaluation::Score(2.0);
    let verdict = Evaluation::Verdict(Verdict::Repetition);

    // Anything rankable beats an empty slate - except a verdict.
    assert!(mate.improves_on(None));
    assert!(low.improves_on(None));
    assert!(!verdict.improves_on(None));

    // Mate beats numbers and is kept on ties (first success wins).
    assert!(mate.improves_on(Some(&high)));
    assert!(!mate.improves_on(Some(&mate)));
    assert!(!high.improves_on(Some(&mate)));

    // Strictly greater wins; equal keeps the earlier candidate.
    assert!(high.improves_on(Some(&low)));
    assert!(!low.improves_on(Some(&high)));
    assert!(!low.improves_on(Some(&low.clone())));
}
