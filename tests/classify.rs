use scaccomatto::board::{decode, Board, Color, RankOrder};
use scaccomatto::classify::{classify, Verdict};

fn board(text: &str) -> Board {
    decode(text, RankOrder::TopRankFirst).unwrap()
}

#[test]
fn forced_capture_delivers_checkmate() {
    // Black is in check from the rook on e8; the only legal reply is Rxe8,
    // which mates the boxed-in White king along the e-file.
    let b = board("3rR1k1/5ppp/8/8/8/8/3P1P2/3RKR2");
    assert_eq!(classify(&b, Color::Black, 0).unwrap(), Some(Verdict::Checkmate));
    // A longer lookahead stops at the same first-ply verdict.
    assert_eq!(classify(&b, Color::Black, 2).unwrap(), Some(Verdict::Checkmate));
}

#[test]
fn forced_king_move_delivers_stalemate() {
    // Black's only legal move is Kxa3, after which White has no move and is
    // not in check. Checkmate is tested first and does not apply.
    let b = board("1r6/8/8/2p5/k1P5/Q7/P7/K7");
    assert_eq!(classify(&b, Color::Black, 0).unwrap(), Some(Verdict::Stalemate));
}

#[test]
fn bare_bishop_reports_insufficient_material() {
    // Whatever Black plays first, king and bishop against a lone king
    // cannot win; the verdict holds for every enumeration order.
    let b = board("kb6/8/8/8/8/8/8/7K");
    assert_eq!(
        classify(&b, Color::Black, 0).unwrap(),
        Some(Verdict::InsufficientMaterial)
    );
}

#[test]
fn quiet_position_has_no_verdict() {
    assert_eq!(classify(&Board::starting_position(), Color::White, 2).unwrap(), None);
}

#[test]
fn no_legal_move_means_no_verdict() {
    // Black is already stalemated: the walk has no first move to follow.
    let b = board("k7/8/1Q6/8/8/8/8/7K");
    assert_eq!(classify(&b, Color::Black, 2).unwrap(), None);
}
