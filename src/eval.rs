//! Modulo di valutazione - materiale + Piece-Square Tables (PSQT)
//!
//! Le PSQT funzionano come una "mappa di calore" della scacchiera:
//! ogni casella ha un valore bonus/malus che incentiva posizioni
//! strategicamente migliori (pedoni centrali, cavalieri sviluppati).
//! Le tabelle sono orientate per il Bianco; per il Nero si leggono con le
//! traverse specchiate.

use crate::board::{Board, Color, Piece, PieceKind};
use crate::error::EngineError;

// ============================================================================
// VALORI MATERIALI (in pedoni)
// ============================================================================
// Scala volutamente mista: il materiale è in unità-pedone mentre le tabelle
// posizionali arrivano fino a 50. Il Re vale 0 nel bilancio materiale, la
// sicurezza del Re non viene valutata.
const PAWN_VALUE: f64 = 1.0;
const KNIGHT_VALUE: f64 = 3.0;
const BISHOP_VALUE: f64 = 3.5; // Gli alfieri valgono più dei cavalli
const ROOK_VALUE: f64 = 5.0;
const QUEEN_VALUE: f64 = 9.5;
const KING_VALUE: f64 = 0.0;

fn material_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

// ============================================================================
// PIECE-SQUARE TABLES (dal punto di vista del BIANCO)
// ============================================================================
// Indici: [row][file], row 0 = prima traversa (A1..H1), row 7 = ottava.
// Per il Nero la stessa tabella si legge con le righe invertite: 7 - row.

type Psqt = [[i16; 8]; 8];

/// PSQT per i pedoni: incentiva i pedoni centrali e l'avanzamento verso la
/// promozione, penalizza i pedoni centrali rimasti indietro.
const PAWN_PSQT: Psqt = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// PSQT per i cavalieri: posizione centrale, evita i bordi.
const KNIGHT_PSQT: Psqt = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// PSQT per gli alfieri: diagonali lunghe e caselle semi-centrali.
const BISHOP_PSQT: Psqt = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

/// PSQT per le torri: settima traversa e colonne centrali.
const ROOK_PSQT: Psqt = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

/// PSQT per la regina: sviluppo centrale, penalità ai bordi.
const QUEEN_PSQT: Psqt = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

// Nessuna tabella per il Re: bonus posizionale 0 su tutta la scacchiera.
fn psqt_for(kind: PieceKind) -> Option<&'static Psqt> {
    match kind {
        PieceKind::Pawn => Some(&PAWN_PSQT),
        PieceKind::Knight => Some(&KNIGHT_PSQT),
        PieceKind::Bishop => Some(&BISHOP_PSQT),
        PieceKind::Rook => Some(&ROOK_PSQT),
        PieceKind::Queen => Some(&QUEEN_PSQT),
        PieceKind::King => None,
    }
}

/// Positional bonus magnitude for a piece standing on `(row, file)`.
/// Black reads the White-oriented table with ranks mirrored; the sign of the
/// contribution is applied by [`evaluate`].
pub fn piece_square_bonus(piece: Piece, row: usize, file: usize) -> i16 {
    let Some(table) = psqt_for(piece.kind) else {
        return 0;
    };
    match piece.color {
        Color::White => table[row][file],
        Color::Black => table[7 - row][file],
    }
}

/// Static evaluation: material plus positional bonus over every occupied
/// square. Positive favors White. Pure and total; summation order is
/// irrelevant and any board yields a finite number.
///
/// The standard starting position evaluates to exactly `0.0`: material is
/// balanced and the mirrored table reads cancel.
pub fn evaluate(board: &Board) -> f64 {
    let mut score = 0.0;
    for row in 0..8 {
        for file in 0..8 {
            let Some(piece) = board.get(row, file) else {
                continue;
            };
            let sign = match piece.color {
                Color::White => 1.0,
                Color::Black => -1.0,
            };
            score += sign * material_value(piece.kind);
            score += sign * f64::from(piece_square_bonus(piece, row, file));
        }
    }
    score
}

/// Static score normalized by the number of Black pieces (king included),
/// the numeric leg of the combined evaluation pipeline. A board with no
/// Black pieces surfaces [`EngineError::DivisionByZero`] instead of faulting.
pub fn normalized_score(board: &Board) -> Result<f64, EngineError> {
    let defenders = board.count_pieces_of(Color::Black);
    if defenders == 0 {
        return Err(EngineError::DivisionByZero);
    }
    Ok(evaluate(board) / defenders as f64)
}
