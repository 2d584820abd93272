// Griglia interna: row 0 = prima traversa (lato Bianco), row 7 = ottava.
// L'ordine delle traverse nel testo di posizione è compito del codec, non
// della griglia: la griglia non è mai in ordine FEN alto-basso.

use std::fmt;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Piece code: uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { kind, color })
    }
}

/// One board cell: a piece or empty. No en-passant or castling state lives
/// at this layer; that state exists only inside the rules session.
pub type Square = Option<Piece>;

/// Placement text of the standard starting position, top rank first.
pub const START_BOARD_TEXT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// 8x8 piece placement, indexed `[row][file]`. Boards are cheap to clone and
/// are never mutated by evaluation or search; the rules session owns the
/// live position that gets pushed and popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Board::empty();
        for file in 0..8 {
            board.squares[0][file] = Some(Piece::new(BACK_RANK[file], Color::White));
            board.squares[1][file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[6][file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[7][file] = Some(Piece::new(BACK_RANK[file], Color::Black));
        }
        board
    }

    pub fn get(&self, row: usize, file: usize) -> Square {
        self.squares[row][file]
    }

    pub fn set(&mut self, row: usize, file: usize, square: Square) {
        self.squares[row][file] = square;
    }

    pub fn count_pieces(&self) -> usize {
        self.squares.iter().flatten().filter(|s| s.is_some()).count()
    }

    pub fn count_pieces_of(&self, color: Color) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|s| matches!(s, Some(p) if p.color == color))
            .count()
    }
}

impl fmt::Display for Board {
    /// Rank-by-rank grid, top rank first, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for file in 0..8 {
                if file > 0 {
                    write!(f, " ")?;
                }
                match self.squares[row][file] {
                    Some(piece) => write!(f, "{}", piece.to_char())?,
                    None => write!(f, ".")?,
                }
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Which internal row the first text segment describes. The whole crate uses
/// `TopRankFirst` (segment 0 = row 7), the order the rules engine expects;
/// `BottomRankFirst` emits segments in raw row order and survives only for
/// reading boards written that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    TopRankFirst,
    BottomRankFirst,
}

impl RankOrder {
    fn row_for_segment(self, segment: usize) -> usize {
        match self {
            RankOrder::TopRankFirst => 7 - segment,
            RankOrder::BottomRankFirst => segment,
        }
    }
}

/// Encode a board as eight slash-separated rank segments with run-length
/// digits for empty squares. Pure: no state survives the call.
pub fn encode(board: &Board, order: RankOrder) -> String {
    let mut text = String::with_capacity(71);
    for segment in 0..8 {
        if segment > 0 {
            text.push('/');
        }
        let row = order.row_for_segment(segment);
        let mut run = 0u32;
        for file in 0..8 {
            match board.get(row, file) {
                Some(piece) => {
                    if run > 0 {
                        text.push(char::from_digit(run, 10).unwrap_or('0'));
                        run = 0;
                    }
                    text.push(piece.to_char());
                }
                None => run += 1,
            }
        }
        if run > 0 {
            text.push(char::from_digit(run, 10).unwrap_or('0'));
        }
    }
    text
}

/// Decode eight rank segments into a board. Inverse of [`encode`] under the
/// same [`RankOrder`]: `decode(&encode(b, o), o) == b` for every board.
pub fn decode(text: &str, order: RankOrder) -> Result<Board, EngineError> {
    let segments: Vec<&str> = text.split('/').collect();
    if segments.len() != 8 {
        return Err(EngineError::MalformedPosition(format!(
            "expected 8 rank segments, found {}",
            segments.len()
        )));
    }

    let mut board = Board::empty();
    for (index, segment) in segments.iter().enumerate() {
        let row = order.row_for_segment(index);
        let mut file = 0usize;
        for c in segment.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(EngineError::MalformedPosition(format!(
                        "empty-run digit '{c}' out of range in segment '{segment}'"
                    )));
                }
                file += digit as usize;
            } else if let Some(piece) = Piece::from_char(c) {
                if file >= 8 {
                    return Err(EngineError::MalformedPosition(format!(
                        "segment '{segment}' covers more than 8 files"
                    )));
                }
                board.set(row, file, Some(piece));
                file += 1;
            } else {
                return Err(EngineError::MalformedPosition(format!(
                    "invalid piece character '{c}' in segment '{segment}'"
                )));
            }
        }
        if file != 8 {
            return Err(EngineError::MalformedPosition(format!(
                "segment '{segment}' covers {file} files, expected 8"
            )));
        }
    }
    Ok(board)
}
