//! The board of the Jester/Count/Oracle/Sentinel chess variant and the pieces that sit on it

mod layout;
mod position;

pub use crate::layout::LayoutError;
pub use crate::position::{Position, PositionParseError, BOARD_SIZE};

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    /// Jumps like a knight, or steps one square diagonally
    Jester,
    /// Steps like a king, or jumps two squares diagonally
    Count,
    /// Slides orthogonally, at most three squares
    Sentinel,
    /// Slides diagonally, at most two squares
    Oracle,
}
impl PieceKind {
    /// All the kinds of pieces there are
    pub const KINDS: [PieceKind; 10] = [
        Self::Pawn,
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
        Self::Jester,
        Self::Count,
        Self::Sentinel,
        Self::Oracle,
    ];

    /// The capitalized version of the letter used for this piece in layout strings
    pub const fn layout_letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Jester => 'J',
            Self::Count => 'C',
            Self::Sentinel => 'S',
            Self::Oracle => 'O',
        }
    }

    /// The kind written with the given letter, ignoring case
    pub const fn from_layout_letter(letter: char) -> Option<Self> {
        Some(match letter.to_ascii_uppercase() {
            'P' => Self::Pawn,
            'R' => Self::Rook,
            'N' => Self::Knight,
            'B' => Self::Bishop,
            'Q' => Self::Queen,
            'K' => Self::King,
            'J' => Self::Jester,
            'C' => Self::Count,
            'S' => Self::Sentinel,
            'O' => Self::Oracle,
            _ => return None,
        })
    }

    /// The lowercase name of this kind, as used when looking up piece artwork
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Jester => "jester",
            Self::Count => "count",
            Self::Sentinel => "sentinel",
            Self::Oracle => "oracle",
        }
    }
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn is_white(self) -> bool {
        match self {
            Color::White => true,
            Color::Black => false,
        }
    }

    /// The row on which this color's pawns start
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The row direction in which this color's pawns advance
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// A piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}
impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// The letter for this piece in layout strings, uppercase for white and lowercase for black
    pub const fn layout_letter(self) -> char {
        if self.color.is_white() {
            self.kind.layout_letter()
        } else {
            self.kind.layout_letter().to_ascii_lowercase()
        }
    }

    /// The piece written with the given letter, with uppercase meaning white
    pub const fn from_layout_letter(letter: char) -> Option<Self> {
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match PieceKind::from_layout_letter(letter) {
            Some(kind) => Some(Self { kind, color }),
            None => None,
        }
    }
}

/// The back rank, from column 0 to column 7
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

/// The rank in front of the back rank, with the custom pieces in the middle files
const SECOND_RANK: [PieceKind; 8] = [
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Jester,
    PieceKind::Count,
    PieceKind::Oracle,
    PieceKind::Sentinel,
    PieceKind::Pawn,
];

/// An 8x8 grid of cells, each holding at most one piece
///
/// The grid is stored inline, so a clone is a snapshot which shares nothing with the board it
/// came from.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// A board with no pieces on it
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The layout at the start of a game, with the Jester, Count, Oracle and Sentinel standing in
    /// for four of each side's pawns
    pub const fn initial() -> Self {
        Self::with_ranks(BACK_RANK, SECOND_RANK)
    }

    /// The layout at the start of a standard chess game, with no custom pieces
    pub const fn classic() -> Self {
        Self::with_ranks(BACK_RANK, [PieceKind::Pawn; 8])
    }

    /// Mirror the given two ranks for both colors
    const fn with_ranks(back: [PieceKind; 8], second: [PieceKind; 8]) -> Self {
        let mut board = Self::empty();
        let mut col = 0;
        while col < BOARD_SIZE as usize {
            board.cells[0][col] = Some(Piece::new(back[col], Color::Black));
            board.cells[1][col] = Some(Piece::new(second[col], Color::Black));
            board.cells[6][col] = Some(Piece::new(second[col], Color::White));
            board.cells[7][col] = Some(Piece::new(back[col], Color::White));
            col += 1;
        }
        board
    }

    /// The piece at the given position, if any
    pub const fn get(&self, position: Position) -> Option<Piece> {
        self.cells[position.row() as usize][position.col() as usize]
    }

    /// Put the given contents in the cell, returning what was there before
    pub fn set(&mut self, position: Position, piece: Option<Piece>) -> Option<Piece> {
        core::mem::replace(
            &mut self.cells[position.row() as usize][position.col() as usize],
            piece,
        )
    }

    /// Empty the cell, returning what was there
    pub fn take(&mut self, position: Position) -> Option<Piece> {
        self.set(position, None)
    }

    /// Whether the cell holds no piece
    pub const fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Move whatever is at `from` onto `to`, leaving `from` empty
    ///
    /// Returns the piece which was standing on `to`, which is no longer on the board. Nothing is
    /// checked about whether the move obeys any rules.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        if from == to {
            return None;
        }
        let moving = self.take(from);
        self.set(to, moving)
    }

    /// An iterator over the occupied cells, row by row
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|position| self.get(position).map(|piece| (position, piece)))
    }

    /// The number of pieces of the given color on the board
    pub fn count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Board").field(&self.to_layout()).finish()
    }
}
