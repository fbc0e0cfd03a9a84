//! Cells of the board and the names they go by

use core::{fmt, str::FromStr};

/// The number of rows (and columns) on the board
pub const BOARD_SIZE: u8 = 8;

/// A cell on the board
///
/// Row 0 is Black's back rank and row 7 is White's back rank. Both coordinates are always in
/// `0..8`: the only ways to build one check the bounds, so any `Position` that exists is on the
/// board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Produce a position from the given row and column, or `None` if it is off the board
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Produce a position which the caller knows is on the board
    ///
    /// # Panics
    /// Panics if `row` or `col` is not in `0..8`. An out-of-bounds position is a bug in the
    /// caller, so we don't paper over it.
    ///
    /// ```
    /// use board::Position;
    /// let corner = Position::at(7, 0);
    /// assert_eq!((corner.row(), corner.col()), (7, 0));
    /// ```
    #[track_caller]
    pub const fn at(row: u8, col: u8) -> Self {
        match Self::new(row, col) {
            Some(position) => position,
            None => panic!("position out of bounds"),
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step the given number of rows and columns away, if that stays on the board
    ///
    /// ```
    /// use board::Position;
    /// assert_eq!(Position::at(4, 4).offset(-2, 1), Some(Position::at(2, 5)));
    /// assert_eq!(Position::at(0, 3).offset(-1, 0), None);
    /// assert_eq!(Position::at(3, 7).offset(0, 1), None);
    /// ```
    pub const fn offset(self, rows: i8, cols: i8) -> Option<Self> {
        let row = self.row as i16 + rows as i16;
        let col = self.col as i16 + cols as i16;
        if row < 0 || col < 0 || row >= BOARD_SIZE as i16 || col >= BOARD_SIZE as i16 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// An iterator over every cell of the board, row by row
    ///
    /// ```
    /// assert_eq!(board::Position::all().count(), 64);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Self { row, col }))
    }

    /// The file letter of this position's column (`'a'` for column 0)
    pub const fn file_letter(self) -> char {
        (b'a' + self.col) as char
    }

    /// The rank digit of this position's row (`'8'` for row 0, Black's back rank)
    pub const fn rank_digit(self) -> char {
        (b'8' - self.row) as char
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Writes the square name, such as `a8` for `(0, 0)`
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank_digit())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a square name (expected a file a-h followed by a rank 1-8)")]
pub struct PositionParseError(pub String);

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PositionParseError(s.to_owned());
        let &[file, rank] = s.as_bytes() else {
            return Err(err());
        };
        let col = match file {
            b'a'..=b'h' => file - b'a',
            _ => return Err(err()),
        };
        let row = match rank {
            b'1'..=b'8' => b'8' - rank,
            _ => return Err(err()),
        };
        Ok(Self { row, col })
    }
}
