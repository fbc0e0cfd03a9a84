//! Layout strings: the piece-placement field of FEN, extended with letters for the custom pieces
//!
//! Rows are written from row 0 (Black's back rank) to row 7, separated by `/`. Within a row,
//! pieces are written as letters (uppercase for white) and runs of empty cells as a digit.

use core::{fmt, str::FromStr};

use crate::{Board, Piece, Position, BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has {0} rows, expected 8")]
    WrongRowCount(usize),
    #[error("row {row} of layout covers {cells} cells, expected 8")]
    WrongRowLength { row: usize, cells: usize },
    #[error("unknown piece letter `{0}` in layout")]
    UnknownPiece(char),
    #[error("`{0}` is not a run of 1 to 8 empty cells")]
    InvalidRun(char),
}

impl Board {
    /// Convert to a layout string
    ///
    /// ```
    /// assert_eq!(
    ///     board::Board::initial().to_layout(),
    ///     "rnbqkbnr/pppjcosp/8/8/8/8/PPPJCOSP/RNBQKBNR",
    /// );
    /// ```
    pub fn to_layout(&self) -> String {
        let rows = (0..BOARD_SIZE)
            .map(|row| {
                let mut cells = String::with_capacity(BOARD_SIZE as usize);
                let mut empty_run = 0;
                for col in 0..BOARD_SIZE {
                    match self.get(Position::at(row, col)) {
                        Some(piece) => {
                            if empty_run > 0 {
                                cells.push_str(&empty_run.to_string());
                                empty_run = 0;
                            }
                            cells.push(piece.layout_letter());
                        }
                        None => empty_run += 1,
                    }
                }
                if empty_run > 0 {
                    cells.push_str(&empty_run.to_string());
                }
                cells
            })
            .collect::<Vec<String>>();
        rows.join("/")
    }

    /// Parse a board from the given layout string
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows = layout.trim().split('/').collect::<Vec<_>>();
        if rows.len() != BOARD_SIZE as usize {
            return Err(LayoutError::WrongRowCount(rows.len()));
        }
        let mut board = Self::empty();
        for (row_idx, row) in rows.into_iter().enumerate() {
            let mut col = 0usize;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=BOARD_SIZE as u32).contains(&run) {
                        return Err(LayoutError::InvalidRun(c));
                    }
                    col += run as usize;
                    continue;
                }
                let piece = Piece::from_layout_letter(c).ok_or(LayoutError::UnknownPiece(c))?;
                if let Some(position) = Position::new(row_idx as u8, col as u8) {
                    board.set(position, Some(piece));
                }
                col += 1;
            }
            if col != BOARD_SIZE as usize {
                return Err(LayoutError::WrongRowLength {
                    row: row_idx,
                    cells: col,
                });
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_layout())
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}
