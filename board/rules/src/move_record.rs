use core::fmt;

use board::{Piece, Position};

/// A move which has been made on a board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// The piece which moved
    pub piece: Piece,
    pub source: Position,
    pub target: Position,
    /// The piece which stood on [`Self::target`] before the move, if any
    pub captured: Option<Piece>,
}
impl MoveRecord {
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Writes the move as the mover's layout letter, the source, `-` or `x`, then the target
///
/// For example, `Nb1-c3` or `ja7xb5`.
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            self.piece.layout_letter(),
            self.source,
            separator,
            self.target
        )
    }
}
