//! Traits for an arbitrary player

use board::{Board, Color, Position};

/// A player in a game
///
/// This trait is generic over how the player decides what to do, so interactive and automated
/// players can both implement this. Players are handed the board each turn rather than tracking
/// it themselves.
pub trait Player {
    /// Decide on a move for `side` to make on `board`, as a `(source, target)` pair
    ///
    /// Returns `None` if the player has nothing to play.
    fn make_move(&mut self, board: &Board, side: Color) -> Option<(Position, Position)>;
}
