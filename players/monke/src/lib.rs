//! A player which makes purely random moves

use board::{Board, Color, Position};

use rand::{rngs::SmallRng, seq::IteratorRandom, SeedableRng};

/// A player which makes purely random moves
///
/// The name is pronounced like "Monkey"
#[derive(Debug)]
pub struct MonkePlayer {
    /// How we decide what to do
    rng: SmallRng,
}

impl MonkePlayer {
    /// Create a new player seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a new player which always makes the same choices when shown the same boards
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl players::Player for MonkePlayer {
    fn make_move(&mut self, board: &Board, side: Color) -> Option<(Position, Position)> {
        rules::all_moves(board, side).choose(&mut self.rng)
    }
}

impl Default for MonkePlayer {
    fn default() -> Self {
        Self::new()
    }
}
