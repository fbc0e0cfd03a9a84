//! Play games of the variant, either one click at a time or between two [`Player`]s

use core::fmt;

use board::{Color, LayoutError, Position};
use players::Player;
use rules::MoveRecord;

mod session;

pub use crate::session::{ClickOutcome, GameSession};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{side:?} tried to move {from} to {to}, which is not allowed")]
    MoveRejected {
        side: Color,
        from: Position,
        to: Position,
    },
    #[error("invalid starting layout: {0}")]
    Layout(#[from] LayoutError),
}

/// How a game between two players ended
///
/// Check and checkmate are not part of the rules, so a game only ends when one side has nothing
/// to play or the players run out of half-moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The given side had no move to make when it was its turn
    NoMoves(Color),
    /// The half-move limit was reached
    HalfMoveLimit,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMoves(color) => write!(f, "{color:?} has no moves left"),
            Self::HalfMoveLimit => f.write_str("half-move limit reached"),
        }
    }
}

/// A backend which queries moves from the two players until the game is done
///
/// Each move a player chooses is fed to the session as two clicks: one on the piece and one on
/// its destination.
pub struct Backend<White, Black> {
    /// The game being played
    session: GameSession,
    /// The white player
    white_player: White,
    /// The black player
    black_player: Black,
}

impl<White: Player, Black: Player> Backend<White, Black> {
    /// Create a new instance with the initial board and White to move
    pub fn new(white_player: White, black_player: Black) -> Self {
        Self::from_session(GameSession::new(), white_player, black_player)
    }

    /// Continue the game in the given session
    pub fn from_session(session: GameSession, white_player: White, black_player: Black) -> Self {
        Self {
            session,
            white_player,
            black_player,
        }
    }

    /// Query whoever's turn it is to make a move
    ///
    /// Returns `Ok(None)` without touching the session if the side to move has no move, or if
    /// its player declines to pick one.
    pub fn play_half_move(&mut self) -> Result<Option<MoveRecord>> {
        let side = self.session.side_to_move();
        let board = self.session.board();
        if rules::all_moves(board, side).next().is_none() {
            return Ok(None);
        }
        let choice = match side {
            Color::White => self.white_player.make_move(board, side),
            Color::Black => self.black_player.make_move(board, side),
        };
        let Some((from, to)) = choice else {
            return Ok(None);
        };
        let owned = board.get(from).is_some_and(|piece| piece.color == side);
        if !owned || !rules::can_move(board, from, to) {
            return Err(Error::MoveRejected { side, from, to });
        }
        self.session.click_square(from);
        match self.session.click_square(to) {
            ClickOutcome::Moved(record) => Ok(Some(record)),
            _ => Err(Error::MoveRejected { side, from, to }),
        }
    }

    /// Play the game until a side runs out of moves or `half_move_limit` more half-moves have
    /// been made
    pub fn play_game(&mut self, half_move_limit: usize) -> Result<GameOutcome> {
        for _ in 0..half_move_limit {
            if self.play_half_move()?.is_none() {
                return Ok(GameOutcome::NoMoves(self.session.side_to_move()));
            }
        }
        Ok(GameOutcome::HalfMoveLimit)
    }

    /// Get the state of the game right now
    pub fn session(&self) -> &GameSession {
        &self.session
    }
}
