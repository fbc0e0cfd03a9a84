//! The select-then-move click protocol and the state it keeps

use core::mem;

use board::{Board, Color, PieceKind, Position};
use rules::MoveRecord;

/// What a call to [`GameSession::click_square`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing was selected and the square holds no piece of the side to move
    Ignored,
    /// The piece on this square is now selected, either fresh or in place of another
    Selected(Position),
    /// The selected piece moved
    Moved(MoveRecord),
    /// The selection was dropped without moving
    Deselected,
}

/// The state of a game being played one click at a time
///
/// The session is either idle, or has one of the side to move's pieces selected along with the
/// squares that piece can move to.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    side_to_move: Color,
    selected: Option<Position>,
    /// Always `rules::moves_for(board, selected)`, or empty when nothing is selected
    legal_moves: Vec<Position>,
    /// The kinds of pieces of each color which have been captured, indexed by color
    captured: [Vec<PieceKind>; 2],
    history: Vec<MoveRecord>,
}

impl GameSession {
    /// Start a game from the initial layout with White to move
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    /// Start a game from an arbitrary position
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            selected: None,
            legal_moves: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            history: Vec::new(),
        }
    }

    /// React to the given square being clicked
    ///
    /// While idle, clicking one of the side to move's pieces selects it. While a piece is
    /// selected, clicking one of its legal targets makes that move and hands the turn over,
    /// clicking another of the side's own pieces selects that one instead, and clicking anything
    /// else drops the selection.
    pub fn click_square(&mut self, position: Position) -> ClickOutcome {
        let Some(origin) = self.selected.take() else {
            if self.holds_own_piece(position) {
                return self.select(position);
            }
            return ClickOutcome::Ignored;
        };
        let legal_moves = mem::take(&mut self.legal_moves);
        if legal_moves.contains(&position) {
            let record = match rules::make_move(&mut self.board, origin, position) {
                Ok(record) => record,
                Err(e) => unreachable!("selected move {origin}-{position} was rejected: {e}"),
            };
            if let Some(captured) = record.captured {
                self.captured[captured.color as usize].push(captured.kind);
            }
            self.side_to_move = self.side_to_move.other();
            self.history.push(record);
            ClickOutcome::Moved(record)
        } else if self.holds_own_piece(position) {
            self.select(position)
        } else {
            ClickOutcome::Deselected
        }
    }

    fn holds_own_piece(&self, position: Position) -> bool {
        self.board
            .get(position)
            .is_some_and(|piece| piece.color == self.side_to_move)
    }

    fn select(&mut self, position: Position) -> ClickOutcome {
        self.selected = Some(position);
        self.legal_moves = rules::moves_for(&self.board, position);
        ClickOutcome::Selected(position)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The square of the selected piece, if there is one
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// The squares the selected piece can move to, in the order the rules list them
    pub fn legal_moves(&self) -> &[Position] {
        &self.legal_moves
    }

    /// Whether clicking the given square would move the selected piece there
    pub fn is_legal_target(&self, position: Position) -> bool {
        self.legal_moves.contains(&position)
    }

    /// The kinds of the given color's pieces which have been captured, oldest first
    pub fn captured(&self, color: Color) -> &[PieceKind] {
        &self.captured[color as usize]
    }

    /// Every move made so far, oldest first
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
