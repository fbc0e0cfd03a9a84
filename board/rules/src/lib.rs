//! Pseudo-legal move generation and move application
//!
//! Moves are pseudo-legal: they follow each piece's movement pattern and never land on a piece of
//! the mover's own color, but nothing stops a side from leaving its king open to capture.

use board::{Board, Color, Position};

mod move_record;
mod movement;

pub use crate::move_record::MoveRecord;
pub use crate::movement::{
    Offset, BISHOP_RAYS, COUNT_JUMPS, DIAGONAL_STEPS, KING_STEPS, KNIGHT_JUMPS, ORACLE_REACH,
    QUEEN_RAYS, ROOK_RAYS, SENTINEL_REACH,
};
use crate::movement::Movement;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("no piece at {0} to move")]
    NoPieceAtSource(Position),
    #[error("the piece at {from} cannot move to {to}")]
    IllegalDestination { from: Position, to: Position },
}

/// All the squares the piece at `origin` can move to
///
/// Returns an empty list if there is no piece at `origin`. The order is fixed for each kind of
/// piece (see the offset tables in this crate), and no square appears twice.
///
/// ```
/// use board::{Board, Position};
/// let moves = rules::moves_for(&Board::initial(), Position::at(7, 1));
/// assert_eq!(moves, [Position::at(5, 2), Position::at(5, 0)]);
/// ```
pub fn moves_for(board: &Board, origin: Position) -> Vec<Position> {
    let Some(piece) = board.get(origin) else {
        return Vec::new();
    };
    let mut moves = Vec::new();
    Movement::of(piece.kind).destinations(board, origin, piece.color, &mut moves);
    moves
}

/// Whether the piece at `from` can move to `to`
pub fn can_move(board: &Board, from: Position, to: Position) -> bool {
    from != to && moves_for(board, from).contains(&to)
}

/// Every move the given side can make, as `(source, target)` pairs
///
/// Pieces are visited row by row, and each piece's moves come in the same order as from
/// [`moves_for`].
pub fn all_moves(board: &Board, color: Color) -> impl Iterator<Item = (Position, Position)> + '_ {
    board
        .pieces()
        .filter(move |(_, piece)| piece.color == color)
        .flat_map(move |(source, _)| {
            moves_for(board, source)
                .into_iter()
                .map(move |target| (source, target))
        })
}

/// Make the given move, in place
///
/// Whatever stood on `to` is removed from the board and reported in the returned record. The
/// board is left untouched if the move is not one [`moves_for`] would produce.
pub fn make_move(board: &mut Board, from: Position, to: Position) -> Result<MoveRecord> {
    let piece = board.get(from).ok_or(Error::NoPieceAtSource(from))?;
    if !can_move(board, from, to) {
        return Err(Error::IllegalDestination { from, to });
    }
    let captured = board.relocate(from, to);
    Ok(MoveRecord {
        piece,
        source: from,
        target: to,
        captured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use board::{Piece, PieceKind};
    use quickcheck::{quickcheck, Arbitrary, Gen};

    fn piece(letter: char) -> Piece {
        Piece::from_layout_letter(letter).expect("bad piece letter in test")
    }

    /// A board with the given pieces placed on it
    fn board_with(pieces: &[((u8, u8), char)]) -> Board {
        let mut board = Board::empty();
        for &((row, col), letter) in pieces {
            board.set(Position::at(row, col), Some(piece(letter)));
        }
        board
    }

    fn positions(cells: &[(u8, u8)]) -> Vec<Position> {
        cells
            .iter()
            .map(|&(row, col)| Position::at(row, col))
            .collect()
    }

    #[test]
    fn test_empty_origin_has_no_moves() {
        assert!(moves_for(&Board::initial(), Position::at(4, 4)).is_empty());
        assert!(moves_for(&Board::empty(), Position::at(0, 0)).is_empty());
    }

    #[test]
    fn test_rook_stops_at_capture() {
        let board = board_with(&[((7, 0), 'R'), ((7, 5), 'p')]);
        assert_eq!(
            moves_for(&board, Position::at(7, 0)),
            positions(&[
                (6, 0),
                (5, 0),
                (4, 0),
                (3, 0),
                (2, 0),
                (1, 0),
                (0, 0),
                (7, 1),
                (7, 2),
                (7, 3),
                (7, 4),
                (7, 5),
            ]),
        );
    }

    #[test]
    fn test_rook_stops_before_own_piece() {
        let board = board_with(&[((7, 0), 'R'), ((7, 3), 'P'), ((5, 0), 'P')]);
        assert_eq!(
            moves_for(&board, Position::at(7, 0)),
            positions(&[(6, 0), (7, 1), (7, 2)]),
        );
    }

    #[test]
    fn test_knight_in_corner() {
        let board = board_with(&[((0, 0), 'N')]);
        assert_eq!(
            moves_for(&board, Position::at(0, 0)),
            positions(&[(2, 1), (1, 2)]),
        );
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut board = Board::initial();
        assert_eq!(
            moves_for(&board, Position::at(0, 6)),
            positions(&[(2, 7), (2, 5)]),
        );
        // A knight surrounded on all sides still gets out
        board.set(Position::at(4, 4), Some(piece('n')));
        for offset in KING_STEPS {
            board.set(offset.apply_to(Position::at(4, 4)).unwrap(), Some(piece('p')));
        }
        assert_eq!(moves_for(&board, Position::at(4, 4)).len(), 8);
    }

    #[test]
    fn test_bishop_and_queen_rays() {
        let board = board_with(&[((4, 4), 'B'), ((2, 2), 'p'), ((6, 6), 'P')]);
        assert_eq!(
            moves_for(&board, Position::at(4, 4)),
            positions(&[(5, 5), (5, 3), (6, 2), (7, 1), (3, 5), (2, 6), (1, 7), (3, 3), (2, 2)]),
        );
        let board = board_with(&[((0, 0), 'q'), ((0, 2), 'P'), ((2, 0), 'p'), ((1, 1), 'P')]);
        assert_eq!(
            moves_for(&board, Position::at(0, 0)),
            positions(&[(1, 0), (0, 1), (0, 2), (1, 1)]),
        );
    }

    #[test]
    fn test_king_steps() {
        let board = board_with(&[((7, 4), 'K'), ((6, 4), 'P'), ((6, 5), 'p')]);
        assert_eq!(
            moves_for(&board, Position::at(7, 4)),
            positions(&[(6, 3), (6, 5), (7, 3), (7, 5)]),
        );
    }

    #[test]
    fn test_pawn_moves() {
        let board = Board::initial();
        assert_eq!(
            moves_for(&board, Position::at(6, 0)),
            positions(&[(5, 0), (4, 0)]),
        );
        assert_eq!(
            moves_for(&board, Position::at(1, 7)),
            positions(&[(2, 7), (3, 7)]),
        );

        // Off the starting row, only one step
        let board = board_with(&[((5, 2), 'P'), ((3, 2), 'p')]);
        assert_eq!(moves_for(&board, Position::at(5, 2)), positions(&[(4, 2)]));
        assert_eq!(moves_for(&board, Position::at(3, 2)), positions(&[(4, 2)]));
    }

    #[test]
    fn test_pawn_blocked_and_captures() {
        // Blocked straight ahead, with captures either side and a friendly piece not capturable
        let board = board_with(&[((6, 3), 'P'), ((5, 3), 'n'), ((5, 2), 'p'), ((5, 4), 'B')]);
        assert_eq!(moves_for(&board, Position::at(6, 3)), positions(&[(5, 2)]));

        // Two steps needs the first square empty as well as the second
        let board = board_with(&[((1, 1), 'p'), ((3, 1), 'P')]);
        assert_eq!(moves_for(&board, Position::at(1, 1)), positions(&[(2, 1)]));
        let board = board_with(&[((1, 1), 'p'), ((2, 1), 'P'), ((2, 0), 'P'), ((2, 2), 'P')]);
        assert_eq!(
            moves_for(&board, Position::at(1, 1)),
            positions(&[(2, 0), (2, 2)]),
        );
    }

    #[test]
    fn test_pawn_on_last_row_stays_put() {
        let board = board_with(&[((0, 4), 'P'), ((7, 4), 'p')]);
        assert!(moves_for(&board, Position::at(0, 4)).is_empty());
        assert!(moves_for(&board, Position::at(7, 4)).is_empty());
    }

    #[test]
    fn test_jester_moves() {
        let board = board_with(&[((4, 4), 'J'), ((3, 3), 'P'), ((5, 5), 'p'), ((2, 5), 'P')]);
        assert_eq!(
            moves_for(&board, Position::at(4, 4)),
            positions(&[
                (6, 5),
                (6, 3),
                (2, 3),
                (5, 6),
                (5, 2),
                (3, 6),
                (3, 2),
                (3, 5),
                (5, 3),
                (5, 5),
            ]),
        );
        // From the starting layout it jumps over the pawns or steps diagonally forward
        assert_eq!(
            moves_for(&Board::initial(), Position::at(6, 3)),
            positions(&[(4, 4), (4, 2), (5, 5), (5, 1), (5, 2), (5, 4)]),
        );
    }

    #[test]
    fn test_count_moves() {
        let board = board_with(&[((2, 2), 'c'), ((1, 1), 'p'), ((3, 3), 'P'), ((4, 4), 'p')]);
        assert_eq!(
            moves_for(&board, Position::at(2, 2)),
            positions(&[
                (1, 2),
                (1, 3),
                (2, 1),
                (2, 3),
                (3, 1),
                (3, 2),
                (3, 3),
                (0, 0),
                (0, 4),
                (4, 0),
            ]),
        );
    }

    #[test]
    fn test_count_jumps_over_pieces() {
        let moves = moves_for(&Board::initial(), Position::at(6, 4));
        assert_eq!(moves, positions(&[(5, 3), (5, 4), (5, 5), (4, 2), (4, 6)]));
    }

    #[test]
    fn test_sentinel_moves() {
        let board = board_with(&[((4, 4), 'S'), ((4, 6), 'p'), ((2, 4), 'P')]);
        assert_eq!(
            moves_for(&board, Position::at(4, 4)),
            positions(&[
                (4, 1),
                (4, 2),
                (4, 3),
                (3, 4),
                (4, 5),
                (5, 4),
                (4, 6),
                (6, 4),
                (7, 4),
            ]),
        );
    }

    #[test]
    fn test_sentinel_blocked_in_starting_layout() {
        let board = Board::initial();
        assert_eq!(
            moves_for(&board, Position::at(6, 6)),
            positions(&[(3, 6), (4, 6), (5, 6)]),
        );
    }

    #[test]
    fn test_oracle_moves() {
        // The friendly pawn both blocks the far capture and can't itself be taken
        let board = board_with(&[((4, 4), 'O'), ((5, 5), 'P'), ((6, 6), 'p')]);
        let moves = moves_for(&board, Position::at(4, 4));
        assert_eq!(
            moves,
            positions(&[(2, 2), (2, 6), (3, 3), (3, 5), (5, 3), (6, 2)]),
        );
        assert!(!moves.contains(&Position::at(6, 6)));
        assert!(!moves.contains(&Position::at(5, 5)));
        assert!(moves.contains(&Position::at(3, 3)));
    }

    #[test]
    fn test_oracle_captures() {
        let board = board_with(&[((1, 5), 'o'), ((2, 4), 'P'), ((3, 7), 'P')]);
        assert_eq!(
            moves_for(&board, Position::at(1, 5)),
            positions(&[(0, 4), (0, 6), (2, 4), (2, 6), (3, 7)]),
        );
    }

    #[test]
    fn test_can_move() {
        let board = Board::initial();
        assert!(can_move(&board, Position::at(6, 0), Position::at(4, 0)));
        assert!(!can_move(&board, Position::at(6, 0), Position::at(3, 0)));
        assert!(!can_move(&board, Position::at(6, 0), Position::at(6, 0)));
        assert!(!can_move(&board, Position::at(4, 0), Position::at(3, 0)));
    }

    #[test]
    fn test_make_move() {
        let mut board = board_with(&[((7, 0), 'R'), ((7, 5), 'p')]);
        let record = make_move(&mut board, Position::at(7, 0), Position::at(7, 5)).unwrap();
        assert_eq!(
            record,
            MoveRecord {
                piece: piece('R'),
                source: Position::at(7, 0),
                target: Position::at(7, 5),
                captured: Some(piece('p')),
            },
        );
        assert!(board.is_empty_at(Position::at(7, 0)));
        assert_eq!(board.get(Position::at(7, 5)), Some(piece('R')));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn test_make_move_errors_leave_board_alone() {
        let mut board = Board::initial();
        assert_eq!(
            make_move(&mut board, Position::at(4, 4), Position::at(3, 4)),
            Err(Error::NoPieceAtSource(Position::at(4, 4))),
        );
        assert_eq!(
            make_move(&mut board, Position::at(7, 0), Position::at(6, 0)),
            Err(Error::IllegalDestination {
                from: Position::at(7, 0),
                to: Position::at(6, 0),
            }),
        );
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_all_moves_from_start() {
        let board = Board::initial();
        let white = all_moves(&board, Color::White).collect::<Vec<_>>();
        let black = all_moves(&board, Color::Black).collect::<Vec<_>>();
        // 4 pawns with 2 each, 2 knights with 2 each, then the Jester, Count, Oracle and Sentinel
        assert_eq!(white.len(), 8 + 4 + 6 + 5 + 4 + 3);
        assert_eq!(black.len(), white.len());
        assert!(white
            .iter()
            .all(|&(source, _)| board.get(source).is_some_and(|p| p.color == Color::White)));
        assert_eq!(white.first(), Some(&(Position::at(6, 0), Position::at(5, 0))));
        assert_eq!(black.first(), Some(&(Position::at(0, 1), Position::at(2, 2))));
    }

    /// A random sparse board with a piece on the square we ask about
    #[derive(Clone, Debug)]
    struct Scenario {
        board: Board,
        origin: Position,
    }

    impl Arbitrary for Scenario {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut board = Board::empty();
            for position in Position::all() {
                if u8::arbitrary(g) % 3 == 0 {
                    board.set(position, Some(arbitrary_piece(g)));
                }
            }
            let origin = Position::at(u8::arbitrary(g) % 8, u8::arbitrary(g) % 8);
            board.set(origin, Some(arbitrary_piece(g)));
            Self { board, origin }
        }
    }

    fn arbitrary_piece(g: &mut Gen) -> Piece {
        let kind = *g.choose(&PieceKind::KINDS).unwrap();
        let color = *g.choose(&[Color::White, Color::Black]).unwrap();
        Piece::new(kind, color)
    }

    /// Whether every square strictly between the two positions is empty
    ///
    /// Only called for positions on a shared row, column, or diagonal.
    fn between_is_empty(board: &Board, from: Position, to: Position) -> bool {
        let rows = to.row() as i8 - from.row() as i8;
        let cols = to.col() as i8 - from.col() as i8;
        let steps = rows.abs().max(cols.abs());
        (1..steps).all(|step| {
            let square = from
                .offset(rows.signum() * step, cols.signum() * step)
                .unwrap();
            board.is_empty_at(square)
        })
    }

    /// Decide a single move from the description of each piece, independently of the tables
    fn reference_allows(board: &Board, from: Position, to: Position) -> bool {
        let Some(mover) = board.get(from) else {
            return false;
        };
        if from == to {
            return false;
        }
        let target = board.get(to);
        let rows = to.row() as i8 - from.row() as i8;
        let cols = to.col() as i8 - from.col() as i8;
        let (dr, dc) = (rows.abs(), cols.abs());
        if mover.kind == PieceKind::Pawn {
            let forward = mover.color.forward();
            return if cols == 0 && rows == forward {
                target.is_none()
            } else if cols == 0 && rows == 2 * forward {
                from.row() == mover.color.pawn_row()
                    && target.is_none()
                    && between_is_empty(board, from, to)
            } else if dc == 1 && rows == forward {
                target.is_some_and(|piece| piece.color != mover.color)
            } else {
                false
            };
        }
        if target.is_some_and(|piece| piece.color == mover.color) {
            return false;
        }
        let straight = dr == 0 || dc == 0;
        let diagonal = dr == dc;
        let knight = (dr, dc) == (1, 2) || (dr, dc) == (2, 1);
        let king = dr.max(dc) == 1;
        match mover.kind {
            PieceKind::Pawn => unreachable!(),
            PieceKind::Knight => knight,
            PieceKind::King => king,
            PieceKind::Jester => knight || (diagonal && dr == 1),
            PieceKind::Count => king || (diagonal && dr == 2),
            PieceKind::Rook => straight && between_is_empty(board, from, to),
            PieceKind::Bishop => diagonal && between_is_empty(board, from, to),
            PieceKind::Queen => (straight || diagonal) && between_is_empty(board, from, to),
            PieceKind::Sentinel => {
                straight && dr.max(dc) <= 3 && between_is_empty(board, from, to)
            }
            PieceKind::Oracle => diagonal && dr <= 2 && between_is_empty(board, from, to),
        }
    }

    quickcheck! {
        fn test_never_origin_or_own_piece(scenario: Scenario) -> bool {
            let Scenario { board, origin } = scenario;
            let color = board.get(origin).unwrap().color;
            moves_for(&board, origin).into_iter().all(|target| {
                target != origin && board.get(target).map_or(true, |piece| piece.color != color)
            })
        }

        fn test_no_duplicates(scenario: Scenario) -> bool {
            let mut moves = moves_for(&scenario.board, scenario.origin);
            let len = moves.len();
            moves.sort();
            moves.dedup();
            moves.len() == len
        }

        fn test_matches_reference(scenario: Scenario) -> bool {
            let Scenario { board, origin } = scenario;
            let mut generated = moves_for(&board, origin);
            generated.sort();
            let expected = Position::all()
                .filter(|&to| reference_allows(&board, origin, to))
                .collect::<Vec<_>>();
            generated == expected
        }

        fn test_leaps_ignore_blockers(scenario: Scenario) -> bool {
            let Scenario { board, origin } = scenario;
            let piece = board.get(origin).unwrap();
            if !matches!(piece.kind, PieceKind::Knight | PieceKind::Jester | PieceKind::Count) {
                return true;
            }
            // Clear everything that isn't a possible landing square
            let mut cleared = Board::empty();
            cleared.set(origin, Some(piece));
            for target in KNIGHT_JUMPS.iter().chain(&KING_STEPS).chain(&COUNT_JUMPS) {
                if let Some(target) = target.apply_to(origin) {
                    cleared.set(target, board.get(target));
                }
            }
            moves_for(&board, origin) == moves_for(&cleared, origin)
        }

        fn test_make_move_keeps_piece_count(scenario: Scenario) -> bool {
            let Scenario { mut board, origin } = scenario;
            let before = board.pieces().count();
            match moves_for(&board, origin).first() {
                Some(&target) => {
                    let record = make_move(&mut board, origin, target).unwrap();
                    let removed = usize::from(record.is_capture());
                    board.pieces().count() + removed == before
                        && board.get(target) == Some(record.piece)
                        && board.is_empty_at(origin)
                }
                None => true,
            }
        }
    }
}
