//! The offset tables and movement families that every kind of piece is built from

use board::{Board, Color, PieceKind, Position};

/// A displacement in rows and columns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    pub rows: i8,
    pub cols: i8,
}
impl Offset {
    pub const fn new(rows: i8, cols: i8) -> Self {
        Self { rows, cols }
    }

    /// Apply this offset to the position, if the result is still on the board
    pub const fn apply_to(self, position: Position) -> Option<Position> {
        position.offset(self.rows, self.cols)
    }

    /// The number of single steps this offset covers along its line
    ///
    /// Only meaningful for orthogonal and diagonal offsets.
    pub const fn distance(self) -> i8 {
        let rows = self.rows.abs();
        let cols = self.cols.abs();
        if rows > cols {
            rows
        } else {
            cols
        }
    }

    /// The single step in the same direction as this offset
    pub const fn unit(self) -> Self {
        Self::new(self.rows.signum(), self.cols.signum())
    }
}

/// The squares a king (or Count) can step to, row by row
pub const KING_STEPS: [Offset; 8] = [
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
];

/// The jumps a knight (or Jester) can make
pub const KNIGHT_JUMPS: [Offset; 8] = [
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(-2, 1),
    Offset::new(-2, -1),
    Offset::new(1, 2),
    Offset::new(1, -2),
    Offset::new(-1, 2),
    Offset::new(-1, -2),
];

/// One square along each diagonal
pub const DIAGONAL_STEPS: [Offset; 4] = [
    Offset::new(-1, -1),
    Offset::new(-1, 1),
    Offset::new(1, -1),
    Offset::new(1, 1),
];

/// The two-square diagonal jumps a Count can make over anything in between
pub const COUNT_JUMPS: [Offset; 4] = [
    Offset::new(-2, -2),
    Offset::new(-2, 2),
    Offset::new(2, -2),
    Offset::new(2, 2),
];

/// Directions a rook slides in: down, up, right, left
pub const ROOK_RAYS: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

/// Directions a bishop slides in
pub const BISHOP_RAYS: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

/// Directions a queen slides in: the rook's, then the bishop's
pub const QUEEN_RAYS: [Offset; 8] = [
    ROOK_RAYS[0],
    ROOK_RAYS[1],
    ROOK_RAYS[2],
    ROOK_RAYS[3],
    BISHOP_RAYS[0],
    BISHOP_RAYS[1],
    BISHOP_RAYS[2],
    BISHOP_RAYS[3],
];

/// Where a Sentinel can go if the way there is clear
///
/// For each distance from -3 to 3, the horizontal target comes before the vertical one.
pub const SENTINEL_REACH: [Offset; 12] = [
    Offset::new(0, -3),
    Offset::new(-3, 0),
    Offset::new(0, -2),
    Offset::new(-2, 0),
    Offset::new(0, -1),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(1, 0),
    Offset::new(0, 2),
    Offset::new(2, 0),
    Offset::new(0, 3),
    Offset::new(3, 0),
];

/// Where an Oracle can go if the way there is clear, row by row
pub const ORACLE_REACH: [Offset; 8] = [
    Offset::new(-2, -2),
    Offset::new(-2, 2),
    Offset::new(-1, -1),
    Offset::new(-1, 1),
    Offset::new(1, -1),
    Offset::new(1, 1),
    Offset::new(2, -2),
    Offset::new(2, 2),
];

const KING_LEAPS: &[&[Offset]] = &[&KING_STEPS];
const KNIGHT_LEAPS: &[&[Offset]] = &[&KNIGHT_JUMPS];
const JESTER_LEAPS: &[&[Offset]] = &[&KNIGHT_JUMPS, &DIAGONAL_STEPS];
const COUNT_LEAPS: &[&[Offset]] = &[&KING_STEPS, &COUNT_JUMPS];

/// The way a kind of piece gets around
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Movement {
    /// Forward onto empty squares (two from the starting row), diagonally forward to capture
    Pawn,
    /// Straight to each offset of each table, ignoring anything in between
    Leaps(&'static [&'static [Offset]]),
    /// Along each ray until the edge of the board or the first piece
    Slides(&'static [Offset]),
    /// Straight to each offset, as long as every square on the way is empty
    Reaches(&'static [Offset]),
}

impl Movement {
    pub(crate) fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Self::Pawn,
            PieceKind::King => Self::Leaps(KING_LEAPS),
            PieceKind::Knight => Self::Leaps(KNIGHT_LEAPS),
            PieceKind::Jester => Self::Leaps(JESTER_LEAPS),
            PieceKind::Count => Self::Leaps(COUNT_LEAPS),
            PieceKind::Rook => Self::Slides(&ROOK_RAYS),
            PieceKind::Bishop => Self::Slides(&BISHOP_RAYS),
            PieceKind::Queen => Self::Slides(&QUEEN_RAYS),
            PieceKind::Sentinel => Self::Reaches(&SENTINEL_REACH),
            PieceKind::Oracle => Self::Reaches(&ORACLE_REACH),
        }
    }

    /// Push every destination for a piece of the given color at `origin` onto `moves`
    pub(crate) fn destinations(
        self,
        board: &Board,
        origin: Position,
        color: Color,
        moves: &mut Vec<Position>,
    ) {
        match self {
            Self::Pawn => pawn_destinations(board, origin, color, moves),
            Self::Leaps(tables) => {
                for table in tables {
                    moves.extend(
                        table
                            .iter()
                            .filter_map(|offset| offset.apply_to(origin))
                            .filter(|&target| can_land(board, color, target)),
                    );
                }
            }
            Self::Slides(rays) => {
                for ray in rays {
                    let mut current = origin;
                    while let Some(target) = ray.apply_to(current) {
                        match board.get(target) {
                            None => moves.push(target),
                            Some(piece) => {
                                if piece.color != color {
                                    moves.push(target);
                                }
                                break;
                            }
                        }
                        current = target;
                    }
                }
            }
            Self::Reaches(offsets) => moves.extend(
                offsets
                    .iter()
                    .filter(|offset| path_clear(board, origin, **offset))
                    .filter_map(|offset| offset.apply_to(origin))
                    .filter(|&target| can_land(board, color, target)),
            ),
        }
    }
}

/// Whether a piece of the given color may finish its move on `target`
///
/// That is, the square is empty or holds an enemy piece.
pub(crate) fn can_land(board: &Board, color: Color, target: Position) -> bool {
    board.get(target).map_or(true, |piece| piece.color != color)
}

/// Whether every square strictly between `origin` and `origin + offset` is empty
///
/// Squares off the board count as blocked.
fn path_clear(board: &Board, origin: Position, offset: Offset) -> bool {
    let unit = offset.unit();
    (1..offset.distance()).all(|step| {
        Offset::new(unit.rows * step, unit.cols * step)
            .apply_to(origin)
            .is_some_and(|square| board.is_empty_at(square))
    })
}

fn pawn_destinations(board: &Board, origin: Position, color: Color, moves: &mut Vec<Position>) {
    let forward = color.forward();
    if let Some(one_step) = origin.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            moves.push(one_step);
            if origin.row() == color.pawn_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        moves.push(two_step);
                    }
                }
            }
        }
    }
    for side in [-1, 1] {
        if let Some(target) = origin.offset(forward, side) {
            if board
                .get(target)
                .is_some_and(|piece| piece.color != color)
            {
                moves.push(target);
            }
        }
    }
}
