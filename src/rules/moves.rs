//! Jump validation and execution
//!
//! A jump moves a marble exactly two cells up, down, left or right, over a
//! neighbouring marble, into an empty cell. The jumped marble is removed.

use std::fmt;

use crate::board::{Board, Cell, Pos};

/// Jump directions in probe order: up, down, left, right
pub const DIRECTIONS: [(i8, i8); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// A jump from one cell to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }

    /// Cell jumped over. Only meaningful for two-step orthogonal moves.
    #[inline]
    pub fn midpoint(self) -> Pos {
        let row = (self.from.row as u16 + self.to.row as u16) / 2;
        let col = (self.from.col as u16 + self.to.col as u16) / 2;
        Pos::new(row as u8, col as u8)
    }

    /// Exactly two cells along one axis
    #[inline]
    fn is_orthogonal_jump(self) -> bool {
        let dr = self.from.row.abs_diff(self.to.row);
        let dc = self.from.col.abs_diff(self.to.col);
        (dr == 2 && dc == 0) || (dc == 2 && dr == 0)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Check whether jumping `from` -> `to` is legal on `board`
pub fn is_legal_move(board: &Board, from: Pos, to: Pos) -> bool {
    if !board.contains(from) || !board.contains(to) {
        return false;
    }

    let mv = Move::new(from, to);
    if !mv.is_orthogonal_jump() {
        return false;
    }

    board.cell(from) == Cell::Marble
        && board.cell(to) == Cell::Empty
        && board.cell(mv.midpoint()) == Cell::Marble
}

/// Apply a jump in place. Illegal moves leave the board untouched.
///
/// Returns whether the board changed.
pub fn apply_move(board: &mut Board, from: Pos, to: Pos) -> bool {
    if !is_legal_move(board, from, to) {
        return false;
    }

    let mid = Move::new(from, to).midpoint();
    board.set(from, Cell::Empty);
    board.set(mid, Cell::Empty);
    board.set(to, Cell::Marble);
    true
}

/// Legal landing cells for the marble at `from`
pub fn legal_destinations(board: &Board, from: Pos) -> Vec<Pos> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| is_legal_move(board, from, to))
        .collect()
}

/// Every legal jump on the board, ordered by source cell then direction
pub fn legal_moves(board: &Board) -> impl Iterator<Item = Move> + '_ {
    board.marbles().flat_map(move |from| {
        legal_destinations(board, from)
            .into_iter()
            .map(move |to| Move::new(from, to))
    })
}

/// Whether any marble can still jump
pub fn has_legal_move(board: &Board) -> bool {
    board.marbles().any(|from| {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .any(|to| is_legal_move(board, from, to))
    })
}
