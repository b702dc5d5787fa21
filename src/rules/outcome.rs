//! Win/loss detection
//!
//! Win: exactly one marble left (on the center cell when the center rule is on).
//! Loss: more than one marble left and no jump available anywhere.
//! The win check runs first, so a one-marble board is never judged by moves.

use crate::board::{Board, Cell};

use super::moves::has_legal_move;

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Classify a board
pub fn evaluate(board: &Board, center_win: bool) -> GameOutcome {
    if board.marble_count() == 1 && (!center_win || board.cell(board.center()) == Cell::Marble) {
        return GameOutcome::Won;
    }

    if has_legal_move(board) {
        GameOutcome::InProgress
    } else {
        GameOutcome::Lost
    }
}
