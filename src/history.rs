//! Snapshot-based undo/redo
//!
//! Every committed move stores a full copy of the board.
//!
//! The undo stack is kept as `past` + `current`: the current board is the
//! logical top of the undo stack, and `past` holds everything below it. An
//! undo stack with a single entry is therefore an empty `past`.
//!
//! Undos draw from a budget that is restored only by [`History::reset`].
//! Redo does not refund it.

use std::mem;

use crate::board::Board;

/// Undo/redo stacks plus the remaining undo budget
#[derive(Debug, Clone)]
pub struct History {
    current: Board,
    past: Vec<Board>,
    redo: Vec<Board>,
    undo_budget: u32,
}

impl History {
    /// Start a history whose only entry is `initial`
    pub fn new(initial: Board, undo_budget: u32) -> Self {
        Self {
            current: initial,
            past: Vec::new(),
            redo: Vec::new(),
            undo_budget,
        }
    }

    /// Clear both stacks and seed with `board`. The budget is untouched.
    pub fn record_initial(&mut self, board: Board) {
        self.current = board;
        self.past.clear();
        self.redo.clear();
    }

    /// Clear both stacks, seed with `board` and restore the budget
    pub fn reset(&mut self, board: Board, undo_budget: u32) {
        self.record_initial(board);
        self.undo_budget = undo_budget;
    }

    /// Push the board produced by a new move. Any undone branch is dropped.
    pub fn commit(&mut self, board: Board) {
        let previous = mem::replace(&mut self.current, board);
        self.past.push(previous);
        self.redo.clear();
    }

    /// Step back one snapshot. Returns the restored board, or `None` when at
    /// the initial state or out of budget.
    pub fn undo(&mut self) -> Option<&Board> {
        if self.undo_budget == 0 {
            return None;
        }
        let previous = self.past.pop()?;
        let undone = mem::replace(&mut self.current, previous);
        self.redo.push(undone);
        self.undo_budget -= 1;
        Some(&self.current)
    }

    /// Re-apply the most recently undone snapshot
    pub fn redo(&mut self) -> Option<&Board> {
        let next = self.redo.pop()?;
        let previous = mem::replace(&mut self.current, next);
        self.past.push(previous);
        Some(&self.current)
    }

    /// Board on top of the undo stack
    #[inline]
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Entries on the undo stack, including the current board
    #[inline]
    pub fn undo_len(&self) -> usize {
        self.past.len() + 1
    }

    #[inline]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    #[inline]
    pub fn undos_remaining(&self) -> u32 {
        self.undo_budget
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.undo_budget > 0 && !self.past.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{generate_initial_board, Pos};
    use crate::rules::apply_move;

    fn after(board: &Board, from: (u8, u8), to: (u8, u8)) -> Board {
        let mut next = board.clone();
        assert!(apply_move(
            &mut next,
            Pos::new(from.0, from.1),
            Pos::new(to.0, to.1)
        ));
        next
    }

    fn history_with_two_moves() -> (History, [Board; 3]) {
        let b0 = generate_initial_board(7);
        let b1 = after(&b0, (1, 3), (3, 3));
        let b2 = after(&b1, (2, 1), (2, 3));
        let mut history = History::new(b0.clone(), 3);
        history.commit(b1.clone());
        history.commit(b2.clone());
        (history, [b0, b1, b2])
    }

    #[test]
    fn test_new_history() {
        let board = generate_initial_board(7);
        let history = History::new(board.clone(), 3);
        assert_eq!(history.current(), &board);
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.undos_remaining(), 3);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_initial_state_is_noop() {
        let board = generate_initial_board(7);
        let mut history = History::new(board.clone(), 3);
        assert!(history.undo().is_none());
        assert_eq!(history.current(), &board);
        assert_eq!(history.undos_remaining(), 3);

        let mut broke = History::new(board.clone(), 0);
        assert!(broke.undo().is_none());
        assert_eq!(broke.current(), &board);
    }

    #[test]
    fn test_undo_restores_previous_board() {
        let (mut history, [_, b1, b2]) = history_with_two_moves();
        assert_eq!(history.undo(), Some(&b1));
        assert_eq!(history.undos_remaining(), 2);
        assert_eq!(history.undo_len(), 2);
        assert_eq!(history.redo_len(), 1);

        assert_eq!(history.redo(), Some(&b2));
        assert_eq!(history.undos_remaining(), 2);
        assert_eq!(history.undo_len(), 3);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_commit_clears_redo() {
        let (mut history, [b0, b1, _]) = history_with_two_moves();
        history.undo();
        assert!(history.can_redo());

        let other = after(&b1, (4, 3), (2, 3));
        history.commit(other.clone());
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
        assert_eq!(history.current(), &other);

        history.undo();
        assert_eq!(history.current(), &b1);
        history.undo();
        assert_eq!(history.current(), &b0);
    }

    #[test]
    fn test_budget_exhaustion() {
        let b0 = generate_initial_board(7);
        let mut history = History::new(b0.clone(), 3);
        let mut board = b0;
        for (from, to) in [((1, 3), (3, 3)), ((2, 1), (2, 3)), ((0, 2), (2, 2)), ((3, 2), (1, 2))] {
            board = after(&board, from, to);
            history.commit(board.clone());
        }
        assert_eq!(history.undo_len(), 5);

        for _ in 0..3 {
            assert!(history.undo().is_some());
        }
        assert_eq!(history.undos_remaining(), 0);
        assert_eq!(history.undo_len(), 2);
        assert!(!history.can_undo());

        let before = history.current().clone();
        assert!(history.undo().is_none());
        assert_eq!(history.current(), &before);
        assert_eq!(history.undo_len(), 2);
    }

    #[test]
    fn test_redo_does_not_refund_budget() {
        let (mut history, _) = history_with_two_moves();
        history.undo();
        history.redo();
        history.undo();
        history.redo();
        assert_eq!(history.undos_remaining(), 1);
    }

    #[test]
    fn test_reset() {
        let (mut history, [b0, ..]) = history_with_two_moves();
        history.undo();
        history.undo();
        assert_eq!(history.undos_remaining(), 1);

        let fresh = generate_initial_board(7);
        history.reset(fresh.clone(), 3);
        assert_eq!(history.current(), &fresh);
        assert_eq!(history.current(), &b0);
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.undos_remaining(), 3);
    }

    #[test]
    fn test_record_initial_keeps_budget() {
        let (mut history, [b0, ..]) = history_with_two_moves();
        history.undo();
        history.record_initial(b0.clone());
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.undos_remaining(), 2);
    }
}
