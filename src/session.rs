//! Game session: the single owner of board, history, selection and outcome
//!
//! Front ends hold a `GameSession` and drive it through its commands
//! (`select_or_move`, `try_move`, `undo`, `redo`, `restart`). Rejected commands
//! are no-ops; nothing here returns an error.

use tracing::{debug, info, instrument};

use crate::board::{generate_initial_board, Board, Cell, Pos};
use crate::config::GameConfig;
use crate::history::History;
use crate::rules::{self, GameOutcome, Move};

/// Result of a click on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A marble was selected, or the pending selection was dropped
    SelectionChanged,
    /// The selected marble jumped
    MoveApplied(Move),
    /// Nothing happened
    NoOp,
}

/// One game of marble solitaire
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    history: History,
    selection: Option<Pos>,
    outcome: GameOutcome,
}

impl GameSession {
    /// Start a new game
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        let board = generate_initial_board(config.board_size);
        let session = Self::with_board(config, board);
        info!(
            size = session.config.board_size,
            marbles = session.marble_count(),
            "new game"
        );
        session
    }

    /// Start from a custom position. `restart` still goes back to the
    /// generated layout for `config.board_size`.
    #[instrument(skip(board))]
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        let history = History::new(board, config.undo_budget);
        let mut session = Self {
            config,
            history,
            selection: None,
            outcome: GameOutcome::InProgress,
        };
        session.refresh_outcome();
        session
    }

    /// Throw away the current game and start over with the same configuration
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let board = generate_initial_board(self.config.board_size);
        self.history.reset(board, self.config.undo_budget);
        self.selection = None;
        self.outcome = GameOutcome::InProgress;
        self.refresh_outcome();
        info!("game restarted");
    }

    /// Handle a click on `pos`.
    ///
    /// With nothing selected, a marble becomes selected. With a marble
    /// selected, the click is taken as the destination: the jump is attempted
    /// and the selection cleared whether or not it succeeded.
    #[instrument(skip(self), fields(%pos))]
    pub fn select_or_move(&mut self, pos: Pos) -> ClickOutcome {
        if self.is_over() {
            return ClickOutcome::NoOp;
        }

        match self.selection.take() {
            None => {
                if self.board().cell(pos) == Cell::Marble {
                    debug!("marble selected");
                    self.selection = Some(pos);
                    ClickOutcome::SelectionChanged
                } else {
                    ClickOutcome::NoOp
                }
            }
            Some(from) => {
                if self.try_move(from, pos) {
                    ClickOutcome::MoveApplied(Move::new(from, pos))
                } else {
                    debug!(%from, "selection cleared");
                    ClickOutcome::SelectionChanged
                }
            }
        }
    }

    /// Attempt a jump. Returns whether it was applied.
    #[instrument(skip(self), fields(%from, %to))]
    pub fn try_move(&mut self, from: Pos, to: Pos) -> bool {
        if self.is_over() {
            return false;
        }

        let mut next = self.history.current().clone();
        if !rules::apply_move(&mut next, from, to) {
            debug!("illegal move rejected");
            return false;
        }

        self.history.commit(next);
        self.selection = None;
        debug!(marbles = self.marble_count(), "move applied");
        self.refresh_outcome();
        true
    }

    /// Step back one move, if the budget and history allow it
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        if self.is_over() || self.history.undo().is_none() {
            return false;
        }
        self.selection = None;
        debug!(remaining = self.undos_remaining(), "undo");
        self.refresh_outcome();
        true
    }

    /// Re-apply the last undone move
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> bool {
        if self.is_over() || self.history.redo().is_none() {
            return false;
        }
        self.selection = None;
        debug!("redo");
        self.refresh_outcome();
        true
    }

    /// Re-evaluate the board unless the game already ended
    fn refresh_outcome(&mut self) {
        if self.outcome.is_terminal() {
            return;
        }
        self.outcome = rules::evaluate(self.history.current(), self.config.center_win);
        match self.outcome {
            GameOutcome::Won => info!(moves = self.moves_played(), "game won"),
            GameOutcome::Lost => info!(marbles = self.marble_count(), "game lost"),
            GameOutcome::InProgress => {}
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    #[inline]
    pub fn selection(&self) -> Option<Pos> {
        self.selection
    }

    #[inline]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[inline]
    pub fn undos_remaining(&self) -> u32 {
        self.history.undos_remaining()
    }

    pub fn can_undo(&self) -> bool {
        !self.is_over() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.is_over() && self.history.can_redo()
    }

    pub fn marble_count(&self) -> usize {
        self.board().marble_count()
    }

    /// Moves between the initial board and the current one
    pub fn moves_played(&self) -> usize {
        self.history.undo_len() - 1
    }

    /// Landing cells for the selected marble, empty when nothing is selected
    pub fn selection_targets(&self) -> Vec<Pos> {
        self.selection
            .map(|from| rules::legal_destinations(self.board(), from))
            .unwrap_or_default()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
