//! Marble solitaire (peg solitaire)
//!
//! A single-player puzzle on a cross-shaped board:
//! - Every playable hole starts with a marble except the center
//! - A marble jumps two cells orthogonally over a neighbour into an empty hole
//! - The jumped marble is removed
//! - One marble left wins (optionally it must finish in the center);
//!   no jump left loses
//!
//! # Architecture
//!
//! - [`board`]: Cells, positions and the initial layout
//! - [`rules`]: Jump legality, execution and win/loss evaluation
//! - [`history`]: Snapshot undo/redo with an undo budget
//! - [`session`]: [`GameSession`], the single owner of all game state
//! - [`config`]: Board size, center rule and undo budget
//! - [`ui`]: eframe front end
//!
//! # Quick Start
//!
//! ```
//! use solitaire::{GameConfig, GameOutcome, GameSession, Pos};
//!
//! let mut game = GameSession::new(GameConfig::default());
//! assert_eq!(game.marble_count(), 32);
//!
//! // Jump (1,3) over (2,3) into the empty center
//! assert!(game.try_move(Pos::new(1, 3), Pos::new(3, 3)));
//! assert_eq!(game.marble_count(), 31);
//! assert_eq!(game.outcome(), GameOutcome::InProgress);
//!
//! // Undo spends one of the three undos
//! assert!(game.undo());
//! assert_eq!(game.undos_remaining(), 2);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, DEFAULT_BOARD_SIZE};
pub use config::GameConfig;
pub use history::History;
pub use rules::{GameOutcome, Move};
pub use session::{ClickOutcome, GameSession};
