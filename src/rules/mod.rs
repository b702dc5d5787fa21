//! Game rules for marble solitaire
//!
//! This module implements the rule set:
//! - Jump legality and execution
//! - Win/loss evaluation

pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use moves::{
    apply_move, has_legal_move, is_legal_move, legal_destinations, legal_moves, Move, DIRECTIONS,
};
pub use outcome::{evaluate, GameOutcome};
