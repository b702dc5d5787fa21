//! GUI module for marble solitaire
//!
//! This module provides a native Rust GUI using egui/eframe. All game logic
//! lives in [`crate::GameSession`]; the GUI only draws it and forwards input.

mod app;
mod board_view;
mod theme;
mod timer;

pub use app::SolitaireApp;
pub use timer::GameTimer;
