//! Theme constants for the solitaire GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(18, 18, 22);
pub const CELL: Color32 = Color32::from_rgb(77, 77, 77);
pub const CELL_SELECTED: Color32 = Color32::from_rgb(255, 255, 153);

// Marbles
pub const MARBLE: Color32 = Color32::from_rgb(25, 153, 255);
pub const MARBLE_HIGHLIGHT: Color32 = Color32::from_rgb(140, 205, 255);
pub const TARGET_MARKER: Color32 = Color32::from_rgb(80, 200, 120);

pub fn marble_shadow() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 70)
}

pub fn hover_target() -> Color32 {
    Color32::from_rgba_unmultiplied(25, 153, 255, 90)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_WON: Color32 = Color32::from_rgb(50, 220, 50);
pub const STATUS_LOST: Color32 = Color32::from_rgb(255, 70, 70);
pub const UNDO_LOW: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const CELL_FILL_RATIO: f32 = 0.9;
pub const MARBLE_RADIUS_RATIO: f32 = 0.38;
pub const TARGET_MARKER_RADIUS: f32 = 5.0;
