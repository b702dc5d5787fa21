//! Board rendering for the solitaire GUI

use crate::{Board, Pos};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Side length of the last board drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selection: Option<Pos>,
        targets: &[Pos],
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square area that fits the panel
        let side = (available_size.x.min(available_size.y) - 20.0).max(100.0);
        self.size = board.size();
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / self.size.max(1) as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect.shrink(BOARD_MARGIN);

        painter.rect_filled(response.rect, CornerRadius::same(6), BOARD_BG);

        let selection = selection.filter(|_| !game_over);
        self.draw_cells(&painter, board, selection);

        if !game_over {
            for &pos in targets {
                self.draw_target_marker(&painter, pos);
            }
        }

        self.draw_marbles(&painter, board);

        if game_over {
            return None;
        }

        // Hover preview over a legal landing cell
        if let Some(pointer_pos) = response.hover_pos() {
            if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                if targets.contains(&board_pos) {
                    self.draw_hover_preview(&painter, board_pos);
                }
            }
        }

        if response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_board(p))
        } else {
            None
        }
    }

    /// Draw a square for every playable cell
    fn draw_cells(&self, painter: &Painter, board: &Board, selection: Option<Pos>) {
        for pos in board.positions() {
            if !board.cell(pos).is_playable() {
                continue;
            }
            let color = if selection == Some(pos) { CELL_SELECTED } else { CELL };
            let rect = Rect::from_center_size(
                self.board_to_screen(pos),
                Vec2::splat(self.cell_size * CELL_FILL_RATIO),
            );
            painter.rect_filled(rect, CornerRadius::same(3), color);
        }
    }

    fn draw_marbles(&self, painter: &Painter, board: &Board) {
        for pos in board.marbles() {
            self.draw_marble(painter, pos);
        }
    }

    /// Draw a single marble with a shadow and a highlight
    fn draw_marble(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARBLE_RADIUS_RATIO;

        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, marble_shadow());
        painter.circle_filled(center, radius, MARBLE);

        let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
        painter.circle_filled(center + highlight_offset, radius * 0.25, MARBLE_HIGHLIGHT);
    }

    fn draw_target_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, TARGET_MARKER_RADIUS, TARGET_MARKER);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARBLE_RADIUS_RATIO;
        painter.circle_filled(center, radius, hover_target());
        painter.circle_stroke(center, radius, Stroke::new(1.5, TARGET_MARKER));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        let n = self.size as i32;
        if col >= 0 && col < n && row >= 0 && row < n {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
