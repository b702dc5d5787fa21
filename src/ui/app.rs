//! Main application for the solitaire GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use crate::{GameConfig, GameOutcome, GameSession};
use super::board_view::BoardView;
use super::timer::GameTimer;
use super::theme::*;

/// Main solitaire application
pub struct SolitaireApp {
    session: GameSession,
    board_view: BoardView,
    timer: GameTimer,
}

impl SolitaireApp {
    /// Create a new app running a fresh game
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            session: GameSession::new(config),
            board_view: BoardView::default(),
            timer: GameTimer::default(),
        }
    }

    /// Start over and reset the clock
    fn restart(&mut self) {
        self.session.restart();
        self.timer.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.session.can_undo(), egui::Button::new("Undo (Z)"))
                        .clicked()
                    {
                        self.session.undo();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.session.can_redo(), egui::Button::new("Redo (Y)"))
                        .clicked()
                    {
                        self.session.redo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.session.config();
                    let rule = if config.center_win { "center finish" } else { "any finish" };
                    ui.label(format!("{0}x{0} - {1}", config.board_size, rule));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("MARBLE SOLITAIRE").size(20.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_stats_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_help_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Time, marbles left and undo budget
    fn render_stats_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIME").size(10.0).color(TEXT_MUTED));
            ui.label(
                RichText::new(format!("{:.1}s", self.timer.elapsed().as_secs_f32()))
                    .size(24.0)
                    .color(TEXT_PRIMARY),
            );
            ui.add_space(8.0);

            ui.label(RichText::new("MARBLES").size(10.0).color(TEXT_MUTED));
            ui.label(
                RichText::new(self.session.marble_count().to_string())
                    .size(24.0)
                    .color(TEXT_PRIMARY),
            );
            ui.add_space(8.0);

            let remaining = self.session.undos_remaining();
            let color = if remaining == 0 { UNDO_LOW } else { TEXT_SECONDARY };
            ui.label(RichText::new(format!("Undos remaining: {remaining}")).size(12.0).color(color));
            ui.label(
                RichText::new(format!("Move #{}", self.session.moves_played()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.add_enabled(self.session.can_undo(), egui::Button::new("Undo")).clicked() {
                    self.session.undo();
                }
                if ui.add_enabled(self.session.can_redo(), egui::Button::new("Redo")).clicked() {
                    self.session.redo();
                }
                if ui.button("New Game").clicked() {
                    self.restart();
                }
            });
        });
    }

    fn render_help_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HOW TO PLAY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new("Click on a marble to select, then click on a valid destination.")
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new("Press 'Z' to undo, 'Y' to redo, 'N' for a new game.")
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Win/lose dialog with a replay button
    fn render_game_over_window(&mut self, ctx: &Context) {
        let (title, accent) = match self.session.outcome() {
            GameOutcome::Won => ("You Win!", STATUS_WON),
            GameOutcome::Lost => ("Game Over", STATUS_LOST),
            GameOutcome::InProgress => return,
        };

        let mut replay = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).size(26.0).strong().color(accent));
                    ui.add_space(8.0);

                    let detail = if self.session.outcome() == GameOutcome::Won {
                        format!("Time taken: {:.1} seconds", self.timer.elapsed().as_secs_f32())
                    } else {
                        format!("No valid moves remain.\nMarbles remaining: {}", self.session.marble_count())
                    };
                    ui.label(RichText::new(detail).size(16.0).color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    if ui
                        .add_sized([240.0, 30.0], egui::Button::new("Replay"))
                        .clicked()
                    {
                        replay = true;
                    }
                });
            });

        if replay {
            self.restart();
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let targets = self.session.selection_targets();
            let clicked = self.board_view.show(
                ui,
                self.session.board(),
                self.session.selection(),
                &targets,
                self.session.is_over(),
            );

            if let Some(pos) = clicked {
                self.session.select_or_move(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, redo, restart, quit) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Z),
                i.key_pressed(egui::Key::Y),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if undo {
            self.session.undo();
        }
        if redo {
            self.session.redo();
        }
        if restart {
            self.restart();
        }
        if quit {
            info!("closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for SolitaireApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Freeze the clock the frame the game ends
        if self.session.is_over() && self.timer.is_running() {
            let elapsed = self.timer.stop();
            info!(seconds = elapsed.as_secs_f32(), outcome = ?self.session.outcome(), "game finished");
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_game_over_window(ctx);

        // Keep the clock ticking
        if self.timer.is_running() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
