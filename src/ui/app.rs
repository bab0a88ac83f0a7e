//! Main application for the Gess GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{GameState, Stone};

use super::board_view::BoardView;
use super::game_state::{color_name, Session};
use super::theme::*;

/// Hotseat Gess application
#[derive(Default)]
pub struct GessApp {
    session: Session,
    board_view: BoardView,
    show_help: bool,
}

impl GessApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Resign").clicked() {
                        self.session.resign();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_help, "Rules Summary");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Move #{}", self.session.game.history().len() + 1));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_rings_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }

                if self.show_help {
                    ui.add_space(10.0);
                    self.render_help_card(ui);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GESS").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("chess variant on a go board").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let state = self.session.game.state();
        let turn = self.session.game.turn();

        Self::card_frame().show(ui, |ui| {
            let (accent, text_color) = match turn {
                Stone::White => (egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
                _ => (egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(24.0),
                    text_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name(turn).to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = match (state, self.session.selected) {
                        (GameState::InProgress, None) => ("Pick a piece".to_string(), STATUS_OK),
                        (GameState::InProgress, Some(pos)) => (format!("{} selected", pos), STATUS_WARNING),
                        (over, _) => (format!("{}", over), STATUS_CRITICAL),
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            let elapsed = self.session.move_timer.elapsed();
            ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(12.0).color(TEXT_SECONDARY));
        });
    }

    fn render_rings_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("RINGS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for stone in [Stone::Black, Stone::White] {
                let rings = self.session.game.rings().of(stone);
                let color = if rings.is_empty() { STATUS_CRITICAL } else { TEXT_PRIMARY };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(color_name(stone)).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{}", rings.len())).size(14.0).strong().color(color));
                    });
                });
                if !rings.is_empty() {
                    let centers: Vec<String> = rings.iter().map(|p| p.to_string()).collect();
                    ui.label(RichText::new(centers.join(" ")).size(10.0).color(TEXT_MUTED));
                }
                ui.add_space(4.0);
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            ui.horizontal(|ui| {
                btn_frame.show(ui, |ui| {
                    if ui.add(Self::action_label("New")).clicked() {
                        self.session.reset();
                    }
                });
                btn_frame.show(ui, |ui| {
                    if ui.add(Self::action_label("Undo")).clicked() {
                        self.session.undo();
                    }
                });
                btn_frame.show(ui, |ui| {
                    if ui.add(Self::action_label("Resign")).clicked() {
                        self.session.resign();
                    }
                });
            });

            if let Some((from, to)) = self.session.last_move() {
                ui.add_space(8.0);
                ui.label(RichText::new(format!("Last: {}-{}", from, to)).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn action_label(text: &str) -> egui::Label {
        egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_help_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            for line in [
                "Click a piece center, then its destination.",
                "Rim stones give directions; a center stone removes the 3-step limit.",
                "Lose your last ring and you lose the game.",
                "Esc clears the selection.",
            ] {
                ui.label(RichText::new(line).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = self.board_view.show(
                ui,
                &self.session.game,
                self.session.selected,
                self.session.last_move(),
            );

            if let Some(pos) = clicked {
                self.session.click(pos);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
            if i.key_pressed(egui::Key::Escape) {
                self.session.selected = None;
            }
        });
    }
}

impl eframe::App for GessApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the move clock ticking
        if !self.session.game.state().is_over() {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
    }
}
