use eframe::egui::{self, RichText};

use crate::format::remaining_chars;

use super::images::picture;
use crate::app::MyWorldApp;

impl MyWorldApp {
    pub(crate) fn render_compose(&mut self, ctx: &egui::Context) {
        let mut open = self.compose.open;
        let focus = self.compose.take_focus_request();
        let mut share = false;
        let mut close = false;

        egui::Window::new("New reflection")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(480.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal_top(|ui| {
                    picture(
                        ui,
                        &mut self.images,
                        &self.state.user.avatar,
                        egui::vec2(40.0, 40.0),
                        20.0,
                    );
                    let editor = ui.add(
                        egui::TextEdit::multiline(&mut self.compose.draft)
                            .hint_text("What's your quiet truth today?")
                            .desired_rows(6)
                            .desired_width(f32::INFINITY),
                    );
                    if focus {
                        editor.request_focus();
                    }
                });

                let remaining = remaining_chars(&self.compose.draft);
                let can_share = !self.compose.draft.trim().is_empty();

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let counter = RichText::new(remaining.to_string()).small();
                    let counter = if remaining < 0 {
                        counter.color(ui.visuals().error_fg_color)
                    } else {
                        counter.weak()
                    };
                    ui.label(counter);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add_enabled(can_share, egui::Button::new(RichText::new("Share").strong()))
                            .clicked()
                        {
                            share = true;
                        }
                        if ui.button("Cancel").clicked() {
                            close = true;
                        }
                    });
                });

                if can_share && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter)) {
                    share = true;
                }
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    close = true;
                }
            });

        self.compose.open = open && !close;
        if share {
            self.spawn_compose_post();
        } else if !self.compose.open {
            self.compose.draft.clear();
        }
    }
}
