use eframe::egui::{self, RichText};

use crate::models::ViewType;
use crate::theme::Theme;

use super::images::picture;
use crate::app::MyWorldApp;

impl MyWorldApp {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let mut toggle_theme = false;
        let mut open_profile = false;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(RichText::new("My World").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let avatar = picture(
                        ui,
                        &mut self.images,
                        &self.state.user.avatar,
                        egui::vec2(32.0, 32.0),
                        16.0,
                    );
                    if avatar.on_hover_text("Profile").clicked() {
                        open_profile = true;
                    }

                    let icon = match self.theme.current() {
                        Theme::Light => "🌙",
                        Theme::Dark => "☀",
                    };
                    if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                        toggle_theme = true;
                    }
                });
            });
            ui.add_space(6.0);
        });

        if toggle_theme {
            self.toggle_theme();
        }
        if open_profile {
            self.navigate(ViewType::Profile);
        }
    }

    pub(crate) fn render_bottom_nav(&mut self, ctx: &egui::Context) {
        let mut target = None;
        let mut compose = false;
        let active = self.state.view;

        egui::TopBottomPanel::bottom("bottom_nav").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.columns(3, |cols| {
                cols[0].vertical_centered(|ui| {
                    if ui.selectable_label(active == ViewType::Home, "🏠 Home").clicked() {
                        target = Some(ViewType::Home);
                    }
                });
                cols[1].vertical_centered(|ui| {
                    if ui.button(RichText::new("✏ Reflect").strong()).clicked() {
                        compose = true;
                    }
                });
                cols[2].vertical_centered(|ui| {
                    if ui.selectable_label(active == ViewType::Profile, "👤 Profile").clicked() {
                        target = Some(ViewType::Profile);
                    }
                });
            });
            ui.add_space(4.0);
        });

        if let Some(view) = target {
            self.navigate(view);
        }
        if compose {
            self.compose.show();
        }
    }
}
