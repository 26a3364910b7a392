use eframe::egui::{self, RichText};

use crate::format::compact_count;
use crate::models::UserProfile;
use crate::theme::Theme;

use super::images::picture;
use crate::app::state::ImageTarget;
use crate::app::MyWorldApp;

enum ProfileAction {
    BeginEdit,
    Cancel,
    Save,
    Pick(ImageTarget),
    ToggleTheme,
}

impl MyWorldApp {
    pub(crate) fn render_profile(&mut self, ui: &mut egui::Ui) {
        let mut action = None;
        let editing = self.profile_edit.is_editing();
        let picking = self.profile_edit.picking;
        let theme = self.theme.current();

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("profile")
            .auto_shrink([false, false]);
        if self.scroll_to_top {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        scroll.show(ui, |ui| {
            let shown: &UserProfile = self.profile_edit.draft.as_ref().unwrap_or(&self.state.user);
            let width = ui.available_width();

            let cover = shown.cover_photo.clone().unwrap_or_default();
            picture(ui, &mut self.images, &cover, egui::vec2(width, 160.0), 12.0);
            if editing && ui.add_enabled(picking.is_none(), egui::Button::new("🖼 Change cover")).clicked() {
                action = Some(ProfileAction::Pick(ImageTarget::Cover));
            }
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                picture(ui, &mut self.images, &shown.avatar, egui::vec2(88.0, 88.0), 44.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if editing {
                        if ui.button(RichText::new("Save").strong()).clicked() {
                            action = Some(ProfileAction::Save);
                        }
                        if ui.button("Cancel").clicked() {
                            action = Some(ProfileAction::Cancel);
                        }
                        if ui
                            .add_enabled(picking.is_none(), egui::Button::new("📷 Change avatar"))
                            .clicked()
                        {
                            action = Some(ProfileAction::Pick(ImageTarget::Avatar));
                        }
                    } else if ui.button("Refine Space").clicked() {
                        action = Some(ProfileAction::BeginEdit);
                    }
                });
            });
            ui.add_space(8.0);

            if let Some(err) = &self.profile_edit.error {
                ui.colored_label(ui.visuals().error_fg_color, err);
            }

            if let Some(draft) = self.profile_edit.draft.as_mut() {
                ui.label(RichText::new("Name").small().weak());
                ui.text_edit_singleline(&mut draft.name);
                ui.add_space(6.0);
                ui.label(RichText::new("Bio").small().weak());
                ui.add(
                    egui::TextEdit::multiline(&mut draft.bio)
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
                return;
            }

            let user = &self.state.user;
            ui.heading(RichText::new(&user.name).strong());
            ui.label(RichText::new(format!("@{}", user.handle)).weak());
            ui.add_space(6.0);
            ui.label(&user.bio);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new(compact_count(user.following)).strong());
                ui.label(RichText::new("Following").weak());
                ui.add_space(16.0);
                ui.label(RichText::new(compact_count(user.followers)).strong());
                ui.label(RichText::new("Followers").weak());
            });

            ui.add_space(16.0);
            egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let label = match theme {
                        Theme::Light => "☀ Light mode",
                        Theme::Dark => "🌙 Dark mode",
                    };
                    ui.label(RichText::new("Display").strong());
                    ui.label(label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Switch").clicked() {
                            action = Some(ProfileAction::ToggleTheme);
                        }
                    });
                });
            });
        });

        match action {
            Some(ProfileAction::BeginEdit) => self.profile_edit.begin(&self.state.user),
            Some(ProfileAction::Cancel) => self.profile_edit.cancel(),
            Some(ProfileAction::Save) => {
                if let Some(update) = self.profile_edit.finish() {
                    self.state.update_user(update);
                }
            }
            Some(ProfileAction::Pick(target)) => self.spawn_pick_image(target),
            Some(ProfileAction::ToggleTheme) => self.toggle_theme(),
            None => {}
        }
    }
}
