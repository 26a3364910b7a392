use eframe::egui::{self, RichText};

use crate::format::compact_count;
use crate::models::{Post, UserProfile};

use super::images::{picture, ImageCache};
use crate::app::MyWorldApp;

impl MyWorldApp {
    pub(crate) fn render_feed(&mut self, ui: &mut egui::Ui) {
        let mut open_compose = false;

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("home_feed")
            .auto_shrink([false, false]);
        if self.scroll_to_top {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        scroll.show(ui, |ui| {
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
                ui.horizontal(|ui| {
                    picture(
                        ui,
                        &mut self.images,
                        &self.state.user.avatar,
                        egui::vec2(40.0, 40.0),
                        20.0,
                    );
                    let prompt = ui.add(
                        egui::Label::new(RichText::new("What's on your mind?").weak())
                            .sense(egui::Sense::click()),
                    );
                    if prompt.clicked() {
                        open_compose = true;
                    }
                });
            });
            ui.add_space(12.0);

            if self.state.posts.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    let empty = ui.add(
                        egui::Label::new(
                            RichText::new("No reflections yet. Start your journey today.")
                                .italics()
                                .weak(),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if empty.clicked() {
                        open_compose = true;
                    }
                });
                return;
            }

            for post in &self.state.posts {
                let pending = self.pending_validations.contains(&post.id);
                render_post_card(ui, &mut self.images, &self.state.user, post, pending);
                ui.add_space(10.0);
            }
        });

        if open_compose {
            self.compose.show();
        }
    }
}

fn render_post_card(
    ui: &mut egui::Ui,
    images: &mut ImageCache,
    author: &UserProfile,
    post: &Post,
    pending: bool,
) {
    egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            picture(ui, images, &author.avatar, egui::vec2(40.0, 40.0), 20.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(&author.name).strong());
                ui.label(
                    RichText::new(format!("@{} · {}", author.handle, post.timestamp))
                        .small()
                        .weak(),
                );
            });
        });
        ui.add_space(6.0);
        ui.label(RichText::new(&post.content).size(16.0));

        if post.has_media {
            if let Some(url) = post.media_url.as_deref() {
                ui.add_space(6.0);
                picture(ui, images, url, egui::vec2(ui.available_width(), 220.0), 12.0);
            }
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(format!("💬 {}", compact_count(post.comments.len() as u64)));
            ui.add_space(12.0);
            ui.label(format!("🔁 {}", compact_count(u64::from(post.reposts))));
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("❤ {}", compact_count(u64::from(post.likes))))
                    .color(egui::Color32::from_rgb(236, 72, 153)),
            );
            if pending {
                ui.add_space(12.0);
                ui.spinner();
            }
        });

        if !post.comments.is_empty() {
            ui.separator();
            for comment in &post.comments {
                ui.horizontal_top(|ui| {
                    picture(ui, images, &comment.author_avatar, egui::vec2(28.0, 28.0), 14.0);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&comment.author_name).strong());
                            ui.label(RichText::new(&comment.timestamp).small().weak());
                        });
                        ui.label(&comment.content);
                    });
                });
                ui.add_space(4.0);
            }
        }
    });
}
