use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use eframe::egui;

use crate::media;

/// Decoded bytes for `data:` references, keyed by a hash of the reference.
/// Remote references are handed to egui's own loaders.
#[derive(Default)]
pub struct ImageCache {
    decoded: HashMap<u64, egui::load::Bytes>,
}

impl ImageCache {
    pub fn source(&mut self, reference: &str) -> Option<egui::ImageSource<'static>> {
        if reference.is_empty() {
            return None;
        }
        if !reference.starts_with("data:") {
            return Some(egui::ImageSource::Uri(reference.to_string().into()));
        }

        let mut hasher = DefaultHasher::new();
        reference.hash(&mut hasher);
        let key = hasher.finish();

        if !self.decoded.contains_key(&key) {
            let bytes = media::decode_data_url(reference)?;
            self.decoded.insert(key, bytes.into());
        }
        let bytes = self.decoded.get(&key)?.clone();
        Some(egui::ImageSource::Bytes {
            uri: format!("bytes://myworld/{key:016x}").into(),
            bytes,
        })
    }
}

/// Draws `reference` at `size`, or a blank placeholder when there is nothing
/// to show.
pub fn picture(
    ui: &mut egui::Ui,
    images: &mut ImageCache,
    reference: &str,
    size: egui::Vec2,
    rounding: f32,
) -> egui::Response {
    match images.source(reference) {
        Some(source) => ui.add(
            egui::Image::new(source)
                .fit_to_exact_size(size)
                .rounding(rounding)
                .sense(egui::Sense::click()),
        ),
        None => {
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
            ui.painter()
                .rect_filled(rect, rounding, ui.visuals().faint_bg_color);
            response
        }
    }
}
