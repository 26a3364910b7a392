/// Light and dark visuals derived from a single accent color
use eframe::egui;

use crate::theme::Theme;

/// Returns (hue [0-360], saturation [0-1], value [0-1])
fn rgb_to_hsv(color: egui::Color32) -> (f32, f32, f32) {
    let r = color.r() as f32 / 255.0;
    let g = color.g() as f32 / 255.0;
    let b = color.b() as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    (hue, saturation, max)
}

fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> egui::Color32 {
    let c = value * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match hue {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    egui::Color32::from_rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Scales saturation and brightness, keeping hue.
fn shade(color: egui::Color32, saturation: f32, value: f32) -> egui::Color32 {
    let (h, s, v) = rgb_to_hsv(color);
    hsv_to_rgb(h, (s * saturation).clamp(0.0, 1.0), (v * value).clamp(0.0, 1.0))
}

pub struct Palette {
    pub accent: egui::Color32,
}

impl Default for Palette {
    fn default() -> Self {
        // indigo-600
        Self {
            accent: egui::Color32::from_rgb(79, 70, 229),
        }
    }
}

impl Palette {
    pub fn dark_visuals(&self) -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();
        let night = shade(self.accent, 0.35, 0.18);

        visuals.panel_fill = night;
        visuals.window_fill = shade(night, 1.0, 1.25);
        visuals.extreme_bg_color = shade(night, 1.0, 0.6);
        visuals.faint_bg_color = shade(night, 1.0, 1.5);

        visuals.widgets.inactive.weak_bg_fill = shade(self.accent, 0.4, 0.3);
        visuals.widgets.hovered.weak_bg_fill = shade(self.accent, 0.6, 0.5);
        visuals.widgets.active.weak_bg_fill = self.accent;

        visuals.selection.bg_fill = shade(self.accent, 0.8, 0.8);
        visuals.hyperlink_color = shade(self.accent, 0.6, 1.3);
        visuals.window_stroke.color = shade(self.accent, 0.5, 0.5);
        visuals.window_rounding = egui::Rounding::same(16.0);
        visuals
    }

    pub fn light_visuals(&self) -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.panel_fill = egui::Color32::from_rgb(248, 250, 252);
        visuals.window_fill = egui::Color32::WHITE;
        visuals.extreme_bg_color = egui::Color32::WHITE;
        visuals.faint_bg_color = egui::Color32::from_rgb(241, 245, 249);

        visuals.widgets.inactive.weak_bg_fill = shade(self.accent, 0.15, 1.1);
        visuals.widgets.hovered.weak_bg_fill = shade(self.accent, 0.3, 1.1);
        visuals.widgets.active.weak_bg_fill = self.accent;

        visuals.selection.bg_fill = shade(self.accent, 0.35, 1.1);
        visuals.hyperlink_color = self.accent;
        visuals.window_stroke.color = shade(self.accent, 0.2, 1.0);
        visuals.window_rounding = egui::Rounding::same(16.0);
        visuals
    }
}

pub fn visuals_for(theme: Theme) -> egui::Visuals {
    let palette = Palette::default();
    match theme {
        Theme::Light => palette.light_visuals(),
        Theme::Dark => palette.dark_visuals(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hsv_conversion() {
        let color = egui::Color32::from_rgb(79, 70, 229);
        let (h, s, v) = rgb_to_hsv(color);
        assert_eq!(hsv_to_rgb(h, s, v), color);
    }

    #[test]
    fn shade_keeps_hue() {
        let accent = Palette::default().accent;
        let (h0, _, _) = rgb_to_hsv(accent);
        let (h1, _, v1) = rgb_to_hsv(shade(accent, 0.5, 0.5));
        assert!((h0 - h1).abs() < 2.0);
        assert!(v1 < rgb_to_hsv(accent).2);
    }

    #[test]
    fn visuals_follow_theme() {
        assert!(visuals_for(Theme::Dark).dark_mode);
        assert!(!visuals_for(Theme::Light).dark_mode);
    }
}
