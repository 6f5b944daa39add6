use eframe::egui;
use egui::Color32;
use merbabu_core::{Rgb, Theme};
use tracing::debug;

pub fn color(rgb: Rgb) -> Color32 {
    let [r, g, b] = rgb.0;
    Color32::from_rgb(r, g, b)
}

/// Light visuals with the theme's background behind every panel and window.
pub fn apply_theme(ctx: &egui::Context, theme: &Theme) {
    debug!(heading = %theme.heading, "applying theme");
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = color(theme.background);
    visuals.window_fill = color(theme.background);
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = color(theme.table_fill).gamma_multiply(0.96);
    visuals.widgets.noninteractive.bg_stroke.color = color(theme.grid_color);
    ctx.set_visuals(visuals);
}
