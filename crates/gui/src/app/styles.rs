//! egui style setup

use eframe::egui;
use eframe::egui::{FontId, TextStyle};

/// Dark theme tuned for a viewport-dominated window: the chrome is a thin
/// toolbar and status bar, so panels stay darker than egui's default to
/// keep the focus on the cube.
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = egui::Color32::from_rgb(28, 28, 32);
    style.visuals.window_fill = egui::Color32::from_rgb(34, 34, 39);
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(50, 90, 150);

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 3.0);
    style.spacing.menu_margin = egui::Margin::same(4);

    set_font_sizes(&mut style, font_size);
    ctx.set_style(style);
}

/// Re-apply only the font sizes (called when the settings value changes)
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    set_font_sizes(&mut style, font_size);
    ctx.set_style(style);
}

fn set_font_sizes(style: &mut egui::Style, size: f32) {
    let sized = [
        (TextStyle::Body, FontId::proportional(size)),
        (TextStyle::Button, FontId::proportional(size)),
        (TextStyle::Small, FontId::proportional(size * 0.85)),
        (TextStyle::Heading, FontId::proportional(size * 1.25)),
        (TextStyle::Monospace, FontId::monospace(size)),
    ];
    for (text_style, font) in sized {
        style.text_styles.insert(text_style, font);
    }
}
