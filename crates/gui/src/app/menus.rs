//! Application menu bar and settings window

use eframe::egui;

use crate::state::{AppSettings, AppState};
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("File", |ui| {
        if ui.button("Reset cube").clicked() {
            state.reset_puzzle();
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            state.settings.save();
            std::process::exit(0);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button("View", |ui| {
        ui.checkbox(&mut state.panels.toolbar, "Toolbar");
        ui.checkbox(&mut state.panels.status_bar, "Status bar");
        ui.separator();
        ui.checkbox(&mut state.settings.grid.visible, "Grid");
        ui.checkbox(&mut state.settings.axes.visible, "Axes");
        ui.separator();
        if ui.button("Reset camera").clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Settings", |ui| {
        if ui.button("Preferences...").clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new("Preferences")
        .open(&mut open)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_viewport_settings(ui, state);
                show_grid_settings(ui, state);
                show_axes_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Viewport");
    ui.horizontal(|ui| {
        ui.label("Background");
        let mut color = egui::Color32::from_rgb(
            state.settings.viewport.background_color[0],
            state.settings.viewport.background_color[1],
            state.settings.viewport.background_color[2],
        );
        if ui.color_edit_button_srgba(&mut color).changed() {
            state.settings.viewport.background_color = [color.r(), color.g(), color.b()];
        }
    });
    ui.horizontal(|ui| {
        ui.label("Orbit sensitivity");
        ui.add(
            egui::DragValue::new(&mut state.settings.viewport.orbit_sensitivity)
                .speed(0.01)
                .range(0.05..=1.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Pan sensitivity");
        ui.add(
            egui::DragValue::new(&mut state.settings.viewport.pan_sensitivity)
                .speed(0.001)
                .range(0.001..=0.05),
        );
    });
    ui.add_space(10.0);
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Grid");
    ui.checkbox(&mut state.settings.grid.visible, "Show grid");

    ui.horizontal(|ui| {
        ui.label("Cell size");
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.size)
                .speed(0.1)
                .range(0.1..=10.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Range");
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.range)
                .speed(1)
                .range(1..=50),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Opacity");
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_axes_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Axes");
    ui.checkbox(&mut state.settings.axes.visible, "Show axes");

    ui.horizontal(|ui| {
        ui.label("Length");
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.length)
                .speed(0.1)
                .range(0.1..=10.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Thickness");
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.thickness)
                .speed(0.1)
                .range(0.5..=5.0),
        );
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Interface");
    ui.horizontal(|ui| {
        ui.label("Font size");
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(9.0..=24.0),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            state.settings.save();
        }
        if ui.button("Restore defaults").clicked() {
            state.settings = AppSettings::default();
        }
    });
}
