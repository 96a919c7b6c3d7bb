//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::viewport::ViewportPanel;
use rubiks_core::Axis;

/// Camera orbit step per frame while an arrow key is held, degrees
const ARROW_ORBIT_STEP: f32 = 2.0;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Face turns: right/left slice about X, up/down about Y,
        // front/back about Z
        if i.key_pressed(egui::Key::R) {
            state.try_turn(Axis::X, 1);
        }
        if i.key_pressed(egui::Key::L) {
            state.try_turn(Axis::X, -1);
        }
        if i.key_pressed(egui::Key::U) {
            state.try_turn(Axis::Y, 1);
        }
        if i.key_pressed(egui::Key::D) {
            state.try_turn(Axis::Y, -1);
        }
        if i.key_pressed(egui::Key::F) {
            state.try_turn(Axis::Z, 1);
        }
        if i.key_pressed(egui::Key::B) {
            state.try_turn(Axis::Z, -1);
        }

        // P — toggle piece edit mode
        if i.key_pressed(egui::Key::P) {
            state.edit.toggle();
        }
        // Space — flip the turn direction
        if i.key_pressed(egui::Key::Space) {
            state.turn.clockwise = !state.turn.clockwise;
        }
        // Z / A — halve or double the turn angle
        if i.key_pressed(egui::Key::Z) {
            state.turn.halve_angle();
        }
        if i.key_pressed(egui::Key::A) {
            state.turn.double_angle();
        }

        // Escape — drop the edit-mode selection
        if i.key_pressed(egui::Key::Escape) {
            state.edit.clear_selection();
        }

        // Arrow keys orbit the camera while held
        if i.key_down(egui::Key::ArrowLeft) {
            viewport.orbit_by(-ARROW_ORBIT_STEP, 0.0);
        }
        if i.key_down(egui::Key::ArrowRight) {
            viewport.orbit_by(ARROW_ORBIT_STEP, 0.0);
        }
        if i.key_down(egui::Key::ArrowUp) {
            viewport.orbit_by(0.0, ARROW_ORBIT_STEP);
        }
        if i.key_down(egui::Key::ArrowDown) {
            viewport.orbit_by(0.0, -ARROW_ORBIT_STEP);
        }
    });

    // Keep repainting while an arrow key orbits the camera
    if ctx.input(|i| {
        i.key_down(egui::Key::ArrowLeft)
            || i.key_down(egui::Key::ArrowRight)
            || i.key_down(egui::Key::ArrowUp)
            || i.key_down(egui::Key::ArrowDown)
    }) {
        ctx.request_repaint();
    }
}
