//! Toolbar: slice turn buttons and turn settings

use egui::Ui;

use crate::state::AppState;
use rubiks_core::Axis;

/// The six face buttons, in the order they appear
const TURN_BUTTONS: [(&str, Axis, i32); 6] = [
    ("R", Axis::X, 1),
    ("L", Axis::X, -1),
    ("U", Axis::Y, 1),
    ("D", Axis::Y, -1),
    ("F", Axis::Z, 1),
    ("B", Axis::Z, -1),
];

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let idle = !state.puzzle.is_rotating();

        for (label, axis, layer) in TURN_BUTTONS {
            let button = egui::Button::new(label).min_size(egui::vec2(28.0, 0.0));
            if ui
                .add_enabled(idle, button)
                .on_hover_text(turn_hint(axis, layer))
                .clicked()
            {
                state.try_turn(axis, layer);
            }
        }

        ui.separator();

        // Turn sense and angle
        let sense = if state.turn.clockwise { "CW" } else { "CCW" };
        if ui
            .button(sense)
            .on_hover_text("Turn direction (Space)")
            .clicked()
        {
            state.turn.clockwise = !state.turn.clockwise;
        }
        ui.selectable_value(&mut state.turn.angle, 90, "90°");
        ui.selectable_value(&mut state.turn.angle, 180, "180°");

        ui.separator();

        // Edit mode toggle
        let mut edit = state.edit.enabled;
        if ui
            .toggle_value(&mut edit, "Edit")
            .on_hover_text("Pick and move individual pieces (P)")
            .clicked()
        {
            state.edit.toggle();
        }

        ui.separator();

        if ui.button("Reset").clicked() {
            state.reset_puzzle();
        }
    });
}

fn turn_hint(axis: Axis, layer: i32) -> &'static str {
    match (axis, layer) {
        (Axis::X, 1) => "Turn the right slice",
        (Axis::X, -1) => "Turn the left slice",
        (Axis::Y, 1) => "Turn the top slice",
        (Axis::Y, -1) => "Turn the bottom slice",
        (Axis::Z, 1) => "Turn the front slice",
        (Axis::Z, -1) => "Turn the back slice",
        _ => "Turn a slice",
    }
}
