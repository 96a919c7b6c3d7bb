use egui::Ui;

use crate::state::AppState;
use rubiks_core::Axis;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if let Some(rotation) = state.puzzle.rotation() {
            let slice = slice_name(rotation.axis, rotation.layer);
            ui.colored_label(
                egui::Color32::from_rgb(255, 200, 100),
                format!(
                    "Turning {slice} {:.0}° / {:.0}°",
                    rotation.angle_deg, rotation.target_deg
                ),
            );
        } else if state.edit.enabled {
            match state.edit.selected {
                Some(id) => ui.label(format!("Edit mode — piece #{id} selected")),
                None => ui.label("Edit mode — click a piece to select it"),
            };
        } else {
            ui.weak("Ready");
        }

        ui.separator();

        let sense = if state.turn.clockwise { "CW" } else { "CCW" };
        ui.weak(format!("{sense} {}°", state.turn.angle));

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("rubiks-gui v{}", env!("CARGO_PKG_VERSION")));
        });
    });
}

fn slice_name(axis: Axis, layer: i32) -> &'static str {
    match (axis, layer) {
        (Axis::X, 1) => "right slice",
        (Axis::X, -1) => "left slice",
        (Axis::X, _) => "middle slice (X)",
        (Axis::Y, 1) => "top slice",
        (Axis::Y, -1) => "bottom slice",
        (Axis::Y, _) => "middle slice (Y)",
        (Axis::Z, 1) => "front slice",
        (Axis::Z, -1) => "back slice",
        (Axis::Z, _) => "middle slice (Z)",
    }
}
