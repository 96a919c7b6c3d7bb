pub mod settings;

use glam::Vec3;
use rubiks_core::{Axis, RubiksCube};

pub use settings::{AppSettings, AxisSettings, GridSettings, UiSettings, ViewportSettings};

/// Turn angle bounds for the Z/A shortcuts
const MIN_TURN_ANGLE: i32 = 90;
const MAX_TURN_ANGLE: i32 = 180;

/// Panel visibility flags
pub struct PanelVisibility {
    pub toolbar: bool,
    pub status_bar: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            toolbar: true,
            status_bar: true,
        }
    }
}

/// Input-layer policy for slice turns: sense toggle and turn angle.
///
/// The default sense per layer (outer positive layers turn the other way)
/// is deliberately a GUI policy; the core only consumes the signed
/// direction it is handed.
pub struct TurnSettings {
    /// Flipped by the Space shortcut
    pub clockwise: bool,
    /// Degrees per turn, 90 or 180
    pub angle: i32,
}

impl Default for TurnSettings {
    fn default() -> Self {
        Self {
            clockwise: true,
            angle: MIN_TURN_ANGLE,
        }
    }
}

impl TurnSettings {
    /// Signed direction for a turn of the given layer
    pub fn direction_for_layer(&self, layer: i32) -> i32 {
        let dir = if layer == 1 { -1 } else { 1 };
        if self.clockwise {
            dir
        } else {
            -dir
        }
    }

    pub fn halve_angle(&mut self) {
        self.angle = (self.angle / 2).max(MIN_TURN_ANGLE);
    }

    pub fn double_angle(&mut self) {
        self.angle = (self.angle * 2).min(MAX_TURN_ANGLE);
    }
}

/// Edit ("picking") mode state: which piece is grabbed and where
#[derive(Default)]
pub struct EditState {
    /// Whether per-piece editing is active
    pub enabled: bool,
    /// Picked piece, if any
    pub selected: Option<usize>,
    /// Ray parameter at which the piece was grabbed (drag depth)
    pub pick_distance: f32,
    /// Offset from the grabbed world point to the piece center
    pub drag_offset: Vec3,
}

impl EditState {
    /// Toggle edit mode; leaving or entering drops the selection
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        self.selected = None;
    }

    pub fn select(&mut self, id: usize, distance: f32) {
        self.selected = Some(id);
        self.pick_distance = distance;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Combined application state
pub struct AppState {
    pub puzzle: RubiksCube,
    pub edit: EditState,
    pub turn: TurnSettings,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            puzzle: RubiksCube::default(),
            edit: EditState::default(),
            turn: TurnSettings::default(),
            panels: PanelVisibility::default(),
            settings: AppSettings::load(),
            show_settings_window: false,
        }
    }
}

impl AppState {
    /// Request a slice turn under the current turn settings. Dropped while
    /// a rotation animates (the engine would reject it anyway).
    pub fn try_turn(&mut self, axis: Axis, layer: i32) -> bool {
        if self.puzzle.is_rotating() {
            return false;
        }
        let direction = self.turn.direction_for_layer(layer);
        let started = self
            .puzzle
            .start_rotation(axis, layer, direction, self.turn.angle as f32);
        if started {
            tracing::debug!(?axis, layer, direction, angle = self.turn.angle, "turn started");
        }
        started
    }

    /// Reset the puzzle to the solved state and drop any piece selection
    pub fn reset_puzzle(&mut self) {
        self.puzzle.initialize();
        self.edit.clear_selection();
        tracing::info!("puzzle reset to solved state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_direction_flips_for_positive_layer() {
        let turn = TurnSettings::default();
        assert_eq!(turn.direction_for_layer(1), -1);
        assert_eq!(turn.direction_for_layer(0), 1);
        assert_eq!(turn.direction_for_layer(-1), 1);

        let counter = TurnSettings {
            clockwise: false,
            ..TurnSettings::default()
        };
        assert_eq!(counter.direction_for_layer(1), 1);
        assert_eq!(counter.direction_for_layer(-1), -1);
    }

    #[test]
    fn turn_angle_clamps_between_90_and_180() {
        let mut turn = TurnSettings::default();
        turn.halve_angle();
        assert_eq!(turn.angle, 90);
        turn.double_angle();
        assert_eq!(turn.angle, 180);
        turn.double_angle();
        assert_eq!(turn.angle, 180);
        turn.halve_angle();
        assert_eq!(turn.angle, 90);
    }

    #[test]
    fn toggling_edit_mode_drops_selection() {
        let mut edit = EditState::default();
        edit.select(7, 4.2);
        assert_eq!(edit.selected, Some(7));

        edit.toggle();
        assert!(edit.enabled);
        assert_eq!(edit.selected, None);
    }
}
