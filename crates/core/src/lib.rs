//! Cube state and rotation model for an interactive Rubik's Cube simulator.
//!
//! Two components: [`CubeState`] owns the 27-piece lattice and answers
//! identity, position and color queries; [`RotationEngine`] animates one
//! slice rotation at a time over it and commits the grid permutation when
//! the sweep finishes. [`RubiksCube`] ties them together behind the API a
//! host render loop drives once per frame: `update` first, then any number
//! of `cube_model` reads.
//!
//! The whole model is single-threaded and frame-driven; no operation blocks
//! and no errors are fatal (out-of-range ids degrade to neutral values).

pub mod cube;
pub mod rotation;

pub use cube::{CubeState, FaceColors, SubCube, DEFAULT_SPACING, FACE_COUNT, PIECE_COUNT};
pub use rotation::{Axis, RotationEngine, RotationState, ROTATION_SPEED_DEG_PER_SEC};

use glam::{Mat3, Mat4, Vec3};

/// The puzzle: piece lattice plus the slice-rotation state machine.
pub struct RubiksCube {
    cube: CubeState,
    engine: RotationEngine,
}

impl RubiksCube {
    /// Solved cube with the given piece spacing
    pub fn new(spacing: f32) -> Self {
        Self {
            cube: CubeState::new(spacing),
            engine: RotationEngine::new(),
        }
    }

    /// Reset every piece to the solved state. Does not interrupt the state
    /// machine; callers reset between rotations.
    pub fn initialize(&mut self) {
        self.cube.initialize();
    }

    /// Advance the sweep animation; commits and goes idle on completion.
    /// Call once per frame, before any `cube_model` reads for that frame.
    pub fn update(&mut self, delta_time: f32) {
        self.engine.update(&mut self.cube, delta_time);
    }

    /// Request a slice rotation. False while one is already animating.
    pub fn start_rotation(&mut self, axis: Axis, layer: i32, direction: i32, degrees: f32) -> bool {
        self.engine.start(axis, layer, direction, degrees)
    }

    pub fn is_rotating(&self) -> bool {
        self.engine.is_rotating()
    }

    /// The in-flight rotation, if any (for UI feedback)
    pub fn rotation(&self) -> Option<&RotationState> {
        self.engine.state()
    }

    /// Per-piece model transform, blending grid position, manual overrides
    /// and the live sweep for pieces inside the rotating layer
    pub fn cube_model(&self, id: usize) -> Mat4 {
        self.cube.model(id, self.engine.state())
    }

    pub fn cube_center_world(&self, id: usize) -> Vec3 {
        self.cube.center_world(id)
    }

    pub fn set_cube_center_world(&mut self, id: usize, center: Vec3) {
        self.cube.set_center_world(id, center);
    }

    pub fn rotate_cube_manual(&mut self, id: usize, delta: Mat3) {
        self.cube.rotate_manual(id, delta);
    }

    pub fn cube_face_colors(&self, id: usize) -> Option<&FaceColors> {
        self.cube.face_colors(id)
    }

    pub fn pieces(&self) -> &[SubCube] {
        self.cube.pieces()
    }

    /// The underlying lattice, for logical-state queries
    pub fn state(&self) -> &CubeState {
        &self.cube
    }
}

impl Default for RubiksCube {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;

    #[test]
    fn facade_runs_a_turn_end_to_end() {
        let mut puzzle = RubiksCube::default();
        assert!(!puzzle.is_rotating());
        assert!(puzzle.start_rotation(Axis::Y, 1, 1, 90.0));
        assert!(puzzle.is_rotating());
        assert!(!puzzle.start_rotation(Axis::X, 0, 1, 90.0));

        // 0.5s of frames at the fixed rate finishes a quarter turn.
        let mut transitions = 0;
        let mut was_rotating = true;
        for _ in 0..60 {
            puzzle.update(1.0 / 60.0);
            if was_rotating && !puzzle.is_rotating() {
                transitions += 1;
            }
            was_rotating = puzzle.is_rotating();
        }
        assert_eq!(transitions, 1);

        let moved = puzzle.state().id_at(IVec3::new(1, 1, -1)).unwrap();
        assert_eq!(puzzle.pieces()[moved].grid, IVec3::new(1, 1, -1));
    }

    #[test]
    fn initialize_returns_to_solved_after_moves() {
        let mut puzzle = RubiksCube::default();
        assert!(puzzle.start_rotation(Axis::Z, -1, -1, 90.0));
        while puzzle.is_rotating() {
            puzzle.update(0.02);
        }
        puzzle.rotate_cube_manual(3, Mat3::from_rotation_x(0.5));
        puzzle.set_cube_center_world(3, Vec3::splat(2.0));

        puzzle.initialize();
        for piece in puzzle.pieces() {
            assert_eq!(piece.manual_translation, Vec3::ZERO);
            assert_eq!(piece.manual_rotation, Mat3::IDENTITY);
            assert_eq!(piece.orientation, Mat3::IDENTITY);
        }
    }

    #[test]
    fn rotation_state_exposes_progress() {
        let mut puzzle = RubiksCube::default();
        assert!(puzzle.rotation().is_none());
        assert!(puzzle.start_rotation(Axis::X, -1, -1, 180.0));
        puzzle.update(0.1);

        let state = puzzle.rotation().unwrap();
        assert_eq!(state.layer, -1);
        assert_eq!(state.direction, -1);
        assert!((state.angle_deg - 18.0).abs() < 1e-3);
        assert_eq!(state.target_deg, 180.0);
    }
}
