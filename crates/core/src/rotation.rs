//! Animated slice-rotation state machine over the piece lattice.

use glam::{IVec3, Mat3, Vec3};

use crate::cube::CubeState;

/// Angular rate of the sweep animation. Fixed rate, not normalized to the
/// target: a 180° flip takes twice as long as a 90° turn.
pub const ROTATION_SPEED_DEG_PER_SEC: f32 = 180.0;

/// Slack below the target angle at which the sweep snaps and commits
const SNAP_EPSILON_DEG: f32 = 1e-4;

/// The three lattice axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The grid coordinate this axis selects
    fn component(self, grid: IVec3) -> i32 {
        match self {
            Axis::X => grid.x,
            Axis::Y => grid.y,
            Axis::Z => grid.z,
        }
    }
}

/// Rotation matrix about a lattice axis, angle in degrees
pub fn rotation_matrix(axis: Axis, angle_deg: f32) -> Mat3 {
    Mat3::from_axis_angle(axis.unit(), angle_deg.to_radians())
}

/// The in-flight slice rotation. Exists only while a sweep animates.
#[derive(Debug, Clone)]
pub struct RotationState {
    /// Axis the layer rotates about
    pub axis: Axis,
    /// Slice index on that axis, normally in {-1, 0, 1}
    pub layer: i32,
    /// Turn sense, +1 or -1
    pub direction: i32,
    /// Progress angle in degrees, 0 at start
    pub angle_deg: f32,
    /// Final rotation amount in degrees
    pub target_deg: f32,
}

impl RotationState {
    /// Whether a grid slot belongs to the rotating layer
    pub fn contains(&self, grid: IVec3) -> bool {
        self.axis.component(grid) == self.layer
    }

    /// Signed partial-angle matrix for the current sweep position
    pub fn live_matrix(&self) -> Mat3 {
        rotation_matrix(self.axis, self.direction as f32 * self.angle_deg)
    }

    /// Signed full-angle matrix applied at commit
    fn commit_matrix(&self) -> Mat3 {
        rotation_matrix(self.axis, self.direction as f32 * self.target_deg)
    }
}

/// Single-slot rotation state machine: `Idle` (no state) or `Animating`
/// (one `RotationState`). A new request while animating is rejected, never
/// queued, and a started rotation always runs to completion.
#[derive(Default)]
pub struct RotationEngine {
    active: Option<RotationState>,
}

impl RotationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_rotating(&self) -> bool {
        self.active.is_some()
    }

    /// The in-flight rotation, if any
    pub fn state(&self) -> Option<&RotationState> {
        self.active.as_ref()
    }

    /// Begin a slice rotation. Returns false (and changes nothing) while a
    /// sweep is already animating. The direction sign is normalized; layers
    /// outside {-1, 0, 1} match zero pieces and the rotation completes as a
    /// visual no-op.
    pub fn start(&mut self, axis: Axis, layer: i32, direction: i32, degrees: f32) -> bool {
        if self.active.is_some() {
            return false;
        }

        self.active = Some(RotationState {
            axis,
            layer,
            direction: if direction >= 0 { 1 } else { -1 },
            angle_deg: 0.0,
            target_deg: degrees,
        });
        true
    }

    /// Advance the sweep by one frame. When the progress angle reaches the
    /// target it snaps exactly, the grid permutation is committed, and the
    /// machine returns to idle.
    pub fn update(&mut self, cube: &mut CubeState, delta_time: f32) {
        let Some(rotation) = self.active.as_mut() else {
            return;
        };

        rotation.angle_deg += ROTATION_SPEED_DEG_PER_SEC * delta_time;
        if rotation.angle_deg >= rotation.target_deg - SNAP_EPSILON_DEG {
            rotation.angle_deg = rotation.target_deg;
            apply_completed(cube, rotation);
            self.active = None;
        }
    }
}

/// Commit: permute grid slots of the layer under the full-angle rotation and
/// fold the rotation into each piece's logical orientation. Sticker colors
/// ride along untouched.
fn apply_completed(cube: &mut CubeState, rotation: &RotationState) {
    let rot = rotation.commit_matrix();
    for piece in cube.pieces_mut() {
        if !rotation.contains(piece.grid) {
            continue;
        }

        // Trig slack must resolve exactly back onto the lattice.
        let rotated = rot * piece.grid.as_vec3();
        piece.grid = IVec3::new(
            rotated.x.round() as i32,
            rotated.y.round() as i32,
            rotated.z.round() as i32,
        );
        piece.orientation = rot * piece.orientation;
    }

    cube.rebuild_mapping();
}
