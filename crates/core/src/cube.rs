//! The 3x3x3 piece lattice: identities, grid slots, stickers and manual overrides.

use glam::{IVec3, Mat3, Mat4, Vec3};

use crate::rotation::RotationState;

/// Number of pieces in the lattice
pub const PIECE_COUNT: usize = 27;
/// Faces per piece, in slot order [+X, -X, +Y, -Y, +Z, -Z]
pub const FACE_COUNT: usize = 6;

/// Uniform shrink applied to every piece so the gaps between them show
pub const PIECE_SCALE: f32 = 0.96;
/// Default center-to-center distance between neighboring pieces
pub const DEFAULT_SPACING: f32 = 1.06;

/// Six sticker colors, one per piece-local face direction
pub type FaceColors = [[f32; 3]; FACE_COUNT];

/// Sticker palette by world-axis polarity at construction time
pub const STICKER_RIGHT: [f32; 3] = [1.0, 0.0, 0.0]; // +X red
pub const STICKER_LEFT: [f32; 3] = [1.0, 0.5, 0.0]; // -X orange
pub const STICKER_UP: [f32; 3] = [1.0, 1.0, 1.0]; // +Y white
pub const STICKER_DOWN: [f32; 3] = [1.0, 1.0, 0.0]; // -Y yellow
pub const STICKER_FRONT: [f32; 3] = [0.0, 1.0, 0.0]; // +Z green
pub const STICKER_BACK: [f32; 3] = [0.0, 0.0, 1.0]; // -Z blue

/// Interior (unstickered) face color
pub const FACE_BLACK: [f32; 3] = [0.0, 0.0, 0.0];

/// One of the 27 pieces. Created once at initialization; only the mutable
/// fields change afterwards, never the id or the sticker colors.
#[derive(Clone, Debug)]
pub struct SubCube {
    /// Stable identity, assigned once in enumeration order
    pub id: usize,
    /// Current logical slot, each axis in {-1, 0, 1}
    pub grid: IVec3,
    /// Cumulative logical rotation from committed slice turns
    pub orientation: Mat3,
    /// Offset from the grid-derived world position (edit-mode drags)
    pub manual_translation: Vec3,
    /// Rotation applied on top of the logical orientation (edit-mode drags)
    pub manual_rotation: Mat3,
    /// Sticker colors bound to piece-local face directions
    pub face_colors: FaceColors,
}

impl SubCube {
    fn solved(id: usize, grid: IVec3) -> Self {
        let mut face_colors = [FACE_BLACK; FACE_COUNT];
        if grid.x == 1 {
            face_colors[0] = STICKER_RIGHT;
        }
        if grid.x == -1 {
            face_colors[1] = STICKER_LEFT;
        }
        if grid.y == 1 {
            face_colors[2] = STICKER_UP;
        }
        if grid.y == -1 {
            face_colors[3] = STICKER_DOWN;
        }
        if grid.z == 1 {
            face_colors[4] = STICKER_FRONT;
        }
        if grid.z == -1 {
            face_colors[5] = STICKER_BACK;
        }

        Self {
            id,
            grid,
            orientation: Mat3::IDENTITY,
            manual_translation: Vec3::ZERO,
            manual_rotation: Mat3::IDENTITY,
            face_colors,
        }
    }
}

/// The piece lattice plus a grid -> id lookup kept in lockstep with it.
///
/// All queries degrade to neutral values for out-of-range ids (identity
/// transform, zero vector, `None`); writes to unknown ids are silent no-ops.
pub struct CubeState {
    pieces: Vec<SubCube>,
    /// Direct index cache keyed by shifted grid coordinates (coord + 1)
    id_at: [[[Option<usize>; 3]; 3]; 3],
    spacing: f32,
}

impl CubeState {
    pub fn new(spacing: f32) -> Self {
        let mut state = Self {
            pieces: Vec::with_capacity(PIECE_COUNT),
            id_at: [[[None; 3]; 3]; 3],
            spacing,
        };
        state.initialize();
        state
    }

    /// Rebuild all 27 pieces in the solved configuration.
    ///
    /// Ids are assigned in x-major, then y, then z order over {-1,0,1}³, so
    /// re-initialization is reproducible.
    pub fn initialize(&mut self) {
        self.pieces.clear();
        let mut id = 0;
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    self.pieces.push(SubCube::solved(id, IVec3::new(x, y, z)));
                    id += 1;
                }
            }
        }
        self.rebuild_mapping();
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn pieces(&self) -> &[SubCube] {
        &self.pieces
    }

    pub fn piece(&self, id: usize) -> Option<&SubCube> {
        self.pieces.get(id)
    }

    /// Id of the piece occupying a grid slot, or `None` outside {-1,0,1}³
    pub fn id_at(&self, grid: IVec3) -> Option<usize> {
        let (x, y, z) = (grid.x + 1, grid.y + 1, grid.z + 1);
        if !(0..3).contains(&x) || !(0..3).contains(&y) || !(0..3).contains(&z) {
            return None;
        }
        self.id_at[x as usize][y as usize][z as usize]
    }

    /// Model transform for one piece: grid translation plus manual offset,
    /// manual rotation over logical orientation, uniform shrink. While a
    /// slice animates, pieces inside the layer get position and orientation
    /// premultiplied by the live partial-angle rotation; the logical grid
    /// state is untouched until commit.
    pub fn model(&self, id: usize, live: Option<&RotationState>) -> Mat4 {
        let Some(piece) = self.pieces.get(id) else {
            return Mat4::IDENTITY;
        };

        let mut pos = self.spacing * piece.grid.as_vec3() + piece.manual_translation;
        let mut orient = piece.orientation;

        if let Some(rotation) = live {
            if rotation.contains(piece.grid) {
                let sweep = rotation.live_matrix();
                pos = sweep * pos;
                orient = sweep * orient;
            }
        }

        Mat4::from_translation(pos)
            * Mat4::from_mat3(piece.manual_rotation * orient)
            * Mat4::from_scale(Vec3::splat(PIECE_SCALE))
    }

    /// World-space center of a piece (grid base plus manual offset)
    pub fn center_world(&self, id: usize) -> Vec3 {
        match self.pieces.get(id) {
            Some(piece) => self.spacing * piece.grid.as_vec3() + piece.manual_translation,
            None => Vec3::ZERO,
        }
    }

    /// Move a piece's world center by adjusting its manual offset relative
    /// to the grid-derived base position. Grid slot and orientation are
    /// untouched.
    pub fn set_center_world(&mut self, id: usize, center: Vec3) {
        let spacing = self.spacing;
        if let Some(piece) = self.pieces.get_mut(id) {
            let base = spacing * piece.grid.as_vec3();
            piece.manual_translation = center - base;
        }
    }

    /// Accumulate a manual rotation on top of whatever drags came before
    pub fn rotate_manual(&mut self, id: usize, delta: Mat3) {
        if let Some(piece) = self.pieces.get_mut(id) {
            piece.manual_rotation = delta * piece.manual_rotation;
        }
    }

    pub fn face_colors(&self, id: usize) -> Option<&FaceColors> {
        self.pieces.get(id).map(|piece| &piece.face_colors)
    }

    pub(crate) fn pieces_mut(&mut self) -> &mut [SubCube] {
        &mut self.pieces
    }

    /// Recompute the grid -> id lookup from current grid positions.
    /// Stale cells are cleared first so a vacated slot never keeps a
    /// dangling id.
    pub(crate) fn rebuild_mapping(&mut self) {
        self.id_at = [[[None; 3]; 3]; 3];
        for piece in &self.pieces {
            let (x, y, z) = (piece.grid.x + 1, piece.grid.y + 1, piece.grid.z + 1);
            if (0..3).contains(&x) && (0..3).contains(&y) && (0..3).contains(&z) {
                self.id_at[x as usize][y as usize][z as usize] = Some(piece.id);
            }
        }
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_bijection(state: &CubeState) {
        let mut seen = HashSet::new();
        for piece in state.pieces() {
            assert!(
                piece.grid.abs().max_element() <= 1,
                "piece {} outside lattice: {:?}",
                piece.id,
                piece.grid
            );
            assert!(seen.insert(piece.grid), "duplicate slot {:?}", piece.grid);
            assert_eq!(state.id_at(piece.grid), Some(piece.id));
        }
        assert_eq!(seen.len(), PIECE_COUNT);
    }

    #[test]
    fn initialize_builds_27_pieces_with_stable_ids() {
        let state = CubeState::default();
        assert_eq!(state.pieces().len(), PIECE_COUNT);
        for (index, piece) in state.pieces().iter().enumerate() {
            assert_eq!(piece.id, index);
        }
        assert_bijection(&state);

        // Deterministic enumeration: re-initialization reproduces the ids.
        let grids: Vec<_> = state.pieces().iter().map(|p| p.grid).collect();
        let again = CubeState::default();
        let grids_again: Vec<_> = again.pieces().iter().map(|p| p.grid).collect();
        assert_eq!(grids, grids_again);
    }

    #[test]
    fn sticker_colors_only_on_exterior_faces() {
        let state = CubeState::default();

        // The center piece has no stickers at all.
        let center_id = state.id_at(IVec3::ZERO).unwrap();
        let colors = state.face_colors(center_id).unwrap();
        assert!(colors.iter().all(|c| *c == FACE_BLACK));

        // A corner piece has exactly three stickers.
        let corner_id = state.id_at(IVec3::new(1, 1, 1)).unwrap();
        let colors = state.face_colors(corner_id).unwrap();
        let stickered = colors.iter().filter(|c| **c != FACE_BLACK).count();
        assert_eq!(stickered, 3);
        assert_eq!(colors[0], STICKER_RIGHT);
        assert_eq!(colors[2], STICKER_UP);
        assert_eq!(colors[4], STICKER_FRONT);
        assert_eq!(colors[1], FACE_BLACK);
    }

    #[test]
    fn model_composes_translation_and_scale() {
        let state = CubeState::new(1.0);
        let id = state.id_at(IVec3::new(1, 0, -1)).unwrap();
        let model = state.model(id, None);

        let origin = model.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(1.0, 0.0, -1.0)).length() < 1e-6);

        // Unit X maps to spacing offset plus the shrunken piece extent.
        let unit_x = model.transform_point3(Vec3::X);
        assert!((unit_x.x - (1.0 + PIECE_SCALE)).abs() < 1e-6);
    }

    #[test]
    fn invalid_id_degrades_to_neutral_values() {
        let mut state = CubeState::default();
        assert_eq!(state.model(PIECE_COUNT, None), Mat4::IDENTITY);
        assert_eq!(state.center_world(PIECE_COUNT), Vec3::ZERO);
        assert!(state.face_colors(PIECE_COUNT).is_none());
        assert!(state.piece(PIECE_COUNT).is_none());

        // Writes to unknown ids change nothing.
        state.set_center_world(PIECE_COUNT, Vec3::splat(5.0));
        state.rotate_manual(PIECE_COUNT, Mat3::from_rotation_z(1.0));
        assert_bijection(&state);
    }

    #[test]
    fn set_center_world_adjusts_manual_offset_only() {
        let mut state = CubeState::new(1.06);
        let id = state.id_at(IVec3::new(-1, 1, 0)).unwrap();
        let before_grid = state.piece(id).unwrap().grid;
        let before_orient = state.piece(id).unwrap().orientation;

        let target = Vec3::new(3.0, -2.0, 0.5);
        state.set_center_world(id, target);

        assert!((state.center_world(id) - target).length() < 1e-6);
        let piece = state.piece(id).unwrap();
        assert_eq!(piece.grid, before_grid);
        assert_eq!(piece.orientation, before_orient);
    }

    #[test]
    fn manual_edits_do_not_touch_other_pieces() {
        let mut state = CubeState::default();
        let id = state.id_at(IVec3::new(0, 0, 1)).unwrap();
        let snapshot: Vec<_> = state
            .pieces()
            .iter()
            .map(|p| (p.grid, p.manual_translation, p.manual_rotation))
            .collect();

        state.set_center_world(id, Vec3::new(0.1, 0.2, 0.3));
        state.rotate_manual(id, Mat3::from_rotation_y(0.4));

        for piece in state.pieces() {
            if piece.id == id {
                continue;
            }
            let (grid, translation, rotation) = snapshot[piece.id];
            assert_eq!(piece.grid, grid);
            assert_eq!(piece.manual_translation, translation);
            assert_eq!(piece.manual_rotation, rotation);
        }
    }

    #[test]
    fn rotate_manual_accumulates_left_to_right() {
        let mut state = CubeState::default();
        let first = Mat3::from_rotation_x(0.3);
        let second = Mat3::from_rotation_y(0.7);
        state.rotate_manual(0, first);
        state.rotate_manual(0, second);

        let expected = second * first;
        let got = state.piece(0).unwrap().manual_rotation;
        assert!((got.col(0) - expected.col(0)).length() < 1e-6);
        assert!((got.col(1) - expected.col(1)).length() < 1e-6);
        assert!((got.col(2) - expected.col(2)).length() < 1e-6);
    }

    #[test]
    fn rebuild_mapping_clears_stale_cells() {
        let mut state = CubeState::default();
        // Swap two pieces by hand and rebuild; the vacated cells must not
        // keep their old ids.
        let a = state.id_at(IVec3::new(1, 1, 1)).unwrap();
        let b = state.id_at(IVec3::new(-1, -1, -1)).unwrap();
        state.pieces_mut()[a].grid = IVec3::new(-1, -1, -1);
        state.pieces_mut()[b].grid = IVec3::new(1, 1, 1);
        state.rebuild_mapping();

        assert_eq!(state.id_at(IVec3::new(1, 1, 1)), Some(b));
        assert_eq!(state.id_at(IVec3::new(-1, -1, -1)), Some(a));
        assert_bijection(&state);
    }

    #[test]
    fn id_at_rejects_out_of_range_slots() {
        let state = CubeState::default();
        assert_eq!(state.id_at(IVec3::new(2, 0, 0)), None);
        assert_eq!(state.id_at(IVec3::new(0, -2, 0)), None);
    }
}
