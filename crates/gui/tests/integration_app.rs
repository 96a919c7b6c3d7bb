//! Integration tests for the input policy layer.
//!
//! Tests end-to-end: AppState turn requests -> rotation engine -> committed
//! grid state, plus piece picking against real model matrices.

use glam::IVec3;
use rubiks_core::{Axis, PIECE_COUNT};
use rubiks_gui_lib::state::AppState;
use rubiks_gui_lib::viewport::picking::{pick_piece, Ray};

/// Drive the animation until the engine goes idle
fn run_to_completion(state: &mut AppState) {
    for _ in 0..200 {
        if !state.puzzle.is_rotating() {
            return;
        }
        state.puzzle.update(1.0 / 60.0);
    }
    panic!("rotation never completed");
}

#[test]
fn test_turn_request_ignored_while_rotating() {
    let mut state = AppState::default();

    assert!(state.try_turn(Axis::X, 1));
    assert!(state.puzzle.is_rotating());

    // Second request is dropped without disturbing the active turn
    assert!(!state.try_turn(Axis::Y, -1));
    let rotation = state.puzzle.rotation().unwrap();
    assert_eq!(rotation.axis, Axis::X);
    assert_eq!(rotation.layer, 1);

    run_to_completion(&mut state);
    assert!(state.try_turn(Axis::Y, -1));
}

#[test]
fn test_default_direction_depends_on_layer_and_sense() {
    let mut state = AppState::default();

    // Positive outer layer turns the other way by default
    assert!(state.try_turn(Axis::Y, 1));
    assert_eq!(state.puzzle.rotation().unwrap().direction, -1);
    run_to_completion(&mut state);

    assert!(state.try_turn(Axis::Y, -1));
    assert_eq!(state.puzzle.rotation().unwrap().direction, 1);
    run_to_completion(&mut state);

    // Flipping the sense flips both
    state.turn.clockwise = false;
    assert!(state.try_turn(Axis::Y, 1));
    assert_eq!(state.puzzle.rotation().unwrap().direction, 1);
}

#[test]
fn test_turn_angle_setting_flows_into_rotation() {
    let mut state = AppState::default();
    state.turn.double_angle();
    assert_eq!(state.turn.angle, 180);

    assert!(state.try_turn(Axis::Z, -1));
    let rotation = state.puzzle.rotation().unwrap();
    assert!((rotation.target_deg - 180.0).abs() < f32::EPSILON);

    run_to_completion(&mut state);

    // A half turn maps each slice piece back onto the slice
    for piece in state.puzzle.pieces() {
        assert!(piece.grid.abs().max_element() <= 1);
    }
}

#[test]
fn test_full_turn_cycle_restores_grid() {
    let mut state = AppState::default();

    let before: Vec<IVec3> = state.puzzle.pieces().iter().map(|p| p.grid).collect();

    for _ in 0..4 {
        assert!(state.try_turn(Axis::X, 1));
        run_to_completion(&mut state);
    }

    let after: Vec<IVec3> = state.puzzle.pieces().iter().map(|p| p.grid).collect();
    assert_eq!(before, after);
}

#[test]
fn test_pick_front_center_piece() {
    let state = AppState::default();

    let ray = Ray {
        origin: glam::Vec3::new(0.0, 0.0, 10.0),
        direction: glam::Vec3::new(0.0, 0.0, -1.0),
    };
    let models: Vec<(usize, glam::Mat4)> = (0..PIECE_COUNT)
        .map(|id| (id, state.puzzle.cube_model(id)))
        .collect();

    let hit = pick_piece(&ray, &models).expect("ray through the cube must hit");
    let expected = state
        .puzzle
        .state()
        .id_at(IVec3::new(0, 0, 1))
        .expect("front center piece exists");
    assert_eq!(hit.id, expected);

    // Grabbed on the front face, just short of the piece center
    assert!(hit.distance > 8.0 && hit.distance < 10.0);
}

#[test]
fn test_pick_miss_beside_cube() {
    let state = AppState::default();

    let ray = Ray {
        origin: glam::Vec3::new(10.0, 0.0, 10.0),
        direction: glam::Vec3::new(0.0, 0.0, -1.0),
    };
    let models: Vec<(usize, glam::Mat4)> = (0..PIECE_COUNT)
        .map(|id| (id, state.puzzle.cube_model(id)))
        .collect();

    assert!(pick_piece(&ray, &models).is_none());
}

#[test]
fn test_right_drag_moves_piece_keeping_grab_offset() {
    let mut state = AppState::default();
    state.edit.toggle();

    // Pick the front-center piece straight on
    let ray = Ray {
        origin: glam::Vec3::new(0.0, 0.0, 10.0),
        direction: glam::Vec3::new(0.0, 0.0, -1.0),
    };
    let models: Vec<(usize, glam::Mat4)> = (0..PIECE_COUNT)
        .map(|id| (id, state.puzzle.cube_model(id)))
        .collect();
    let hit = pick_piece(&ray, &models).expect("must hit");
    state.edit.select(hit.id, hit.distance);

    // Drag-start: the offset from the grabbed point to the piece center
    // is plain vector math; invalid ids would degrade to Vec3::ZERO
    let grab = ray.origin + ray.direction * state.edit.pick_distance;
    let center = state.puzzle.cube_center_world(hit.id);
    state.edit.drag_offset = center - grab;

    // Drag: a ray shifted one unit to the right lands the piece one unit
    // to the right, the grab point staying fixed relative to the center
    let moved_ray = Ray {
        origin: glam::Vec3::new(1.0, 0.0, 10.0),
        direction: glam::Vec3::new(0.0, 0.0, -1.0),
    };
    let world = moved_ray.origin + moved_ray.direction * state.edit.pick_distance;
    state
        .puzzle
        .set_cube_center_world(hit.id, world + state.edit.drag_offset);

    let new_center = state.puzzle.cube_center_world(hit.id);
    assert!((new_center - (center + glam::Vec3::X)).length() < 1e-5);

    // The logical slot is untouched by the manual move
    assert_eq!(
        state.puzzle.state().id_at(IVec3::new(0, 0, 1)),
        Some(hit.id)
    );
}

#[test]
fn test_edit_selection_flow() {
    let mut state = AppState::default();

    state.edit.toggle();
    assert!(state.edit.enabled);

    state.edit.select(13, 5.5);
    assert_eq!(state.edit.selected, Some(13));

    // Manual edits only touch the selected piece
    state.puzzle.rotate_cube_manual(
        13,
        glam::Mat3::from_axis_angle(glam::Vec3::Y, 0.3),
    );
    for piece in state.puzzle.pieces() {
        if piece.id != 13 {
            assert_eq!(piece.manual_rotation, glam::Mat3::IDENTITY);
        }
    }

    // Leaving edit mode drops the selection
    state.edit.toggle();
    assert!(!state.edit.enabled);
    assert_eq!(state.edit.selected, None);
}
