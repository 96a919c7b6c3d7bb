//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
pub use rubiks_gui_lib::viewport::{mesh, picking};

use std::sync::{Arc, Mutex};

use egui::Ui;
use glam::{Mat3, Mat4};

use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::{GlRenderer, RenderParams};
use picking::pick_piece;
use rubiks_core::PIECE_COUNT;

/// Manual piece rotation, radians per dragged pixel
const MANUAL_ROTATE_SPEED: f32 = 0.01;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    /// Orbit the camera by screen-space degrees (keyboard arrows)
    pub fn orbit_by(&mut self, dx: f32, dy: f32) {
        self.camera.rotate(dx, dy);
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Edit-mode pick and drag ─────────────────────────────
        let edit_consumed = self.handle_edit_interaction(&response, rect, state);

        // ── Camera controls ─────────────────────────────────────
        if !edit_consumed {
            let orbit = state.settings.viewport.orbit_sensitivity;
            let pan = state.settings.viewport.pan_sensitivity;

            if response.dragged_by(egui::PointerButton::Primary) {
                let delta = response.drag_delta();
                self.camera.rotate(-delta.x * orbit, delta.y * orbit);
            }
            if response.dragged_by(egui::PointerButton::Secondary) {
                let delta = response.drag_delta();
                self.camera.pan(-delta.x * pan, delta.y * pan);
            }
        }

        // ── Scroll zoom ─────────────────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── GL rendering ────────────────────────────────────────
        self.render_gl(ui, rect, state);

        // ── Overlays ────────────────────────────────────────────
        self.draw_overlays(ui, rect, state);
    }

    /// Handle edit-mode interactions. Returns true when the pointer input was
    /// consumed so camera controls should not see it.
    fn handle_edit_interaction(
        &mut self,
        response: &egui::Response,
        rect: egui::Rect,
        state: &mut AppState,
    ) -> bool {
        if !state.edit.enabled {
            return false;
        }

        // Left click picks a piece (blocked while a slice is animating, the
        // rendered positions would not match the logical grid)
        if response.clicked() && !state.puzzle.is_rotating() {
            if let Some(pos) = response.interact_pointer_pos() {
                let ray = self.camera.screen_ray(pos, rect);
                let models: Vec<(usize, Mat4)> = (0..PIECE_COUNT)
                    .map(|id| (id, state.puzzle.cube_model(id)))
                    .collect();
                match pick_piece(&ray, &models) {
                    Some(hit) => {
                        tracing::debug!(piece = hit.id, distance = hit.distance, "Piece picked");
                        state.edit.select(hit.id, hit.distance);
                    }
                    None => state.edit.clear_selection(),
                }
            }
            return true;
        }

        let Some(id) = state.edit.selected else {
            return false;
        };

        // Left drag spins the selected piece about the camera axes
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            let rot_yaw = Mat3::from_axis_angle(
                self.camera.up_vector(),
                -delta.x * MANUAL_ROTATE_SPEED,
            );
            let rot_pitch = Mat3::from_axis_angle(
                self.camera.right_vector(),
                -delta.y * MANUAL_ROTATE_SPEED,
            );
            state.puzzle.rotate_cube_manual(id, rot_pitch * rot_yaw);
            return true;
        }

        // Right drag moves the selected piece in the plane at its pick depth
        if response.drag_started_by(egui::PointerButton::Secondary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let ray = self.camera.screen_ray(pos, rect);
                let grab = ray.origin + ray.direction * state.edit.pick_distance;
                let center = state.puzzle.cube_center_world(id);
                state.edit.drag_offset = center - grab;
            }
            return true;
        }
        if response.dragged_by(egui::PointerButton::Secondary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let ray = self.camera.screen_ray(pos, rect);
                let world = ray.origin + ray.direction * state.edit.pick_distance;
                state
                    .puzzle
                    .set_cube_center_world(id, world + state.edit.drag_offset);
            }
            return true;
        }

        false
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera_yaw = self.camera.yaw;
        let camera_pitch = self.camera.pitch;
        let camera_distance = self.camera.distance;
        let camera_target = self.camera.target;
        let camera_fov = self.camera.fov;

        // Model matrices are snapshotted here; the paint callback runs later
        // on the GL thread without access to the app state
        let models: Vec<Mat4> = (0..PIECE_COUNT)
            .map(|id| state.puzzle.cube_model(id))
            .collect();
        let piece_meshes: Vec<mesh::MeshData> = (0..PIECE_COUNT)
            .filter_map(|id| state.puzzle.cube_face_colors(id))
            .map(mesh::piece_mesh)
            .collect();
        let selected = if state.edit.enabled {
            state.edit.selected
        } else {
            None
        };

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let camera = ArcBallCamera {
                    yaw: camera_yaw,
                    pitch: camera_pitch,
                    distance: camera_distance,
                    target: camera_target,
                    fov: camera_fov,
                };

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.sync_pieces(gl, &piece_meshes);

                    let render_params = RenderParams {
                        viewport,
                        models: models.clone(),
                        selected,
                        grid_visible: grid_settings.visible,
                        axes_visible: axes_settings.visible,
                        axes_thickness: axes_settings.thickness,
                        bg_color,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        self.draw_camera_info(&painter, rect);

        // Mode hint at the bottom edge
        let hint = if state.edit.enabled {
            "Edit mode — click: pick piece | LMB drag: spin piece | RMB drag: move piece | P: exit"
        } else {
            "LMB drag: orbit | RMB drag: pan | scroll: zoom | R/L/U/D/F/B: turn | P: edit mode"
        };
        painter.text(
            egui::pos2(rect.center().x, rect.bottom() - 8.0),
            egui::Align2::CENTER_BOTTOM,
            hint,
            egui::FontId::proportional(11.0),
            egui::Color32::from_rgb(100, 100, 110),
        );
    }

    fn draw_camera_info(&self, painter: &egui::Painter, rect: egui::Rect) {
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
            egui::vec2(136.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
                self.camera.distance,
                self.camera.yaw.to_degrees(),
                self.camera.pitch.to_degrees(),
            ),
            egui::FontId::monospace(10.0),
            egui::Color32::from_rgb(160, 160, 170),
        );
    }
}
