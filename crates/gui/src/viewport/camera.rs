use glam::{Mat4, Vec3, Vec4};

use rubiks_gui_lib::viewport::picking::Ray;

/// Arc-ball camera orbiting the cube
pub struct ArcBallCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
}

/// Pitch limit just short of the poles
const PITCH_LIMIT: f32 = 1.55;

impl ArcBallCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.4,
            distance: 6.0,
            target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
        }
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(2.0, 25.0);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let right = self.right_vector();
        let up = self.up_vector();
        self.target += right * dx + up * dy;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 100.0)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Camera-space right axis in world coordinates
    pub fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    /// Camera-space up axis in world coordinates
    pub fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// Cast a ray from a screen position into the scene
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let aspect = rect.width() / rect.height();

        // Screen -> NDC
        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        // Inverse view-projection
        let vp_inv = self.view_projection(aspect).inverse();

        // Unproject near and far points
        let near_ndc = Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_ndc = Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near_world = vp_inv * near_ndc;
        let far_world = vp_inv * far_ndc;

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        let direction = (far - near).normalize_or_zero();

        Ray {
            origin: self.eye_position(),
            direction,
        }
    }
}
