use crate::consts::{
    FOV_Y_DEGREES, MAX_DISTANCE, MIN_DISTANCE, PITCH_LIMIT_MARGIN, ROTATE_SPEED, Z_FAR, Z_NEAR,
};
use crate::viewport::Viewport;

/// Orbit camera pivoting around the sphere center.
///
/// The camera sits at `distance` from the origin on the direction given
/// by `yaw`/`pitch` and always looks back at the origin. Panning is not
/// supported: the pivot is fixed at the sphere center.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            // Start just behind the pivot, matching the initial view of
            // the image seam-opposite face.
            yaw: -core::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            distance: 1.0,
            fov_y: FOV_Y_DEGREES.to_radians(),
            aspect: 1.6,
            z_near: Z_NEAR,
            z_far: Z_FAR,
        }
    }
}

impl OrbitCamera {
    /// Recompute the projection aspect from the current viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    /// Apply a pointer drag of `(dx, dy)` pixels.
    ///
    /// A full viewport-height drag sweeps `TAU * ROTATE_SPEED` radians;
    /// the negated speed inverts the orbit so the image follows the
    /// pointer.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let scale = core::f32::consts::TAU * ROTATE_SPEED / viewport_height.max(1.0);
        self.yaw += dx * scale;
        self.pitch += dy * scale;
        self.clamp_pitch();
    }

    /// Rotate by explicit yaw/pitch angles in radians (keyboard input).
    pub fn rotate_by_angles(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw += dyaw;
        self.pitch += dpitch;
        self.clamp_pitch();
    }

    /// Advance the idle auto-rotation by `dt` seconds.
    pub fn auto_rotate(&mut self, dt: f32, deg_per_sec: f32) {
        self.yaw += deg_per_sec.to_radians() * dt;
    }

    /// Multiply the orbit distance by `factor`, clamped to the legal
    /// zoom range.
    pub fn zoom_by(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    fn clamp_pitch(&mut self) {
        let lim = core::f32::consts::FRAC_PI_2 - PITCH_LIMIT_MARGIN;
        self.pitch = self.pitch.clamp(-lim, lim);
    }

    pub fn eye(&self) -> glam::Vec3 {
        glam::Vec3::new(
            self.distance * self.yaw.cos() * self.pitch.cos(),
            self.distance * self.pitch.sin(),
            self.distance * self.yaw.sin() * self.pitch.cos(),
        )
    }

    pub fn view_proj(&self) -> glam::Mat4 {
        let view = glam::Mat4::look_at_rh(self.eye(), glam::Vec3::ZERO, glam::Vec3::Y);
        let proj = glam::Mat4::perspective_rh(
            self.fov_y,
            self.aspect.max(1e-3),
            self.z_near,
            self.z_far,
        );
        proj * view
    }
}
