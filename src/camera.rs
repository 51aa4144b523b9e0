//! Fly camera with lazily recomputed frame and matrices
//!
//! Mutators only store the new input values and drop the cached
//! [`Derived`] data. The first derived getter after a mutation recomputes
//! everything in one pass; further getters reuse the cached result until
//! the next mutation.

use std::cell::{Cell, OnceCell};

use glam::{DVec3, Mat4, Vec3};

use crate::config::CameraConfig;

/// Lowest stored pitch, keeps `forward` off the world up axis
pub const PHI_MIN: f32 = 0.01;
/// Highest stored pitch
#[allow(clippy::approx_constant)]
pub const PHI_MAX: f32 = 3.14;

/// The part of the camera the pose history records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: DVec3,
    pub theta: f32,
    pub phi: f32,
}

/// Geometry derived from the camera inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    /// Unit view direction
    pub forward: Vec3,
    /// Unit vector to the right of `forward`, horizontal
    pub right: Vec3,
    /// Unit vector completing the frame
    pub up: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    /// `projection * view`
    pub view_projection: Mat4,
}

#[derive(Debug, Clone)]
pub struct Camera {
    eye: DVec3,
    /// Yaw around the world Y axis, radians
    theta: f32,
    /// Pitch from the world up axis, radians, clamped to `[PHI_MIN, PHI_MAX]`
    phi: f32,
    fovy_radians: f32,
    near_plane: f32,
    far_plane: i32,
    /// Rough distance at which the renderer switches to raycast drawing
    raycast_threshold: i32,
    window_x: u32,
    window_y: u32,
    fog_enabled: bool,
    black_fog: bool,

    /// Empty while stale
    derived: OnceCell<Derived>,
    recompute_count: Cell<u64>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: DVec3::ZERO,
            theta: -1.5707,
            phi: 1.5707,
            fovy_radians: 1.0,
            near_plane: 0.1,
            far_plane: 512,
            raycast_threshold: 120,
            window_x: 1,
            window_y: 1,
            fog_enabled: true,
            black_fog: false,
            derived: OnceCell::new(),
            recompute_count: Cell::new(0),
        }
    }
}

/// Check a camera contract; panics in debug builds, logs and reports
/// `false` in release builds so the caller can drop the mutation
fn accept(ok: bool, what: &str, value: impl std::fmt::Debug) -> bool {
    debug_assert!(ok, "invalid camera {}: {:?}", what, value);
    if !ok {
        tracing::error!("Rejected invalid camera {}: {:?}", what, value);
    }
    ok
}

impl Camera {
    /// Camera at the origin with projection settings from the config
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::default();
        camera.set_fovy_radians(config.fovy_radians);
        camera.set_far_plane(config.far_plane);
        camera.set_near_plane(config.near_plane);
        camera.set_raycast_threshold(config.raycast_threshold);
        camera.set_fog(config.fog_enabled);
        camera.set_black_fog(config.black_fog);
        camera
    }

    fn invalidate(&mut self) {
        self.derived.take();
    }

    /// True when the next derived getter will recompute
    pub fn is_stale(&self) -> bool {
        self.derived.get().is_none()
    }

    /// Number of recomputations performed so far
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count.get()
    }

    // === Inputs ===

    pub fn eye(&self) -> DVec3 {
        self.eye
    }

    pub fn set_eye(&mut self, eye: DVec3) {
        if accept(eye.is_finite(), "eye", eye) {
            self.eye = eye;
            self.invalidate();
        }
    }

    pub fn inc_eye(&mut self, delta: DVec3) {
        self.set_eye(self.eye + delta);
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn set_theta(&mut self, theta: f32) {
        if accept(theta.is_finite(), "theta", theta) {
            self.theta = theta;
            self.invalidate();
        }
    }

    pub fn inc_theta(&mut self, delta: f32) {
        self.set_theta(self.theta + delta);
    }

    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Set the pitch, clamped to `[PHI_MIN, PHI_MAX]`
    pub fn set_phi(&mut self, phi: f32) {
        if accept(phi.is_finite(), "phi", phi) {
            self.phi = phi.clamp(PHI_MIN, PHI_MAX);
            self.invalidate();
        }
    }

    pub fn inc_phi(&mut self, delta: f32) {
        self.set_phi(self.phi + delta);
    }

    pub fn fovy_radians(&self) -> f32 {
        self.fovy_radians
    }

    pub fn set_fovy_radians(&mut self, fovy: f32) {
        if accept(fovy.is_finite() && fovy > 0.0, "fovy", fovy) {
            self.fovy_radians = fovy;
            self.invalidate();
        }
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn set_near_plane(&mut self, near: f32) {
        let ok = near.is_finite() && near > 0.0 && near < self.far_plane as f32;
        if accept(ok, "near plane", near) {
            self.near_plane = near;
            self.invalidate();
        }
    }

    pub fn far_plane(&self) -> i32 {
        self.far_plane
    }

    pub fn set_far_plane(&mut self, far: i32) {
        if accept(far as f32 > self.near_plane, "far plane", far) {
            self.far_plane = far;
            self.invalidate();
        }
    }

    pub fn raycast_threshold(&self) -> i32 {
        self.raycast_threshold
    }

    pub fn set_raycast_threshold(&mut self, threshold: i32) {
        self.raycast_threshold = threshold;
        self.invalidate();
    }

    /// Viewport size in pixels
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_x, self.window_y)
    }

    pub fn set_window_size(&mut self, width: u32, height: u32) {
        if accept(width > 0 && height > 0, "window size", (width, height)) {
            self.window_x = width;
            self.window_y = height;
            self.invalidate();
        }
    }

    pub fn fog_enabled(&self) -> bool {
        self.fog_enabled
    }

    pub fn set_fog(&mut self, enabled: bool) {
        self.fog_enabled = enabled;
    }

    pub fn black_fog(&self) -> bool {
        self.black_fog
    }

    pub fn set_black_fog(&mut self, black: bool) {
        self.black_fog = black;
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.eye,
            theta: self.theta,
            phi: self.phi,
        }
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.set_eye(pose.eye);
        self.set_theta(pose.theta);
        self.set_phi(pose.phi);
    }

    /// Move the eye by multiples of the current right, up and forward vectors
    pub fn move_relative(&mut self, right: f32, up: f32, forward: f32) {
        let frame = *self.derived();
        let delta = frame.right * right + frame.up * up + frame.forward * forward;
        self.inc_eye(delta.as_dvec3());
    }

    // === Derived ===

    /// All derived data, recomputed first if stale
    pub fn derived(&self) -> &Derived {
        self.derived.get_or_init(|| {
            self.recompute_count.set(self.recompute_count.get() + 1);
            derive(self)
        })
    }

    pub fn forward(&self) -> Vec3 {
        self.derived().forward
    }

    pub fn right(&self) -> Vec3 {
        self.derived().right
    }

    pub fn up(&self) -> Vec3 {
        self.derived().up
    }

    pub fn view(&self) -> Mat4 {
        self.derived().view
    }

    pub fn projection(&self) -> Mat4 {
        self.derived().projection
    }

    pub fn view_projection(&self) -> Mat4 {
        self.derived().view_projection
    }
}

/// Pure function of the camera inputs
fn derive(camera: &Camera) -> Derived {
    let (sin_phi, cos_phi) = camera.phi.sin_cos();
    let (sin_theta, cos_theta) = camera.theta.sin_cos();
    let forward = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
    let right = forward.cross(Vec3::Y).normalize();
    let up = right.cross(forward);

    let eye = camera.eye.as_vec3();
    let view = Mat4::look_at_rh(eye, eye + forward, Vec3::Y);
    let aspect = camera.window_x as f32 / camera.window_y as f32;
    let projection = Mat4::perspective_rh_gl(
        camera.fovy_radians,
        aspect,
        camera.near_plane,
        camera.far_plane as f32,
    );

    Derived {
        forward,
        right,
        up,
        view,
        projection,
        view_projection: projection * view,
    }
}
