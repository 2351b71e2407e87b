use glam::{Mat4, Vec3};

/// Radians of yaw/pitch applied per pixel of drag.
pub const DRAG_SENSITIVITY: f32 = 0.01;
/// Vertical rotation is limited to +/- 60 degrees.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_3;
/// Zoom bounds. Both are exclusive: a candidate radius landing exactly on a
/// bound is rejected, matching the original interaction behavior.
pub const MIN_RADIUS: f32 = 5.0;
pub const MAX_RADIUS: f32 = 15.0;

/// The world point the camera always faces, regardless of orbit parameters.
pub const LOOK_AT_TARGET: Vec3 = Vec3::new(0.0, 1.0, -3.0);

pub const FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

/// Spherical camera parameters around the scene center.
#[derive(Debug, Clone, Copy)]
pub struct OrbitState {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl OrbitState {
    pub fn new(yaw: f32, pitch: f32, radius: f32) -> Self {
        Self { yaw, pitch, radius }
    }
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 12.0)
    }
}

/// Translates pointer drags and wheel ticks into an orbit position.
///
/// The camera position is reconstructed from `(yaw, pitch, radius)` every
/// frame rather than translated incrementally, so the distance from the
/// scene center stays exactly `radius` no matter how many events arrive.
pub struct OrbitController {
    state: OrbitState,
    dragging: bool,
    last_pointer: (f32, f32),
}

impl OrbitController {
    pub fn new(state: OrbitState) -> Self {
        Self {
            state,
            dragging: false,
            last_pointer: (0.0, 0.0),
        }
    }

    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a drag gesture at the given screen position. Always succeeds.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.last_pointer = (x, y);
        self.dragging = true;
    }

    /// Apply a pointer move. Ignored unless a drag is active, which absorbs
    /// stray move events after the button was released outside the window.
    pub fn update_drag(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }

        let dx = x - self.last_pointer.0;
        let dy = y - self.last_pointer.1;
        self.last_pointer = (x, y);

        self.state.yaw += dx * DRAG_SENSITIVITY;
        self.state.pitch =
            (self.state.pitch + dy * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// End the drag gesture. Idempotent.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Step the radius by one unit in the direction of `sign` (-1, 0, +1).
    /// Candidates outside the open interval (MIN_RADIUS, MAX_RADIUS) are
    /// silently dropped; the bounds themselves are unreachable.
    pub fn apply_zoom(&mut self, sign: f32) {
        let candidate = self.state.radius + sign;
        if candidate > MIN_RADIUS && candidate < MAX_RADIUS {
            self.state.radius = candidate;
        }
    }

    /// Current camera position in world space. Pure and idempotent; called
    /// once (or more) per frame by the render loop.
    pub fn resolve_position(&self) -> Vec3 {
        let OrbitState { yaw, pitch, radius } = self.state;
        Vec3::new(
            radius * yaw.sin() * pitch.cos(),
            radius * pitch.sin(),
            radius * yaw.cos() * pitch.cos(),
        )
    }

    /// View-projection matrix for the current orbit state and aspect ratio.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let eye = self.resolve_position();
        let view = Mat4::look_at_rh(eye, LOOK_AT_TARGET, Vec3::Y);
        let proj = Mat4::perspective_rh(FOV_Y, aspect.max(1e-3), Z_NEAR, Z_FAR);
        proj * view
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(OrbitState::default())
    }
}
