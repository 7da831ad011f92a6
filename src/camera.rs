//! Orbit camera with damped controls and screen-ray unprojection.

use glam::{Mat4, Vec2, Vec3};

use crate::picking::Ray;

const FOV_Y: f32 = std::f32::consts::FRAC_PI_4; // 45 degrees
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 600.0;

const PITCH_LIMIT: f32 = 1.5;
const DISTANCE_LIMITS: (f32, f32) = (8.0, 220.0);

/// Per-second convergence rate for control damping.
const DAMPING_RATE: f32 = 10.0;

/// Camera orbiting a target point.
///
/// Drag and scroll move the *goal* angles; [`OrbitCamera::update`] eases the
/// actual angles toward them each frame, giving the usual damped feel.
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,

    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
}

impl OrbitCamera {
    /// Camera framing the whole system: slightly above the orbital plane.
    pub fn new() -> Self {
        let yaw = 0.6;
        let pitch = 0.55;
        let distance = 60.0;
        Self {
            yaw,
            pitch,
            distance,
            target: Vec3::ZERO,
            goal_yaw: yaw,
            goal_pitch: pitch,
            goal_distance: distance,
        }
    }

    /// Apply a pointer drag in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.goal_yaw -= dx * 0.005;
        self.goal_pitch = (self.goal_pitch + dy * 0.005).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a scroll-wheel zoom step.
    pub fn zoom(&mut self, scroll: f32) {
        self.goal_distance =
            (self.goal_distance - scroll * 3.0).clamp(DISTANCE_LIMITS.0, DISTANCE_LIMITS.1);
    }

    /// Ease the actual orientation toward the control goals.
    pub fn update(&mut self, dt: f32) {
        let t = 1.0 - (-DAMPING_RATE * dt.max(0.0)).exp();
        self.yaw += (self.goal_yaw - self.yaw) * t;
        self.pitch += (self.goal_pitch - self.pitch) * t;
        self.distance += (self.goal_distance - self.distance) * t;
    }

    /// The camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// View matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Perspective projection for the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view_matrix()
    }

    /// World-space ray from the camera through a point in normalized device
    /// coordinates (x, y in [-1, 1], Y up).
    pub fn screen_ray(&self, ndc: Vec2, aspect: f32) -> Ray {
        let inverse = self.view_proj(aspect).inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray {
            origin: self.position(),
            direction: (far - near).normalize(),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = OrbitCamera::new();
        let ray = camera.screen_ray(Vec2::ZERO, 16.0 / 9.0);
        let expected = (camera.target - camera.position()).normalize();
        assert!(ray.direction.dot(expected) > 0.999);
        assert!((ray.origin - camera.position()).length() < 1e-4);
    }

    #[test]
    fn test_screen_ray_round_trips_a_projected_point() {
        let camera = OrbitCamera::new();
        let aspect = 1.5;
        let world = Vec3::new(7.0, 0.0, -3.0);

        let clip = camera.view_proj(aspect).project_point3(world);
        let ray = camera.screen_ray(Vec2::new(clip.x, clip.y), aspect);

        // The unprojected ray must pass through the original point.
        let to_point = world - ray.origin;
        let along = to_point.dot(ray.direction);
        let closest = ray.origin + ray.direction * along;
        assert!((closest - world).length() < 1e-2);
    }

    #[test]
    fn test_damping_converges_on_goal() {
        let mut camera = OrbitCamera::new();
        camera.rotate(200.0, -80.0);
        camera.zoom(4.0);
        for _ in 0..240 {
            camera.update(1.0 / 60.0);
        }
        assert!((camera.yaw - camera.goal_yaw).abs() < 1e-3);
        assert!((camera.pitch - camera.goal_pitch).abs() < 1e-3);
        assert!((camera.distance - camera.goal_distance).abs() < 1e-2);
    }

    #[test]
    fn test_pitch_and_distance_are_clamped() {
        let mut camera = OrbitCamera::new();
        camera.rotate(0.0, 1e6);
        camera.zoom(-1e6);
        assert!(camera.goal_pitch <= PITCH_LIMIT);
        assert!(camera.goal_distance <= DISTANCE_LIMITS.1);
    }
}
