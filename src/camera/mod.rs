//! Arc-rotate camera orbiting a target point.

use crate::core::Id;
use crate::math::{clamp, consts, Vector3};

/// A camera that orbits a target on a sphere, described by two angles and a
/// radius. `alpha` is the azimuthal angle around Y, `beta` the polar angle
/// from the Y axis (0 = looking straight down from the top).
pub struct ArcRotateCamera {
    /// Unique ID.
    id: Id,
    /// Camera name.
    name: String,
    /// Azimuthal angle in radians.
    pub alpha: f32,
    /// Polar angle in radians.
    pub beta: f32,
    /// Distance from the target.
    pub radius: f32,
    /// Orbit target.
    pub target: Vector3,
    /// Minimum polar angle.
    pub lower_beta_limit: f32,
    /// Maximum polar angle.
    pub upper_beta_limit: f32,
    /// Minimum distance from the target.
    pub lower_radius_limit: f32,
    /// Maximum distance from the target.
    pub upper_radius_limit: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Whether user input is attached.
    attached: bool,
}

impl ArcRotateCamera {
    /// Create a new arc-rotate camera.
    pub fn new(name: impl Into<String>, alpha: f32, beta: f32, radius: f32, target: Vector3) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            alpha,
            beta,
            radius,
            target,
            lower_beta_limit: 0.01,
            upper_beta_limit: consts::PI - 0.01,
            lower_radius_limit: 0.1,
            upper_radius_limit: 1000.0,
            fov: 60.0,
            near: 0.1,
            far: 1000.0,
            attached: false,
        }
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the camera name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the orbit target.
    pub fn set_target(&mut self, target: Vector3) {
        self.target = target;
    }

    /// Attach user input control.
    pub fn attach_control(&mut self) {
        self.attached = true;
    }

    /// Detach user input control.
    pub fn detach_control(&mut self) {
        self.attached = false;
    }

    /// Whether user input is attached.
    #[inline]
    pub fn is_control_attached(&self) -> bool {
        self.attached
    }

    /// Orbit by delta angles (radians), then clamp to the limits.
    pub fn rotate(&mut self, delta_alpha: f32, delta_beta: f32) {
        self.alpha += delta_alpha;
        self.beta += delta_beta;
        self.apply_limits();
    }

    /// Move toward or away from the target, then clamp to the limits.
    pub fn zoom(&mut self, delta_radius: f32) {
        self.radius += delta_radius;
        self.apply_limits();
    }

    /// Clamp beta and radius into their configured limits.
    pub fn apply_limits(&mut self) {
        self.beta = clamp(self.beta, self.lower_beta_limit, self.upper_beta_limit);
        self.radius = clamp(self.radius, self.lower_radius_limit, self.upper_radius_limit);
    }

    /// World position derived from the spherical coordinates.
    pub fn position(&self) -> Vector3 {
        let sin_beta = self.beta.sin();
        self.target
            + Vector3::new(
                self.radius * self.alpha.cos() * sin_beta,
                self.radius * self.beta.cos(),
                self.radius * self.alpha.sin() * sin_beta,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_on_equator() {
        let camera = ArcRotateCamera::new("camera1", 0.0, consts::HALF_PI, 20.0, Vector3::ZERO);
        let p = camera.position();
        assert!((p.x - 20.0).abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
        assert!(p.z.abs() < 1e-4);
    }

    #[test]
    fn test_position_distance_is_radius() {
        let target = Vector3::new(1.0, 2.0, 3.0);
        let camera = ArcRotateCamera::new("camera1", 0.3, 0.8, 20.0, target);
        assert!((camera.position().distance_to(&target) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_limits_clamp_beta_and_radius() {
        let mut camera = ArcRotateCamera::new("camera1", 0.0, 0.8, 20.0, Vector3::ZERO);
        camera.lower_beta_limit = 0.1;
        camera.upper_beta_limit = consts::HALF_PI * 0.9;
        camera.lower_radius_limit = 10.0;
        camera.upper_radius_limit = 90.0;

        camera.rotate(0.0, 10.0);
        assert_eq!(camera.beta, consts::HALF_PI * 0.9);

        camera.zoom(500.0);
        assert_eq!(camera.radius, 90.0);
        camera.zoom(-500.0);
        assert_eq!(camera.radius, 10.0);
    }
}
