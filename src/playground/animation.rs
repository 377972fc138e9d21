//! Per-frame animation: a time counter and the closed-form motion math.
//!
//! All transforms are pure functions of the counter, so a frame's result
//! never depends on the previous frame's output and nothing drifts.

use super::builder::SceneHandles;
use super::config::{MotionConfig, MotionMode};
use crate::math::Vector3;

/// The animation time counter.
///
/// Advanced by a fixed step once per frame, never reset, never wrapped;
/// the trigonometric motion functions consume it modulo 2*pi implicitly.
#[derive(Debug, Clone, Copy)]
pub struct AnimationState {
    counter: f32,
    step: f32,
}

impl AnimationState {
    /// Create a state starting at zero.
    pub fn new(step: f32) -> Self {
        Self { counter: 0.0, step }
    }

    /// Advance by one step and return the new counter value.
    pub fn advance(&mut self) -> f32 {
        self.counter += self.step;
        self.counter
    }

    /// Current counter value.
    #[inline]
    pub fn counter(&self) -> f32 {
        self.counter
    }

    /// Configured step.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }
}

/// Sphere position on a horizontal circle of the given radius.
pub fn sphere_orbit_position(counter: f32, radius: f32, y: f32) -> Vector3 {
    Vector3::new(counter.sin() * radius, y, counter.cos() * radius)
}

/// Sun position on a horizontal circle at a fixed height.
pub fn light_orbit_position(counter: f32, radius: f32, height: f32) -> Vector3 {
    Vector3::new(counter.sin() * radius, height, counter.cos() * radius)
}

/// Sun direction while orbiting: normalized toward the target, with the
/// vertical component then pinned to `pinned_y`.
pub fn light_orbit_direction(position: Vector3, target: Vector3, pinned_y: f32) -> Vector3 {
    let mut direction = (target - position).normalized();
    direction.y = pinned_y;
    direction
}

/// Sun direction oscillating around straight-down by a small amplitude.
pub fn wobble_direction(counter: f32, amplitude: f32) -> Vector3 {
    Vector3::new(counter.sin() * amplitude, -1.0, counter.cos() * amplitude)
}

/// Per-frame updater applying the active motion mode to the scene handles.
pub struct FrameUpdater {
    state: AnimationState,
    motion: MotionConfig,
}

impl FrameUpdater {
    /// Create an updater for a motion configuration.
    pub fn new(motion: MotionConfig) -> Self {
        Self {
            state: AnimationState::new(motion.step),
            motion,
        }
    }

    /// Current counter value.
    #[inline]
    pub fn counter(&self) -> f32 {
        self.state.counter()
    }

    /// Active motion mode.
    #[inline]
    pub fn mode(&self) -> MotionMode {
        self.motion.mode
    }

    /// Advance the counter and apply the active motion to the handles.
    /// Invoked once per rendered frame by the host loop.
    pub fn tick(&mut self, handles: &SceneHandles) {
        let counter = self.state.advance();

        match self.motion.mode {
            MotionMode::Static => {}
            MotionMode::SphereOrbit => {
                if let Ok(mut sphere) = handles.sphere.write() {
                    let y = sphere.position.y;
                    sphere.position = sphere_orbit_position(counter, self.motion.orbit_radius, y);
                }
            }
            MotionMode::LightOrbit => {
                let target = handles
                    .sphere
                    .read()
                    .map(|s| s.position)
                    .unwrap_or(Vector3::ZERO);
                let position =
                    light_orbit_position(counter, self.motion.light_radius, self.motion.light_height);
                let direction = light_orbit_direction(position, target, self.motion.pinned_y);

                if let Ok(mut sun) = handles.sun.write() {
                    sun.position = position;
                    sun.direction = direction;
                }
                if let Some(marker) = &handles.light_marker {
                    if let Ok(mut marker) = marker.write() {
                        marker.position = position;
                    }
                }
            }
            MotionMode::DirectionWobble => {
                let direction = wobble_direction(counter, self.motion.wobble_amplitude);
                if let Ok(mut sun) = handles.sun.write() {
                    sun.direction = direction;
                }
                if let Some(ray) = &handles.debug_ray {
                    if let Ok(mut ray) = ray.write() {
                        ray.direction = -direction;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::builder::SceneBuilder;
    use crate::playground::config::SceneConfig;

    const RADIUS: f32 = 10.0;

    #[test]
    fn test_sphere_orbit_stays_on_circle() {
        for i in 0..500 {
            let counter = i as f32 * 0.037;
            let p = sphere_orbit_position(counter, RADIUS, 0.0);
            assert!((p.x * p.x + p.z * p.z - RADIUS * RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn test_sphere_orbit_at_zero() {
        let p = sphere_orbit_position(0.0, RADIUS, 0.5);
        assert_eq!(p, Vector3::new(0.0, 0.5, RADIUS));
    }

    #[test]
    fn test_sphere_orbit_at_quarter_turn() {
        let p = sphere_orbit_position(std::f32::consts::FRAC_PI_2, RADIUS, 0.0);
        assert!((p.x - RADIUS).abs() < 1e-4);
        assert!(p.z.abs() < 1e-3);
    }

    #[test]
    fn test_wobble_direction_bounds() {
        let amplitude = 0.2;
        for i in 0..500 {
            let d = wobble_direction(i as f32 * 0.023, amplitude);
            assert_eq!(d.y, -1.0);
            assert!(d.x.abs() <= amplitude + 1e-6);
            assert!(d.z.abs() <= amplitude + 1e-6);
        }
    }

    #[test]
    fn test_light_orbit_direction_pinned() {
        let position = light_orbit_position(1.3, 15.0, 15.0);
        let d = light_orbit_direction(position, Vector3::ZERO, -1.0);
        assert_eq!(d.y, -1.0);
        // Horizontal components point back toward the target.
        assert!(d.x * position.x <= 0.0);
        assert!(d.z * position.z <= 0.0);
    }

    #[test]
    fn test_counter_monotonic_accumulation() {
        let mut state = AnimationState::new(0.01);
        let mut previous = state.counter();
        for _ in 0..100 {
            let next = state.advance();
            assert!(next > previous);
            previous = next;
        }
        assert!((state.counter() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_tick_moves_sphere_in_orbit_mode() {
        let built = SceneBuilder::new(SceneConfig::default()).build();
        let mut updater = FrameUpdater::new(MotionConfig::default());

        updater.tick(&built.handles);
        let p = built.handles.sphere.read().unwrap().position;
        assert!((p.x * p.x + p.z * p.z - RADIUS * RADIUS).abs() < 1e-3);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_tick_static_mode_changes_nothing() {
        let mut config = SceneConfig::default();
        config.motion.mode = MotionMode::Static;
        let built = SceneBuilder::new(config.clone()).build();
        let mut updater = FrameUpdater::new(config.motion);

        let before = built.handles.sphere.read().unwrap().position;
        let sun_before = built.handles.sun.read().unwrap().direction;
        for _ in 0..10 {
            updater.tick(&built.handles);
        }
        assert_eq!(built.handles.sphere.read().unwrap().position, before);
        assert_eq!(built.handles.sun.read().unwrap().direction, sun_before);
    }

    #[test]
    fn test_tick_light_orbit_moves_sun_and_marker() {
        let mut config = SceneConfig::default();
        config.motion.mode = MotionMode::LightOrbit;
        let built = SceneBuilder::new(config.clone()).build();
        let mut updater = FrameUpdater::new(config.motion.clone());

        updater.tick(&built.handles);
        let sun = built.handles.sun.read().unwrap();
        assert_eq!(sun.position.y, config.motion.light_height);
        assert_eq!(sun.direction.y, config.motion.pinned_y);

        let marker = built.handles.light_marker.as_ref().expect("marker enabled");
        assert_eq!(marker.read().unwrap().position, sun.position);
    }

    #[test]
    fn test_tick_wobble_mirrors_debug_ray() {
        let mut config = SceneConfig::default();
        config.motion.mode = MotionMode::DirectionWobble;
        let built = SceneBuilder::new(config.clone()).build();
        let mut updater = FrameUpdater::new(config.motion);

        updater.tick(&built.handles);
        let sun_direction = built.handles.sun.read().unwrap().direction;
        let ray = built.handles.debug_ray.as_ref().expect("ray in wobble mode");
        assert_eq!(ray.read().unwrap().direction, -sun_direction);
        assert_eq!(sun_direction.y, -1.0);
    }

    #[test]
    fn test_transforms_are_pure_functions_of_counter() {
        // Two independent sessions advanced the same number of frames land
        // on identical transforms.
        let config = SceneConfig::default();
        let a = SceneBuilder::new(config.clone()).build();
        let b = SceneBuilder::new(config.clone()).build();
        let mut ua = FrameUpdater::new(config.motion.clone());
        let mut ub = FrameUpdater::new(config.motion.clone());

        for _ in 0..37 {
            ua.tick(&a.handles);
            ub.tick(&b.handles);
        }
        assert_eq!(
            a.handles.sphere.read().unwrap().position,
            b.handles.sphere.read().unwrap().position
        );
    }
}
