//! Scene configuration: the literal values the builder consumes.
//!
//! Defaults reproduce the canonical shadow-study scene. Every field can be
//! overridden from JSON; missing fields fall back to the defaults.

use crate::math::{consts, Color, Vector3};
use crate::shadow::FilteringQuality;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing a motion mode name.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown motion mode {0:?} (expected static, sphere-orbit, light-orbit, or wobble)")]
pub struct ParseMotionModeError(pub String);

/// Which animation behavior is active during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionMode {
    /// No animation; the scene is rendered as built.
    Static,
    /// The sphere orbits the origin in the horizontal plane.
    #[default]
    SphereOrbit,
    /// The sun orbits at fixed height, aimed at the sphere.
    LightOrbit,
    /// The sun direction oscillates around straight-down.
    DirectionWobble,
}

impl FromStr for MotionMode {
    type Err = ParseMotionModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Self::Static),
            "sphere-orbit" => Ok(Self::SphereOrbit),
            "light-orbit" => Ok(Self::LightOrbit),
            "wobble" | "direction-wobble" => Ok(Self::DirectionWobble),
            other => Err(ParseMotionModeError(other.to_string())),
        }
    }
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
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
    /// Minimum distance.
    pub lower_radius_limit: f32,
    /// Maximum distance.
    pub upper_radius_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.8,
            radius: 20.0,
            target: Vector3::ZERO,
            lower_beta_limit: 0.1,
            upper_beta_limit: consts::HALF_PI * 0.9,
            lower_radius_limit: 10.0,
            upper_radius_limit: 90.0,
        }
    }
}

/// Hemispheric ambient light configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    /// Up direction of the hemisphere.
    pub direction: Vector3,
    /// Sky-facing diffuse color.
    pub diffuse: Color,
    /// Specular color.
    pub specular: Color,
    /// Ground-facing color.
    pub ground_color: Color,
    /// Light intensity.
    pub intensity: f32,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            direction: Vector3::UP,
            diffuse: Color::splat(0.5),
            specular: Color::BLACK,
            ground_color: Color::splat(0.4),
            intensity: 0.5,
        }
    }
}

/// Sun (directional light) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    /// World position.
    pub position: Vector3,
    /// Direction used when `aim_at_target` is false, stored as-given.
    pub direction: Vector3,
    /// Derive the direction once at build time as the normalized vector
    /// from the position toward `target`.
    pub aim_at_target: bool,
    /// Aim target.
    pub target: Vector3,
    /// Diffuse color.
    pub diffuse: Color,
    /// Light intensity.
    pub intensity: f32,
    /// Show an emissive marker sphere at the light position.
    pub show_marker: bool,
    /// Marker sphere segments.
    pub marker_segments: u32,
    /// Marker sphere diameter.
    pub marker_diameter: f32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(12.0, 15.0, 5.0),
            direction: Vector3::new(-1.0, -2.0, -1.0),
            aim_at_target: true,
            target: Vector3::ZERO,
            diffuse: Color::WHITE,
            intensity: 1.0,
            show_marker: true,
            marker_segments: 10,
            marker_diameter: 2.0,
        }
    }
}

/// Shadow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowSettings {
    /// Whether a shadow map is allocated at all.
    pub enabled: bool,
    /// Shadow map resolution (square).
    pub map_size: u32,
    /// Shadow darkness (0.0 to 1.0).
    pub darkness: f32,
    /// Blur kernel size in texels.
    pub blur_kernel: u32,
    /// Use blurred exponential shadow maps.
    pub use_blur_exponential: bool,
    /// Use kernel-based blur.
    pub use_kernel_blur: bool,
    /// Filtering quality.
    pub quality: FilteringQuality,
    /// Render the map once and reuse it (static casters).
    pub refresh_once: bool,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            map_size: 512,
            darkness: 0.6,
            blur_kernel: 32,
            use_blur_exponential: true,
            use_kernel_blur: true,
            quality: FilteringQuality::Low,
            refresh_once: true,
        }
    }
}

/// Shadow-casting sphere configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Number of segments.
    pub segments: u32,
    /// Sphere diameter.
    pub diameter: f32,
    /// Resting height.
    pub y: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            segments: 16,
            diameter: 2.0,
            y: 0.0,
        }
    }
}

/// Ground plane configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Width along X.
    pub width: f32,
    /// Height along Z.
    pub height: f32,
    /// Subdivisions per side.
    pub subdivisions: u32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            width: 6.0,
            height: 6.0,
            subdivisions: 2,
        }
    }
}

/// Grid overlay configuration.
///
/// The grid is a layer distinct from the ground: a larger, translucent,
/// unpickable plane with a line material, toggleable independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Whether the overlay is created.
    pub enabled: bool,
    /// Width along X.
    pub width: f32,
    /// Height along Z.
    pub height: f32,
    /// World-space distance between grid lines.
    pub ratio: f32,
    /// Fill color between the lines.
    pub main_color: Color,
    /// Line color.
    pub line_color: Color,
    /// Overall opacity.
    pub opacity: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 20.0,
            height: 20.0,
            ratio: 1.0,
            main_color: Color::splat(0.6),
            line_color: Color::splat(0.7),
            opacity: 0.3,
        }
    }
}

/// Animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Active motion mode.
    pub mode: MotionMode,
    /// Counter increment per frame.
    pub step: f32,
    /// Sphere orbit radius.
    pub orbit_radius: f32,
    /// Sun orbit radius.
    pub light_radius: f32,
    /// Sun orbit height.
    pub light_height: f32,
    /// Vertical component the sun direction is pinned to while orbiting.
    pub pinned_y: f32,
    /// Wobble amplitude around straight-down.
    pub wobble_amplitude: f32,
    /// Show a debug ray mirroring the negated sun direction.
    pub debug_ray: bool,
    /// Drawn length of the debug ray.
    pub ray_length: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mode: MotionMode::default(),
            step: 0.01,
            orbit_radius: 10.0,
            light_radius: 15.0,
            light_height: 15.0,
            pinned_y: -1.0,
            wobble_amplitude: 0.2,
            debug_ray: true,
            ray_length: 10.0,
        }
    }
}

/// The full scene configuration consumed by the builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Background clear color.
    pub clear_color: Color,
    /// Camera configuration.
    pub camera: CameraConfig,
    /// Hemispheric ambient light.
    pub ambient: AmbientConfig,
    /// Sun light.
    pub sun: SunConfig,
    /// Shadow settings.
    pub shadows: ShadowSettings,
    /// Shadow-casting sphere.
    pub sphere: SphereConfig,
    /// Ground plane.
    pub ground: GroundConfig,
    /// Grid overlay.
    pub grid: GridConfig,
    /// Animation settings.
    pub motion: MotionConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::from_hex(0xE7FAFF),
            camera: CameraConfig::default(),
            ambient: AmbientConfig::default(),
            sun: SunConfig::default(),
            shadows: ShadowSettings::default(),
            sphere: SphereConfig::default(),
            ground: GroundConfig::default(),
            grid: GridConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canonical_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.clear_color, Color::from_hex(0xE7FAFF));
        assert_eq!(config.camera.radius, 20.0);
        assert_eq!(config.camera.upper_beta_limit, consts::HALF_PI * 0.9);
        assert_eq!(config.shadows.map_size, 512);
        assert_eq!(config.shadows.darkness, 0.6);
        assert_eq!(config.shadows.blur_kernel, 32);
        assert_eq!(config.sphere.segments, 16);
        assert_eq!(config.grid.opacity, 0.3);
        assert_eq!(config.motion.step, 0.01);
        assert_eq!(config.motion.mode, MotionMode::SphereOrbit);
    }

    #[test]
    fn test_motion_mode_from_str() {
        assert_eq!("sphere-orbit".parse(), Ok(MotionMode::SphereOrbit));
        assert_eq!("wobble".parse(), Ok(MotionMode::DirectionWobble));
        assert_eq!("static".parse(), Ok(MotionMode::Static));
        assert!("spin".parse::<MotionMode>().is_err());
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config: SceneConfig =
            serde_json::from_str(r#"{"motion": {"mode": "light-orbit"}, "grid": {"enabled": false}}"#)
                .expect("valid config json");
        assert_eq!(config.motion.mode, MotionMode::LightOrbit);
        assert!(!config.grid.enabled);
        // Untouched sections keep their defaults.
        assert_eq!(config.motion.step, 0.01);
        assert_eq!(config.shadows.map_size, 512);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = SceneConfig::default();
        let json = serde_json::to_string(&config).expect("serializable");
        let back: SceneConfig = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back.camera.beta, config.camera.beta);
        assert_eq!(back.motion.mode, config.motion.mode);
    }
}
