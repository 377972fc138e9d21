//! Directional light (sun-like parallel rays).

use crate::core::Id;
use crate::math::{Color, Vector3};

/// Directional light emitting parallel rays (like the sun).
///
/// The direction is stored exactly as given; it is not normalized on set.
/// A non-unit direction such as `(-1, -2, -1)` is valid, and the oscillating
/// motion variants rely on writing raw component values.
pub struct DirectionalLight {
    /// Unique ID.
    id: Id,
    /// Light name.
    name: String,
    /// World position (used as the shadow projection origin).
    pub position: Vector3,
    /// Light direction, stored as-given.
    pub direction: Vector3,
    /// Diffuse color.
    pub diffuse: Color,
    /// Specular color.
    pub specular: Color,
    /// Light intensity.
    pub intensity: f32,
}

impl DirectionalLight {
    /// Create a new directional light.
    pub fn new(name: impl Into<String>, direction: Vector3) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            position: Vector3::ZERO,
            direction,
            diffuse: Color::WHITE,
            specular: Color::WHITE,
            intensity: 1.0,
        }
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the light name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the world position.
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Set the direction, stored as-given.
    pub fn set_direction(&mut self, direction: Vector3) {
        self.direction = direction;
    }

    /// Aim the light at a target: direction becomes the normalized vector
    /// from the light's position toward the target.
    pub fn set_direction_to_target(&mut self, target: Vector3) {
        self.direction = (target - self.position).normalized();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_stored_as_given() {
        let light = DirectionalLight::new("light", Vector3::new(-1.0, -2.0, -1.0));
        assert_eq!(light.direction, Vector3::new(-1.0, -2.0, -1.0));
    }

    #[test]
    fn test_set_direction_to_target_normalizes() {
        let mut light = DirectionalLight::new("light", Vector3::DOWN);
        light.set_position(Vector3::new(12.0, 15.0, 5.0));
        light.set_direction_to_target(Vector3::ZERO);
        assert!((light.direction.length() - 1.0).abs() < 1e-6);
        assert!(light.direction.y < 0.0);
    }
}
