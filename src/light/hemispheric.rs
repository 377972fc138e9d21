//! Hemispheric light for sky/ground gradient ambient illumination.

use crate::core::Id;
use crate::math::{Color, Vector3};

/// Hemispheric light illuminating with a gradient between sky and ground.
///
/// Surfaces facing the light's direction receive the diffuse color, surfaces
/// facing away receive the ground color, and surfaces at an angle a blend.
pub struct HemisphericLight {
    /// Unique ID.
    id: Id,
    /// Light name.
    name: String,
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

impl HemisphericLight {
    /// Create a new hemispheric light.
    pub fn new(name: impl Into<String>, direction: Vector3) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            direction,
            diffuse: Color::WHITE,
            specular: Color::BLACK,
            ground_color: Color::BLACK,
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

    /// Get the effective sky color (diffuse * intensity).
    pub fn effective_diffuse(&self) -> Color {
        self.diffuse.scale(self.intensity)
    }

    /// Get the effective ground color (ground_color * intensity).
    pub fn effective_ground(&self) -> Color {
        self.ground_color.scale(self.intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_colors_scale_with_intensity() {
        let mut light = HemisphericLight::new("ambient", Vector3::UP);
        light.diffuse = Color::splat(0.5);
        light.ground_color = Color::splat(0.4);
        light.intensity = 0.5;
        assert_eq!(light.effective_diffuse(), Color::splat(0.25));
        assert_eq!(light.effective_ground(), Color::splat(0.2));
    }
}
