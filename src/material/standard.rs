//! Standard lit surface material.

use crate::core::Id;
use crate::math::Color;

/// A standard material with diffuse, specular, and emissive colors.
#[derive(Debug, Clone)]
pub struct StandardMaterial {
    /// Unique ID.
    id: Id,
    /// Material name.
    name: String,
    /// Diffuse (base) color.
    pub diffuse_color: Color,
    /// Specular highlight color.
    pub specular_color: Color,
    /// Emissive color (self-illumination).
    pub emissive_color: Color,
    /// Whether back faces are culled.
    pub back_face_culling: bool,
    /// Frozen against further property changes.
    frozen: bool,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::new("standard")
    }
}

impl StandardMaterial {
    /// Create a new standard material.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            diffuse_color: Color::WHITE,
            specular_color: Color::WHITE,
            emissive_color: Color::BLACK,
            back_face_culling: true,
            frozen: false,
        }
    }

    /// Create a material with a specific emissive color (light markers).
    pub fn emissive(name: impl Into<String>, color: Color) -> Self {
        Self {
            emissive_color: color,
            ..Self::new(name)
        }
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the material name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the diffuse color.
    pub fn set_diffuse_color(&mut self, color: Color) {
        if !self.frozen {
            self.diffuse_color = color;
        }
    }

    /// Set the emissive color.
    pub fn set_emissive_color(&mut self, color: Color) {
        if !self.frozen {
            self.emissive_color = color;
        }
    }

    /// Freeze the material. Property setters become no-ops.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether the material is frozen.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freeze_blocks_setters() {
        let mut m = StandardMaterial::new("light");
        m.set_emissive_color(Color::YELLOW);
        m.freeze();
        m.set_emissive_color(Color::BLACK);
        assert_eq!(m.emissive_color, Color::YELLOW);
    }
}
