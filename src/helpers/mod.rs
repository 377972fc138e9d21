//! Visualization helpers.

use crate::core::Id;
use crate::math::{Color, Vector3};

/// A ray drawn for debugging, e.g. mirroring a light's direction.
pub struct DebugRay {
    /// Unique ID.
    id: Id,
    /// Helper name.
    name: String,
    /// Ray origin.
    pub origin: Vector3,
    /// Ray direction, stored as-given.
    pub direction: Vector3,
    /// Drawn length.
    pub length: f32,
    /// Line color.
    pub color: Color,
    /// Visibility flag.
    pub visible: bool,
}

impl DebugRay {
    /// Create a new debug ray.
    pub fn new(name: impl Into<String>, origin: Vector3, direction: Vector3, length: f32) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            origin,
            direction,
            length,
            color: Color::YELLOW,
            visible: true,
        }
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the helper name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Point at parameter `t` along the ray (direction normalized).
    pub fn point_at(&self, t: f32) -> Vector3 {
        self.origin + self.direction.normalized() * t
    }

    /// End point of the drawn segment.
    pub fn end_point(&self) -> Vector3 {
        self.point_at(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_uses_normalized_direction() {
        let ray = DebugRay::new("ray", Vector3::ZERO, Vector3::new(0.0, -2.0, 0.0), 5.0);
        assert_eq!(ray.point_at(5.0), Vector3::new(0.0, -5.0, 0.0));
        assert_eq!(ray.end_point(), Vector3::new(0.0, -5.0, 0.0));
    }
}
