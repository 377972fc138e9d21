//! Declarative mesh node: a shape, a transform, and rendering flags.

use crate::core::Id;
use crate::material::Material;
use crate::math::Vector3;

/// Parametric shape of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    /// UV sphere.
    Sphere {
        /// Number of segments.
        segments: u32,
        /// Sphere diameter.
        diameter: f32,
    },
    /// Ground plane on XZ.
    Ground {
        /// Width along X.
        width: f32,
        /// Height along Z.
        height: f32,
        /// Subdivisions per side.
        subdivisions: u32,
    },
}

impl MeshShape {
    /// Radius of the bounding sphere around the local origin.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Self::Sphere { diameter, .. } => diameter / 2.0,
            Self::Ground { width, height, .. } => {
                (width * width + height * height).sqrt() / 2.0
            }
        }
    }
}

/// A mesh node in the scene.
pub struct Mesh {
    /// Unique identifier.
    id: Id,
    /// Object name.
    name: String,
    /// Parametric shape.
    pub shape: MeshShape,
    /// Local position.
    pub position: Vector3,
    /// Attached material.
    pub material: Option<Material>,
    /// Visibility flag.
    pub visible: bool,
    /// Receive shadows from casters.
    pub receive_shadows: bool,
    /// Whether the mesh responds to picking.
    pub is_pickable: bool,
    /// World matrix frozen (static geometry).
    world_matrix_frozen: bool,
    /// Normals frozen (skips recomputation).
    normals_frozen: bool,
}

impl Mesh {
    /// Create a new mesh with a shape.
    pub fn new(name: impl Into<String>, shape: MeshShape) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            shape,
            position: Vector3::ZERO,
            material: None,
            visible: true,
            receive_shadows: false,
            is_pickable: true,
            world_matrix_frozen: false,
            normals_frozen: false,
        }
    }

    /// Create a UV sphere mesh.
    pub fn sphere(name: impl Into<String>, segments: u32, diameter: f32) -> Self {
        Self::new(name, MeshShape::Sphere { segments, diameter })
    }

    /// Create a ground plane mesh.
    pub fn ground(name: impl Into<String>, width: f32, height: f32, subdivisions: u32) -> Self {
        Self::new(name, MeshShape::Ground { width, height, subdivisions })
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the object name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the object name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set position.
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vector3::new(x, y, z);
    }

    /// Set position from vector.
    pub fn set_position_vec(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Attach a material.
    pub fn set_material(&mut self, material: impl Into<Material>) {
        self.material = Some(material.into());
    }

    /// Freeze the world matrix (static geometry).
    pub fn freeze_world_matrix(&mut self) {
        self.world_matrix_frozen = true;
    }

    /// Freeze normals (skips recomputation).
    pub fn freeze_normals(&mut self) {
        self.normals_frozen = true;
    }

    /// Whether the world matrix is frozen.
    #[inline]
    pub fn is_world_matrix_frozen(&self) -> bool {
        self.world_matrix_frozen
    }

    /// Whether normals are frozen.
    #[inline]
    pub fn are_normals_frozen(&self) -> bool {
        self.normals_frozen
    }
}

impl std::fmt::Debug for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("position", &self.position)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_radius() {
        let sphere = Mesh::sphere("sphere1", 16, 2.0);
        assert_eq!(sphere.shape.bounding_radius(), 1.0);

        let ground = Mesh::ground("ground1", 6.0, 6.0, 2);
        assert!((ground.shape.bounding_radius() - (72.0f32).sqrt() / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_freeze_flags() {
        let mut grid = Mesh::ground("grid", 20.0, 20.0, 1);
        grid.freeze_world_matrix();
        grid.freeze_normals();
        assert!(grid.is_world_matrix_frozen());
        assert!(grid.are_normals_frozen());
    }
}
