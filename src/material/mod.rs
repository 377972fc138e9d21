//! Materials for scene meshes.

mod standard;
mod grid;

pub use standard::StandardMaterial;
pub use grid::GridMaterial;

/// A material attached to a mesh.
#[derive(Debug, Clone)]
pub enum Material {
    /// Lit surface material.
    Standard(StandardMaterial),
    /// Translucent grid overlay material.
    Grid(GridMaterial),
}

impl Material {
    /// Whether the material has been frozen against further property changes.
    pub fn is_frozen(&self) -> bool {
        match self {
            Self::Standard(m) => m.is_frozen(),
            Self::Grid(m) => m.is_frozen(),
        }
    }

    /// Get the material name.
    pub fn name(&self) -> &str {
        match self {
            Self::Standard(m) => m.name(),
            Self::Grid(m) => m.name(),
        }
    }
}

impl From<StandardMaterial> for Material {
    fn from(m: StandardMaterial) -> Self {
        Self::Standard(m)
    }
}

impl From<GridMaterial> for Material {
    fn from(m: GridMaterial) -> Self {
        Self::Grid(m)
    }
}
