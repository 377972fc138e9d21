//! Lighting module for scene illumination.

mod directional;
mod hemispheric;

pub use directional::DirectionalLight;
pub use hemispheric::HemisphericLight;
