//! # Heliodon - Shadow-Study Scene Playground
//!
//! Heliodon builds a small, fully configured 3D scene - arc-rotate camera,
//! hemispheric ambient light, shadow-casting sun, sphere, ground plane, and
//! grid overlay - and animates it with closed-form trigonometric motion of
//! either the sphere or the sun, selected by a motion mode.
//!
//! The scene layer is declarative data. Presentation is a wgpu clear pass
//! over the scene background; there is no rasterizer here.
//!
//! ## Example
//!
//! ```
//! use heliodon::prelude::*;
//!
//! let config = SceneConfig::default();
//! let built = SceneBuilder::new(config.clone()).build();
//! let mut updater = FrameUpdater::new(config.motion.clone());
//!
//! // One frame of the host loop.
//! updater.tick(&built.handles);
//! ```

#![warn(missing_docs)]

pub mod math;
pub mod core;
pub mod scene;
pub mod mesh;
pub mod material;
pub mod camera;
pub mod light;
pub mod shadow;
pub mod helpers;
pub mod playground;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::math::*;
    pub use crate::core::*;
    pub use crate::scene::*;
    pub use crate::mesh::*;
    pub use crate::material::*;
    pub use crate::camera::*;
    pub use crate::light::*;
    pub use crate::shadow::*;
    pub use crate::helpers::*;
    pub use crate::playground::*;
}

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = "Heliodon";
