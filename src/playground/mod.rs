//! # Playground Module
//!
//! The shadow-study demo itself: a declarative [`SceneConfig`] of literal
//! values, a one-shot [`SceneBuilder`] that turns it into a populated scene
//! plus handles, and a [`FrameUpdater`] advancing the animation each frame.

mod config;
mod builder;
mod animation;

pub use config::{
    AmbientConfig, CameraConfig, GridConfig, GroundConfig, MotionConfig, MotionMode,
    ParseMotionModeError, SceneConfig, ShadowSettings, SphereConfig, SunConfig,
};
pub use builder::{BuiltScene, SceneBuilder, SceneHandles};
pub use animation::{
    light_orbit_direction, light_orbit_position, sphere_orbit_position, wobble_direction,
    AnimationState, FrameUpdater,
};
