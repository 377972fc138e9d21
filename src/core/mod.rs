//! # Core Module
//!
//! wgpu context management, the clear-pass presenter, and timing utilities.

mod engine;
mod context;
mod renderer;
mod clock;
mod id;

pub use engine::{Engine, EngineBuilder};
pub use context::{Context, ContextError};
pub use renderer::{Renderer, RenderInfo};
pub use clock::Clock;
pub use id::{Id, IdGenerator};

/// Render configuration options.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Enable alpha blending on the surface.
    pub alpha: bool,
    /// Enable the depth attachment.
    pub depth: bool,
    /// Power preference for GPU selection.
    pub power_preference: wgpu::PowerPreference,
    /// Present mode (vsync).
    pub present_mode: wgpu::PresentMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alpha: false,
            depth: true,
            power_preference: wgpu::PowerPreference::HighPerformance,
            present_mode: wgpu::PresentMode::AutoVsync,
        }
    }
}
