//! Shadow generator and shadow map configuration.

use crate::core::Id;
use crate::math::clamp;
use serde::{Deserialize, Serialize};

/// Shadow filtering quality presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilteringQuality {
    /// 1 sample (hard edges).
    Low,
    /// 4 samples.
    #[default]
    Medium,
    /// 9 samples.
    High,
}

impl FilteringQuality {
    /// Number of filter samples for this quality level.
    pub fn sample_count(&self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 4,
            Self::High => 9,
        }
    }
}

/// Refresh cadence of a shadow map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RefreshRate {
    /// Render the map once, then reuse it.
    RenderOnce,
    /// Re-render the map every frame.
    #[default]
    EveryFrame,
}

/// The shadow map render target: refresh cadence plus the list of meshes
/// rendered into it.
#[derive(Debug, Clone, Default)]
pub struct ShadowMap {
    /// Refresh cadence.
    pub refresh_rate: RefreshRate,
    render_list: Vec<Id>,
}

impl ShadowMap {
    /// Create an empty shadow map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh to the render list.
    pub fn push(&mut self, mesh: Id) {
        if !self.render_list.contains(&mesh) {
            self.render_list.push(mesh);
        }
    }

    /// Whether a mesh is in the render list.
    pub fn contains(&self, mesh: Id) -> bool {
        self.render_list.contains(&mesh)
    }

    /// Number of meshes in the render list.
    #[inline]
    pub fn len(&self) -> usize {
        self.render_list.len()
    }

    /// Whether the render list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.render_list.is_empty()
    }
}

/// Shadow generator producing a shadow map from a light's point of view.
pub struct ShadowGenerator {
    /// Unique ID.
    id: Id,
    /// Shadow map resolution (square).
    pub map_size: u32,
    /// The light this generator shadows from.
    light: Id,
    /// Shadow darkness (0.0 = opaque shadows, 1.0 = invisible).
    darkness: f32,
    /// Blur kernel size in texels.
    pub blur_kernel: u32,
    /// Use blurred exponential shadow maps.
    pub use_blur_exponential_shadow_map: bool,
    /// Use kernel-based blur.
    pub use_kernel_blur: bool,
    /// Filtering quality.
    pub filtering_quality: FilteringQuality,
    /// The shadow map, absent when shadowing is disabled.
    shadow_map: Option<ShadowMap>,
}

impl ShadowGenerator {
    /// Create a new shadow generator with an allocated map.
    pub fn new(map_size: u32, light: Id) -> Self {
        Self {
            id: Id::new(),
            map_size,
            light,
            darkness: 0.0,
            blur_kernel: 1,
            use_blur_exponential_shadow_map: false,
            use_kernel_blur: false,
            filtering_quality: FilteringQuality::default(),
            shadow_map: Some(ShadowMap::new()),
        }
    }

    /// Create a generator without a map (shadowing disabled).
    pub fn disabled(map_size: u32, light: Id) -> Self {
        Self {
            shadow_map: None,
            ..Self::new(map_size, light)
        }
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the light this generator shadows from.
    #[inline]
    pub fn light(&self) -> Id {
        self.light
    }

    /// Get the shadow darkness.
    #[inline]
    pub fn darkness(&self) -> f32 {
        self.darkness
    }

    /// Set the shadow darkness, clamped to 0.0-1.0.
    pub fn set_darkness(&mut self, darkness: f32) {
        self.darkness = clamp(darkness, 0.0, 1.0);
    }

    /// Get the shadow map, if present.
    #[inline]
    pub fn shadow_map(&self) -> Option<&ShadowMap> {
        self.shadow_map.as_ref()
    }

    /// Get the shadow map mutably, if present.
    #[inline]
    pub fn shadow_map_mut(&mut self) -> Option<&mut ShadowMap> {
        self.shadow_map.as_mut()
    }

    /// Whether a shadow map is allocated.
    #[inline]
    pub fn has_shadow_map(&self) -> bool {
        self.shadow_map.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darkness_clamped() {
        let mut gen = ShadowGenerator::new(512, Id::new());
        gen.set_darkness(1.4);
        assert_eq!(gen.darkness(), 1.0);
        gen.set_darkness(-0.1);
        assert_eq!(gen.darkness(), 0.0);
    }

    #[test]
    fn test_render_list_dedupes() {
        let mut map = ShadowMap::new();
        let mesh = Id::new();
        map.push(mesh);
        map.push(mesh);
        assert_eq!(map.len(), 1);
        assert!(map.contains(mesh));
    }

    #[test]
    fn test_disabled_generator_has_no_map() {
        let gen = ShadowGenerator::disabled(512, Id::new());
        assert!(!gen.has_shadow_map());
        assert!(gen.shadow_map().is_none());
    }

    #[test]
    fn test_quality_sample_counts() {
        assert_eq!(FilteringQuality::Low.sample_count(), 1);
        assert_eq!(FilteringQuality::High.sample_count(), 9);
    }
}
