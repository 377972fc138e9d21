//! Scene container - the flat registry of renderable objects.

use crate::camera::ArcRotateCamera;
use crate::core::Id;
use crate::helpers::DebugRay;
use crate::light::{DirectionalLight, HemisphericLight};
use crate::math::Color;
use crate::mesh::Mesh;
use crate::shadow::ShadowGenerator;
use std::sync::{Arc, RwLock};

/// Shared handle to a scene object.
pub type Handle<T> = Arc<RwLock<T>>;

/// Background type for the scene.
#[derive(Debug, Clone, Default)]
pub enum Background {
    /// Solid color background.
    Color(Color),
    /// No background (presenter fallback color).
    #[default]
    None,
}

/// The scene - flat container for meshes, lights, cameras, and helpers.
///
/// Objects are registered through the `add_*` methods, which wrap them in a
/// shared handle and return it. The same handle is what the frame updater
/// mutates each tick.
pub struct Scene {
    /// Scene name.
    name: String,
    /// Scene background.
    background: Background,
    /// Registered meshes.
    meshes: Vec<Handle<Mesh>>,
    /// Registered directional lights.
    directional_lights: Vec<Handle<DirectionalLight>>,
    /// Registered hemispheric lights.
    hemispheric_lights: Vec<Handle<HemisphericLight>>,
    /// Registered cameras.
    cameras: Vec<Handle<ArcRotateCamera>>,
    /// The active camera.
    active_camera: Option<Id>,
    /// Registered shadow generators.
    shadow_generators: Vec<Handle<ShadowGenerator>>,
    /// Registered debug rays.
    rays: Vec<Handle<DebugRay>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            name: String::from("Scene"),
            background: Background::None,
            meshes: Vec::new(),
            directional_lights: Vec::new(),
            hemispheric_lights: Vec::new(),
            cameras: Vec::new(),
            active_camera: None,
            shadow_generators: Vec::new(),
            rays: Vec::new(),
        }
    }

    /// Get the scene name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the scene name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the background.
    #[inline]
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Set the background.
    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Set a solid background color.
    pub fn set_background_color(&mut self, color: Color) {
        self.background = Background::Color(color);
    }

    /// Register a mesh and return its handle.
    pub fn add_mesh(&mut self, mesh: Mesh) -> Handle<Mesh> {
        let handle = Arc::new(RwLock::new(mesh));
        self.meshes.push(Arc::clone(&handle));
        handle
    }

    /// Register a directional light and return its handle.
    pub fn add_directional_light(&mut self, light: DirectionalLight) -> Handle<DirectionalLight> {
        let handle = Arc::new(RwLock::new(light));
        self.directional_lights.push(Arc::clone(&handle));
        handle
    }

    /// Register a hemispheric light and return its handle.
    pub fn add_hemispheric_light(&mut self, light: HemisphericLight) -> Handle<HemisphericLight> {
        let handle = Arc::new(RwLock::new(light));
        self.hemispheric_lights.push(Arc::clone(&handle));
        handle
    }

    /// Register a camera and return its handle. The first camera added
    /// becomes the active camera.
    pub fn add_camera(&mut self, camera: ArcRotateCamera) -> Handle<ArcRotateCamera> {
        let id = camera.id();
        let handle = Arc::new(RwLock::new(camera));
        self.cameras.push(Arc::clone(&handle));
        if self.active_camera.is_none() {
            self.active_camera = Some(id);
        }
        handle
    }

    /// Register a shadow generator and return its handle.
    pub fn add_shadow_generator(&mut self, generator: ShadowGenerator) -> Handle<ShadowGenerator> {
        let handle = Arc::new(RwLock::new(generator));
        self.shadow_generators.push(Arc::clone(&handle));
        handle
    }

    /// Register a debug ray and return its handle.
    pub fn add_ray(&mut self, ray: DebugRay) -> Handle<DebugRay> {
        let handle = Arc::new(RwLock::new(ray));
        self.rays.push(Arc::clone(&handle));
        handle
    }

    /// Get the registered meshes.
    #[inline]
    pub fn meshes(&self) -> &[Handle<Mesh>] {
        &self.meshes
    }

    /// Get the registered directional lights.
    #[inline]
    pub fn directional_lights(&self) -> &[Handle<DirectionalLight>] {
        &self.directional_lights
    }

    /// Get the registered hemispheric lights.
    #[inline]
    pub fn hemispheric_lights(&self) -> &[Handle<HemisphericLight>] {
        &self.hemispheric_lights
    }

    /// Get the registered cameras.
    #[inline]
    pub fn cameras(&self) -> &[Handle<ArcRotateCamera>] {
        &self.cameras
    }

    /// Get the active camera ID.
    #[inline]
    pub fn active_camera(&self) -> Option<Id> {
        self.active_camera
    }

    /// Get the registered shadow generators.
    #[inline]
    pub fn shadow_generators(&self) -> &[Handle<ShadowGenerator>] {
        &self.shadow_generators
    }

    /// Get the registered debug rays.
    #[inline]
    pub fn rays(&self) -> &[Handle<DebugRay>] {
        &self.rays
    }

    /// Find a mesh by name.
    pub fn find_mesh_by_name(&self, name: &str) -> Option<Handle<Mesh>> {
        for mesh in &self.meshes {
            if let Ok(guard) = mesh.read() {
                if guard.name() == name {
                    return Some(Arc::clone(mesh));
                }
            }
        }
        None
    }

    /// Total number of registered objects.
    pub fn object_count(&self) -> usize {
        self.meshes.len()
            + self.directional_lights.len()
            + self.hemispheric_lights.len()
            + self.cameras.len()
            + self.shadow_generators.len()
            + self.rays.len()
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("meshes", &self.meshes.len())
            .field("lights", &(self.directional_lights.len() + self.hemispheric_lights.len()))
            .field("cameras", &self.cameras.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn test_first_camera_becomes_active() {
        let mut scene = Scene::new();
        let cam = scene.add_camera(ArcRotateCamera::new("camera1", 0.0, 0.8, 20.0, Vector3::ZERO));
        let id = cam.read().map(|c| c.id()).ok();
        assert_eq!(scene.active_camera(), id);
    }

    #[test]
    fn test_find_mesh_by_name() {
        let mut scene = Scene::new();
        scene.add_mesh(Mesh::sphere("sphere1", 16, 2.0));
        scene.add_mesh(Mesh::ground("ground1", 6.0, 6.0, 2));
        assert!(scene.find_mesh_by_name("ground1").is_some());
        assert!(scene.find_mesh_by_name("missing").is_none());
    }

    #[test]
    fn test_object_count() {
        let mut scene = Scene::new();
        scene.add_mesh(Mesh::sphere("sphere1", 16, 2.0));
        scene.add_hemispheric_light(HemisphericLight::new("ambient", Vector3::UP));
        assert_eq!(scene.object_count(), 2);
    }
}
