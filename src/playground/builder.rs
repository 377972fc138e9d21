//! One-shot scene construction.

use super::config::{MotionMode, SceneConfig};
use crate::camera::ArcRotateCamera;
use crate::helpers::DebugRay;
use crate::light::{DirectionalLight, HemisphericLight};
use crate::material::{GridMaterial, StandardMaterial};
use crate::math::Color;
use crate::mesh::Mesh;
use crate::scene::{Handle, Scene};
use crate::shadow::{RefreshRate, ShadowGenerator};

/// Handles to the scene objects the frame updater mutates.
pub struct SceneHandles {
    /// The shadow-casting sphere.
    pub sphere: Handle<Mesh>,
    /// The shadow-receiving ground plane.
    pub ground: Handle<Mesh>,
    /// The grid overlay, when enabled.
    pub grid: Option<Handle<Mesh>>,
    /// The emissive marker at the sun position, when enabled.
    pub light_marker: Option<Handle<Mesh>>,
    /// The sun.
    pub sun: Handle<DirectionalLight>,
    /// The hemispheric ambient light.
    pub ambient: Handle<HemisphericLight>,
    /// The camera.
    pub camera: Handle<ArcRotateCamera>,
    /// The shadow generator.
    pub shadow_generator: Handle<ShadowGenerator>,
    /// The debug ray mirroring the sun direction, when enabled.
    pub debug_ray: Option<Handle<DebugRay>>,
}

/// A populated scene plus the handles into it.
pub struct BuiltScene {
    /// The scene.
    pub scene: Scene,
    /// Handles for per-frame mutation.
    pub handles: SceneHandles,
}

/// One-shot builder turning a [`SceneConfig`] into a populated scene.
///
/// Construction is a fixed declarative sequence; the single derived value is
/// the sun direction when `aim_at_target` is set. Building twice produces two
/// fully independent object graphs.
pub struct SceneBuilder {
    config: SceneConfig,
}

impl SceneBuilder {
    /// Create a builder for a configuration.
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    /// Build the scene.
    pub fn build(&self) -> BuiltScene {
        let config = &self.config;
        let mut scene = Scene::new();
        scene.set_background_color(config.clear_color);

        // Shadow caster.
        let mut sphere = Mesh::sphere("sphere1", config.sphere.segments, config.sphere.diameter);
        sphere.set_position(0.0, config.sphere.y, 0.0);
        let sphere = scene.add_mesh(sphere);

        // Shadow receiver.
        let ground = scene.add_mesh(Mesh::ground(
            "ground1",
            config.ground.width,
            config.ground.height,
            config.ground.subdivisions,
        ));

        // Camera.
        let mut camera = ArcRotateCamera::new(
            "camera1",
            config.camera.alpha,
            config.camera.beta,
            config.camera.radius,
            config.camera.target,
        );
        camera.lower_beta_limit = config.camera.lower_beta_limit;
        camera.upper_beta_limit = config.camera.upper_beta_limit;
        camera.lower_radius_limit = config.camera.lower_radius_limit;
        camera.upper_radius_limit = config.camera.upper_radius_limit;
        camera.set_target(config.camera.target);
        camera.attach_control();
        camera.apply_limits();
        let camera = scene.add_camera(camera);

        // Ambient hemisphere.
        let mut ambient = HemisphericLight::new("ambient", config.ambient.direction);
        ambient.diffuse = config.ambient.diffuse;
        ambient.specular = config.ambient.specular;
        ambient.ground_color = config.ambient.ground_color;
        ambient.intensity = config.ambient.intensity;
        let ambient = scene.add_hemispheric_light(ambient);

        // Sun.
        let mut sun = DirectionalLight::new("light", config.sun.direction);
        sun.set_position(config.sun.position);
        if config.sun.aim_at_target {
            sun.set_direction_to_target(config.sun.target);
        }
        sun.diffuse = config.sun.diffuse;
        sun.intensity = config.sun.intensity;
        let sun = scene.add_directional_light(sun);

        // Emissive marker at the sun position.
        let light_marker = config.sun.show_marker.then(|| {
            let mut marker = Mesh::sphere(
                "lightSphere",
                config.sun.marker_segments,
                config.sun.marker_diameter,
            );
            marker.set_position_vec(config.sun.position);
            marker.set_material(StandardMaterial::emissive("light", Color::YELLOW));
            scene.add_mesh(marker)
        });

        // Shadow generator. Darkness, blur, and the render list are only
        // configured when a map is present.
        let sun_id = sun.read().map(|l| l.id()).unwrap_or_default();
        let mut generator = if config.shadows.enabled {
            ShadowGenerator::new(config.shadows.map_size, sun_id)
        } else {
            ShadowGenerator::disabled(config.shadows.map_size, sun_id)
        };
        if generator.has_shadow_map() {
            if let Some(map) = generator.shadow_map_mut() {
                map.refresh_rate = if config.shadows.refresh_once {
                    RefreshRate::RenderOnce
                } else {
                    RefreshRate::EveryFrame
                };
                if let Ok(caster) = sphere.read() {
                    map.push(caster.id());
                }
            }
            if let Ok(mut receiver) = ground.write() {
                receiver.receive_shadows = true;
            }
            generator.filtering_quality = config.shadows.quality;
            generator.set_darkness(config.shadows.darkness);
            generator.use_blur_exponential_shadow_map = config.shadows.use_blur_exponential;
            generator.use_kernel_blur = config.shadows.use_kernel_blur;
            generator.blur_kernel = config.shadows.blur_kernel;
        }
        let shadow_generator = scene.add_shadow_generator(generator);

        // Grid overlay: a layer distinct from the ground, frozen in place.
        let grid = config.grid.enabled.then(|| {
            let mut material = GridMaterial::new("grid");
            material.back_face_culling = false;
            material.set_grid_ratio(config.grid.ratio);
            material.main_color = config.grid.main_color;
            material.line_color = config.grid.line_color;
            material.set_opacity(config.grid.opacity);
            material.freeze();

            let mut grid = Mesh::ground("grid", config.grid.width, config.grid.height, 1);
            grid.set_material(material);
            grid.is_pickable = false;
            grid.freeze_world_matrix();
            grid.freeze_normals();
            scene.add_mesh(grid)
        });

        // Debug ray mirroring the negated sun direction in wobble mode.
        let debug_ray = (config.motion.debug_ray && config.motion.mode == MotionMode::DirectionWobble)
            .then(|| {
                let (origin, direction) = sun
                    .read()
                    .map(|l| (l.position, -l.direction))
                    .unwrap_or_default();
                scene.add_ray(DebugRay::new("lightRay", origin, direction, config.motion.ray_length))
            });

        log::info!(
            "scene built: {} objects, motion mode {:?}",
            scene.object_count(),
            config.motion.mode
        );

        BuiltScene {
            scene,
            handles: SceneHandles {
                sphere,
                ground,
                grid,
                light_marker,
                sun,
                ambient,
                camera,
                shadow_generator,
                debug_ray,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::scene::Background;

    fn read<T, R>(handle: &Handle<T>, f: impl FnOnce(&T) -> R) -> R {
        f(&handle.read().unwrap())
    }

    #[test]
    fn test_build_populates_canonical_scene() {
        let built = SceneBuilder::new(SceneConfig::default()).build();
        let scene = &built.scene;

        // sphere, ground, marker, grid
        assert_eq!(scene.meshes().len(), 4);
        assert_eq!(scene.directional_lights().len(), 1);
        assert_eq!(scene.hemispheric_lights().len(), 1);
        assert_eq!(scene.cameras().len(), 1);
        assert_eq!(scene.shadow_generators().len(), 1);
        assert!(matches!(scene.background(), Background::Color(_)));
        assert!(scene.find_mesh_by_name("lightSphere").is_some());
    }

    #[test]
    fn test_sun_direction_derived_once() {
        let built = SceneBuilder::new(SceneConfig::default()).build();
        let direction = read(&built.handles.sun, |l| l.direction);
        assert!((direction.length() - 1.0).abs() < 1e-5);
        // Aimed from (12, 15, 5) at the origin: all components negative.
        assert!(direction.x < 0.0 && direction.y < 0.0 && direction.z < 0.0);
    }

    #[test]
    fn test_sun_direction_as_given_when_not_aimed() {
        let mut config = SceneConfig::default();
        config.sun.aim_at_target = false;
        let built = SceneBuilder::new(config).build();
        assert_eq!(
            read(&built.handles.sun, |l| l.direction),
            Vector3::new(-1.0, -2.0, -1.0)
        );
    }

    #[test]
    fn test_shadow_configuration_applied() {
        let built = SceneBuilder::new(SceneConfig::default()).build();
        let generator = built.handles.shadow_generator.read().unwrap();
        assert_eq!(generator.darkness(), 0.6);
        assert_eq!(generator.blur_kernel, 32);
        assert!(generator.use_blur_exponential_shadow_map);
        assert!(generator.use_kernel_blur);

        let sphere_id = read(&built.handles.sphere, |m| m.id());
        let map = generator.shadow_map().expect("map allocated");
        assert!(map.contains(sphere_id));
        assert_eq!(map.refresh_rate, RefreshRate::RenderOnce);
        assert!(read(&built.handles.ground, |g| g.receive_shadows));
    }

    #[test]
    fn test_absent_shadow_map_leaves_configuration_unset() {
        let mut config = SceneConfig::default();
        config.shadows.enabled = false;
        let built = SceneBuilder::new(config).build();

        let generator = built.handles.shadow_generator.read().unwrap();
        assert!(generator.shadow_map().is_none());
        assert_eq!(generator.darkness(), 0.0);
        assert_eq!(generator.blur_kernel, 1);
        assert!(!generator.use_kernel_blur);
        assert!(!read(&built.handles.ground, |g| g.receive_shadows));
    }

    #[test]
    fn test_grid_is_distinct_frozen_layer() {
        let built = SceneBuilder::new(SceneConfig::default()).build();
        let grid = built.handles.grid.as_ref().expect("grid enabled by default");
        let guard = grid.read().unwrap();
        assert!(!guard.is_pickable);
        assert!(guard.is_world_matrix_frozen());
        assert!(guard.are_normals_frozen());
        let material = guard.material.as_ref().expect("grid material");
        assert!(material.is_frozen());
        // Ground stays a separate mesh.
        assert_ne!(guard.id(), read(&built.handles.ground, |g| g.id()));
    }

    #[test]
    fn test_grid_can_be_disabled() {
        let mut config = SceneConfig::default();
        config.grid.enabled = false;
        let built = SceneBuilder::new(config).build();
        assert!(built.handles.grid.is_none());
        assert!(built.scene.find_mesh_by_name("grid").is_none());
    }

    #[test]
    fn test_debug_ray_only_in_wobble_mode() {
        let built = SceneBuilder::new(SceneConfig::default()).build();
        assert!(built.handles.debug_ray.is_none());

        let mut config = SceneConfig::default();
        config.motion.mode = MotionMode::DirectionWobble;
        let built = SceneBuilder::new(config).build();
        let ray = built.handles.debug_ray.as_ref().expect("ray in wobble mode");
        let sun_direction = read(&built.handles.sun, |l| l.direction);
        assert_eq!(read(ray, |r| r.direction), -sun_direction);
    }

    #[test]
    fn test_two_builds_share_no_mutable_state() {
        let builder = SceneBuilder::new(SceneConfig::default());
        let a = builder.build();
        let b = builder.build();

        if let Ok(mut sphere) = a.handles.sphere.write() {
            sphere.set_position(9.0, 9.0, 9.0);
        }
        let b_position = read(&b.handles.sphere, |m| m.position);
        assert_eq!(b_position, Vector3::new(0.0, 0.0, 0.0));
        assert_ne!(
            read(&a.handles.sphere, |m| m.id()),
            read(&b.handles.sphere, |m| m.id())
        );
    }

    #[test]
    fn test_camera_limits_applied() {
        let built = SceneBuilder::new(SceneConfig::default()).build();
        let camera = built.handles.camera.read().unwrap();
        assert_eq!(camera.lower_radius_limit, 10.0);
        assert_eq!(camera.upper_radius_limit, 90.0);
        assert!(camera.is_control_attached());
        assert!(camera.beta <= camera.upper_beta_limit);
    }
}
