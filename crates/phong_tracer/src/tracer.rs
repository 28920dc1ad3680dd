//! The ray tracer: a scene plus a virtual screen.

use phong_math::{Color, Ray};
use phong_scene::{Command, Scene};

use crate::camera::Camera;
use crate::intersect::{find_nearest_hit, RootPolicy};
use crate::shade::shade;

/// Owns one scene and answers "what color does pixel (i, j) see?".
///
/// Scenes are never shared between tracers. Mutate the scene between
/// render passes, not during one.
#[derive(Clone, Debug)]
pub struct RayTracer {
    scene: Scene,
    pub screen_width: u32,
    pub screen_height: u32,
    pub root_policy: RootPolicy,
}

impl RayTracer {
    /// Create a tracer with an empty (reset) scene.
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self::with_scene(Scene::new(), screen_width, screen_height)
    }

    /// Create a tracer that takes ownership of `scene`.
    pub fn with_scene(scene: Scene, screen_width: u32, screen_height: u32) -> Self {
        Self {
            scene,
            screen_width,
            screen_height,
            root_policy: RootPolicy::default(),
        }
    }

    /// Set the intersection root policy.
    pub fn with_root_policy(mut self, root_policy: RootPolicy) -> Self {
        self.root_policy = root_policy;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Apply a scene-construction command.
    pub fn apply(&mut self, command: &Command) {
        self.scene.apply(command);
    }

    /// Camera for the scene's current pose and this tracer's screen.
    pub fn camera(&self) -> Camera {
        Camera::new(&self.scene, self.screen_width, self.screen_height)
    }

    /// Color seen along an arbitrary ray.
    pub fn trace_ray(&self, ray: &Ray) -> Color {
        let hit = find_nearest_hit(ray, self.scene.spheres(), self.root_policy);
        shade(&self.scene, ray, hit.as_ref())
    }

    /// Unclamped color of pixel (i, j).
    pub fn compute_pixel(&self, i: u32, j: u32) -> Color {
        self.trace_ray(&self.camera().get_ray(i, j))
    }
}
