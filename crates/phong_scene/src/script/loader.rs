//! High-level scene loading.
//!
//! Scene scripts are replayed onto a fresh [`Scene`]. JSON snapshots store
//! the resulting scene state directly.

use std::path::Path;

use phong_math::Vec3;
use thiserror::Error;

use crate::command::Command;
use crate::scene::Scene;
use crate::script::parser::{parse_script, ParseError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot snapshot non-finite value in `{field}`")]
    NonFinite { field: String },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Read and parse a scene script without applying it.
pub fn load_script<P: AsRef<Path>>(path: P) -> LoadResult<Vec<Command>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_script(&content)?)
}

/// Load a scene script and return the scene it builds.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let scene = load_scene_from_string(&content)?;

    log::info!(
        "Loaded scene {}: {} spheres, {} lights",
        path.display(),
        scene.sphere_count(),
        scene.light_count()
    );
    Ok(scene)
}

/// Build a scene from script text (useful for testing).
pub fn load_scene_from_string(content: &str) -> LoadResult<Scene> {
    let commands = parse_script(content)?;
    let mut scene = Scene::new();
    scene.apply_all(&commands);
    Ok(scene)
}

/// Name of the first scene field holding a NaN or infinite component.
///
/// JSON has no encoding for these; serde_json writes them as `null` and
/// cannot read them back.
fn non_finite_field(scene: &Scene) -> Option<String> {
    let eye = scene.eye();
    let mut fields: Vec<(String, Vec3)> = vec![
        ("ambient".to_string(), scene.ambient()),
        ("background".to_string(), scene.background()),
        ("fov".to_string(), Vec3::splat(scene.fov())),
        ("eye.position".to_string(), eye.position),
        ("eye.look_at".to_string(), eye.look_at),
        ("eye.up".to_string(), eye.up),
    ];

    for (i, light) in scene.lights().iter().enumerate() {
        fields.push((format!("lights[{}].color", i), light.color));
        fields.push((format!("lights[{}].position", i), light.position));
    }

    for (i, sphere) in scene.spheres().iter().enumerate() {
        fields.push((format!("spheres[{}].center", i), sphere.center));
        fields.push((format!("spheres[{}].diffuse_color", i), sphere.diffuse_color));
        for (name, value) in [
            ("radius", sphere.radius),
            ("ka", sphere.ka),
            ("ks", sphere.ks),
            ("specular_exponent", sphere.specular_exponent),
        ] {
            fields.push((format!("spheres[{}].{}", i, name), Vec3::splat(value)));
        }
    }

    fields
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
}

impl Scene {
    /// Serialize the scene state as pretty-printed JSON.
    ///
    /// Scenes holding NaN or infinite values are rejected, since the
    /// snapshot could not be restored.
    pub fn to_json(&self) -> LoadResult<String> {
        if let Some(field) = non_finite_field(self) {
            return Err(LoadError::NonFinite { field });
        }
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a scene from a JSON snapshot.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phong_math::{Color, Vec3, WHITE};

    const SCENE: &str = "
resetScene
setBackground 0 0 0
setAmbient 0.2 0.2 0.2
setFov 60
addLight 1 1 1, 0 5 0
addSphere 0 0 -4, 1, 1 0 0, 0.3, 0.5, 20
addSphere 2 0 -6, 1, 0 1 0, 0.3, 0.5, 20
";

    #[test]
    fn test_load_scene_from_string() {
        let scene = load_scene_from_string(SCENE).unwrap();

        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.background(), Color::ZERO);
        assert_eq!(scene.ambient(), Color::splat(0.2));
        assert_eq!(scene.lights()[0].color, WHITE);
        assert_eq!(scene.spheres()[1].center, Vec3::new(2.0, 0.0, -6.0));
    }

    #[test]
    fn test_load_scene_parse_error() {
        let err = load_scene_from_string("setFov 60 70").unwrap_err();
        assert!(matches!(err, LoadError::Parse(ParseError::WrongArity { .. })));
    }

    #[test]
    fn test_load_scene_missing_file() {
        let err = load_scene("/nonexistent/dir/scene.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_script_from_file() {
        let path = std::env::temp_dir().join(format!("phong_scene_{}.txt", std::process::id()));
        std::fs::write(&path, SCENE).unwrap();

        let commands = load_script(&path).unwrap();
        let scene = load_scene(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(commands.len(), 7);
        assert_eq!(scene, load_scene_from_string(SCENE).unwrap());
    }

    #[test]
    fn test_json_snapshot_restores_scene() {
        let scene = load_scene_from_string(SCENE).unwrap();

        let json = scene.to_json().unwrap();
        let restored = Scene::from_json(&json).unwrap();

        assert_eq!(restored, scene);
    }

    #[test]
    fn test_json_rejects_non_finite() {
        // The script parser accepts `nan` and `inf` tokens
        let scene = load_scene_from_string("setBackground nan 0 0\nsetFov inf").unwrap();
        let err = scene.to_json().unwrap_err();
        assert!(
            matches!(&err, LoadError::NonFinite { field } if field == "background"),
            "{}",
            err
        );

        let mut scene = load_scene_from_string(SCENE).unwrap();
        scene.add_sphere(Vec3::ZERO, f32::INFINITY, WHITE, 0.1, 0.1, 1.0);
        let err = scene.to_json().unwrap_err();
        assert_eq!(err.to_string(), "Cannot snapshot non-finite value in `spheres[2].radius`");
    }

    #[test]
    fn test_json_malformed() {
        let err = Scene::from_json("{\"lights\": 3}").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
