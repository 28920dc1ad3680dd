//! Phong Scene - scene state and scene description for the Phong tracer.
//!
//! This crate provides:
//!
//! - **Scene model**: `Scene`, `PointLight`, `Sphere`, `Eye`
//! - **Commands**: the scene-construction command set (`Command`)
//! - **Scene scripts**: text parsing and loading, plus JSON snapshots
//!
//! # Example
//!
//! ```ignore
//! use phong_scene::load_scene;
//!
//! let scene = load_scene("scenes/three_spheres.txt")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.sphere_count(),
//!     scene.light_count());
//! ```

pub mod command;
pub mod scene;
pub mod script;

// Re-export commonly used types
pub use command::{Command, CommandKind};
pub use scene::{Eye, PointLight, Scene, Sphere};
pub use script::{
    load_scene, load_scene_from_string, load_script, parse_script, LoadError, LoadResult,
    ParseError, ParseResult,
};
