//! Scene script support.
//!
//! A scene script is a plain-text list of scene commands, one per line:
//!
//! ```text
//! # three spheres under one light
//! resetScene
//! setBackground 0.1 0.1 0.2
//! setFov 60
//! setEye 0 0 0, 0 0 -1, 0 1 0
//! addLight 1 1 1, 5 5 0
//! addSphere 0 0 -4, 1, 0.8 0.2 0.2, 0.2, 0.5, 40
//! ```
//!
//! Parameters are separated by whitespace and/or commas. Blank lines and
//! `#` comments are ignored. Command names are matched against both the
//! camelCase names (`addSphere`) and their snake_case aliases
//! (`new_sphere`).
//!
//! Scenes can also be saved and restored as JSON snapshots.

mod loader;
mod parser;

pub use loader::*;
pub use parser::*;
