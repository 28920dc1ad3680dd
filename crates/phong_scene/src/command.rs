//! Scene-construction commands.
//!
//! Every way of mutating a [`Scene`] is one of these commands, so a scene can
//! be described as a list of them (see [`crate::script`]) and replayed onto a
//! fresh scene.

use phong_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

use crate::scene::Scene;

/// A single scene mutation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    /// Clear lights and spheres, restore default ambient/background/fov/camera
    ResetScene,

    /// Append a point light
    AddLight { color: Color, position: Vec3 },

    /// Overwrite the ambient color
    SetAmbient { color: Color },

    /// Overwrite the background color
    SetBackground { color: Color },

    /// Overwrite the field of view (degrees)
    SetFov { degrees: f32 },

    /// Overwrite the camera pose
    SetEye { position: Vec3, look_at: Vec3, up: Vec3 },

    /// Append a sphere
    AddSphere {
        center: Vec3,
        radius: f32,
        diffuse_color: Color,
        ka: f32,
        ks: f32,
        specular_exponent: f32,
    },
}

/// The kind of a [`Command`], independent of its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    ResetScene,
    AddLight,
    SetAmbient,
    SetBackground,
    SetFov,
    SetEye,
    AddSphere,
}

impl CommandKind {
    pub const ALL: [CommandKind; 7] = [
        CommandKind::ResetScene,
        CommandKind::AddLight,
        CommandKind::SetAmbient,
        CommandKind::SetBackground,
        CommandKind::SetFov,
        CommandKind::SetEye,
        CommandKind::AddSphere,
    ];

    /// Canonical command name.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::ResetScene => "resetScene",
            CommandKind::AddLight => "addLight",
            CommandKind::SetAmbient => "setAmbient",
            CommandKind::SetBackground => "setBackground",
            CommandKind::SetFov => "setFov",
            CommandKind::SetEye => "setEye",
            CommandKind::AddSphere => "addSphere",
        }
    }

    /// Snake-case alias accepted alongside the canonical name.
    pub fn alias(self) -> &'static str {
        match self {
            CommandKind::ResetScene => "reset_scene",
            CommandKind::AddLight => "new_light",
            CommandKind::SetAmbient => "ambient_light",
            CommandKind::SetBackground => "set_background",
            CommandKind::SetFov => "set_fov",
            CommandKind::SetEye => "set_eye",
            CommandKind::AddSphere => "new_sphere",
        }
    }

    /// Number of numeric parameters the command takes.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::ResetScene => 0,
            CommandKind::AddLight => 6,
            CommandKind::SetAmbient | CommandKind::SetBackground => 3,
            CommandKind::SetFov => 1,
            CommandKind::SetEye => 9,
            CommandKind::AddSphere => 10,
        }
    }

    /// Look up a kind by canonical name or alias.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name || kind.alias() == name)
    }

    /// Build the command from its flat parameter list.
    ///
    /// Returns `None` if `values` does not have exactly [`arity`](Self::arity)
    /// elements.
    pub fn build(self, values: &[f32]) -> Option<Command> {
        let command = match (self, values) {
            (CommandKind::ResetScene, []) => Command::ResetScene,
            (CommandKind::AddLight, &[r, g, b, x, y, z]) => Command::AddLight {
                color: Color::new(r, g, b),
                position: Vec3::new(x, y, z),
            },
            (CommandKind::SetAmbient, &[r, g, b]) => Command::SetAmbient {
                color: Color::new(r, g, b),
            },
            (CommandKind::SetBackground, &[r, g, b]) => Command::SetBackground {
                color: Color::new(r, g, b),
            },
            (CommandKind::SetFov, &[degrees]) => Command::SetFov { degrees },
            (CommandKind::SetEye, &[x1, y1, z1, x2, y2, z2, x3, y3, z3]) => Command::SetEye {
                position: Vec3::new(x1, y1, z1),
                look_at: Vec3::new(x2, y2, z2),
                up: Vec3::new(x3, y3, z3),
            },
            (CommandKind::AddSphere, &[x, y, z, radius, dr, dg, db, ka, ks, specular_exponent]) => {
                Command::AddSphere {
                    center: Vec3::new(x, y, z),
                    radius,
                    diffuse_color: Color::new(dr, dg, db),
                    ka,
                    ks,
                    specular_exponent,
                }
            }
            _ => return None,
        };
        Some(command)
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::ResetScene => CommandKind::ResetScene,
            Command::AddLight { .. } => CommandKind::AddLight,
            Command::SetAmbient { .. } => CommandKind::SetAmbient,
            Command::SetBackground { .. } => CommandKind::SetBackground,
            Command::SetFov { .. } => CommandKind::SetFov,
            Command::SetEye { .. } => CommandKind::SetEye,
            Command::AddSphere { .. } => CommandKind::AddSphere,
        }
    }
}

impl Scene {
    /// Apply one command to this scene.
    pub fn apply(&mut self, command: &Command) {
        match *command {
            Command::ResetScene => self.reset(),
            Command::AddLight { color, position } => self.add_light(color, position),
            Command::SetAmbient { color } => self.set_ambient(color),
            Command::SetBackground { color } => self.set_background(color),
            Command::SetFov { degrees } => self.set_fov(degrees),
            Command::SetEye {
                position,
                look_at,
                up,
            } => self.set_eye(position, look_at, up),
            Command::AddSphere {
                center,
                radius,
                diffuse_color,
                ka,
                ks,
                specular_exponent,
            } => self.add_sphere(center, radius, diffuse_color, ka, ks, specular_exponent),
        }
    }

    /// Apply commands in order.
    pub fn apply_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a Command>) {
        for command in commands {
            self.apply(command);
        }
    }
}
