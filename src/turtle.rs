//! Turtle state and operations for mesh interpretation.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Tracks position and the HLU orientation frame: an orthonormal matrix whose
/// columns are the turtle's Heading (forward), Left and Up axes in world
/// space. All rotations right-multiply the frame, so they compose in the
/// turtle's own local coordinate system rather than world space.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the cursor.
    pub position: Vec3,

    /// Current orientation frame, columns `[Heading, Left, Up]`.
    pub hlu: Mat3,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            // Heading +Y, Left +X, Up -Z. Renderers that want visual parity
            // with existing presets must start from this exact basis.
            hlu: Mat3::from_cols(Vec3::Y, Vec3::X, Vec3::NEG_Z),
        }
    }
}

impl TurtleState {
    /// The turtle's forward direction in world space.
    pub fn heading(&self) -> Vec3 {
        self.hlu.x_axis
    }

    /// The turtle's left direction in world space.
    pub fn left(&self) -> Vec3 {
        self.hlu.y_axis
    }

    /// The turtle's up direction in world space.
    pub fn up(&self) -> Vec3 {
        self.hlu.z_axis
    }

    /// Moves the cursor `distance` along its current heading.
    pub fn advance(&mut self, distance: f32) {
        self.position += self.heading() * distance;
    }

    /// Rotates the frame by `angle` radians about the local Up axis.
    pub fn turn(&mut self, angle: f32) {
        let (s, c) = angle.sin_cos();
        let rot = Mat3::from_cols(Vec3::new(c, -s, 0.0), Vec3::new(s, c, 0.0), Vec3::Z);
        self.hlu *= rot;
    }

    /// Rotates the frame by `angle` radians about the local Left axis.
    pub fn pitch(&mut self, angle: f32) {
        let (s, c) = angle.sin_cos();
        let rot = Mat3::from_cols(Vec3::new(c, 0.0, s), Vec3::Y, Vec3::new(-s, 0.0, c));
        self.hlu *= rot;
    }

    /// Rotates the frame by `angle` radians about the local Heading axis.
    pub fn roll(&mut self, angle: f32) {
        let (s, c) = angle.sin_cos();
        let rot = Mat3::from_cols(Vec3::X, Vec3::new(0.0, c, s), Vec3::new(0.0, -s, c));
        self.hlu *= rot;
    }

    /// Rotates the frame 180 degrees about the local Up axis, negating
    /// Heading and Left.
    pub fn turn_around(&mut self) {
        let rot = Mat3::from_cols(Vec3::NEG_X, Vec3::NEG_Y, Vec3::Z);
        self.hlu *= rot;
    }

    /// The six corners of a flat leaf/petal quad at the current pose.
    ///
    /// The quad fans symmetrically left and right of the heading and is
    /// scaled to one step length:
    ///
    /// ```text
    /// edge1 = normalize(H + 0.5 * L) * step_size
    /// edge2 = normalize(H - 0.5 * L) * step_size
    /// diag  = edge1 + edge2
    /// ```
    ///
    /// Returned as two triangles, `(P, P+edge1, P+diag)` then
    /// `(P+diag, P+edge2, P)`.
    pub fn quad_vertices(&self, step_size: f32) -> [Vec3; 6] {
        let edge1 = (self.heading() + 0.5 * self.left()).normalize() * step_size;
        let edge2 = (self.heading() - 0.5 * self.left()).normalize() * step_size;
        let diag = edge1 + edge2;
        let p = self.position;
        [p, p + edge1, p + diag, p + diag, p + edge2, p]
    }
}

/// Operations the turtle can perform, one per recognized symbol.
///
/// The signed rotation variants carry a sign multiplier that is applied to
/// the configured turn angle at interpretation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Advance one step and emit a line segment (`F`, `G`).
    MoveDraw,
    /// Advance one step without emitting anything (`f`).
    MoveNoDraw,
    /// Rotate about the local Up axis (`+` negative, `-` positive).
    Turn(f32),
    /// Rotate about the local Left axis (`&` negative, `^` positive).
    Pitch(f32),
    /// Rotate about the local Heading axis (`\` negative, `/` positive).
    Roll(f32),
    /// Turn 180 degrees (`|`).
    TurnAround,
    /// Save the cursor state onto the stack (`[`).
    Push,
    /// Restore the most recently saved cursor state (`]`).
    Pop,
    /// Emit a leaf quad at the current pose (`L`).
    DrawLeaf,
    /// Emit a petal quad at the current pose (`P`).
    DrawPetal,
    /// Symbol has no turtle meaning; axioms may carry such markers freely.
    Ignore,
}

impl TurtleOp {
    /// Classifies one symbol of an expanded L-System string.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'F' | 'G' => Self::MoveDraw,
            'f' => Self::MoveNoDraw,
            '+' => Self::Turn(-1.0),
            '-' => Self::Turn(1.0),
            '&' => Self::Pitch(-1.0),
            '^' => Self::Pitch(1.0),
            '\\' => Self::Roll(-1.0),
            '/' => Self::Roll(1.0),
            '|' => Self::TurnAround,
            '[' => Self::Push,
            ']' => Self::Pop,
            'L' => Self::DrawLeaf,
            'P' => Self::DrawPetal,
            _ => Self::Ignore,
        }
    }
}
