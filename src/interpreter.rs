//! Interpreter that converts an L-System symbol sequence into a [`TurtleGeometry`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], then call [`TurtleInterpreter::interpret`] with an
//! expanded symbol string (typically the output of
//! [`Grammar::expand`](crate::Grammar::expand)).

use crate::error::VerdureError;
use crate::geometry::TurtleGeometry;
use crate::turtle::{TurtleOp, TurtleState};
use glam::Vec3;
use std::time::{Duration, Instant};

/// How often (in symbols) a timed pass checks its deadline.
const TIMEOUT_CHECK_INTERVAL: usize = 1024;

/// Configuration for one interpretation pass.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Distance covered by one forward move; also scales leaf/petal quads.
    /// Zero is legal (all points coincide). Negative is rejected.
    pub step_size: f32,

    /// Rotation angle in degrees applied by every turn/pitch/roll symbol.
    pub turn_angle_degrees: f32,

    /// Optional time budget for one pass; `None` never checks the clock.
    pub timeout: Option<Duration>,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step_size: 1.0,
            turn_angle_degrees: 90.0,
            timeout: None,
        }
    }
}

/// Interprets L-System output to build a [`TurtleGeometry`].
#[derive(Debug)]
pub struct TurtleInterpreter {
    config: TurtleConfig,
    /// Turn angle in radians, converted once at construction.
    turn_angle: f32,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration.
    ///
    /// # Errors
    ///
    /// [`VerdureError::InvalidStepSize`] if `config.step_size` is negative.
    pub fn new(config: TurtleConfig) -> Result<Self, VerdureError> {
        if config.step_size < 0.0 {
            return Err(VerdureError::InvalidStepSize(config.step_size));
        }
        let turn_angle = config.turn_angle_degrees.to_radians();
        Ok(Self { config, turn_angle })
    }

    /// The configuration this interpreter was built with.
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Walks `symbols` left to right and returns the accumulated geometry.
    ///
    /// The turtle starts at the world origin with Heading +Y, Left +X and
    /// Up -Z. Each symbol is dispatched through [`TurtleOp::from_symbol`];
    /// symbols with no turtle meaning are silently ignored, which lets
    /// axioms carry placeholder markers (`X`, `Y`, ...) with no effect.
    ///
    /// # Branching
    ///
    /// `[` saves a by-value snapshot of the cursor (position and frame) onto
    /// a stack; `]` restores and removes the most recent snapshot, so a
    /// bracketed excursion leaves the main path untouched.
    ///
    /// # Centroid
    ///
    /// The running centroid accumulates only on drawing moves: the position
    /// sum starts at the origin, the count starts at one, and both update
    /// once per `F`/`G` after the cursor has advanced. Callers relying on it
    /// for camera placement get the exact same value for the same input
    /// every time.
    ///
    /// # Errors
    ///
    /// [`VerdureError::UnbalancedStateStack`] if a `]` finds the stack
    /// empty, and [`VerdureError::Timeout`] if a configured time budget runs
    /// out. Geometry accumulated before a failure is discarded.
    pub fn interpret(&self, symbols: &str) -> Result<TurtleGeometry, VerdureError> {
        let start_time = Instant::now();
        let step_size = self.config.step_size;

        let mut geometry = TurtleGeometry::new();
        let mut turtle = TurtleState::default();
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut vertex_sum = Vec3::ZERO;
        let mut vertex_count = 1u32;

        for (index, symbol) in symbols.chars().enumerate() {
            if index % TIMEOUT_CHECK_INTERVAL == 0
                && let Some(timeout) = self.config.timeout
                && start_time.elapsed() >= timeout
            {
                return Err(VerdureError::Timeout(timeout));
            }

            match TurtleOp::from_symbol(symbol) {
                TurtleOp::MoveDraw => {
                    geometry.push_line_point(turtle.position);
                    turtle.advance(step_size);
                    vertex_sum += turtle.position;
                    vertex_count += 1;
                    geometry.push_line_point(turtle.position);
                }
                TurtleOp::MoveNoDraw => turtle.advance(step_size),
                TurtleOp::Turn(sign) => turtle.turn(sign * self.turn_angle),
                TurtleOp::Pitch(sign) => turtle.pitch(sign * self.turn_angle),
                TurtleOp::Roll(sign) => turtle.roll(sign * self.turn_angle),
                TurtleOp::TurnAround => turtle.turn_around(),
                TurtleOp::Push => stack.push(turtle.clone()),
                TurtleOp::Pop => {
                    turtle = stack
                        .pop()
                        .ok_or(VerdureError::UnbalancedStateStack(index))?;
                }
                TurtleOp::DrawLeaf => geometry.push_leaf_quad(turtle.quad_vertices(step_size)),
                TurtleOp::DrawPetal => geometry.push_petal_quad(turtle.quad_vertices(step_size)),
                TurtleOp::Ignore => {}
            }
        }

        geometry.centroid = vertex_sum / vertex_count as f32;
        Ok(geometry)
    }
}
