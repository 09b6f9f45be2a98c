//! # verdure
//!
//! An engine-agnostic crate that grows 3D plant-like and fractal meshes from
//! L-System grammars via turtle graphics.
//!
//! It decouples the *Genotype* (the L-System axiom and its rewrite rules)
//! from the *Phenotype* (flat vertex buffers), producing a [`TurtleGeometry`]
//! structure that can be ingested by any renderer: upload `line_vertices` as
//! disconnected line segments, `leaf_vertices`/`petal_vertices` as triangle
//! soups, and aim the camera at `centroid`.
//!
//! The pipeline has two stages:
//! 1. [`Grammar::expand`] rewrites an axiom for a fixed number of generations.
//! 2. [`TurtleInterpreter::interpret`] walks the expanded string with a
//!    stateful 3D cursor and accumulates the vertex buffers.

pub mod error;
pub mod geometry;
pub mod grammar;
pub mod interpreter;
pub mod turtle;

pub use error::*;
pub use geometry::*;
pub use grammar::*;
pub use interpreter::*;
pub use turtle::*;
