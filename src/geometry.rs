//! Engine-agnostic geometry output.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The mesh produced by one interpretation pass.
///
/// This structure represents the "Phenotype" generated from an L-System.
/// Each buffer is a flat sequence of floats, three per 3D point, in the
/// layout renderers upload directly:
///
/// * `line_vertices` — two points per drawing move, forming disconnected
///   line segments (the branches).
/// * `leaf_vertices` / `petal_vertices` — six points per emission, two
///   triangles forming one flat quad.
///
/// `centroid` is the running mean of all post-move cursor positions, meant
/// for re-centering a camera on the structure.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TurtleGeometry {
    /// Line-segment endpoints; length is always a multiple of 6.
    pub line_vertices: Vec<f32>,

    /// Leaf quad corners; length is always a multiple of 18.
    pub leaf_vertices: Vec<f32>,

    /// Petal quad corners; length is always a multiple of 18.
    pub petal_vertices: Vec<f32>,

    /// Incremental mean of the drawing moves' end positions.
    pub centroid: Vec3,
}

impl TurtleGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line-segment endpoint.
    pub fn push_line_point(&mut self, point: Vec3) {
        self.line_vertices.extend_from_slice(&point.to_array());
    }

    /// Appends the six corners of one leaf quad.
    pub fn push_leaf_quad(&mut self, corners: [Vec3; 6]) {
        push_points(&mut self.leaf_vertices, &corners);
    }

    /// Appends the six corners of one petal quad.
    pub fn push_petal_quad(&mut self, corners: [Vec3; 6]) {
        push_points(&mut self.petal_vertices, &corners);
    }

    /// Number of line segments drawn so far.
    pub fn line_segment_count(&self) -> usize {
        self.line_vertices.len() / 6
    }

    /// Number of leaf quads emitted so far.
    pub fn leaf_count(&self) -> usize {
        self.leaf_vertices.len() / 18
    }

    /// Number of petal quads emitted so far.
    pub fn petal_count(&self) -> usize {
        self.petal_vertices.len() / 18
    }

    /// True if no vertices were emitted at all.
    pub fn is_empty(&self) -> bool {
        self.line_vertices.is_empty()
            && self.leaf_vertices.is_empty()
            && self.petal_vertices.is_empty()
    }
}

fn push_points(buffer: &mut Vec<f32>, points: &[Vec3]) {
    buffer.reserve(points.len() * 3);
    for point in points {
        buffer.extend_from_slice(&point.to_array());
    }
}
