//! Vertex placement.
//!
//! Layout is a pure step: it reads a [`MentionGraph`] and a [`LayoutConfig`]
//! and returns positions, without touching any window.

mod kamada_kawai;

use petgraph::graph::NodeIndex;

use crate::config::LayoutConfig;
use crate::graph::MentionGraph;

pub use kamada_kawai::KamadaKawai;

/// A position in layout units, origin at the top-left of the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// A point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// Computed vertex positions on a fixed-size canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
	positions: Vec<Point>,
}

impl Layout {
	pub(crate) fn new(width: f64, height: f64, positions: Vec<Point>) -> Self {
		Self {
			width,
			height,
			positions,
		}
	}

	/// Position of a vertex.
	///
	/// # Panics
	/// If `idx` is not a vertex of the graph this layout was computed for.
	pub fn position(&self, idx: NodeIndex) -> Point {
		self.positions[idx.index()]
	}

	/// All positions, indexed like the graph's vertices.
	pub fn positions(&self) -> &[Point] {
		&self.positions
	}

	/// Number of placed vertices.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// True when nothing was placed.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	/// Canvas center.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}
}

/// Places every vertex of `graph` on the canvas described by `config`.
pub fn compute_layout(graph: &MentionGraph, config: &LayoutConfig) -> Layout {
	KamadaKawai::new(graph, config).run()
}
