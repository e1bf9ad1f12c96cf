use std::collections::HashMap;

use eframe::egui::{Pos2, Rect, Vec2, pos2};
use log::debug;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::config::StyleConfig;
use crate::graph::MentionGraph;
use crate::layout::Layout;

/// Stroke width of an edge carrying `weight`: `(weight - 6) / 2`.
///
/// Small weights give zero or negative widths; they are returned as is and
/// simply paint nothing.
pub fn edge_stroke_width(weight: i32) -> f32 {
	(i64::from(weight) - 6) as f32 / 2.0
}

/// A vertex rectangle and its label, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexShape {
	/// Filled rectangle centered on the vertex position.
	pub rect: Rect,
	/// Text drawn at the rectangle's center.
	pub label: String,
}

/// The stroked part of an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgePath {
	/// Straight segment from source to target.
	Line([Pos2; 2]),
	/// Self-loop circle.
	Loop {
		/// Circle center.
		center: Pos2,
		/// Circle radius.
		radius: f32,
	},
}

/// One edge, ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeShape {
	/// Line or loop.
	pub path: EdgePath,
	/// Arrowhead triangle, tip first, centered on the path's midpoint.
	pub arrow: [Pos2; 3],
	/// Stroke width for both the path and the arrowhead.
	pub stroke_width: f32,
	/// Weight as decimal text.
	pub label: String,
	/// Where the label is centered.
	pub label_pos: Pos2,
}

/// Everything the view paints, computed once from graph and layout.
#[derive(Clone, Debug)]
pub struct GraphViewState {
	/// Canvas size.
	pub size: Vec2,
	/// Vertex shapes in graph order.
	pub vertices: Vec<VertexShape>,
	/// Edge shapes in graph order.
	pub edges: Vec<EdgeShape>,
	/// Colors and sizes used when painting.
	pub style: StyleConfig,
}

impl GraphViewState {
	/// Builds the scene for `graph` placed by `layout`.
	pub fn new(graph: &MentionGraph, layout: &Layout, style: &StyleConfig) -> Self {
		let center_of = |idx: NodeIndex| {
			let p = layout.position(idx);
			pos2(p.x as f32, p.y as f32)
		};

		let vertices = graph
			.vertices()
			.map(|(idx, label)| VertexShape {
				rect: Rect::from_center_size(center_of(idx), style.vertex_size),
				label: label.to_owned(),
			})
			.collect();

		let pair = |a: NodeIndex, b: NodeIndex| if a <= b { (a, b) } else { (b, a) };
		let mut totals: HashMap<(NodeIndex, NodeIndex), usize> = HashMap::new();
		for edge in graph.mentions() {
			*totals.entry(pair(edge.source(), edge.target())).or_default() += 1;
		}

		let mut seen: HashMap<(NodeIndex, NodeIndex), usize> = HashMap::new();
		let mut invisible = 0;
		let edges = graph
			.mentions()
			.map(|edge| {
				let key = pair(edge.source(), edge.target());
				let slot = seen.entry(key).or_default();
				let (index, total) = (*slot, totals[&key]);
				*slot += 1;

				let weight = edge.weight().weight;
				let stroke_width = edge_stroke_width(weight);
				if stroke_width <= 0.0 {
					invisible += 1;
				}
				let label = weight.to_string();
				if edge.source() == edge.target() {
					let rect = Rect::from_center_size(center_of(edge.source()), style.vertex_size);
					self_loop(rect, index, stroke_width, label, style)
				} else {
					let offset = (index as f32 - (total - 1) as f32 / 2.0) * style.parallel_spacing;
					let (from, to) = (center_of(edge.source()), center_of(edge.target()));
					let (a, b) = (center_of(key.0), center_of(key.1));
					let normal = direction(b - a).rot90() * offset;
					line(from + normal, to + normal, stroke_width, label, style)
				}
			})
			.collect();

		if invisible > 0 {
			debug!("{invisible} edges have weight 6 or less and a stroke width of zero or below");
		}

		Self {
			size: Vec2::new(layout.width as f32, layout.height as f32),
			vertices,
			edges,
			style: style.clone(),
		}
	}
}

/// Unit vector along `v`, or +x when `v` has no length.
fn direction(v: Vec2) -> Vec2 {
	if v.length() > f32::EPSILON { v.normalized() } else { Vec2::X }
}

/// Triangle pointing along `dir` whose centroid sits at `mid`.
fn arrow_at(mid: Pos2, dir: Vec2, style: &StyleConfig) -> [Pos2; 3] {
	let (tip, back) = (
		mid + dir * (style.arrow_length * 2.0 / 3.0),
		mid - dir * (style.arrow_length / 3.0),
	);
	let wing = dir.rot90() * (style.arrow_width / 2.0);
	[tip, back + wing, back - wing]
}

fn line(from: Pos2, to: Pos2, stroke_width: f32, label: String, style: &StyleConfig) -> EdgeShape {
	let dir = direction(to - from);
	let mid = from + (to - from) / 2.0;
	EdgeShape {
		path: EdgePath::Line([from, to]),
		arrow: arrow_at(mid, dir, style),
		stroke_width,
		label,
		label_pos: mid - dir.rot90() * style.font_size,
	}
}

fn self_loop(
	rect: Rect,
	index: usize,
	stroke_width: f32,
	label: String,
	style: &StyleConfig,
) -> EdgeShape {
	let (center, radius) = (
		rect.left_top(),
		style.self_loop_radius + index as f32 * style.parallel_spacing / 2.0,
	);
	let top = center - Vec2::Y * radius;
	EdgeShape {
		path: EdgePath::Loop { center, radius },
		arrow: arrow_at(top, Vec2::X, style),
		stroke_width,
		label,
		label_pos: top - Vec2::Y * style.font_size,
	}
}
