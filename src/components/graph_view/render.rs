use eframe::egui::{Align2, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::state::{EdgePath, GraphViewState};

/// Paints the whole scene with its top-left corner at `origin`.
pub fn paint(state: &GraphViewState, painter: &Painter, origin: Pos2) {
	painter.rect_filled(
		Rect::from_min_size(origin, state.size),
		0.0,
		state.style.background,
	);
	let offset = origin.to_vec2();
	draw_edges(state, painter, offset);
	draw_vertices(state, painter, offset);
}

fn draw_edges(state: &GraphViewState, painter: &Painter, offset: Vec2) {
	let style = &state.style;
	let font = FontId::proportional(style.font_size);

	for edge in &state.edges {
		let stroke = Stroke::new(edge.stroke_width, style.edge_color);
		let arrow_stroke = Stroke::new(edge.stroke_width, style.arrow_color);
		match edge.path {
			EdgePath::Line([from, to]) => {
				painter.line_segment([from + offset, to + offset], stroke);
			}
			EdgePath::Loop { center, radius } => {
				painter.circle_stroke(center + offset, radius, stroke);
			}
		}
		painter.add(Shape::convex_polygon(
			edge.arrow.iter().map(|&p| p + offset).collect(),
			style.arrow_color,
			arrow_stroke,
		));
		painter.text(
			edge.label_pos + offset,
			Align2::CENTER_CENTER,
			&edge.label,
			font.clone(),
			style.label_color,
		);
	}
}

fn draw_vertices(state: &GraphViewState, painter: &Painter, offset: Vec2) {
	let style = &state.style;
	let font = FontId::proportional(style.font_size);

	for vertex in &state.vertices {
		let rect = vertex.rect.translate(offset);
		painter.rect_filled(rect, 0.0, style.vertex_fill);
		painter.rect_stroke(rect, 0.0, Stroke::new(1.0, style.vertex_outline));
		painter.text(
			rect.center(),
			Align2::CENTER_CENTER,
			&vertex.label,
			font.clone(),
			style.label_color,
		);
	}
}
