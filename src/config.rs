//! Configuration values for loading, layout and drawing.
//!
//! Everything the program needs is gathered in [`Config`] and passed down
//! explicitly; nothing is read from the command line or the environment.

use std::path::PathBuf;

use eframe::egui::{Color32, Vec2};

/// Input file read by the binary, relative to the working directory.
pub const DEFAULT_INPUT: &str = "mentions.txt";

/// Window title.
pub const DEFAULT_TITLE: &str = "ヒトコト";

/// Everything needed to load, lay out and show a graph.
#[derive(Clone, Debug)]
pub struct Config {
	/// Edge list to read.
	pub input: PathBuf,
	/// Window title.
	pub title: String,
	/// Layout parameters, including the canvas size.
	pub layout: LayoutConfig,
	/// Shape sizes and colors.
	pub style: StyleConfig,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			input: PathBuf::from(DEFAULT_INPUT),
			title: DEFAULT_TITLE.to_owned(),
			layout: LayoutConfig::default(),
			style: StyleConfig::default(),
		}
	}
}

/// Kamada-Kawai layout parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Canvas width in layout units.
	pub width: f64,
	/// Canvas height in layout units.
	pub height: f64,
	/// Allow Kamada-Kawai to swap vertex pairs once it stops improving.
	pub exchange_vertices: bool,
	/// Fraction of the graph diameter used as the ideal distance between
	/// vertices that are not connected.
	pub disconnected_distance_multiplier: f64,
	/// Scales the ideal edge length derived from canvas size and diameter.
	pub length_factor: f64,
	/// Upper bound on Kamada-Kawai steps.
	pub max_iterations: usize,
	/// Gradient magnitude below which a vertex counts as settled.
	pub epsilon: f64,
	/// Seed for the initial random placement.
	pub seed: u64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			width: 1800.0,
			height: 1080.0,
			exchange_vertices: false,
			disconnected_distance_multiplier: 0.68,
			length_factor: 0.9,
			max_iterations: 2000,
			epsilon: 0.1,
			seed: 0x6d65_6e74_696f_6e73,
		}
	}
}

impl LayoutConfig {
	/// Canvas size as an egui vector.
	pub fn canvas_size(&self) -> Vec2 {
		Vec2::new(self.width as f32, self.height as f32)
	}
}

/// Sizes and colors of drawn shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
	/// Size of every vertex rectangle.
	pub vertex_size: Vec2,
	/// Vertex fill.
	pub vertex_fill: Color32,
	/// Vertex outline.
	pub vertex_outline: Color32,
	/// Edge line color.
	pub edge_color: Color32,
	/// Arrowhead fill and outline color.
	pub arrow_color: Color32,
	/// Arrowhead length along the edge.
	pub arrow_length: f32,
	/// Arrowhead width across the edge.
	pub arrow_width: f32,
	/// Vertex and edge label color.
	pub label_color: Color32,
	/// Label font size.
	pub font_size: f32,
	/// Perpendicular gap between parallel edges.
	pub parallel_spacing: f32,
	/// Radius of a self-loop circle.
	pub self_loop_radius: f32,
	/// Canvas background.
	pub background: Color32,
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self {
			vertex_size: Vec2::new(120.0, 20.0),
			vertex_fill: Color32::YELLOW,
			vertex_outline: Color32::BLACK,
			edge_color: Color32::from_rgb(0, 255, 255),
			arrow_color: Color32::BLACK,
			arrow_length: 10.0,
			arrow_width: 8.0,
			label_color: Color32::BLACK,
			font_size: 12.0,
			parallel_spacing: 12.0,
			self_loop_radius: 10.0,
			background: Color32::WHITE,
		}
	}
}
