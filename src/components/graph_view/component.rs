use eframe::egui::{self, Sense, Vec2, scroll_area::ScrollBarVisibility, style::ScrollStyle};
use log::info;

use super::render;
use super::state::GraphViewState;
use crate::config::Config;
use crate::graph::MentionGraph;
use crate::layout::Layout;

/// Native app that shows one prepared scene inside a scroll area.
pub struct GraphViewApp {
	state: GraphViewState,
}

impl GraphViewApp {
	/// Wraps a prepared scene.
	pub fn new(state: GraphViewState) -> Self {
		Self { state }
	}
}

impl eframe::App for GraphViewApp {
	fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
		egui::CentralPanel::default()
			.frame(egui::Frame::none().fill(self.state.style.background))
			.show(ctx, |ui| {
				egui::ScrollArea::both()
					.scroll_bar_visibility(ScrollBarVisibility::AlwaysVisible)
					.auto_shrink([false, false])
					.show(ui, |ui| {
						let (response, painter) = ui.allocate_painter(self.state.size, Sense::hover());
						render::paint(&self.state, &painter, response.rect.min);
					});
			});
	}
}

/// Opens a window sized to fit the canvas and blocks until it is closed.
pub fn show(graph: MentionGraph, layout: Layout, config: &Config) -> Result<(), eframe::Error> {
	let state = GraphViewState::new(&graph, &layout, &config.style);

	let scroll = ScrollStyle::solid();
	let inner_size = state.size + Vec2::splat(scroll.allocated_width());
	info!("opening {}x{} window", inner_size.x, inner_size.y);

	let options = eframe::NativeOptions {
		viewport: egui::ViewportBuilder::default()
			.with_title(config.title.clone())
			.with_inner_size(inner_size),
		..Default::default()
	};
	eframe::run_native(
		&config.title,
		options,
		Box::new(move |cc| {
			cc.egui_ctx.style_mut(|style| style.spacing.scroll = scroll);
			Ok(Box::new(GraphViewApp::new(state)))
		}),
	)
}
