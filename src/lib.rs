//! Loads a tab-separated mention list, lays it out and shows it in a window.
//!
//! The pipeline is strictly sequential: [`load_graph`] builds a
//! [`MentionGraph`], [`compute_layout`] places its vertices, and
//! [`components::graph_view::show`] opens the window.

use log::LevelFilter;

pub mod components;
pub mod config;
pub mod error;
pub mod graph;
pub mod layout;

pub use crate::config::{Config, LayoutConfig, StyleConfig};
pub use crate::error::{Error, FormatError, LoadError};
pub use crate::graph::{Mention, MentionGraph, load_graph, parse_graph};
pub use crate::layout::{Layout, Point, compute_layout};

/// Initialize logging. Only warnings and errors are shown unless `RUST_LOG`
/// says otherwise.
pub fn init_logging() {
	let _ = env_logger::Builder::new()
		.filter_level(LevelFilter::Warn)
		.parse_default_env()
		.try_init();
}

/// Loads `config.input`, lays it out and blocks until the window is closed.
///
/// Load errors are returned before any window is created.
pub fn run(config: &Config) -> Result<(), Error> {
	let graph = load_graph(&config.input)?;
	let layout = compute_layout(&graph, &config.layout);
	components::graph_view::show(graph, layout, config)?;
	Ok(())
}
