//! Scrollable view of a laid-out mention graph.

mod component;
mod render;
mod state;

pub use component::{GraphViewApp, show};
pub use state::{EdgePath, EdgeShape, GraphViewState, VertexShape, edge_stroke_width};
