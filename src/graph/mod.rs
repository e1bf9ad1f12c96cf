//! The mention graph and the edge-list loader that builds it.

mod loader;
mod types;

pub use loader::{load_graph, parse_graph};
pub use types::{Mention, MentionGraph};
