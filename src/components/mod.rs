//! Window components.

pub mod graph_view;
