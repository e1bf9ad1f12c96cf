use std::collections::HashMap;

use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};

/// One parsed line: `source` mentioned `target`, `weight` times.
///
/// Every mention is its own edge, identified by its [`EdgeIndex`]; two
/// mentions with the same endpoints and weight stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mention {
	/// Weight from the third column.
	pub weight: i32,
}

/// Directed multigraph of labeled vertices and weighted mentions.
///
/// Vertices are kept in first-seen order, so iteration order (and with it
/// the layout) only depends on the input text.
#[derive(Clone, Debug, Default)]
pub struct MentionGraph {
	graph: DiGraph<String, Mention>,
	index: HashMap<String, NodeIndex>,
}

impl MentionGraph {
	/// An empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the vertex labeled `label`, adding it if absent.
	pub fn add_vertex(&mut self, label: &str) -> NodeIndex {
		if let Some(&idx) = self.index.get(label) {
			return idx;
		}
		let idx = self.graph.add_node(label.to_owned());
		self.index.insert(label.to_owned(), idx);
		idx
	}

	/// Adds a new `source -> target` edge, creating missing endpoints first.
	pub fn add_mention(&mut self, source: &str, target: &str, weight: i32) -> EdgeIndex {
		let (src, tgt) = (self.add_vertex(source), self.add_vertex(target));
		self.graph.add_edge(src, tgt, Mention { weight })
	}

	/// Looks up a vertex by label.
	pub fn vertex(&self, label: &str) -> Option<NodeIndex> {
		self.index.get(label).copied()
	}

	/// Whether a vertex with this label exists.
	pub fn contains_vertex(&self, label: &str) -> bool {
		self.index.contains_key(label)
	}

	/// Label of a vertex.
	///
	/// # Panics
	/// If `idx` does not belong to this graph.
	pub fn label(&self, idx: NodeIndex) -> &str {
		&self.graph[idx]
	}

	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.graph.node_count()
	}

	/// Number of edges, parallel edges included.
	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}

	/// True when there are no vertices.
	pub fn is_empty(&self) -> bool {
		self.graph.node_count() == 0
	}

	/// Vertices in insertion order.
	pub fn vertices(&self) -> impl Iterator<Item = (NodeIndex, &str)> {
		self.graph
			.node_indices()
			.map(|idx| (idx, self.graph[idx].as_str()))
	}

	/// Edge records in insertion order.
	pub fn mentions(&self) -> impl Iterator<Item = EdgeReference<'_, Mention>> {
		self.graph.edge_references()
	}

	/// The underlying petgraph graph, for algorithms.
	pub fn as_digraph(&self) -> &DiGraph<String, Mention> {
		&self.graph
	}
}
