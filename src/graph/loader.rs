use std::fs;
use std::path::Path;

use log::{debug, info};

use super::types::MentionGraph;
use crate::error::{FormatError, LoadError};

/// Reads a UTF-8 edge list from `path` and builds the graph.
///
/// Each non-empty line must be `source<TAB>target<TAB>weight`.
pub fn load_graph(path: impl AsRef<Path>) -> Result<MentionGraph, LoadError> {
	let path = path.as_ref();
	let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let graph = parse_graph(&text)?;
	info!(
		"loaded {}: {} vertices, {} edges",
		path.display(),
		graph.vertex_count(),
		graph.edge_count()
	);
	Ok(graph)
}

/// Builds a graph from edge-list text.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Empty lines are skipped. Any
/// other line must split on tabs into exactly three fields once trailing
/// empty fields are dropped, the last being an `i32`. Lines are not trimmed.
pub fn parse_graph(text: &str) -> Result<MentionGraph, FormatError> {
	let mut graph = MentionGraph::new();
	let mut skipped = 0;
	for (i, line) in text.lines().flat_map(|l| l.split('\r')).enumerate() {
		if line.is_empty() {
			skipped += 1;
			continue;
		}
		let (source, target, weight) = parse_line(i + 1, line)?;
		graph.add_mention(source, target, weight);
	}
	debug!("parsed {} edges, skipped {} blank lines", graph.edge_count(), skipped);
	Ok(graph)
}

fn parse_line(line_number: usize, line: &str) -> Result<(&str, &str, i32), FormatError> {
	let mut fields: Vec<&str> = line.split('\t').collect();
	while fields.last().is_some_and(|f| f.is_empty()) {
		fields.pop();
	}
	let &[source, target, weight] = fields.as_slice() else {
		return Err(FormatError::FieldCount {
			line_number,
			fields: fields.len(),
			line: line.to_owned(),
		});
	};
	let weight = weight.parse::<i32>().map_err(|source| FormatError::Weight {
		line_number,
		weight: weight.to_owned(),
		line: line.to_owned(),
		source,
	})?;
	Ok((source, target, weight))
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use petgraph::visit::EdgeRef;

	use super::*;

	fn weights(graph: &MentionGraph) -> Vec<i32> {
		graph.mentions().map(|e| e.weight().weight).collect()
	}

	#[test]
	fn parses_the_three_line_example() {
		let graph = parse_graph("A\tB\t10\nB\tC\t8\nA\tC\t10\n").unwrap();
		let labels: HashSet<_> = graph.vertices().map(|(_, l)| l).collect();
		assert_eq!(labels, HashSet::from(["A", "B", "C"]));
		assert_eq!(weights(&graph), vec![10, 8, 10]);

		let a = graph.vertex("A").unwrap();
		let from_a: Vec<_> = graph
			.mentions()
			.filter(|e| e.source() == a)
			.map(|e| (graph.label(e.target()), e.weight().weight))
			.collect();
		assert_eq!(from_a, vec![("B", 10), ("C", 10)]);
	}

	#[test]
	fn duplicate_lines_become_parallel_edges() {
		let graph = parse_graph("A\tB\t5\nA\tB\t5\nA\tB\t5").unwrap();
		assert_eq!(graph.vertex_count(), 2);
		assert_eq!(graph.edge_count(), 3);
	}

	#[test]
	fn vertex_set_is_union_of_first_two_columns() {
		let text = "x\ty\t1\ny\tz\t2\n\nz\tx\t3\nw\tw\t4\n";
		let graph = parse_graph(text).unwrap();
		let expected: HashSet<&str> = text
			.lines()
			.filter(|l| !l.is_empty())
			.flat_map(|l| l.split('\t').take(2))
			.collect();
		let actual: HashSet<_> = graph.vertices().map(|(_, l)| l).collect();
		assert_eq!(actual, expected);
		assert_eq!(graph.edge_count(), 4);
	}

	#[test]
	fn blank_lines_only_give_an_empty_graph() {
		let graph = parse_graph("\n\n\r\n\n").unwrap();
		assert!(graph.is_empty());
		assert_eq!(graph.edge_count(), 0);
		assert!(parse_graph("").unwrap().is_empty());
	}

	#[test]
	fn wrong_field_count_names_the_line() {
		let err = parse_graph("A\tB\t1\nA\tB\n").unwrap_err();
		assert_eq!(
			err,
			FormatError::FieldCount {
				line_number: 2,
				fields: 2,
				line: "A\tB".to_owned(),
			}
		);
		assert_eq!(err.line(), "A\tB");

		let err = parse_graph("A\tB\t1\t2").unwrap_err();
		assert!(matches!(err, FormatError::FieldCount { fields: 4, .. }));
		assert_eq!(err.line(), "A\tB\t1\t2");
	}

	#[test]
	fn trailing_tabs_are_dropped() {
		let graph = parse_graph("A\tB\t1\t\nB\tC\t2\t\t").unwrap();
		assert_eq!(weights(&graph), vec![1, 2]);

		let err = parse_graph("A\tB\t\t").unwrap_err();
		assert!(matches!(err, FormatError::FieldCount { fields: 2, .. }));
		assert_eq!(err.line(), "A\tB\t\t");
	}

	#[test]
	fn whitespace_only_line_is_malformed() {
		let err = parse_graph("A\tB\t1\n   \n").unwrap_err();
		assert_eq!(err.line_number(), 2);
		assert_eq!(err.line(), "   ");
	}

	#[test]
	fn non_integer_weight_is_rejected() {
		let err = parse_graph("A\tB\tabc").unwrap_err();
		match &err {
			FormatError::Weight { weight, line, .. } => {
				assert_eq!(weight, "abc");
				assert_eq!(line, "A\tB\tabc");
			}
			other => panic!("unexpected error: {other:?}"),
		}
		assert!(err.to_string().contains("A\\tB\\tabc"));

		assert!(parse_graph("A\tB\t1.5").is_err());
		assert!(parse_graph("A\tB\t 3").is_err());
	}

	#[test]
	fn signed_weights_parse() {
		let graph = parse_graph("A\tB\t-4\nB\tA\t+12").unwrap();
		assert_eq!(weights(&graph), vec![-4, 12]);
	}

	#[test]
	fn crlf_line_endings_are_accepted() {
		let graph = parse_graph("A\tB\t1\r\nB\tC\t2\r\n").unwrap();
		assert_eq!(weights(&graph), vec![1, 2]);
	}

	#[test]
	fn lone_carriage_return_ends_a_line() {
		let graph = parse_graph("A\tB\t1\rB\tC\t2\r").unwrap();
		assert_eq!(weights(&graph), vec![1, 2]);

		let err = parse_graph("A\tB\t1\rA\tB").unwrap_err();
		assert_eq!(err.line_number(), 2);
	}

	#[test]
	fn empty_labels_are_not_validated() {
		let graph = parse_graph("\tB\t1").unwrap();
		assert!(graph.contains_vertex(""));
	}
}
