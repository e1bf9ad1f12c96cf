//! Error types for loading and showing a mention graph.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// A non-empty line of the edge list that is not `source<TAB>target<TAB>weight`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
	/// The line did not split into exactly three tab-separated fields.
	#[error("line {line_number}: expected 3 tab-separated fields, found {fields}: {line:?}")]
	FieldCount {
		/// 1-based line number in the input.
		line_number: usize,
		/// Number of fields the line split into.
		fields: usize,
		/// The raw line.
		line: String,
	},

	/// The third field is not a base-10 integer.
	#[error("line {line_number}: weight {weight:?} is not an integer: {line:?}")]
	Weight {
		/// 1-based line number in the input.
		line_number: usize,
		/// The offending weight field.
		weight: String,
		/// The raw line.
		line: String,
		/// Why the field did not parse.
		#[source]
		source: ParseIntError,
	},
}

impl FormatError {
	/// The raw text of the line that failed.
	pub fn line(&self) -> &str {
		match self {
			Self::FieldCount { line, .. } | Self::Weight { line, .. } => line,
		}
	}

	/// 1-based line number of the line that failed.
	pub fn line_number(&self) -> usize {
		match self {
			Self::FieldCount { line_number, .. } | Self::Weight { line_number, .. } => *line_number,
		}
	}
}

/// Failure to turn an input file into a graph.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The file is missing, unreadable or not UTF-8.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		/// Path that was read.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The file was read but a line is malformed.
	#[error(transparent)]
	Format(#[from] FormatError),
}

/// Top-level error returned by [`crate::run`].
#[derive(Debug, Error)]
pub enum Error {
	/// The input could not be loaded; no window was opened.
	#[error("could not load mention graph")]
	Load(#[from] LoadError),

	/// The native window or its event loop could not be created.
	#[error("could not open window: {0}")]
	Window(String),
}

impl From<eframe::Error> for Error {
	fn from(err: eframe::Error) -> Self {
		Self::Window(err.to_string())
	}
}
