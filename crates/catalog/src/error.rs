//! Error types for catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading an item catalog.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The file does not carry a `.json` extension.
	#[error("unsupported catalog file type: {path} (expected a .json file)")]
	UnsupportedFileType {
		/// Path that was rejected.
		path: PathBuf,
	},

	/// Error reading a catalog file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The file was read but its contents are not a valid catalog.
	#[error("invalid catalog {path}: {error}")]
	Parse {
		/// Path to the offending file.
		path: PathBuf,
		/// The underlying JSON error, with line and column.
		error: serde_json::Error,
	},

	/// In-memory JSON text is not a valid catalog.
	#[error("invalid catalog: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, LoadError>;
