//! Item catalog model and JSON loader.
//!
//! A catalog is an ordered list of `{ id, name }` records plus two informational
//! metadata scalars:
//!
//! ```json
//! { "version": 3, "count": 2, "items": [{ "id": 1, "name": "Health Potion" }] }
//! ```
//!
//! Record order is significant: downstream consumers iterate it as-is and use it
//! to break ties. The declared `count` is never checked against the actual list
//! length; a mismatch is only logged.

mod error;
#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

pub use error::{LoadError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A single catalog entry as supplied by the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
	/// Numeric item id, rendered verbatim downstream.
	pub id: i128,
	/// Untrusted display name. May be empty or contain arbitrary Unicode.
	#[serde(alias = "rawName")]
	pub name: String,
}

impl CatalogRecord {
	pub fn new(id: i128, name: impl Into<String>) -> Self {
		Self { id, name: name.into() }
	}
}

/// An ordered, immutable list of item records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
	/// Data file version. Informational only.
	#[serde(default)]
	pub version: u64,
	/// Declared number of items. Informational only.
	#[serde(default)]
	pub count: u64,
	items: Vec<CatalogRecord>,
}

impl Catalog {
	/// Builds a catalog in memory; `count` is set to the actual record count.
	pub fn new(version: u64, items: Vec<CatalogRecord>) -> Self {
		Self {
			version,
			count: items.len() as u64,
			items,
		}
	}

	/// Reads and parses a `.json` catalog file.
	pub fn load(path: &Path) -> Result<Self> {
		if !path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
			return Err(LoadError::UnsupportedFileType {
				path: path.to_path_buf(),
			});
		}

		let content = fs::read_to_string(path).map_err(|error| LoadError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let catalog: Catalog = serde_json::from_str(&content).map_err(|error| LoadError::Parse {
			path: path.to_path_buf(),
			error,
		})?;

		info!(
			path = %path.display(),
			version = catalog.version,
			declared = catalog.count,
			actual = catalog.len(),
			"loaded item catalog"
		);
		catalog.warn_on_count_mismatch();
		Ok(catalog)
	}

	/// Parses catalog JSON text without touching the file system.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let catalog: Catalog = serde_json::from_str(json)?;
		catalog.warn_on_count_mismatch();
		Ok(catalog)
	}

	pub fn records(&self) -> &[CatalogRecord] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns true when the declared count disagrees with the record list.
	pub fn count_mismatch(&self) -> bool {
		self.count != self.items.len() as u64
	}

	fn warn_on_count_mismatch(&self) {
		if self.count_mismatch() {
			warn!(
				declared = self.count,
				actual = self.items.len(),
				"declared item count does not match catalog contents"
			);
		}
	}
}
