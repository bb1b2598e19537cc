//! Item catalog to C enum declaration generator.
//!
//! Each record flows through a fixed pipeline:
//!
//! 1. [`sanitize::normalize`]: trim, collapse invalid runs to `_`, upper-case.
//! 2. [`sanitize::is_sentinel`]: placeholder names (`""`, `0`, `NULL`, `NONE`, `N`) drop the record.
//! 3. [`sanitize::prefix_leading_digit`]: `_` before a leading digit.
//! 4. [`keywords::escape_reserved`]: `_` after reserved words.
//! 5. [`NameResolver`]: `_2`, `_3`, ... for repeated candidates, in catalog order.
//!
//! [`render`] then emits `enum eItems { NAME = ID, ... };`.

mod error;
pub mod keywords;
pub mod render;
pub mod resolve;
pub mod sanitize;

pub use error::{GenerateError, Result};
use itemenum_catalog::Catalog;
pub use render::{ENUM_NAME, EnumEntry, render};
pub use resolve::NameResolver;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default indent width, in spaces.
pub const DEFAULT_INDENT: usize = 4;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
	/// Spaces before each enumerator line.
	pub indent: usize,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			indent: DEFAULT_INDENT,
		}
	}
}

/// Converts one display name into its pre-collision candidate.
///
/// Returns `None` when the name is a placeholder and the record should be dropped.
pub fn candidate(raw: &str) -> Option<String> {
	guarded_candidate(raw).map(|guarded| guarded.name)
}

/// A candidate plus whether the keyword guard had to escape it.
struct Guarded {
	name: String,
	escaped: bool,
}

fn guarded_candidate(raw: &str) -> Option<Guarded> {
	let normalized = sanitize::normalize(raw);
	if sanitize::is_sentinel(&normalized) {
		return None;
	}
	let body = sanitize::prefix_leading_digit(normalized);
	let escaped = keywords::is_reserved(&body);
	Some(Guarded {
		name: keywords::escape_reserved(body),
		escaped,
	})
}

/// Holds a catalog and turns it into an enum declaration.
#[derive(Debug, Clone, Default)]
pub struct EnumGenerator {
	config: GeneratorConfig,
	catalog: Option<Catalog>,
}

impl EnumGenerator {
	pub fn new(config: GeneratorConfig) -> Self {
		Self { config, catalog: None }
	}

	pub fn with_catalog(config: GeneratorConfig, catalog: Catalog) -> Self {
		Self {
			config,
			catalog: Some(catalog),
		}
	}

	/// Replaces the current catalog, if any.
	pub fn load(&mut self, catalog: Catalog) {
		self.catalog = Some(catalog);
	}

	pub fn is_loaded(&self) -> bool {
		self.catalog.is_some()
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Resolves every surviving record to a unique enumerator, in catalog order.
	pub fn entries(&self) -> Result<Vec<EnumEntry>> {
		let catalog = self.catalog.as_ref().ok_or(GenerateError::NotLoaded)?;

		let mut resolver = NameResolver::new();
		let mut entries = Vec::with_capacity(catalog.len());
		let mut dropped = 0usize;
		let mut escaped = 0usize;
		let mut renamed = 0usize;

		for record in catalog.records() {
			let Some(Guarded { name: candidate, escaped: was_escaped }) = guarded_candidate(&record.name) else {
				debug!(id = %record.id, name = ?record.name, "dropping placeholder record");
				dropped += 1;
				continue;
			};
			if was_escaped {
				debug!(id = %record.id, %candidate, "escaped reserved word");
				escaped += 1;
			}

			let name = resolver.resolve(&candidate);
			if name != candidate {
				debug!(id = %record.id, %candidate, %name, "renamed colliding identifier");
				renamed += 1;
			}
			entries.push(EnumEntry { name, id: record.id });
		}

		info!(
			emitted = entries.len(),
			dropped, escaped, renamed, "resolved enum identifiers"
		);
		Ok(entries)
	}

	/// Renders the loaded catalog as an enum declaration.
	pub fn generate(&self) -> Result<String> {
		let entries = self.entries()?;
		Ok(render(&entries, self.config.indent))
	}
}
