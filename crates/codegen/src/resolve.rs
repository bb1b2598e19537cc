//! Per-pass identifier deduplication.

use rustc_hash::{FxHashMap, FxHashSet};

/// Assigns unique identifiers across one generation pass.
///
/// The first occurrence of a candidate keeps it verbatim. Later occurrences get
/// `_2`, `_3`, ... appended to the original candidate, skipping any spelling
/// already taken. Names are never released, so create one resolver per pass.
#[derive(Debug, Default)]
pub struct NameResolver {
	used: FxHashSet<String>,
	/// Next suffix to try per base candidate.
	next_suffix: FxHashMap<String, u64>,
}

impl NameResolver {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a name for `candidate` that has not been handed out before.
	pub fn resolve(&mut self, candidate: &str) -> String {
		if self.used.insert(candidate.to_owned()) {
			return candidate.to_owned();
		}

		// Taken spellings stay taken, so the search for a base can resume
		// where the previous one stopped.
		let suffix = self.next_suffix.entry(candidate.to_owned()).or_insert(2);
		loop {
			let alternative = format!("{candidate}_{suffix}");
			*suffix += 1;
			if self.used.insert(alternative.clone()) {
				return alternative;
			}
		}
	}

	pub fn is_used(&self, name: &str) -> bool {
		self.used.contains(name)
	}

	/// Number of names handed out so far.
	pub fn len(&self) -> usize {
		self.used.len()
	}

	pub fn is_empty(&self) -> bool {
		self.used.is_empty()
	}
}
