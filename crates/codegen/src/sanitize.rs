//! Display name to identifier-body conversion.

/// Normalized names that mark a placeholder record rather than a real item.
pub const SENTINEL_NAMES: &[&str] = &["", "0", "NULL", "NONE", "N"];

/// Maps an arbitrary display name onto `[A-Z0-9_]*`.
///
/// Surrounding whitespace is trimmed, every maximal run of characters outside
/// `[A-Za-z0-9_]` becomes a single `_`, letters are upper-cased, and a leading
/// digit gets a `_` prefix. Empty input stays empty.
pub fn sanitize(raw: &str) -> String {
	prefix_leading_digit(normalize(raw))
}

/// Trims, collapses invalid runs and upper-cases, without the digit prefix.
///
/// Sentinel detection runs on this form so that a bare `0` is still
/// recognised as a placeholder.
pub fn normalize(raw: &str) -> String {
	let trimmed = raw.trim();
	let mut out = String::with_capacity(trimmed.len() + 1);
	let mut in_run = false;

	for ch in trimmed.chars() {
		if ch.is_ascii_alphanumeric() || ch == '_' {
			out.push(ch.to_ascii_uppercase());
			in_run = false;
		} else if !in_run {
			out.push('_');
			in_run = true;
		}
	}
	out
}

/// Prepends `_` when the body starts with an ASCII digit.
pub fn prefix_leading_digit(mut body: String) -> String {
	if body.starts_with(|c: char| c.is_ascii_digit()) {
		body.insert(0, '_');
	}
	body
}

/// Returns true if a normalized name is a placeholder and its record should be dropped.
pub fn is_sentinel(normalized: &str) -> bool {
	SENTINEL_NAMES.contains(&normalized)
}
