//! Declaration text assembly.

use std::fmt;

/// Name of the generated enumeration.
pub const ENUM_NAME: &str = "eItems";

/// A resolved enumerator: unique identifier plus the record's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
	pub name: String,
	pub id: i128,
}

impl EnumEntry {
	pub fn new(name: impl Into<String>, id: i128) -> Self {
		Self { name: name.into(), id }
	}
}

impl fmt::Display for EnumEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} = {},", self.name, self.id)
	}
}

/// Renders `entries` as `enum eItems { ... };` with one indented line per entry.
pub fn render(entries: &[EnumEntry], indent: usize) -> String {
	let pad = " ".repeat(indent);
	let body = entries
		.iter()
		.map(|entry| format!("{pad}{entry}"))
		.collect::<Vec<_>>()
		.join("\n");
	format!("enum {ENUM_NAME} {{\n{body}\n}};\n")
}
