//! CLI schema for the itemenum binary.

use std::path::PathBuf;

use clap::Parser;
use itemenum_codegen::{DEFAULT_INDENT, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "itemenum")]
#[command(about = "Generate a C enum declaration from an item catalog")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Item catalog (.json)
	pub input: PathBuf,

	/// Write the declaration here instead of stdout
	#[arg(long, short = 'o', value_name = "PATH")]
	pub output: Option<PathBuf>,

	/// Spaces before each enumerator
	#[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT)]
	pub indent: usize,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

impl Cli {
	pub fn generator_config(&self) -> GeneratorConfig {
		GeneratorConfig { indent: self.indent }
	}
}
