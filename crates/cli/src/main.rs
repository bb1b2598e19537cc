#![cfg_attr(test, allow(unused_crate_dependencies))]
//! itemenum binary.
//!
//! Loads an item catalog, resolves every display name to a unique C identifier,
//! and writes the resulting `enum eItems` declaration to stdout or a file.

mod cli;

use std::fs;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use itemenum_catalog::Catalog;
use itemenum_codegen::EnumGenerator;
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let catalog = Catalog::load(&cli.input)
		.with_context(|| format!("failed to load catalog {}", cli.input.display()))?;

	let mut generator = EnumGenerator::new(cli.generator_config());
	generator.load(catalog);
	let declaration = generator.generate()?;

	match &cli.output {
		Some(path) => {
			fs::write(path, &declaration).with_context(|| format!("failed to write {}", path.display()))?;
			info!(path = %path.display(), bytes = declaration.len(), "wrote enum declaration");
		}
		None => {
			let mut stdout = io::stdout().lock();
			stdout.write_all(declaration.as_bytes()).context("failed to write to stdout")?;
			stdout.flush().context("failed to flush stdout")?;
		}
	}

	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.init();
}
