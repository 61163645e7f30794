use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "signup")]
#[command(about = "Drive the registration form from a command script")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to $XDG_CONFIG_HOME/signup/config.toml when present)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Read commands from this file instead of stdin
	#[arg(long, short = 's', value_name = "PATH")]
	pub script: Option<PathBuf>,

	/// How the form is printed after each command
	#[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
	pub format: Format,

	/// Serve postal-code lookups from the configured fixtures only
	#[arg(long)]
	pub offline: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
	Text,
	Json,
}
