mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "server")]
	/// Serve the map frontend via http
	Serve(tools::serve::Subcommand),

	/// Print the polygon relocated to a position as GeoJSON
	Overlay(tools::overlay::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Serve(arguments) => tools::serve::run(arguments),
		Commands::Overlay(arguments) => tools::overlay::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["mapoverlay"]).unwrap_err().to_string();
		assert!(err.starts_with("Relocates a polygon onto the user's position and serves the map frontend."));
		assert!(err.contains("\nUsage: mapoverlay [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["mapoverlay", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("mapoverlay "));
	}

	#[test]
	fn overlay_requires_position() {
		let err = run_command(vec!["mapoverlay", "overlay"]).unwrap_err().to_string();
		assert!(err.contains("--lon <LON>"));
	}

	#[test]
	fn serve_alias() {
		let msg = run_command(vec!["mapoverlay", "server", "-p", "0", "-i", "127.0.0.1", "--auto-shutdown", "1"]).unwrap();
		assert!(msg.contains("Serve("));
	}
}
