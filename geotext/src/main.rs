mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

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
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Encode coordinate text as a geometry document
	Encode(tools::encode::Subcommand),

	/// Decode a geometry document and print its type and coordinates
	Decode(tools::decode::Subcommand),

	/// Check that a geometry document is valid
	Check(tools::check::Subcommand),
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
		Commands::Encode(arguments) => tools::encode::run(arguments),
		Commands::Decode(arguments) => tools::decode::run(arguments),
		Commands::Check(arguments) => tools::check::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	/// Parses and runs a command line, returning the parsed arguments in debug form.
	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geotext"]).unwrap_err().to_string();
		assert!(err.starts_with("Encode, decode and check GeoJSON geometries"), "{err}");
		assert!(err.contains("\nUsage: geotext [OPTIONS] <COMMAND>"), "{err}");
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geotext", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geotext "));
	}

	#[test]
	fn encode_subcommand() {
		let err = run_command(vec!["geotext", "encode"]).unwrap_err().to_string();
		assert!(err.starts_with("Encode coordinate text as a geometry document"), "{err}");
	}

	#[test]
	fn decode_and_check() {
		let document = r#"{"type":"Point","coordinates":"[10,2]"}"#;
		run_command(vec!["geotext", "-q", "decode", document]).unwrap();
		run_command(vec!["geotext", "-q", "check", document]).unwrap();
	}

	#[test]
	fn unknown_type_fails() {
		let err = run_command(vec!["geotext", "encode", "--type", "Circle", "[0,0]"])
			.unwrap_err()
			.to_string();
		assert!(err.contains("unknown geometry type 'Circle'"), "{err}");
	}
}
