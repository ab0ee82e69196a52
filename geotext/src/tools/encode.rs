use super::read_text;
use anyhow::{Context, Result};
use clap::Args;
use geotext_core::json::JsonObject;
use geotext_geometry::{CodecConfig, CoordinateEncoding, Geometry, GeometryKind};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// geometry type: Point, LineString, Polygon, MultiPoint, MultiLineString or MultiPolygon
	#[arg(long = "type", short = 't', value_name = "TYPE", verbatim_doc_comment)]
	kind: GeometryKind,

	/// coordinate text, e.g. "[[10,2],[11,3]]"
	/// read from stdin if omitted
	#[arg(verbatim_doc_comment)]
	coordinates: Option<String>,

	/// write the coordinates as a JSON array instead of a string
	#[arg(long)]
	array: bool,

	/// round coordinates to this many decimal places
	#[arg(long, value_name = "DIGITS")]
	precision: Option<u8>,

	/// indent the output
	#[arg(long)]
	pretty: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let input = read_text(arguments.coordinates.as_deref(), None)?;
	println!("{}", encode(arguments, &input)?);
	Ok(())
}

fn encode(arguments: &Subcommand, input: &str) -> Result<String> {
	let geometry = Geometry::parse_coordinates(arguments.kind, input)
		.with_context(|| format!("while encoding {} coordinates", arguments.kind))?;

	let config = CodecConfig {
		coordinates: if arguments.array {
			CoordinateEncoding::Array
		} else {
			CoordinateEncoding::Text
		},
		precision: arguments.precision,
	};
	let document: JsonObject = geometry.to_document_with(&config)?;

	Ok(if arguments.pretty {
		document.stringify_pretty()
	} else {
		document.stringify()
	})
}
