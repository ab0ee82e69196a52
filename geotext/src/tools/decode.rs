use super::DocumentInput;
use anyhow::Result;
use clap::Args;
use geotext_geometry::Geometry;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	input: DocumentInput,

	/// print only the coordinates, without the type
	#[arg(long)]
	coordinates_only: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let geometry = arguments.input.read_geometry()?;
	println!("{}", describe(&geometry, arguments.coordinates_only)?);
	Ok(())
}

/// `<Type> <coordinates>`, e.g. `Point [10,2]`.
fn describe(geometry: &Geometry, coordinates_only: bool) -> Result<String> {
	let coordinates = geometry.to_coordinates_string()?;
	Ok(if coordinates_only {
		coordinates
	} else {
		format!("{} {coordinates}", geometry.get_type_tag()?)
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{tests::run_command, tools::parse_geometry};
	use geotext_geometry::GeometryError;

	#[test]
	fn describe_point() {
		let geometry = parse_geometry(r#"{"type":"Point","coordinates":" [ 10.0 , 2 ] "}"#, None).unwrap();
		assert_eq!(describe(&geometry, false).unwrap(), "Point [10,2]");
		assert_eq!(describe(&geometry, true).unwrap(), "[10,2]");
	}

	#[test]
	fn describe_empty() {
		let err = describe(&Geometry::Empty, false).unwrap_err();
		assert_eq!(err.downcast_ref::<GeometryError>(), Some(&GeometryError::EmptyGeometry));
	}

	#[test]
	fn command_line() {
		run_command(vec![
			"geotext",
			"-q",
			"decode",
			"--coordinates-only",
			r#"{"type":"MultiPoint","coordinates":"[[1,2]]"}"#,
		])
		.unwrap();

		let err = run_command(vec!["geotext", "decode", r#"{"type":"Circle","coordinates":"[0,0]"}"#]).unwrap_err();
		assert_eq!(
			err.downcast_ref::<GeometryError>(),
			Some(&GeometryError::UnknownGeometryType("Circle".into()))
		);
	}
}
