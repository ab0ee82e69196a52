use anyhow::{Context, Result};
use clap::Args;
use geotext_core::json::JsonObject;
use geotext_geometry::Geometry;
use log::debug;
use std::{
	fs, io,
	path::{Path, PathBuf},
};

/// Where to find a geometry document.
#[derive(Args, Debug)]
pub struct DocumentInput {
	/// geometry document as JSON text, e.g. '{"type":"Point","coordinates":"[10,2]"}'
	/// read from --input or stdin if omitted
	#[arg(verbatim_doc_comment)]
	document: Option<String>,

	/// read the document from this file
	#[arg(long, short, value_name = "FILE", conflicts_with = "document")]
	input: Option<PathBuf>,

	/// decode the geometry stored under this key, e.g. "geometry" in a GeoJSON feature
	#[arg(long, value_name = "KEY")]
	key: Option<String>,
}

impl DocumentInput {
	pub fn read_geometry(&self) -> Result<Geometry> {
		let text = read_text(self.document.as_deref(), self.input.as_deref())?;
		parse_geometry(&text, self.key.as_deref())
	}
}

/// Returns `text` if given, else the content of `file`, else everything on stdin.
pub fn read_text(text: Option<&str>, file: Option<&Path>) -> Result<String> {
	if let Some(text) = text {
		return Ok(text.to_string());
	}
	if let Some(path) = file {
		debug!("reading {path:?}");
		return fs::read_to_string(path).with_context(|| format!("could not read {path:?}"));
	}
	debug!("reading stdin");
	io::read_to_string(io::stdin()).context("could not read stdin")
}

/// Decodes the geometry at the document root, or in the child node under `key`.
pub fn parse_geometry(text: &str, key: Option<&str>) -> Result<Geometry> {
	let document = JsonObject::parse_str(text)?;
	let geometry = match key {
		Some(key) => Geometry::from_document_child(&document, key)?,
		None => Geometry::from_document(&document)?,
	};
	Ok(geometry)
}

#[cfg(test)]
mod tests {
	use super::*;
	use geotext_geometry::PointGeometry;
	use std::io::Write;

	#[test]
	fn text_wins() {
		assert_eq!(read_text(Some("abc"), None).unwrap(), "abc");
	}

	#[test]
	fn from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{"type":"Point","coordinates":"[1,2]"}}"#).unwrap();
		let text = read_text(None, Some(file.path())).unwrap();
		assert_eq!(
			parse_geometry(&text, None).unwrap(),
			Geometry::from(PointGeometry::new(1.0, 2.0))
		);
	}

	#[test]
	fn missing_file() {
		let err = read_text(None, Some(Path::new("/does/not/exist.json"))).unwrap_err();
		assert!(err.to_string().starts_with("could not read"));
	}

	#[test]
	fn nested_geometry() {
		let text = r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[3,4]}}"#;
		assert_eq!(
			parse_geometry(text, Some("geometry")).unwrap(),
			Geometry::from(PointGeometry::new(3.0, 4.0))
		);
		assert!(parse_geometry(text, None).is_err());
	}
}
