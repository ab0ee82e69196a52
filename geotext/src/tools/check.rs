use super::DocumentInput;
use anyhow::{Context, Result};
use clap::Args;
use geotext_geometry::Geometry;
use log::info;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	input: DocumentInput,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let geometry = arguments.input.read_geometry().context("invalid geometry document")?;
	println!("{}", summary(&geometry)?);
	Ok(())
}

fn summary(geometry: &Geometry) -> Result<String> {
	let kind = geometry.kind().context("the document holds no geometry")?;
	info!("{kind} coordinates are nested {} levels deep", kind.depth());
	let parts = match geometry {
		Geometry::Point(_) | Geometry::Empty => 1,
		Geometry::LineString(g) => g.len(),
		Geometry::Polygon(g) => g.len(),
		Geometry::MultiPoint(g) => g.len(),
		Geometry::MultiLineString(g) => g.len(),
		Geometry::MultiPolygon(g) => g.len(),
	};
	let element = kind.element_kind().map_or("coordinate pair", |element| element.tag());
	Ok(format!("valid {kind}: {parts} × {element}"))
}
