use crate::GeometryError;
use std::{fmt, str::FromStr};

/// The closed set of geometry kinds, used as the runtime discriminant of [`crate::Geometry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
}

impl GeometryKind {
	pub const ALL: [GeometryKind; 6] = [
		GeometryKind::Point,
		GeometryKind::LineString,
		GeometryKind::Polygon,
		GeometryKind::MultiPoint,
		GeometryKind::MultiLineString,
		GeometryKind::MultiPolygon,
	];

	/// The type tag written to and read from the `"type"` field of a document.
	#[must_use]
	pub const fn tag(self) -> &'static str {
		match self {
			GeometryKind::Point => "Point",
			GeometryKind::LineString => "LineString",
			GeometryKind::Polygon => "Polygon",
			GeometryKind::MultiPoint => "MultiPoint",
			GeometryKind::MultiLineString => "MultiLineString",
			GeometryKind::MultiPolygon => "MultiPolygon",
		}
	}

	/// Looks up a kind by its type tag. Tags are case-sensitive.
	///
	/// # Errors
	/// Returns [`GeometryError::UnknownGeometryType`] for any other string.
	pub fn from_tag(tag: &str) -> Result<Self, GeometryError> {
		Ok(match tag {
			"Point" => GeometryKind::Point,
			"LineString" => GeometryKind::LineString,
			"Polygon" => GeometryKind::Polygon,
			"MultiPoint" => GeometryKind::MultiPoint,
			"MultiLineString" => GeometryKind::MultiLineString,
			"MultiPolygon" => GeometryKind::MultiPolygon,
			_ => return Err(GeometryError::UnknownGeometryType(tag.to_string())),
		})
	}

	/// The kind of the elements a composite is built from; `None` for points.
	#[must_use]
	pub const fn element_kind(self) -> Option<GeometryKind> {
		match self {
			GeometryKind::Point => None,
			GeometryKind::LineString | GeometryKind::MultiPoint => Some(GeometryKind::Point),
			GeometryKind::Polygon | GeometryKind::MultiLineString => Some(GeometryKind::LineString),
			GeometryKind::MultiPolygon => Some(GeometryKind::Polygon),
		}
	}

	/// Bracket nesting depth of the coordinate text: 1 for `[x,y]`, 4 for a multipolygon.
	#[must_use]
	pub fn depth(self) -> usize {
		match self.element_kind() {
			None => 1,
			Some(element) => element.depth() + 1,
		}
	}

	/// `true` for the three `Multi*` kinds.
	#[must_use]
	pub const fn is_multi(self) -> bool {
		matches!(
			self,
			GeometryKind::MultiPoint | GeometryKind::MultiLineString | GeometryKind::MultiPolygon
		)
	}
}

impl fmt::Display for GeometryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

impl FromStr for GeometryKind {
	type Err = GeometryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		GeometryKind::from_tag(s)
	}
}
