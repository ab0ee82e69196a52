use crate::{
	GeometryError, GeometryKind, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry,
	PointGeometry, PolygonGeometry,
	grammar::{CoordinateGrammar, parse_coordinates, to_coordinates_string_with_precision},
	types::{GeometryPrimitive, SingleGeometry},
};
use log::trace;
use std::fmt::{self, Debug, Display};

/// Exactly one geometry primitive, or nothing.
///
/// `Empty` is the default value. It has no type tag and cannot be serialized.
#[derive(Clone, Default, PartialEq)]
pub enum Geometry {
	#[default]
	Empty,
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	/// The kind of the contained primitive; `None` if empty.
	#[must_use]
	pub fn kind(&self) -> Option<GeometryKind> {
		Some(match self {
			Geometry::Empty => return None,
			Geometry::Point(_) => GeometryKind::Point,
			Geometry::LineString(_) => GeometryKind::LineString,
			Geometry::Polygon(_) => GeometryKind::Polygon,
			Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
			Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
		})
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		matches!(self, Geometry::Empty)
	}

	/// `true` if the contained primitive is exactly of type `U`.
	///
	/// ```
	/// use geotext_geometry::{Geometry, LineStringGeometry, PointGeometry};
	///
	/// let geometry = Geometry::from(LineStringGeometry::from(&[[0, 0], [1, 1]]));
	/// assert!(geometry.is_of_type::<LineStringGeometry>());
	/// assert!(!geometry.is_of_type::<PointGeometry>());
	/// ```
	#[must_use]
	pub fn is_of_type<U: GeometryPrimitive>(&self) -> bool {
		self.kind() == Some(U::KIND)
	}

	/// The GeoJSON type tag, e.g. `"MultiPolygon"`.
	///
	/// # Errors
	/// Returns [`GeometryError::EmptyGeometry`] for `Geometry::Empty`.
	pub fn get_type_tag(&self) -> Result<&'static str, GeometryError> {
		self.kind().map(GeometryKind::tag).ok_or(GeometryError::EmptyGeometry)
	}

	#[must_use]
	pub fn as_type<U: GeometryPrimitive>(&self) -> Option<&U> {
		U::from_geometry(self)
	}

	#[must_use]
	pub fn into_type<U: GeometryPrimitive>(self) -> Option<U> {
		U::take(self)
	}

	/// Wraps single geometries into their multi counterpart; multi geometries and `Empty`
	/// are returned unchanged.
	#[must_use]
	pub fn into_multi(self) -> Geometry {
		match self {
			Geometry::Point(point) => Geometry::MultiPoint(point.into_multi()),
			Geometry::LineString(line) => Geometry::MultiLineString(line.into_multi()),
			Geometry::Polygon(polygon) => Geometry::MultiPolygon(polygon.into_multi()),
			other => other,
		}
	}

	/// Parses coordinate text as a geometry of the given kind.
	///
	/// # Errors
	/// Returns [`GeometryError::ParseFailure`] if `text` does not match the kind's grammar.
	pub fn parse_coordinates(kind: GeometryKind, text: &str) -> Result<Geometry, GeometryError> {
		trace!("dispatching {kind} coordinates to their parser");
		Ok(match kind {
			GeometryKind::Point => Geometry::Point(parse_coordinates(text)?),
			GeometryKind::LineString => Geometry::LineString(parse_coordinates(text)?),
			GeometryKind::Polygon => Geometry::Polygon(parse_coordinates(text)?),
			GeometryKind::MultiPoint => Geometry::MultiPoint(parse_coordinates(text)?),
			GeometryKind::MultiLineString => Geometry::MultiLineString(parse_coordinates(text)?),
			GeometryKind::MultiPolygon => Geometry::MultiPolygon(parse_coordinates(text)?),
		})
	}

	/// Renders the coordinates as grammar text.
	///
	/// # Errors
	/// Returns [`GeometryError::EmptyGeometry`] for `Geometry::Empty`.
	pub fn to_coordinates_string(&self) -> Result<String, GeometryError> {
		self.to_coordinates_string_with_precision(None)
	}

	/// Like [`to_coordinates_string`](Self::to_coordinates_string), rounding to `precision`
	/// decimal places.
	///
	/// # Errors
	/// Returns [`GeometryError::EmptyGeometry`] for `Geometry::Empty`.
	pub fn to_coordinates_string_with_precision(&self, precision: Option<u8>) -> Result<String, GeometryError> {
		fn render<T: CoordinateGrammar>(value: &T, precision: Option<u8>) -> String {
			to_coordinates_string_with_precision(value, precision)
		}
		Ok(match self {
			Geometry::Empty => return Err(GeometryError::EmptyGeometry),
			Geometry::Point(g) => render(g, precision),
			Geometry::LineString(g) => render(g, precision),
			Geometry::Polygon(g) => render(g, precision),
			Geometry::MultiPoint(g) => render(g, precision),
			Geometry::MultiLineString(g) => render(g, precision),
			Geometry::MultiPolygon(g) => render(g, precision),
		})
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Empty => return f.write_str("Empty"),
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.get_type_tag().unwrap_or("Empty")).field(inner).finish()
	}
}

impl Display for Geometry {
	/// Writes the coordinate text, or `EMPTY`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.to_coordinates_string() {
			Ok(text) => f.write_str(&text),
			Err(_) => f.write_str("EMPTY"),
		}
	}
}

/// Connects each primitive to its `Geometry` variant.
macro_rules! impl_primitive {
	($($t:ty => $variant:ident),*) => {$(
		impl GeometryPrimitive for $t {
			const KIND: GeometryKind = GeometryKind::$variant;

			fn from_geometry(geometry: &Geometry) -> Option<&Self> {
				match geometry {
					Geometry::$variant(value) => Some(value),
					_ => None,
				}
			}

			fn take(geometry: Geometry) -> Option<Self> {
				match geometry {
					Geometry::$variant(value) => Some(value),
					_ => None,
				}
			}
		}

		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$variant(value)
			}
		}

		impl Display for $t {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.to_coordinates_string())
			}
		}
	)*};
}

impl_primitive!(
	PointGeometry => Point,
	LineStringGeometry => LineString,
	PolygonGeometry => Polygon,
	MultiPointGeometry => MultiPoint,
	MultiLineStringGeometry => MultiLineString,
	MultiPolygonGeometry => MultiPolygon
);
