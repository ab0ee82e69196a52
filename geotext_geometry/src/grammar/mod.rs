//! Text form of coordinates: nested, bracketed number arrays.
//!
//! ```text
//! point     = "[" number "," number "]"
//! composite = "[" [ element ( "," element )* ] "]"
//! ```
//!
//! `element` is the element type of the composite (see [`CompositeGeometry::Element`](crate::types::CompositeGeometry::Element)), so a
//! polygon is `[[[x,y],...],...]`. Whitespace between tokens is ignored. A `number` is anything
//! `f64` prints, which includes `.5`, `1.`, `inf` and `NaN`.

mod parse;
mod serialize;

use crate::{
	GeometryError, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry,
	PolygonGeometry, types::GeometryPrimitive,
};
use geotext_core::byte_iterator::ByteIterator;
pub use parse::parse_coordinates;
pub use serialize::{to_coordinates_string, to_coordinates_string_with_precision};

/// Reading and writing a geometry type in the coordinate grammar.
pub trait CoordinateGrammar: GeometryPrimitive {
	/// Reads one value starting at the iterator. Leading whitespace is skipped, nothing after
	/// the value is consumed.
	///
	/// # Errors
	/// Fails if the text at the iterator is not a valid value of this type.
	fn read_coordinates(iter: &mut ByteIterator) -> anyhow::Result<Self>;

	/// Appends the value to `output`, rounding every number to `precision` decimals if given.
	fn write_coordinates(&self, output: &mut String, precision: Option<u8>);

	/// Parses a complete coordinate text, see [`parse_coordinates`].
	///
	/// # Errors
	/// Returns [`GeometryError::ParseFailure`] if `text` is not exactly one value of this type.
	fn from_coordinates_str(text: &str) -> Result<Self, GeometryError> {
		parse_coordinates(text)
	}

	fn to_coordinates_string(&self) -> String {
		to_coordinates_string(self)
	}
}

impl CoordinateGrammar for PointGeometry {
	fn read_coordinates(iter: &mut ByteIterator) -> anyhow::Result<Self> {
		parse::read_point(iter)
	}

	fn write_coordinates(&self, output: &mut String, precision: Option<u8>) {
		serialize::write_point(self, output, precision);
	}
}

// One implementation for all composites, recursing through `CompositeGeometry::Element`.
macro_rules! impl_composite_grammar {
	($($t:ty),*) => {$(
		impl CoordinateGrammar for $t {
			fn read_coordinates(iter: &mut ByteIterator) -> anyhow::Result<Self> {
				parse::read_composite(iter)
			}

			fn write_coordinates(&self, output: &mut String, precision: Option<u8>) {
				serialize::write_composite(self, output, precision);
			}
		}
	)*};
}

impl_composite_grammar!(
	LineStringGeometry,
	PolygonGeometry,
	MultiPointGeometry,
	MultiLineStringGeometry,
	MultiPolygonGeometry
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeometryKind, types::CompositeGeometry};

	fn element_kind<C: CompositeGeometry>() -> GeometryKind {
		<C::Element as GeometryPrimitive>::KIND
	}

	#[test]
	fn element_types_match_the_kind_table() {
		assert_eq!(Some(element_kind::<LineStringGeometry>()), GeometryKind::LineString.element_kind());
		assert_eq!(Some(element_kind::<PolygonGeometry>()), GeometryKind::Polygon.element_kind());
		assert_eq!(Some(element_kind::<MultiPointGeometry>()), GeometryKind::MultiPoint.element_kind());
		assert_eq!(
			Some(element_kind::<MultiLineStringGeometry>()),
			GeometryKind::MultiLineString.element_kind()
		);
		assert_eq!(Some(element_kind::<MultiPolygonGeometry>()), GeometryKind::MultiPolygon.element_kind());
	}

	#[test]
	fn trait_shortcuts() {
		let point = PointGeometry::from_coordinates_str("[10,11]").unwrap();
		assert_eq!(point, PointGeometry::new(10.0, 11.0));
		assert_eq!(point.to_coordinates_string(), "[10,11]");
	}
}
