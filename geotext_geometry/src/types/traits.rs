use crate::{Geometry, GeometryError, GeometryKind, grammar::CoordinateGrammar};
use std::fmt::Debug;

/// Implemented by the six concrete geometry types.
pub trait GeometryPrimitive: Debug + Clone + PartialEq + Into<Geometry> {
	/// The kind this type is stored as inside a [`Geometry`].
	const KIND: GeometryKind;

	/// Borrows the value if `geometry` holds this type.
	fn from_geometry(geometry: &Geometry) -> Option<&Self>;

	/// Moves the value out if `geometry` holds this type.
	fn take(geometry: Geometry) -> Option<Self>;
}

/// Geometries that can be wrapped into their multi-geometry counterpart,
/// e.g. a `PointGeometry` into a `MultiPointGeometry`.
pub trait SingleGeometry: GeometryPrimitive {
	type Multi: GeometryPrimitive;

	fn into_multi(self) -> Self::Multi;
}

/// Geometries built from a non-recursive sequence of one element type.
///
/// The associated `Element` is the substructure relation: a polygon is made of line strings,
/// a multipolygon of polygons, and so on. Parsing and serializing recurse through it.
pub trait CompositeGeometry: GeometryPrimitive {
	type Element: CoordinateGrammar;

	/// Builds the composite, enforcing its invariants.
	///
	/// # Errors
	/// Fails if the elements violate an invariant (only polygons have any).
	fn from_elements(elements: Vec<Self::Element>) -> Result<Self, GeometryError>;

	fn elements(&self) -> &[Self::Element];
}
