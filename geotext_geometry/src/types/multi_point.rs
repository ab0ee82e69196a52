use super::{
	CompositeGeometry, PointGeometry,
	macros::{impl_composite, impl_from_array},
};
use crate::GeometryError;

/// A collection of points, kept in insertion order.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(Vec<PointGeometry>);

impl MultiPointGeometry {
	#[must_use]
	pub fn new(points: Vec<PointGeometry>) -> Self {
		Self(points)
	}
}

impl CompositeGeometry for MultiPointGeometry {
	type Element = PointGeometry;

	fn from_elements(elements: Vec<PointGeometry>) -> Result<Self, GeometryError> {
		Ok(Self::new(elements))
	}

	fn elements(&self) -> &[PointGeometry] {
		&self.0
	}
}

impl_composite!(MultiPointGeometry, PointGeometry);
impl_from_array!(MultiPointGeometry, PointGeometry);
