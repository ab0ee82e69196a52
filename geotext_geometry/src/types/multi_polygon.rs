use super::{
	CompositeGeometry, PolygonGeometry,
	macros::{impl_composite, impl_try_from_array},
};
use crate::GeometryError;

/// A collection of polygons.
///
/// Polygons can only exist with valid rings, so the constructor itself checks nothing.
/// Building one from raw coordinate arrays goes through `TryFrom` and validates every ring.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	#[must_use]
	pub fn new(polygons: Vec<PolygonGeometry>) -> Self {
		Self(polygons)
	}
}

impl CompositeGeometry for MultiPolygonGeometry {
	type Element = PolygonGeometry;

	fn from_elements(elements: Vec<PolygonGeometry>) -> Result<Self, GeometryError> {
		Ok(Self::new(elements))
	}

	fn elements(&self) -> &[PolygonGeometry] {
		&self.0
	}
}

impl_composite!(MultiPolygonGeometry, PolygonGeometry);
impl_try_from_array!(MultiPolygonGeometry, PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::RingViolation;

	#[test]
	fn two_rectangles() {
		let multi = MultiPolygonGeometry::try_from(&[
			[[[0, 0], [4, 0], [4, 3], [0, 3], [0, 0]]],
			[[[10, 10], [14, 10], [14, 13], [10, 13], [10, 10]]],
		])
		.unwrap();
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.elements()[1].elements()[0].len(), 5);
	}

	#[test]
	fn names_the_failing_polygon() {
		let result = MultiPolygonGeometry::try_from(vec![
			vec![vec![[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 0.0]]],
			vec![
				vec![[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 0.0]],
				vec![[1.0, 1.0], [2.0, 1.0], [1.0, 1.0]],
			],
		]);
		let err = result.unwrap_err();
		assert_eq!(
			err.to_string(),
			"ring 1 of polygon 1 is invalid: expected at least 4 points, got 3"
		);
	}

	#[test]
	fn one_open_ring_fails_everything() {
		let result = MultiPolygonGeometry::try_from(&[
			[[[0, 0], [4, 0], [4, 3], [0, 3], [0, 0]]],
			[[[10, 10], [14, 10], [14, 13], [10, 13], [10, 11]]],
		]);
		assert_eq!(
			result,
			Err(GeometryError::RingInvalid {
				polygon: Some(1),
				ring: 0,
				violation: RingViolation::NotClosed
			})
		);
	}
}
