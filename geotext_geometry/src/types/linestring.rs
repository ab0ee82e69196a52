use super::{
	CompositeGeometry, MultiLineStringGeometry, PointGeometry, SingleGeometry,
	macros::{impl_composite, impl_from_array},
};
use crate::GeometryError;

/// An ordered sequence of points.
///
/// The constructor only checks structure; a line string may hold any number of points.
/// Closed line strings double as polygon rings.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(Vec<PointGeometry>);

impl LineStringGeometry {
	#[must_use]
	pub fn new(points: Vec<PointGeometry>) -> Self {
		Self(points)
	}

	/// `true` if there are at least two points and the first equals the last.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.0.len() > 1 && self.0.first() == self.0.last()
	}
}

impl CompositeGeometry for LineStringGeometry {
	type Element = PointGeometry;

	fn from_elements(elements: Vec<PointGeometry>) -> Result<Self, GeometryError> {
		Ok(Self::new(elements))
	}

	fn elements(&self) -> &[PointGeometry] {
		&self.0
	}
}

impl SingleGeometry for LineStringGeometry {
	type Multi = MultiLineStringGeometry;

	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry::new(vec![self])
	}
}

impl_composite!(LineStringGeometry, PointGeometry);
impl_from_array!(LineStringGeometry, PointGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_arrays() {
		let line = LineStringGeometry::from(&[[0, 0], [1, 1], [2, 0]]);
		assert_eq!(line.len(), 3);
		assert_eq!(line.first(), Some(&PointGeometry::new(0.0, 0.0)));
		assert_eq!(line.last(), Some(&PointGeometry::new(2.0, 0.0)));
		assert_eq!(line, LineStringGeometry::from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]));
	}

	#[test]
	fn closed() {
		assert!(LineStringGeometry::from(&[[0, 0], [1, 1], [0, 0]]).is_closed());
		assert!(!LineStringGeometry::from(&[[0, 0], [1, 1]]).is_closed());
		assert!(!LineStringGeometry::from(&[[0, 0]]).is_closed());
	}

	#[test]
	fn slice_range() {
		let points: Vec<PointGeometry> = (0..5).map(|i| PointGeometry::new(f64::from(i), 0.0)).collect();

		let line = LineStringGeometry::from_slice_range(&points, 1, 4).unwrap();
		assert_eq!(line.elements(), &points[1..4]);

		let empty = LineStringGeometry::from_slice_range(&points, 2, 2).unwrap();
		assert!(empty.is_empty());

		assert_eq!(
			LineStringGeometry::from_slice_range(&points, 3, 6),
			Err(GeometryError::RangeInvalid { begin: 3, end: 6, len: 5 })
		);
		assert_eq!(
			LineStringGeometry::from_slice_range(&points, 4, 1),
			Err(GeometryError::RangeInvalid { begin: 4, end: 1, len: 5 })
		);
	}

	#[test]
	fn iterate() {
		let line = LineStringGeometry::from(&[[1, 2], [3, 4]]);
		let xs: Vec<f64> = line.iter().map(PointGeometry::x).collect();
		assert_eq!(xs, [1.0, 3.0]);
		assert_eq!((&line).into_iter().count(), 2);
		assert_eq!(line.into_inner().len(), 2);
	}

	#[test]
	fn debug() {
		let line = LineStringGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(format!("{line:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}
}
