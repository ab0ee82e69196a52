use super::{MultiPointGeometry, SingleGeometry};
use std::fmt::Debug;

/// A single position given by an x and a y coordinate.
///
/// Equality compares both coordinates exactly, so `0.1 + 0.2` and `0.3` are different points.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry([f64; 2]);

impl PointGeometry {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		self.0
	}
}

impl SingleGeometry for PointGeometry {
	type Multi = MultiPointGeometry;

	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry::new(vec![self])
	}
}

impl Debug for PointGeometry {
	/// Formats the point as `[x, y]`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<[f64; 2]> for PointGeometry {
	fn from(value: [f64; 2]) -> Self {
		Self(value)
	}
}

impl From<(f64, f64)> for PointGeometry {
	fn from((x, y): (f64, f64)) -> Self {
		Self([x, y])
	}
}

impl<T> From<&[T; 2]> for PointGeometry
where
	T: Copy + Into<f64>,
{
	fn from(value: &[T; 2]) -> Self {
		Self([value[0].into(), value[1].into()])
	}
}

impl From<PointGeometry> for [f64; 2] {
	fn from(value: PointGeometry) -> Self {
		value.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accessors() {
		let point = PointGeometry::new(10.0, 2.5);
		assert_eq!(point.x(), 10.0);
		assert_eq!(point.y(), 2.5);
		assert_eq!(point.as_array(), [10.0, 2.5]);
		assert_eq!(<[f64; 2]>::from(point), [10.0, 2.5]);
	}

	#[test]
	fn conversions() {
		let expected = PointGeometry::new(3.0, 4.0);
		assert_eq!(PointGeometry::from([3.0, 4.0]), expected);
		assert_eq!(PointGeometry::from((3.0, 4.0)), expected);
		assert_eq!(PointGeometry::from(&[3, 4]), expected);
		assert_eq!(PointGeometry::from(&[3.0f32, 4.0f32]), expected);
	}

	#[test]
	fn exact_equality() {
		assert_ne!(PointGeometry::new(0.1 + 0.2, 0.0), PointGeometry::new(0.3, 0.0));
		assert_eq!(PointGeometry::new(-0.0, 1.0), PointGeometry::new(0.0, 1.0));
	}

	#[test]
	fn into_multi() {
		let multi = PointGeometry::new(1.0, 2.0).into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.first(), Some(&PointGeometry::new(1.0, 2.0)));
	}

	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", PointGeometry::new(1.0, 2.5)), "[1.0, 2.5]");
	}
}
