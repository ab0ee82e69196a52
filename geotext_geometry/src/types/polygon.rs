use super::{
	CompositeGeometry, LineStringGeometry, MultiPolygonGeometry, SingleGeometry,
	macros::{impl_composite, impl_try_from_array},
};
use crate::{GeometryError, RingViolation};

/// Minimum number of points in a polygon ring, the closing point included.
pub const RING_MIN_POINTS: usize = 4;

/// An ordered sequence of rings. By convention the first ring is the outer boundary and all
/// following rings are holes.
///
/// Every ring holds at least [`RING_MIN_POINTS`] points and ends where it starts. This is checked
/// on construction, so an invalid polygon cannot exist.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(Vec<LineStringGeometry>);

impl PolygonGeometry {
	/// # Errors
	/// Returns [`GeometryError::RingInvalid`] for the first ring that is too short or not closed.
	pub fn new(rings: Vec<LineStringGeometry>) -> Result<Self, GeometryError> {
		for (index, ring) in rings.iter().enumerate() {
			check_ring(ring).map_err(|violation| GeometryError::RingInvalid {
				polygon: None,
				ring: index,
				violation,
			})?;
		}
		Ok(Self(rings))
	}

	/// The outer boundary, if there is one.
	#[must_use]
	pub fn exterior(&self) -> Option<&LineStringGeometry> {
		self.0.first()
	}

	/// All rings after the first.
	#[must_use]
	pub fn holes(&self) -> &[LineStringGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

fn check_ring(ring: &LineStringGeometry) -> Result<(), RingViolation> {
	if ring.len() < RING_MIN_POINTS {
		return Err(RingViolation::TooFewPoints {
			expected: RING_MIN_POINTS,
			actual: ring.len(),
		});
	}
	if ring.first() != ring.last() {
		return Err(RingViolation::NotClosed);
	}
	Ok(())
}

impl CompositeGeometry for PolygonGeometry {
	type Element = LineStringGeometry;

	fn from_elements(elements: Vec<LineStringGeometry>) -> Result<Self, GeometryError> {
		Self::new(elements)
	}

	fn elements(&self) -> &[LineStringGeometry] {
		&self.0
	}
}

impl SingleGeometry for PolygonGeometry {
	type Multi = MultiPolygonGeometry;

	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry::new(vec![self])
	}
}

impl_composite!(PolygonGeometry, LineStringGeometry);
impl_try_from_array!(PolygonGeometry, LineStringGeometry);
