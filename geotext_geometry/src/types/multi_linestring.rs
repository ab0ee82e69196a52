use super::{
	CompositeGeometry, LineStringGeometry,
	macros::{impl_composite, impl_from_array},
};
use crate::GeometryError;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(Vec<LineStringGeometry>);

impl MultiLineStringGeometry {
	#[must_use]
	pub fn new(lines: Vec<LineStringGeometry>) -> Self {
		Self(lines)
	}
}

impl CompositeGeometry for MultiLineStringGeometry {
	type Element = LineStringGeometry;

	fn from_elements(elements: Vec<LineStringGeometry>) -> Result<Self, GeometryError> {
		Ok(Self::new(elements))
	}

	fn elements(&self) -> &[LineStringGeometry] {
		&self.0
	}
}

impl_composite!(MultiLineStringGeometry, LineStringGeometry);
impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
