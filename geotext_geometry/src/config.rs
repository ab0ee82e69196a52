/// How the `"coordinates"` field of a document is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordinateEncoding {
	/// A string holding the coordinate text: `"coordinates":"[10,2]"`.
	#[default]
	Text,
	/// A structured array, as in plain GeoJSON: `"coordinates":[10,2]`.
	Array,
}

/// Options for encoding geometries into documents.
///
/// Decoding needs no options: both encodings are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
	pub coordinates: CoordinateEncoding,
	/// Round coordinates to this many decimal places. Rounded output does not round-trip.
	pub precision: Option<u8>,
}

impl CodecConfig {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_coordinates(mut self, coordinates: CoordinateEncoding) -> Self {
		self.coordinates = coordinates;
		self
	}

	#[must_use]
	pub fn with_precision(mut self, precision: u8) -> Self {
		self.precision = Some(precision);
		self
	}
}
