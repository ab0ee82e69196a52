use std::convert::Infallible;
use thiserror::Error;

/// Why a ring cannot close a polygon.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RingViolation {
	#[error("expected at least {expected} points, got {actual}")]
	TooFewPoints { expected: usize, actual: usize },
	#[error("first and last points must be equal")]
	NotClosed,
}

/// Every failure the geometry model and its codecs can report.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
	/// A polygon ring was rejected during construction. `ring` is its index in the polygon;
	/// `polygon` is the polygon's index when it was built as part of a multi-polygon.
	#[error(
		"ring {ring}{} is invalid: {violation}",
		.polygon.map_or_else(String::new, |polygon| format!(" of polygon {polygon}"))
	)]
	RingInvalid {
		polygon: Option<usize>,
		ring: usize,
		violation: RingViolation,
	},

	/// Coordinate text did not match the grammar. `position` is the byte offset of the failure.
	#[error("could not parse coordinates at position {position}: {message}")]
	ParseFailure { position: usize, message: String },

	#[error("unknown geometry type '{0}'")]
	UnknownGeometryType(String),

	#[error("an empty geometry has no type and cannot be serialized")]
	EmptyGeometry,

	#[error("field '{0}' is missing")]
	FieldMissing(String),

	#[error("field '{key}' must be {expected}, found {found}")]
	FieldTypeMismatch {
		key: String,
		expected: &'static str,
		found: String,
	},

	#[error("range {begin}..{end} does not fit a sequence of {len} elements")]
	RangeInvalid { begin: usize, end: usize, len: usize },

	/// The document text itself could not be read or written by the document tree.
	#[error("invalid document: {0}")]
	InvalidDocument(String),
}

impl GeometryError {
	/// Builds a `ParseFailure` from a scanner error, keeping its whole context chain.
	#[must_use]
	pub fn parse_failure(position: usize, err: &anyhow::Error) -> Self {
		GeometryError::ParseFailure {
			position,
			message: format!("{err:#}"),
		}
	}

	/// Attributes a ring failure to the polygon at `index` of a multi-polygon.
	#[must_use]
	pub fn in_polygon(self, index: usize) -> Self {
		match self {
			GeometryError::RingInvalid {
				polygon: None,
				ring,
				violation,
			} => GeometryError::RingInvalid {
				polygon: Some(index),
				ring,
				violation,
			},
			other => other,
		}
	}

	/// `true` for failures caused by malformed input that should be reported to the end user.
	#[must_use]
	pub fn is_input_error(&self) -> bool {
		use GeometryError::*;
		match self {
			ParseFailure { .. } | UnknownGeometryType(_) | FieldMissing(_) | FieldTypeMismatch { .. } | InvalidDocument(_) => {
				true
			}
			RingInvalid { .. } | EmptyGeometry | RangeInvalid { .. } => false,
		}
	}

	/// `true` for failures caused by the calling code, such as encoding an empty geometry.
	#[must_use]
	pub fn is_programming_error(&self) -> bool {
		!self.is_input_error()
	}
}

impl From<Infallible> for GeometryError {
	fn from(value: Infallible) -> Self {
		match value {}
	}
}
