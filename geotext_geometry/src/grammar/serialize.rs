use super::CoordinateGrammar;
use crate::{PointGeometry, types::CompositeGeometry};

/// Renders a value as compact coordinate text, e.g. `[[10,2],[11,3]]`.
///
/// Numbers use the shortest representation that parses back to the same `f64`, so the
/// output is the exact inverse of [`parse_coordinates`](super::parse_coordinates). Infinite
/// and NaN coordinates are written as `inf`, `-inf` and `NaN`, which parse back unchanged.
#[must_use]
pub fn to_coordinates_string<T: CoordinateGrammar>(value: &T) -> String {
	to_coordinates_string_with_precision(value, None)
}

/// Like [`to_coordinates_string`], but rounds every number to `precision` decimal places.
#[must_use]
pub fn to_coordinates_string_with_precision<T: CoordinateGrammar>(value: &T, precision: Option<u8>) -> String {
	let mut output = String::new();
	value.write_coordinates(&mut output, precision);
	output
}

pub(super) fn write_point(point: &PointGeometry, output: &mut String, precision: Option<u8>) {
	output.push('[');
	write_number(point.x(), output, precision);
	output.push(',');
	write_number(point.y(), output, precision);
	output.push(']');
}

pub(super) fn write_composite<C: CompositeGeometry>(value: &C, output: &mut String, precision: Option<u8>) {
	output.push('[');
	for (index, element) in value.elements().iter().enumerate() {
		if index > 0 {
			output.push(',');
		}
		element.write_coordinates(output, precision);
	}
	output.push(']');
}

fn write_number(value: f64, output: &mut String, precision: Option<u8>) {
	let value = match precision {
		Some(precision) => round(value, precision),
		None => value,
	};
	output.push_str(&value.to_string());
}

/// From 2^52 on every `f64` is a whole number.
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0;

fn round(value: f64, precision: u8) -> f64 {
	let factor = 10f64.powi(i32::from(precision));
	let scaled = value * factor;
	// also catches inf and NaN
	let rounded = if scaled.abs() < INTEGRAL_LIMIT {
		scaled.round() / factor
	} else {
		value
	};
	// avoid printing "-0"
	if rounded == 0.0 { 0.0 } else { rounded }
}
