use super::CoordinateGrammar;
use crate::{
	GeometryError, PointGeometry,
	types::CompositeGeometry,
};
use anyhow::{Context, bail};
use geotext_core::byte_iterator::{ByteIterator, parse_array_entries, parse_float};
use log::trace;
use thiserror::Error;

/// A failure detected after the offending text was consumed, pinned to where that text started.
#[derive(Debug, Error)]
#[error("{message} at position {position}")]
struct PositionedError {
	position: usize,
	message: String,
}

/// Parses `text` as exactly one value of type `T`, allowing surrounding whitespace.
///
/// # Errors
/// Returns [`GeometryError::ParseFailure`] with the byte offset of the problem for malformed
/// brackets, wrong point arity, non-numeric values, trailing text, or rings that fail polygon
/// validation. Composites accept `[]`, since their constructors accept no elements.
pub fn parse_coordinates<T: CoordinateGrammar>(text: &str) -> Result<T, GeometryError> {
	trace!("parsing {} coordinates from {} bytes", T::KIND, text.len());

	let mut iter = ByteIterator::new(text, true);
	let result = T::read_coordinates(&mut iter).and_then(|value| {
		iter.expect_end()?;
		Ok(value)
	});

	result
		.with_context(|| format!("while parsing {} coordinates", T::KIND))
		.map_err(|err| {
			let position = err
				.chain()
				.find_map(|cause| cause.downcast_ref::<PositionedError>())
				.map_or(iter.position(), |positioned| positioned.position);
			GeometryError::parse_failure(position, &err)
		})
}

pub(super) fn read_point(iter: &mut ByteIterator) -> anyhow::Result<PointGeometry> {
	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b'[' {
		bail!(iter.format_error("expected '[' at the start of a point"));
	}
	iter.advance();

	iter.skip_whitespace();
	let x = parse_float(iter)?;

	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b',' {
		bail!(iter.format_error("expected ',' after the x coordinate"));
	}
	iter.advance();

	iter.skip_whitespace();
	let y = parse_float(iter)?;

	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b']' {
		bail!(iter.format_error("expected ']' after the y coordinate"));
	}
	iter.advance();

	Ok(PointGeometry::new(x, y))
}

pub(super) fn read_composite<C: CompositeGeometry>(iter: &mut ByteIterator) -> anyhow::Result<C> {
	iter.skip_whitespace();
	let start = iter.position();

	let mut element_starts = Vec::new();
	let elements = parse_array_entries(iter, |iter| {
		element_starts.push(iter.position());
		<C::Element as CoordinateGrammar>::read_coordinates(iter)
	})?;

	C::from_elements(elements).map_err(|err| {
		let position = match err {
			GeometryError::RingInvalid { ring, .. } => element_starts.get(ring).copied(),
			_ => None,
		};
		PositionedError {
			position: position.unwrap_or(start),
			message: err.to_string(),
		}
		.into()
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PolygonGeometry,
	};
	use rstest::rstest;

	fn failure_position(result: Result<impl std::fmt::Debug, GeometryError>) -> usize {
		match result {
			Err(GeometryError::ParseFailure { position, .. }) => position,
			other => panic!("expected a parse failure, got {other:?}"),
		}
	}

	fn failure_message(result: Result<impl std::fmt::Debug, GeometryError>) -> String {
		match result {
			Err(GeometryError::ParseFailure { message, .. }) => message,
			other => panic!("expected a parse failure, got {other:?}"),
		}
	}

	#[rstest]
	#[case("[10,11]", 10.0, 11.0)]
	#[case(" [ 10 , 2 ] ", 10.0, 2.0)]
	#[case("[\n\t10,\r\n2\n]", 10.0, 2.0)]
	#[case("[-1.5,2e3]", -1.5, 2000.0)]
	#[case("[0.25,-7E-2]", 0.25, -0.07)]
	#[case("[+3,4]", 3.0, 4.0)]
	#[case("[.5,1.]", 0.5, 1.0)]
	#[case("[1e400,-Infinity]", f64::INFINITY, f64::NEG_INFINITY)]
	#[case("[inf, -inf]", f64::INFINITY, f64::NEG_INFINITY)]
	fn points(#[case] text: &str, #[case] x: f64, #[case] y: f64) {
		assert_eq!(parse_coordinates::<PointGeometry>(text).unwrap(), PointGeometry::new(x, y));
	}

	#[rstest]
	#[case("[10,2] extra", 7)]
	#[case("[10,2]]", 6)]
	#[case("[10]", 3)]
	#[case("[10,2,3]", 5)]
	#[case("[a,2]", 2)]
	#[case("[infinite,2]", 9)]
	#[case("[.,2]", 2)]
	#[case("10,2", 0)]
	#[case("[10,2", 5)]
	#[case("", 0)]
	#[case("[1..,2]", 3)]
	#[case("[[1,2]]", 1)]
	fn invalid_points(#[case] text: &str, #[case] position: usize) {
		assert_eq!(failure_position(parse_coordinates::<PointGeometry>(text)), position);
	}

	#[test]
	fn not_a_number() {
		let point = parse_coordinates::<PointGeometry>("[NaN,1]").unwrap();
		assert!(point.x().is_nan());
		assert_eq!(point.y(), 1.0);
	}

	#[test]
	fn trailing_text_message() {
		let message = failure_message(parse_coordinates::<PointGeometry>("[10,2] extra"));
		assert!(message.starts_with("while parsing Point coordinates: "), "{message}");
		assert!(message.contains("unexpected trailing characters at position 7"), "{message}");
	}

	#[test]
	fn line_string() {
		assert_eq!(
			parse_coordinates::<LineStringGeometry>("[[1,2],[3,4],[5,6]]").unwrap(),
			LineStringGeometry::from(&[[1, 2], [3, 4], [5, 6]])
		);
		assert_eq!(
			parse_coordinates::<MultiPointGeometry>(" [ [1,2] , [3,4] ] ").unwrap(),
			MultiPointGeometry::from(&[[1, 2], [3, 4]])
		);
	}

	#[test]
	fn depth_must_match() {
		assert!(parse_coordinates::<LineStringGeometry>("[1,2]").is_err());
		assert!(parse_coordinates::<LineStringGeometry>("[[[1,2]]]").is_err());
		assert!(parse_coordinates::<PolygonGeometry>("[[1,2],[3,4]]").is_err());
	}

	#[test]
	fn empty_arrays() {
		assert_eq!(
			parse_coordinates::<LineStringGeometry>("[]").unwrap(),
			LineStringGeometry::new(vec![])
		);
		assert!(parse_coordinates::<MultiPointGeometry>("  [ ] ").unwrap().is_empty());
		assert!(parse_coordinates::<PolygonGeometry>("[]").unwrap().is_empty());
		assert_eq!(
			parse_coordinates::<MultiLineStringGeometry>("[[[0,0]],[]]").unwrap(),
			MultiLineStringGeometry::new(vec![LineStringGeometry::from(&[[0, 0]]), LineStringGeometry::new(vec![])])
		);
	}

	#[test]
	fn empty_ring_is_too_short() {
		let message = failure_message(parse_coordinates::<PolygonGeometry>("[[]]"));
		assert!(message.contains("ring 0 is invalid: expected at least 4 points, got 0"), "{message}");
		assert_eq!(failure_position(parse_coordinates::<PolygonGeometry>("[[]]")), 1);
		assert!(parse_coordinates::<PointGeometry>("[]").is_err());
	}

	#[test]
	fn polygon() {
		let polygon = parse_coordinates::<PolygonGeometry>("[[[10,2],[13,87],[9,8],[10,2]]]").unwrap();
		assert_eq!(polygon, PolygonGeometry::try_from(&[[[10, 2], [13, 87], [9, 8], [10, 2]]]).unwrap());
	}

	#[test]
	fn invalid_ring_points_at_the_ring() {
		let text = "[[[0,0],[4,0],[4,3],[0,0]],[[1,1],[2,1],[2,2]]]";
		let result = parse_coordinates::<PolygonGeometry>(text);
		assert_eq!(failure_position(result), 27);

		let message = failure_message(parse_coordinates::<PolygonGeometry>(text));
		assert!(
			message.contains("ring 1 is invalid: expected at least 4 points, got 3 at position 27"),
			"{message}"
		);
	}

	#[test]
	fn multi_polygon() {
		let text = "[[[[0,0],[4,0],[4,3],[0,3],[0,0]]],[[[10,10],[14,10],[14,13],[10,13],[10,10]]]]";
		let multi = parse_coordinates::<MultiPolygonGeometry>(text).unwrap();
		assert_eq!(
			multi,
			MultiPolygonGeometry::try_from(&[
				[[[0, 0], [4, 0], [4, 3], [0, 3], [0, 0]]],
				[[[10, 10], [14, 10], [14, 13], [10, 13], [10, 10]]],
			])
			.unwrap()
		);
	}

	#[rstest]
	#[case::first("[[[[0,0],[4,0],[4,3],[0,3],[0,1]]],[[[10,10],[14,10],[14,13],[10,13],[10,10]]]]", 2)]
	#[case::second("[[[[0,0],[4,0],[4,3],[0,3],[0,0]]],[[[10,10],[14,10],[14,13],[10,13],[10,11]]]]", 36)]
	fn multi_polygon_with_open_ring(#[case] text: &str, #[case] position: usize) {
		let result = parse_coordinates::<MultiPolygonGeometry>(text);
		assert_eq!(failure_position(result), position);
	}
}
