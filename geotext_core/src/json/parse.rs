use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result, bail};
use log::trace;

/// Parses a complete JSON text. Trailing non-whitespace characters are an error.
///
/// # Errors
/// Returns the scanner error, with the offending position, wrapped in a context naming the input.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	trace!("parsing {} bytes of JSON", json.len());
	let mut iter = ByteIterator::new(json, true);
	let value = parse_json_iter(&mut iter).and_then(|value| {
		iter.expect_end()?;
		Ok(value)
	});
	value.with_context(|| format!("while parsing JSON '{json}'"))
}

/// Arrays and objects may nest at most this deep.
pub const MAX_JSON_DEPTH: usize = 128;

/// Parses one JSON value at the iterator's position and leaves the iterator behind it.
///
/// # Errors
/// Returns an error if no valid JSON value starts at the current position, or if arrays and
/// objects nest deeper than [`MAX_JSON_DEPTH`].
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_json_value(iter, 0)
}

fn parse_json_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_JSON_DEPTH => bail!(iter.format_error(&format!(
			"JSON nesting deeper than {MAX_JSON_DEPTH} levels"
		))),
		b'[' => parse_array_entries(iter, |iter2| parse_json_value(iter2, depth + 1))
			.map(|list| JsonValue::Array(JsonArray(list))),
		b'{' => parse_json_object(iter, depth + 1).map(JsonValue::Object),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator, depth: usize) -> Result<JsonObject> {
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter2| {
		object.set(&key, parse_json_value(iter2, depth)?);
		Ok(())
	})?;
	Ok(object)
}
