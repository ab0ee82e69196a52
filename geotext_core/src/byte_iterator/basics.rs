//! Parsing helpers built on top of [`ByteIterator`].
//!
//! They cover the token-level pieces shared by the JSON reader and the coordinate grammar:
//! fixed tags, quoted strings, number literals, and comma-separated arrays/objects.
//! Every helper leaves the iterator directly behind the last byte it accepted, so on failure
//! [`ByteIterator::position`] points at the offending byte.

use super::iterator::ByteIterator;
use anyhow::{Result, bail};
use geotext_derive::context;
use std::str::FromStr;

/// Matches a fixed ASCII tag such as `null` or `true`.
///
/// # Errors
/// Returns an error on the first byte that differs from `tag` or when the input ends early.
#[context("while parsing tag '{}'", tag)]
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_peeked_byte()? != expected {
			bail!(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
		iter.advance();
	}
	Ok(())
}

/// Parses a JSON string literal, resolving escapes, and returns its content.
///
/// `\uXXXX` escapes may form UTF-16 surrogate pairs. Leading whitespace is skipped.
///
/// # Errors
/// Fails on a missing opening quote, an unterminated string, invalid escapes or invalid UTF-8.
#[context("while parsing a quoted string")]
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}
	iter.advance();

	let mut bytes = Vec::with_capacity(32);
	let mut utf16: Vec<u16> = Vec::new();

	loop {
		let byte = iter.expect_next_byte()?;
		if byte != b'\\' || iter.peek() != Some(b'u') {
			flush_utf16(iter, &mut utf16, &mut bytes)?;
		}
		match byte {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(0x08),
				b'f' => bytes.push(0x0C),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => utf16.push(parse_hex4(iter)?),
				_ => bail!(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}

	String::from_utf8(bytes).map_err(|_| iter.format_error("invalid UTF-8 in string"))
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut value: u16 = 0;
	for _ in 0..4 {
		let digit = char::from(iter.expect_next_byte()?)
			.to_digit(16)
			.ok_or_else(|| iter.format_error("invalid unicode escape"))?;
		value = (value << 4) | digit as u16;
	}
	Ok(value)
}

fn flush_utf16(iter: &ByteIterator, utf16: &mut Vec<u16>, bytes: &mut Vec<u8>) -> Result<()> {
	if utf16.is_empty() {
		return Ok(());
	}
	let text = String::from_utf16(utf16).map_err(|_| iter.format_error("invalid unicode code point"))?;
	bytes.extend_from_slice(text.as_bytes());
	utf16.clear();
	Ok(())
}

/// Scans a number literal and returns it as a slice of the input.
///
/// Accepted syntax: optional sign, at least one integer digit, an optional fraction with at least
/// one digit, and an optional exponent (`e`/`E`, optional sign, at least one digit).
/// Scanning stops at the first byte that cannot continue the literal.
///
/// # Errors
/// Fails when a required digit is missing or a second decimal point follows the fraction.
#[context("while parsing a number")]
pub fn parse_number_literal<'a>(iter: &mut ByteIterator<'a>) -> Result<&'a str> {
	let start = iter.position();

	if let Some(b'+' | b'-') = iter.peek() {
		iter.advance();
	}

	if !skip_digits(iter) {
		bail!(iter.format_error("expected digits in number"));
	}

	if iter.peek() == Some(b'.') {
		iter.advance();
		if !skip_digits(iter) {
			bail!(iter.format_error("expected digits after decimal point"));
		}
		if iter.peek() == Some(b'.') {
			bail!(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		iter.advance();
		if let Some(b'+' | b'-') = iter.peek() {
			iter.advance();
		}
		if !skip_digits(iter) {
			bail!(iter.format_error("expected digits after exponent"));
		}
	}

	// Only ASCII bytes were accepted above.
	Ok(std::str::from_utf8(iter.slice_from(start))?)
}

fn skip_digits(iter: &mut ByteIterator) -> bool {
	let mut found = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		found = true;
		iter.advance();
	}
	found
}

/// Scans a number literal and converts it with `R::from_str`.
///
/// # Errors
/// Fails if the literal is malformed or cannot be represented as `R`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	let literal = parse_number_literal(iter)?;
	literal
		.parse::<R>()
		.map_err(|_| iter.format_error(&format!("invalid number '{literal}'")))
}

/// Scans a floating point number in the relaxed form of coordinate text.
///
/// On top of [`parse_number_literal`] this accepts a missing integer part (`.5`), a missing
/// fraction (`1.`), and the words `inf`, `infinity` and `nan` in any letter case. All of them take
/// an optional sign. This covers everything `f64`'s `Display` writes, non-finite values included.
///
/// # Errors
/// Fails when no digit is found, an exponent has no digits, or a word is not one of the above.
#[context("while parsing a number")]
pub fn parse_float(iter: &mut ByteIterator) -> Result<f64> {
	let start = iter.position();

	if let Some(b'+' | b'-') = iter.peek() {
		iter.advance();
	}

	if iter.peek().is_some_and(|byte| byte.is_ascii_alphabetic()) {
		while iter.peek().is_some_and(|byte| byte.is_ascii_alphabetic()) {
			iter.advance();
		}
		let literal = std::str::from_utf8(iter.slice_from(start))?;
		let word = literal.trim_start_matches(['+', '-']);
		if !["inf", "infinity", "nan"].iter().any(|known| word.eq_ignore_ascii_case(known)) {
			bail!(iter.format_error(&format!("invalid number '{literal}'")));
		}
		return literal
			.parse::<f64>()
			.map_err(|_| iter.format_error(&format!("invalid number '{literal}'")));
	}

	let integer = skip_digits(iter);
	let mut fraction = false;
	if iter.peek() == Some(b'.') {
		iter.advance();
		fraction = skip_digits(iter);
		if iter.peek() == Some(b'.') {
			bail!(iter.format_error("unexpected '.' in number"));
		}
	}
	if !integer && !fraction {
		bail!(iter.format_error("expected digits in number"));
	}

	if let Some(b'e' | b'E') = iter.peek() {
		iter.advance();
		if let Some(b'+' | b'-') = iter.peek() {
			iter.advance();
		}
		if !skip_digits(iter) {
			bail!(iter.format_error("expected digits after exponent"));
		}
	}

	let literal = std::str::from_utf8(iter.slice_from(start))?;
	literal
		.parse::<f64>()
		.map_err(|_| iter.format_error(&format!("invalid number '{literal}'")))
}

/// Iterates over the entries of a `[ ... ]` array.
///
/// `parse_value` is called with the iterator positioned at each element (leading whitespace
/// skipped) and must consume exactly that element. Returns the collected results; `[]` yields an
/// empty vector.
///
/// # Errors
/// Fails on a missing `[`, a missing `,`/`]` between elements, or any error from `parse_value`.
#[context("while parsing array entries")]
pub fn parse_array_entries<'a, R>(
	iter: &mut ByteIterator<'a>,
	mut parse_value: impl FnMut(&mut ByteIterator<'a>) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b'[' {
		bail!(iter.format_error("expected '['"));
	}
	iter.advance();

	let mut result = Vec::new();

	iter.skip_whitespace();
	if iter.peek() == Some(b']') {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b',' => iter.advance(),
			b']' => {
				iter.advance();
				break;
			}
			_ => bail!(iter.format_error("expected ',' or ']'")),
		}
	}

	Ok(result)
}

/// Iterates over the entries of a `{ ... }` object.
///
/// For every entry the quoted key is parsed, then `parse_value` is called with the key and the
/// iterator positioned at the value; it must consume exactly that value.
///
/// # Errors
/// Fails on malformed objects (missing braces, quotes, colons or commas) or on any error from
/// `parse_value`.
#[context("while parsing object entries")]
pub fn parse_object_entries<'a>(
	iter: &mut ByteIterator<'a>,
	mut parse_value: impl FnMut(String, &mut ByteIterator<'a>) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b'{' {
		bail!(iter.format_error("expected '{'"));
	}
	iter.advance();

	iter.skip_whitespace();
	if iter.peek() == Some(b'}') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			bail!(iter.format_error("expected '\"' at the start of a key"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b':' {
			bail!(iter.format_error("expected ':'"));
		}
		iter.advance();

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b',' => iter.advance(),
			b'}' => {
				iter.advance();
				break;
			}
			_ => bail!(iter.format_error("expected ',' or '}'")),
		}
	}
	Ok(())
}
