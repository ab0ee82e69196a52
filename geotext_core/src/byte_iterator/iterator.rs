//! A byte-level cursor over borrowed text.
//!
//! `ByteIterator` supports peeking at the next byte, consuming bytes one by one and reporting
//! errors that carry the byte offset where scanning stopped. In debug mode the error message also
//! shows the input leading up to that offset.

use anyhow::{Error, Result, anyhow};

const DEBUG_SNIPPET_SIZE: usize = 16;

/// A cursor over a byte slice.
///
/// `position` always points at the byte returned by [`ByteIterator::peek`], so after a failed
/// parse it is the offset of the first byte that could not be accepted.
#[derive(Clone, Debug)]
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
	is_debug_enabled: bool,
}

impl<'a> ByteIterator<'a> {
	/// Creates a cursor at the start of `text`.
	///
	/// With `debug` enabled, [`format_error`](Self::format_error) appends a snippet of the input.
	#[must_use]
	pub fn new(text: &'a str, debug: bool) -> Self {
		Self::from_bytes(text.as_bytes(), debug)
	}

	/// Creates a cursor at the start of a raw byte slice.
	#[must_use]
	pub fn from_bytes(bytes: &'a [u8], debug: bool) -> Self {
		ByteIterator {
			bytes,
			position: 0,
			is_debug_enabled: debug,
		}
	}

	/// Builds an error message that names the current byte offset.
	///
	/// In debug mode the last few bytes up to and including the current one are appended,
	/// followed by `<EOF>` when the input is exhausted.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		if self.is_debug_enabled {
			let end = (self.position + 1).min(self.bytes.len());
			let start = end.saturating_sub(DEBUG_SNIPPET_SIZE);
			let mut snippet = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
			if self.peek().is_none() {
				snippet.push_str("<EOF>");
			}
			anyhow!("{msg} at position {}: {snippet}", self.position)
		} else {
			anyhow!("{msg} at position {}", self.position)
		}
	}

	/// Byte offset of the next unread byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Returns the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Returns `true` once every byte has been consumed.
	#[inline]
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.bytes.len()
	}

	/// Moves past the next byte. Does nothing at the end of the input.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Consumes and returns the next byte.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		self.advance();
		byte
	}

	/// Consumes and returns the next byte, failing at the end of the input.
	///
	/// # Errors
	/// Returns an error if the input is exhausted.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		let byte = self.expect_peeked_byte()?;
		self.advance();
		Ok(byte)
	}

	/// Returns the next byte without consuming it, failing at the end of the input.
	///
	/// # Errors
	/// Returns an error if the input is exhausted.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skips ASCII whitespace (space, tab, line feed, form feed, carriage return).
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Skips trailing whitespace and fails if anything else is left.
	///
	/// # Errors
	/// Returns an error pointing at the first unconsumed non-whitespace byte.
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		if self.is_at_end() {
			Ok(())
		} else {
			Err(self.format_error("unexpected trailing characters"))
		}
	}

	/// Returns the bytes between `start` and the current position.
	#[must_use]
	pub fn slice_from(&self, start: usize) -> &'a [u8] {
		&self.bytes[start.min(self.position)..self.position]
	}

	/// Returns everything that has not been consumed yet.
	#[must_use]
	pub fn remaining(&self) -> &'a [u8] {
		&self.bytes[self.position..]
	}
}
