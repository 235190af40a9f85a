//! A forward-only byte cursor over a borrowed string with optional debug support.
//!
//! The `ByteCursor` struct walks the bytes of a `&str` one at a time. It supports peeking at the
//! current byte, advancing, consuming, skipping separators and borrowing the text between two
//! positions. When debug mode is enabled, error messages include a snapshot of the bytes that were
//! read right before the failure.

use anyhow::{Error, anyhow};

const DEBUG_SNAPSHOT_SIZE: usize = 16;

/// A cursor over the bytes of a string slice.
///
/// # Fields
///
/// * `text` - The scanned text. Slices handed out by [`ByteCursor::take_until`] borrow from it.
/// * `position` - Index of the current byte. Never exceeds `text.len()`.
/// * `is_debug_enabled` - Flag indicating if error messages carry a snapshot of recent bytes.
pub struct ByteCursor<'a> {
	text: &'a str,
	position: usize,
	is_debug_enabled: bool,
}

impl<'a> ByteCursor<'a> {
	/// Creates a new `ByteCursor` positioned at the first byte of `text`.
	///
	/// # Arguments
	///
	/// * `text` - The text to walk.
	/// * `debug` - Enables debug snapshots in [`ByteCursor::format_error`].
	#[must_use]
	pub fn new(text: &'a str, debug: bool) -> Self {
		ByteCursor {
			text,
			position: 0,
			is_debug_enabled: debug,
		}
	}

	/// Formats an error message including the current position and, in debug mode, the bytes
	/// read right before it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		if self.is_debug_enabled {
			let start = self.position.saturating_sub(DEBUG_SNAPSHOT_SIZE);
			let mut snapshot = String::from_utf8_lossy(&self.text.as_bytes()[start..self.position]).into_owned();
			if self.peek().is_none() {
				snapshot.push_str("<EOF>");
			}
			anyhow!("{msg} at position {}: {snapshot}", self.position)
		} else {
			anyhow!("{msg} at position {}", self.position)
		}
	}

	/// Returns the index of the current byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Returns the current byte without consuming it, or `None` at the end of the text.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.text.as_bytes().get(self.position).copied()
	}

	/// Moves to the next byte. Does nothing at the end of the text.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.text.len() {
			self.position += 1;
		}
	}

	/// Returns the current byte and moves past it.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peek();
		self.advance();
		current_byte
	}

	/// Skips spaces, tabs, newlines and carriage returns.
	pub fn skip_whitespace(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.advance();
		}
	}

	/// Skips whitespace and commas, returning how many commas were skipped.
	pub fn skip_separators(&mut self) -> usize {
		let mut commas = 0;
		while let Some(byte @ (b' ' | b'\t' | b'\n' | b'\r' | b',')) = self.peek() {
			if byte == b',' {
				commas += 1;
			}
			self.advance();
		}
		commas
	}

	/// Advances until `is_delimiter` matches the current byte or the text ends, and returns the
	/// text that was passed over. The delimiter itself is not consumed.
	///
	/// Delimiters are expected to be ASCII, so the returned slice always lies on character
	/// boundaries. Should a caller stop inside a multi-byte character, an empty slice is returned.
	pub fn take_until(&mut self, is_delimiter: impl Fn(u8) -> bool) -> &'a str {
		let start = self.position;
		while let Some(byte) = self.peek() {
			if is_delimiter(byte) {
				break;
			}
			self.advance();
		}
		self.text.get(start..self.position).unwrap_or_default()
	}
}
