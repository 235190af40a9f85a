//! Single-pass scanner turning a flat JSON object string into a [`JsonContainer`].
//!
//! The scanner walks one [`ByteCursor`] from the byte after the opening `{` to the final `}`.
//! Keys must be quoted; values are either quoted strings or bare tokens that run up to the next
//! `,` or `}`. Strings are taken verbatim up to the next `"` without escape handling, and nested
//! objects or arrays are not recognised.
//!
//! Every pair is written into the container as soon as it is complete, so when the scan returns an
//! error the container still holds everything read before the problem. The lenient entry point
//! relies on this to degrade to a partial result.

use super::{JsonContainer, stringify::is_bare_literal};
use crate::{byte_cursor::ByteCursor, config::ScanOptions};
use anyhow::{Result, bail};

/// Scan `json` into `container`.
///
/// In lenient mode an error only means "stopped here". In strict mode questionable but
/// recoverable input (missing or doubled commas, non-literal bare values) is reported as well.
pub(crate) fn scan_object(json: &str, container: &mut JsonContainer, options: ScanOptions) -> Result<()> {
	let json = json.trim();
	let mut cursor = ByteCursor::new(json, options.debug);

	if cursor.peek() != Some(b'{') {
		return Err(cursor.format_error("expected '{'"));
	}
	if json.len() < 2 || !json.ends_with('}') {
		bail!("expected '}}' at the end of the object");
	}

	let end = json.len() - 1;
	cursor.advance();

	let mut is_first = true;
	while cursor.position() < end {
		let commas = cursor.skip_separators();
		let is_at_end = cursor.position() >= end;

		if options.strict && commas != usize::from(!is_first && !is_at_end) {
			let msg = if commas == 0 { "expected ',' or '}'" } else { "unexpected ','" };
			return Err(cursor.format_error(msg));
		}
		if is_at_end {
			break;
		}

		if cursor.peek() != Some(b'"') {
			return Err(cursor.format_error("expected '\"' or '}'"));
		}
		cursor.advance();
		let key = cursor.take_until(|b| b == b'"');
		if cursor.consume().is_none() {
			return Err(cursor.format_error("unterminated key"));
		}

		cursor.skip_whitespace();
		if cursor.peek() != Some(b':') {
			return Err(cursor.format_error("expected ':'"));
		}
		cursor.advance();
		cursor.skip_whitespace();

		if cursor.position() >= end {
			return Err(cursor.format_error("expected a value"));
		}

		let mut is_unterminated = false;
		let value = if cursor.peek() == Some(b'"') {
			cursor.advance();
			let value = cursor.take_until(|b| b == b'"');
			is_unterminated = cursor.consume().is_none();
			value
		} else {
			let value = cursor.take_until(|b| b == b',' || b == b'}').trim();
			if options.strict && !is_bare_literal(value) {
				return Err(cursor.format_error("expected a quoted string or a literal"));
			}
			value
		};

		log::trace!("scanned {key:?} = {value:?}");
		container.set(key, value);

		// An unterminated value swallows the rest of the input, closing brace included.
		if is_unterminated {
			return Err(cursor.format_error("unterminated string"));
		}
		is_first = false;
	}

	Ok(())
}
