//! Lazy integer coercion for string-typed values.

/// Parse the leading integer of `text`, returning `f64::NAN` if there is none.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is honoured and a `0x`/`0X` prefix
/// switches to base 16. Parsing stops at the first byte that is not a digit of the active base,
/// so `"12px"` yields `12` and `"3.9"` yields `3`.
///
/// # Example
/// ```
/// # use vjson_core::json::parse_int_prefix;
/// assert_eq!(parse_int_prefix(" -42 apples"), -42.0);
/// assert_eq!(parse_int_prefix("0x1f"), 31.0);
/// assert!(parse_int_prefix("apples").is_nan());
/// ```
#[must_use]
pub fn parse_int_prefix(text: &str) -> f64 {
	let mut rest = text.trim_start();

	let mut sign = 1.0;
	if let Some(r) = rest.strip_prefix('-') {
		sign = -1.0;
		rest = r;
	} else if let Some(r) = rest.strip_prefix('+') {
		rest = r;
	}

	let mut radix = 10;
	if let Some(r) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
		radix = 16;
		rest = r;
	}

	let mut value: Option<f64> = None;
	for c in rest.chars() {
		match c.to_digit(radix) {
			Some(digit) => value = Some(value.unwrap_or(0.0) * f64::from(radix) + f64::from(digit)),
			None => break,
		}
	}

	value.map_or(f64::NAN, |v| sign * v)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("1", 1.0)]
	#[case("42", 42.0)]
	#[case("-5", -5.0)]
	#[case("+7", 7.0)]
	#[case("  12", 12.0)]
	#[case("\n\t8", 8.0)]
	#[case("3.9", 3.0)]
	#[case("-3.9", -3.0)]
	#[case("12px", 12.0)]
	#[case("007", 7.0)]
	#[case("0x1A", 26.0)]
	#[case("0Xff", 255.0)]
	#[case("-0x10", -16.0)]
	#[case("1e5", 1.0)]
	fn numeric_prefixes(#[case] text: &str, #[case] expected: f64) {
		assert_eq!(parse_int_prefix(text), expected);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("-")]
	#[case("+")]
	#[case("0x")]
	#[case("abc")]
	#[case("true")]
	#[case(".5")]
	#[case("--1")]
	#[case("- 1")]
	fn not_a_number(#[case] text: &str) {
		assert!(parse_int_prefix(text).is_nan());
	}

	#[test]
	fn values_beyond_i32() {
		assert_eq!(parse_int_prefix("123456789012"), 123_456_789_012.0);
		assert!(parse_int_prefix("99999999999999999999999").is_finite());
	}
}
