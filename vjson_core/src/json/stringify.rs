use super::JsonContainer;

/// Serialize `container` into a compact JSON object string.
///
/// Keys are written as-is between quotes. Values that pass [`is_bare_literal`] are written
/// unquoted; all others are quoted and run through [`escape_value`].
pub fn stringify(container: &JsonContainer) -> String {
	let mut result = String::from("{");
	for (index, (key, value)) in container.iter().enumerate() {
		if index > 0 {
			result.push(',');
		}
		result.push('"');
		result.push_str(key);
		result.push_str("\":");
		if is_bare_literal(value) {
			result.push_str(value);
		} else {
			result.push('"');
			result.push_str(&escape_value(value));
			result.push('"');
		}
	}
	result.push('}');
	result
}

/// Whether `value` is written without quotes: `true`, `false`, `null`, or a non-empty run of
/// digits, `-` and `.`.
///
/// The numeric test is a character-class check, so `"--.."` counts as a literal while `"1e5"` does not.
pub fn is_bare_literal(value: &str) -> bool {
	matches!(value, "true" | "false" | "null")
		|| (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit() || b == b'-' || b == b'.'))
}

/// Prefix every `\` and `"` with a backslash. Nothing else is escaped.
pub fn escape_value(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		if c == '\\' || c == '"' {
			escaped.push('\\');
		}
		escaped.push(c);
	}
	escaped
}
