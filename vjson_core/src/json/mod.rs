//! Flat JSON objects: scanning, storage and serialization.

mod container;
mod number;
mod scan;
mod stringify;

pub use container::JsonContainer;
pub use number::parse_int_prefix;
pub use stringify::{escape_value, is_bare_literal, stringify};

/// Parse `json` into a [`JsonContainer`], degrading to a partial or empty container on bad input.
#[must_use]
pub fn deserialize_json(json: &str) -> JsonContainer {
	JsonContainer::parse(json)
}

/// Serialize `container` into a JSON object string.
#[must_use]
pub fn serialize_json(container: &JsonContainer) -> String {
	container.stringify()
}

/// Whether `json` is a flat object the strict scanner accepts.
#[must_use]
pub fn is_valid_json_string(json: &str) -> bool {
	match JsonContainer::try_parse(json) {
		Ok(_) => true,
		Err(err) => {
			log::debug!("invalid JSON object: {err:#}");
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn sample() -> JsonContainer {
		JsonContainer::from(vec![
			("id", "17"),
			("temp", "-3.25"),
			("on", "true"),
			("off", "false"),
			("missing", "null"),
			("name", "living room"),
			("empty", ""),
			("odd", "--.."),
		])
	}

	#[test]
	fn test_round_trip() {
		let original = sample();
		let parsed = deserialize_json(&serialize_json(&original));
		assert_eq!(parsed, original);
		assert_eq!(parsed.keys(), original.keys());
	}

	#[test]
	fn test_idempotent() {
		let once = serialize_json(&sample());
		let twice = serialize_json(&deserialize_json(&once));
		assert_eq!(twice, once);
	}

	#[test]
	fn test_round_trip_keeps_order_after_update() {
		let mut obj = sample();
		obj.set("id", "18");
		obj.set("extra", "x");
		let parsed = deserialize_json(&obj.to_string());
		assert_eq!(parsed.keys(), obj.keys());
		assert_eq!(parsed.get("id"), "18");
		assert_eq!(parsed.keys().last().map(String::as_str), Some("extra"));
	}

	#[test]
	fn test_empty_inputs() {
		assert!(deserialize_json("").keys().is_empty());
		assert!(deserialize_json("not an object").keys().is_empty());
		assert_eq!(serialize_json(&deserialize_json("")), "{}");
	}

	#[rstest]
	#[case("{}", true)]
	#[case(r#"{"a":1,"b":true,"s":"hi"}"#, true)]
	#[case(r#" { "a" : null } "#, true)]
	#[case("", false)]
	#[case("not an object", false)]
	#[case(r#"{"a":1"#, false)]
	#[case(r#"{"a" 1}"#, false)]
	#[case(r#"{"a":[1,2]}"#, false)]
	#[case(r#"{"a":"unterminated}"#, false)]
	fn test_is_valid_json_string(#[case] json: &str, #[case] expected: bool) {
		assert_eq!(is_valid_json_string(json), expected);
	}
}
