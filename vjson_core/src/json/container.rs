//! Ordered, flat key-value container where every value is kept as raw text.
use super::{number::parse_int_prefix, scan::scan_object, stringify::stringify};
use crate::config::ScanOptions;
use anyhow::{Context, Result};
use std::fmt::{Debug, Display};

/// A flat JSON object with string keys and string-typed values.
///
/// Keys are unique and keep their insertion order. Values are stored exactly as they were set or
/// scanned (`"42"`, `"true"`, `"hello"`); numeric and boolean interpretation happens in the
/// accessors. Lookups are linear, which is fine for the small objects this type is meant for.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct JsonContainer {
	keys: Vec<String>,
	values: Vec<String>,
}

impl JsonContainer {
	/// Create a new, empty `JsonContainer`.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a JSON-object-shaped string, never failing.
	///
	/// Input that is not wrapped in `{` and `}` yields an empty container. Parsing stops at the first
	/// structural problem (missing quote before a key, missing colon, missing value) and keeps every
	/// pair collected up to that point.
	///
	/// # Example
	/// ```
	/// # use vjson_core::JsonContainer;
	/// let obj = JsonContainer::parse(r#"{"a":1,"b":true,"s":"hi"}"#);
	/// assert_eq!(obj.keys(), ["a", "b", "s"]);
	/// assert_eq!(obj.get_number("a"), 1.0);
	/// assert!(obj.get_boolean("b"));
	/// assert_eq!(obj.get("s"), "hi");
	/// ```
	#[must_use]
	pub fn parse(json: &str) -> JsonContainer {
		let mut container = JsonContainer::new();
		if let Err(err) = scan_object(json, &mut container, ScanOptions::lenient()) {
			log::debug!("stopped parsing JSON object after {} pair(s): {err}", container.len());
		}
		container
	}

	/// Same as [`JsonContainer::parse`], treating `None` like an empty string.
	#[must_use]
	pub fn parse_opt(json: Option<&str>) -> JsonContainer {
		json.map(JsonContainer::parse).unwrap_or_default()
	}

	/// Parse a JSON-object-shaped string, returning an error wherever [`JsonContainer::parse`] would
	/// stop early or accept something questionable.
	///
	/// # Errors
	/// Returns an error on empty or non-object input, missing quotes, colons or commas,
	/// unterminated strings and bare values that are not literals.
	pub fn try_parse(json: &str) -> Result<JsonContainer> {
		let mut container = JsonContainer::new();
		scan_object(json, &mut container, ScanOptions::strict())
			.with_context(|| format!("while parsing JSON object '{json}'"))?;
		Ok(container)
	}

	fn index_of_key(&self, key: &str) -> Option<usize> {
		self.keys.iter().position(|k| k == key)
	}

	/// Set `key` to `value`. An existing key is updated in place and keeps its position; a new key
	/// is appended.
	pub fn set(&mut self, key: &str, value: &str) {
		if let Some(index) = self.index_of_key(key) {
			value.clone_into(&mut self.values[index]);
		} else {
			self.keys.push(key.to_owned());
			self.values.push(value.to_owned());
		}
	}

	/// Get the raw value of `key`, or `""` if the key is missing.
	#[must_use]
	pub fn get(&self, key: &str) -> &str {
		self.index_of_key(key).map_or("", |index| self.values[index].as_str())
	}

	/// Get the leading integer of the value of `key`, or `f64::NAN` if there is none.
	///
	/// See [`parse_int_prefix`] for the exact rules.
	#[must_use]
	pub fn get_number(&self, key: &str) -> f64 {
		parse_int_prefix(self.get(key))
	}

	/// `true` only if the raw value of `key` is exactly `"true"`.
	#[must_use]
	pub fn get_boolean(&self, key: &str) -> bool {
		self.get(key) == "true"
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.keys.iter().any(|k| k == key)
	}

	#[must_use]
	pub fn contains_value(&self, value: &str) -> bool {
		self.values.iter().any(|v| v == value)
	}

	/// A copy of all keys in insertion order.
	#[must_use]
	pub fn keys(&self) -> Vec<String> {
		self.keys.clone()
	}

	/// A copy of all raw values in insertion order.
	#[must_use]
	pub fn values(&self) -> Vec<String> {
		self.values.clone()
	}

	/// Call `handler` with every key and raw value, in insertion order.
	pub fn for_each(&self, mut handler: impl FnMut(&str, &str)) {
		for (key, value) in self.iter() {
			handler(key, value);
		}
	}

	/// Return an iterator over key-value pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.keys.iter().map(String::as_str).zip(self.values.iter().map(String::as_str))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Serialize into a compact JSON object string.
	///
	/// Numeric-looking values and `true`/`false`/`null` are written bare, everything else is quoted.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}
}

impl Debug for JsonContainer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl Display for JsonContainer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

/// Build a `JsonContainer` from key-value pairs, applying [`JsonContainer::set`] to each.
impl From<Vec<(&str, &str)>> for JsonContainer {
	fn from(input: Vec<(&str, &str)>) -> Self {
		let mut container = JsonContainer::new();
		for (key, value) in input {
			container.set(key, value);
		}
		container
	}
}
