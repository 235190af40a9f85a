//! A tiny, permissive parser and serializer for flat JSON objects.
//!
//! Every value is kept as raw text and only interpreted when read through
//! [`JsonContainer::get_number`] or [`JsonContainer::get_boolean`].
//!
//! ```
//! use vjson_core::JsonContainer;
//!
//! let mut obj = JsonContainer::parse(r#"{"x":5,"label":"hello"}"#);
//! obj.set("on", "true");
//! assert_eq!(obj.stringify(), r#"{"x":5,"label":"hello","on":true}"#);
//! ```

pub mod byte_cursor;

pub mod config;

pub mod json;

pub use config::ScanOptions;
pub use json::{JsonContainer, deserialize_json, is_valid_json_string, serialize_json};
