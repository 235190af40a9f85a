pub mod check;
pub mod format;
pub mod get;
pub mod list;

use anyhow::{Context, Result};
use std::io::Read;
use vjson_core::JsonContainer;

/// Read the whole input, from stdin when `filename` is missing or `-`.
pub fn read_input(filename: Option<&str>) -> Result<String> {
	match filename {
		None | Some("-") => {
			let mut text = String::new();
			std::io::stdin()
				.read_to_string(&mut text)
				.context("while reading stdin")?;
			Ok(text)
		}
		Some(path) => std::fs::read_to_string(path).with_context(|| format!("while reading '{path}'")),
	}
}

/// Parse `text` leniently, or strictly when `strict` is set.
pub fn parse_input(text: &str, strict: bool) -> Result<JsonContainer> {
	if strict {
		JsonContainer::try_parse(text)
	} else {
		Ok(JsonContainer::parse(text))
	}
}
