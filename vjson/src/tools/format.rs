use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// file containing a flat JSON object, "-" or nothing reads stdin
	filename: Option<String>,

	/// fail on malformed input instead of printing what could be read
	#[arg(long, short)]
	strict: bool,
}

pub fn run(arguments: &Subcommand, out: &mut impl Write) -> Result<()> {
	let text = super::read_input(arguments.filename.as_deref())?;
	let container = super::parse_input(&text, arguments.strict)?;
	writeln!(out, "{container}")?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::prelude::*;

	fn format(content: &str, strict: bool) -> Result<String> {
		let file = assert_fs::NamedTempFile::new("input.json")?;
		file.write_str(content)?;
		let arguments = Subcommand {
			filename: Some(file.path().to_string_lossy().to_string()),
			strict,
		};
		let mut out = Vec::new();
		run(&arguments, &mut out)?;
		Ok(String::from_utf8(out)?)
	}

	#[test]
	fn compacts() {
		let input = "{\n  \"x\" : 5,\n  \"y\" : \"hello\"\n}\n";
		assert_eq!(format(input, false).unwrap(), "{\"x\":5,\"y\":\"hello\"}\n");
	}

	#[test]
	fn lenient_keeps_partial_result() {
		assert_eq!(format(r#"{"a":1,"b" 2}"#, false).unwrap(), "{\"a\":1}\n");
		assert!(format(r#"{"a":1,"b" 2}"#, true).is_err());
	}
}
