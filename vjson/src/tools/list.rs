use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// file containing a flat JSON object, "-" or nothing reads stdin
	filename: Option<String>,

	/// print only the keys
	#[arg(long, short)]
	keys_only: bool,

	/// fail on malformed input instead of listing what could be read
	#[arg(long, short)]
	strict: bool,
}

pub fn run(arguments: &Subcommand, out: &mut impl Write) -> Result<()> {
	let text = super::read_input(arguments.filename.as_deref())?;
	let container = super::parse_input(&text, arguments.strict)?;

	for (key, value) in container.iter() {
		if arguments.keys_only {
			writeln!(out, "{key}")?;
		} else {
			writeln!(out, "{key}\t{value}")?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::prelude::*;

	fn list(content: &str, keys_only: bool) -> String {
		let file = assert_fs::NamedTempFile::new("input.json").unwrap();
		file.write_str(content).unwrap();
		let arguments = Subcommand {
			filename: Some(file.path().to_string_lossy().to_string()),
			keys_only,
			strict: false,
		};
		let mut out = Vec::new();
		run(&arguments, &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn pairs_in_order() {
		assert_eq!(list(r#"{"b":2,"a":"x y","b":3}"#, false), "b\t3\na\tx y\n");
	}

	#[test]
	fn keys_only() {
		assert_eq!(list(r#"{"b":2,"a":"x"}"#, true), "b\na\n");
	}

	#[test]
	fn empty() {
		assert_eq!(list("nothing here", false), "");
	}
}
