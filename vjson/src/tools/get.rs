use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// key to look up
	#[arg(required = true)]
	key: String,

	/// file containing a flat JSON object, "-" or nothing reads stdin
	filename: Option<String>,

	/// print the leading integer of the value, or NaN
	#[arg(long, short, conflicts_with = "boolean")]
	number: bool,

	/// print "true" only if the value is exactly true, otherwise "false"
	#[arg(long, short)]
	boolean: bool,

	/// fail on malformed input instead of searching what could be read
	#[arg(long, short)]
	strict: bool,
}

pub fn run(arguments: &Subcommand, out: &mut impl Write) -> Result<()> {
	let text = super::read_input(arguments.filename.as_deref())?;
	let container = super::parse_input(&text, arguments.strict)?;
	let key = arguments.key.as_str();

	if !container.contains_key(key) {
		log::warn!("key {key:?} not found");
	}

	if arguments.number {
		writeln!(out, "{}", container.get_number(key))?;
	} else if arguments.boolean {
		writeln!(out, "{}", container.get_boolean(key))?;
	} else {
		writeln!(out, "{}", container.get(key))?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::prelude::*;
	use rstest::rstest;

	const INPUT: &str = r#"{"n":42,"f":"2.75","b":true,"s":"hello"}"#;

	fn get(key: &str, number: bool, boolean: bool) -> String {
		let file = assert_fs::NamedTempFile::new("input.json").unwrap();
		file.write_str(INPUT).unwrap();
		let arguments = Subcommand {
			key: key.to_string(),
			filename: Some(file.path().to_string_lossy().to_string()),
			number,
			boolean,
			strict: false,
		};
		let mut out = Vec::new();
		run(&arguments, &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[rstest]
	#[case("n", false, false, "42\n")]
	#[case("s", false, false, "hello\n")]
	#[case("missing", false, false, "\n")]
	#[case("n", true, false, "42\n")]
	#[case("f", true, false, "2\n")]
	#[case("s", true, false, "NaN\n")]
	#[case("b", false, true, "true\n")]
	#[case("s", false, true, "false\n")]
	fn lookups(#[case] key: &str, #[case] number: bool, #[case] boolean: bool, #[case] expected: &str) {
		assert_eq!(get(key, number, boolean), expected);
	}
}
