use anyhow::Result;
use clap::Args;
use std::io::Write;
use vjson_core::JsonContainer;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// file containing a flat JSON object, "-" or nothing reads stdin
	filename: Option<String>,
}

pub fn run(arguments: &Subcommand, out: &mut impl Write) -> Result<()> {
	let text = super::read_input(arguments.filename.as_deref())?;
	let container = JsonContainer::try_parse(&text)?;
	log::info!("found {} key(s)", container.len());
	writeln!(out, "ok")?;
	Ok(())
}
