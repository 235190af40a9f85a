mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Validate a flat JSON object
	Check(tools::check::Subcommand),

	#[clap(alias = "fmt")]
	/// Parse a flat JSON object and print it in compact form
	Format(tools::format::Subcommand),

	/// Print the value of a single key
	Get(tools::get::Subcommand),

	#[clap(alias = "ls")]
	/// Print all key/value pairs, one per line
	List(tools::list::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let mut stdout = std::io::stdout().lock();
	match &cli.command {
		Commands::Check(arguments) => tools::check::run(arguments, &mut stdout),
		Commands::Format(arguments) => tools::format::run(arguments, &mut stdout),
		Commands::Get(arguments) => tools::get::run(arguments, &mut stdout),
		Commands::List(arguments) => tools::list::run(arguments, &mut stdout),
	}
}
