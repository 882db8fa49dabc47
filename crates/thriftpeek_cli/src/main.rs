#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmd;

#[derive(Parser)]
#[command(name = "thriftpeek", about = "Schema-less Thrift binary message inspection")]
struct Cli {
	/// Log filter used when `RUST_LOG` is unset.
	#[arg(long = "log-level", global = true, default_value = "warn")]
	log_level: String,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode one message and print it as JSON.
	Decode(cmd::decode::Args),
	/// Print framing and envelope facts about one message.
	Info(cmd::info::Args),
}

fn main() {
	let cli = Cli::parse();
	setup_logging(&cli.log_level);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> thriftpeek::thrift::Result<()> {
	match command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}

fn setup_logging(level: &str) {
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(level))
		.unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
		.init();
}
