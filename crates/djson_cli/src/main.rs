#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "djson", about = "Strict JSON decoding and inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Check {
		path: PathBuf,
		#[arg(long = "lossy-utf8")]
		lossy_utf8: bool,
		#[arg(long)]
		json: bool,
	},
	Show(cmd::show::Args),
	Get(cmd::get::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> djson::json::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Check { path, lossy_utf8, json } => cmd::check::run(path, lossy_utf8, json),
		Commands::Show(args) => cmd::show::run(args),
		Commands::Get(args) => cmd::get::run(args),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
