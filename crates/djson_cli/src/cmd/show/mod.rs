use std::path::PathBuf;

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{decode_options, emit_json, load_document};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long = "lossy-utf8")]
	pub lossy_utf8: bool,
	#[arg(long = "nesting-limit")]
	pub nesting_limit: Option<u32>,
}

/// Decode a document and print it as a tree, or re-emit it as JSON.
pub fn run(args: Args) -> djson::json::Result<()> {
	let Args {
		file: path,
		json,
		max_depth,
		max_array,
		lossy_utf8,
		nesting_limit,
	} = args;

	let decode = decode_options(nesting_limit, lossy_utf8);
	let (compression, value) = load_document(&path, &decode)?;

	if json {
		return emit_json(&value.to_dynamic());
	}

	let mut print = PrintOptions::default();
	if let Some(max_depth) = max_depth {
		print.max_print_depth = max_depth;
	}
	if let Some(max_array) = max_array {
		print.max_array_items = max_array;
	}

	println!("path: {}", path.display());
	println!("compression: {}", compression.as_str());
	println!("kind: {}", value.kind());
	println!("value:");
	print_value(&value, 2, print);

	Ok(())
}
