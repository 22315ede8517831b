use std::path::PathBuf;

use djson::json::Selector;

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{decode_options, emit_json, load_document};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Selector such as `servers[0].host`; `.` selects the whole document.
	pub selector: String,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "lossy-utf8")]
	pub lossy_utf8: bool,
}

/// Decode a document and print the value at `selector`.
pub fn run(args: Args) -> djson::json::Result<()> {
	let Args {
		file: path,
		selector: selector_expr,
		json,
		lossy_utf8,
	} = args;

	let selector = Selector::parse(&selector_expr)?;
	let (_, document) = load_document(&path, &decode_options(None, lossy_utf8))?;
	let value = document.select(&selector)?;

	if json {
		return emit_json(&GetJson {
			path: path.display().to_string(),
			selector: selector_expr,
			kind: value.kind().as_str(),
			value: value.to_dynamic(),
		});
	}

	print_value(value, 0, PrintOptions::default());
	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson {
	path: String,
	selector: String,
	kind: &'static str,
	value: serde_json::Value,
}
