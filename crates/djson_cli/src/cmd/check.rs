use std::path::PathBuf;

use crate::cmd::util::{decode_options, emit_json, load_document};

/// Decode a document and report its top-level kind.
pub fn run(path: PathBuf, lossy_utf8: bool, json: bool) -> djson::json::Result<()> {
	let options = decode_options(None, lossy_utf8);
	let (compression, value) = load_document(&path, &options)?;

	if json {
		return emit_json(&CheckJson {
			path: path.display().to_string(),
			compression: compression.as_str(),
			kind: value.kind().as_str(),
		});
	}

	println!("ok: {}", value.kind());
	Ok(())
}

#[derive(serde::Serialize)]
struct CheckJson {
	path: String,
	compression: &'static str,
	kind: &'static str,
}
