use std::path::Path;

use djson::json::{Compression, DecodeOptions, Result, Value, decode_with, load_bytes};

/// Build decode options from shared CLI flags.
pub(crate) fn decode_options(nesting_limit: Option<u32>, lossy_utf8: bool) -> DecodeOptions {
	let mut options = if lossy_utf8 { DecodeOptions::lossy() } else { DecodeOptions::default() };
	if let Some(limit) = nesting_limit {
		options.max_depth = limit;
	}
	options
}

/// Load, decompress and decode one input document.
pub(crate) fn load_document(path: &Path, options: &DecodeOptions) -> Result<(Compression, Value)> {
	let (compression, bytes) = load_bytes(path)?;
	let value = decode_with(&bytes, options)?;
	tracing::debug!(path = %path.display(), kind = %value.kind(), "decoded document");
	Ok((compression, value))
}

/// Print `payload` to stdout as pretty JSON.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}

/// Escape text for display inside double quotes.
pub(crate) fn quote(input: &str) -> String {
	let mut out = String::with_capacity(input.len() + 2);
	out.push('"');
	for ch in input.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
			c => out.push(c),
		}
	}
	out.push('"');
	out
}
