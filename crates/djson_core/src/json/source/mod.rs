use std::io::Read;
use std::path::Path;
use std::{fs, io};

use crate::json::{DecodeOptions, JsonError, Result, Value, decode_with};

const MAX_DECOMPRESSED_BYTES: usize = 256 * 1024 * 1024;
/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Plain JSON text.
	None,
	/// zstd-compressed JSON text.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}

	/// Detect compression from the leading bytes.
	pub fn detect(raw: &[u8]) -> Self {
		if raw.starts_with(&ZSTD_MAGIC) { Self::Zstd } else { Self::None }
	}
}

/// Read a document from `path` (`-` is stdin), decompressing when needed.
pub fn load_bytes(path: impl AsRef<Path>) -> Result<(Compression, Vec<u8>)> {
	let path = path.as_ref();
	let raw = if path == Path::new("-") {
		let mut buf = Vec::new();
		io::stdin().lock().read_to_end(&mut buf)?;
		buf
	} else {
		fs::read(path)?
	};
	let (compression, bytes) = decompress(raw)?;
	tracing::debug!(path = %path.display(), compression = compression.as_str(), len = bytes.len(), "loaded input");
	Ok((compression, bytes))
}

/// Load and decode one document from `path`.
pub fn decode_file(path: impl AsRef<Path>, opt: &DecodeOptions) -> Result<Value> {
	let (_, bytes) = load_bytes(path)?;
	decode_with(&bytes, opt)
}

/// Detect and undo compression, returning `(mode, plain_bytes)`.
pub fn decompress(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	match Compression::detect(&raw) {
		Compression::None => Ok((Compression::None, raw)),
		Compression::Zstd => Ok((Compression::Zstd, decode_zstd(&raw, MAX_DECOMPRESSED_BYTES)?)),
	}
}

/// Decompress one zstd stream, failing once output would exceed `limit` bytes.
fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(JsonError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
