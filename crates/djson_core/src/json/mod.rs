mod cursor;
mod decode;
mod error;
mod path;
mod source;
mod value;

/// Decoding entry points and options.
pub use decode::{DecodeOptions, Utf8Policy, decode, decode_str, decode_with};
/// Error and result aliases.
pub use error::{JsonError, Result};
/// Path selector parser types.
pub use path::{PathStep, Selector};
/// Input loading and compression detection.
pub use source::{Compression, ZSTD_MAGIC, decode_file, decompress, load_bytes};
/// Decoded value types.
pub use value::{Kind, Value};
