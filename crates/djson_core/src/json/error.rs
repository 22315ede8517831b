use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Errors produced while loading, decoding, and querying JSON values.
#[derive(Debug, Error)]
pub enum JsonError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Input ended where a value was required.
	#[error("unexpected end of input at offset {at}")]
	UnexpectedEof {
		/// Byte offset where input ran out.
		at: usize,
	},
	/// Byte does not start or continue any grammar alternative.
	#[error("unexpected character {} at offset {at}, expected {expected}", render_byte(.found))]
	UnexpectedChar {
		/// Byte offset of the offending byte.
		at: usize,
		/// Offending byte.
		found: u8,
		/// What the grammar allowed at this position.
		expected: &'static str,
	},
	/// `true`, `false`, or `null` did not match exactly.
	#[error("invalid literal at offset {at}, expected `{expected}`")]
	InvalidLiteral {
		/// Byte offset of the literal start.
		at: usize,
		/// Keyword implied by the first byte.
		expected: &'static str,
	},
	/// Number lexeme violates the JSON numeric grammar or float64 range.
	#[error("invalid number at offset {at}")]
	InvalidNumber {
		/// Byte offset of the number start.
		at: usize,
	},
	/// String had no closing quote before end of input.
	#[error("unterminated string starting at offset {at}")]
	UnterminatedString {
		/// Byte offset of the opening quote.
		at: usize,
	},
	/// Unknown escape or malformed `\u` sequence.
	#[error("invalid escape sequence at offset {at}")]
	InvalidEscape {
		/// Byte offset of the backslash.
		at: usize,
	},
	/// Raw control byte inside a string literal.
	#[error("unescaped control character 0x{byte:02x} in string at offset {at}")]
	ControlCharInString {
		/// Byte offset of the control byte.
		at: usize,
		/// Raw control byte.
		byte: u8,
	},
	/// String contents are not valid UTF-8.
	#[error("invalid utf-8 in string at offset {at}")]
	InvalidUtf8 {
		/// Byte offset of the first invalid sequence.
		at: usize,
	},
	/// Array or object reached end of input before its closing bracket.
	#[error("unterminated {container} starting at offset {at}")]
	UnterminatedContainer {
		/// Byte offset of the opening bracket.
		at: usize,
		/// `array` or `object`.
		container: &'static str,
	},
	/// Non-whitespace bytes remained after the document.
	#[error("trailing data at offset {at}")]
	TrailingData {
		/// Byte offset of the first trailing byte.
		at: usize,
	},
	/// Nesting exceeded the configured depth limit.
	#[error("nesting too deep at offset {at} (max={max_depth})")]
	DepthExceeded {
		/// Byte offset of the bracket that crossed the limit.
		at: usize,
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Accessor called on a value of another kind.
	#[error("wrong kind: expected {expected}, got {got}")]
	WrongKind {
		/// Kind the accessor requires.
		expected: &'static str,
		/// Kind the value holds.
		got: &'static str,
	},
	/// Array index past the last element.
	#[error("index {index} out of bounds (len={len})")]
	IndexOutOfBounds {
		/// Requested index.
		index: usize,
		/// Array length.
		len: usize,
	},
	/// Object has no member with the requested key.
	#[error("key not found: {key}")]
	KeyNotFound {
		/// Requested key.
		key: String,
	},
	/// Selector expression syntax is invalid.
	#[error("invalid selector: {selector}")]
	InvalidSelector {
		/// Selector text as given.
		selector: String,
	},
}

impl JsonError {
	/// Byte offset of a decode failure, `None` for accessor and IO errors.
	pub fn offset(&self) -> Option<usize> {
		match self {
			Self::UnexpectedEof { at }
			| Self::UnexpectedChar { at, .. }
			| Self::InvalidLiteral { at, .. }
			| Self::InvalidNumber { at }
			| Self::UnterminatedString { at }
			| Self::InvalidEscape { at }
			| Self::ControlCharInString { at, .. }
			| Self::InvalidUtf8 { at }
			| Self::UnterminatedContainer { at, .. }
			| Self::TrailingData { at }
			| Self::DepthExceeded { at, .. } => Some(*at),
			_ => None,
		}
	}

	/// Whether this error came from rejecting input text.
	pub fn is_syntax(&self) -> bool {
		self.offset().is_some()
	}
}

fn render_byte(byte: &u8) -> String {
	let byte = *byte;
	if byte.is_ascii_graphic() {
		format!("'{}'", char::from(byte))
	} else {
		format!("0x{byte:02x}")
	}
}
