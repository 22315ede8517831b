use std::collections::HashMap;

use crate::json::cursor::Cursor;
use crate::json::{JsonError, Result, Value};

const REPLACEMENT: char = '\u{FFFD}';

/// Handling of string bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Policy {
	/// Fail with [`JsonError::InvalidUtf8`].
	Reject,
	/// Substitute U+FFFD for each invalid sequence.
	Replace,
}

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum array/object nesting depth.
	pub max_depth: u32,
	/// What to do with invalid UTF-8 inside string literals.
	pub invalid_utf8: Utf8Policy,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			invalid_utf8: Utf8Policy::Reject,
		}
	}
}

impl DecodeOptions {
	/// Default limits, replacing invalid UTF-8 instead of failing.
	pub fn lossy() -> Self {
		Self {
			invalid_utf8: Utf8Policy::Replace,
			..Self::default()
		}
	}
}

/// Decode exactly one JSON document with default options.
pub fn decode(input: &[u8]) -> Result<Value> {
	decode_with(input, &DecodeOptions::default())
}

/// Decode exactly one JSON document from text.
pub fn decode_str(input: &str) -> Result<Value> {
	decode(input.as_bytes())
}

/// Decode exactly one JSON document, surrounded only by optional whitespace.
pub fn decode_with(input: &[u8], opt: &DecodeOptions) -> Result<Value> {
	tracing::trace!(len = input.len(), max_depth = opt.max_depth, "decode start");

	let mut decoder = Decoder {
		cursor: Cursor::new(input),
		opt,
	};
	let result = decoder.document();

	match &result {
		Ok(value) => tracing::trace!(kind = %value.kind(), "decode done"),
		Err(err) => tracing::debug!(offset = ?err.offset(), error = %err, "decode failed"),
	}
	result
}

struct Decoder<'a, 'o> {
	cursor: Cursor<'a>,
	opt: &'o DecodeOptions,
}

impl Decoder<'_, '_> {
	fn document(&mut self) -> Result<Value> {
		self.cursor.skip_whitespace();
		let value = self.value(0)?;
		self.cursor.skip_whitespace();
		if !self.cursor.is_eof() {
			return Err(JsonError::TrailingData { at: self.cursor.pos() });
		}
		Ok(value)
	}

	fn value(&mut self, depth: u32) -> Result<Value> {
		let at = self.cursor.pos();
		match self.cursor.peek_required()? {
			b't' => self.literal("true", Value::Bool(true)),
			b'f' => self.literal("false", Value::Bool(false)),
			b'n' => self.literal("null", Value::Null),
			b'"' => self.string().map(Value::String),
			b'[' => self.array(depth + 1),
			b'{' => self.object(depth + 1),
			b'-' | b'0'..=b'9' => self.number().map(Value::Number),
			found => Err(JsonError::UnexpectedChar {
				at,
				found,
				expected: "a value",
			}),
		}
	}

	fn literal(&mut self, keyword: &'static str, value: Value) -> Result<Value> {
		let at = self.cursor.pos();
		if !self.cursor.eat_keyword(keyword.as_bytes()) {
			return Err(JsonError::InvalidLiteral { at, expected: keyword });
		}
		Ok(value)
	}

	fn number(&mut self) -> Result<f64> {
		let start = self.cursor.pos();
		let invalid = JsonError::InvalidNumber { at: start };

		self.cursor.eat(b'-');
		match self.cursor.peek() {
			Some(b'0') => {
				self.cursor.bump();
				if self.cursor.peek().is_some_and(|byte| byte.is_ascii_digit()) {
					return Err(invalid);
				}
			}
			Some(b'1'..=b'9') => {
				self.cursor.eat_digits();
			}
			_ => return Err(invalid),
		}

		if self.cursor.eat(b'.') && self.cursor.eat_digits() == 0 {
			return Err(invalid);
		}

		if let Some(b'e' | b'E') = self.cursor.peek() {
			self.cursor.bump();
			if let Some(b'+' | b'-') = self.cursor.peek() {
				self.cursor.bump();
			}
			if self.cursor.eat_digits() == 0 {
				return Err(invalid);
			}
		}

		// The lexeme is pure ASCII at this point.
		let lexeme = self.cursor.slice_from(start);
		std::str::from_utf8(lexeme)
			.ok()
			.and_then(|text| text.parse::<f64>().ok())
			.filter(|value| value.is_finite())
			.ok_or(invalid)
	}

	fn string(&mut self) -> Result<String> {
		let open = self.cursor.pos();
		self.cursor.bump();

		let mut out = Vec::new();
		loop {
			let run = self.cursor.rest();
			let plain = run.iter().position(|&byte| matches!(byte, b'"' | b'\\' | 0x00..=0x1f)).unwrap_or(run.len());
			out.extend_from_slice(&run[..plain]);
			self.cursor.advance(plain);

			let at = self.cursor.pos();
			match self.cursor.bump() {
				None => return Err(JsonError::UnterminatedString { at: open }),
				Some(b'"') => break,
				Some(b'\\') => self.escape(open, at, &mut out)?,
				Some(byte) => return Err(JsonError::ControlCharInString { at, byte }),
			}
		}

		match String::from_utf8(out) {
			Ok(text) => Ok(text),
			Err(err) => match self.opt.invalid_utf8 {
				Utf8Policy::Replace => Ok(String::from_utf8_lossy(err.as_bytes()).into_owned()),
				Utf8Policy::Reject => {
					// Escapes decode to ASCII-delimited valid UTF-8, so the raw body fails at the same sequence.
					let body = self.cursor.slice_from(open + 1);
					let at = std::str::from_utf8(body).err().map_or(open, |err| open + 1 + err.valid_up_to());
					Err(JsonError::InvalidUtf8 { at })
				}
			},
		}
	}

	fn escape(&mut self, open: usize, at: usize, out: &mut Vec<u8>) -> Result<()> {
		let ch = match self.cursor.bump() {
			None => return Err(JsonError::UnterminatedString { at: open }),
			Some(b'"') => '"',
			Some(b'\\') => '\\',
			Some(b'/') => '/',
			Some(b'b') => '\u{8}',
			Some(b'f') => '\u{c}',
			Some(b'n') => '\n',
			Some(b'r') => '\r',
			Some(b't') => '\t',
			Some(b'u') => self.unicode_escape(at)?,
			Some(_) => return Err(JsonError::InvalidEscape { at }),
		};

		let mut buf = [0_u8; 4];
		out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
		Ok(())
	}

	fn unicode_escape(&mut self, at: usize) -> Result<char> {
		let unit = parse_hex4(self.cursor.rest()).ok_or(JsonError::InvalidEscape { at })?;
		self.cursor.advance(4);

		match unit {
			0xD800..=0xDBFF => {
				let rest = self.cursor.rest();
				let low = rest
					.strip_prefix(b"\\u")
					.and_then(parse_hex4)
					.filter(|low| (0xDC00..=0xDFFF).contains(low));
				let Some(low) = low else {
					return Ok(REPLACEMENT);
				};
				self.cursor.advance(6);
				let scalar = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
				Ok(char::from_u32(scalar).unwrap_or(REPLACEMENT))
			}
			0xDC00..=0xDFFF => Ok(REPLACEMENT),
			_ => Ok(char::from_u32(u32::from(unit)).unwrap_or(REPLACEMENT)),
		}
	}

	fn array(&mut self, depth: u32) -> Result<Value> {
		let open = self.enter(depth)?;

		let mut items = Vec::new();
		self.cursor.skip_whitespace();
		if self.cursor.eat(b']') {
			return Ok(Value::Array(items));
		}

		loop {
			self.require_more(open, "array")?;
			items.push(self.value(depth)?);
			if self.separator(open, "array", b']', "`,` or `]`")? {
				return Ok(Value::Array(items));
			}
		}
	}

	fn object(&mut self, depth: u32) -> Result<Value> {
		let open = self.enter(depth)?;

		let mut members = HashMap::new();
		self.cursor.skip_whitespace();
		if self.cursor.eat(b'}') {
			return Ok(Value::Object(members));
		}

		loop {
			self.require_more(open, "object")?;
			let at = self.cursor.pos();
			match self.cursor.peek() {
				Some(b'"') => {}
				Some(found) => {
					return Err(JsonError::UnexpectedChar {
						at,
						found,
						expected: "string key",
					});
				}
				None => return Err(JsonError::UnterminatedContainer { at: open, container: "object" }),
			}
			let key = self.string()?;

			self.cursor.skip_whitespace();
			let at = self.cursor.pos();
			match self.cursor.bump() {
				Some(b':') => {}
				Some(found) => {
					return Err(JsonError::UnexpectedChar {
						at,
						found,
						expected: "`:` after key",
					});
				}
				None => return Err(JsonError::UnterminatedContainer { at: open, container: "object" }),
			}

			self.cursor.skip_whitespace();
			self.require_more(open, "object")?;
			let value = self.value(depth)?;
			members.insert(key, value);

			if self.separator(open, "object", b'}', "`,` or `}`")? {
				return Ok(Value::Object(members));
			}
		}
	}

	/// Consume an opening bracket, checking the depth limit first.
	fn enter(&mut self, depth: u32) -> Result<usize> {
		let open = self.cursor.pos();
		if depth > self.opt.max_depth {
			return Err(JsonError::DepthExceeded {
				at: open,
				max_depth: self.opt.max_depth,
			});
		}
		self.cursor.bump();
		Ok(open)
	}

	fn require_more(&self, open: usize, container: &'static str) -> Result<()> {
		if self.cursor.is_eof() {
			return Err(JsonError::UnterminatedContainer { at: open, container });
		}
		Ok(())
	}

	/// Read `,` or the closing bracket after an element; `true` means the container closed.
	fn separator(&mut self, open: usize, container: &'static str, close: u8, expected: &'static str) -> Result<bool> {
		self.cursor.skip_whitespace();
		let at = self.cursor.pos();
		match self.cursor.bump() {
			Some(b',') => {
				self.cursor.skip_whitespace();
				Ok(false)
			}
			Some(byte) if byte == close => Ok(true),
			Some(found) => Err(JsonError::UnexpectedChar { at, found, expected }),
			None => Err(JsonError::UnterminatedContainer { at: open, container }),
		}
	}
}

fn parse_hex4(bytes: &[u8]) -> Option<u16> {
	let digits = bytes.get(..4)?;
	let mut value = 0_u16;
	for byte in digits {
		let digit = char::from(*byte).to_digit(16)?;
		value = (value << 4) | digit as u16;
	}
	Some(value)
}
