use crate::json::{JsonError, Result};

/// Bounded read-only cursor over the input slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Whether every byte has been consumed.
	pub fn is_eof(&self) -> bool {
		self.remaining() == 0
	}

	/// Return the next byte without consuming it.
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	/// Return the next byte or fail with end-of-input at the current offset.
	pub fn peek_required(&self) -> Result<u8> {
		self.peek().ok_or(JsonError::UnexpectedEof { at: self.pos })
	}

	/// Consume one byte.
	pub fn bump(&mut self) -> Option<u8> {
		let byte = self.peek()?;
		self.pos += 1;
		Some(byte)
	}

	/// Consume `byte` if it is next, reporting whether it was.
	pub fn eat(&mut self, byte: u8) -> bool {
		if self.peek() == Some(byte) {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	/// Skip JSON insignificant whitespace.
	pub fn skip_whitespace(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.pos += 1;
		}
	}

	/// Borrow all unread bytes.
	pub fn rest(&self) -> &'a [u8] {
		self.bytes.get(self.pos..).unwrap_or_default()
	}

	/// Skip `n` bytes already inspected through [`Cursor::rest`].
	pub fn advance(&mut self, n: usize) {
		self.pos = (self.pos + n).min(self.bytes.len());
	}

	/// Consume `keyword` exactly; on mismatch the cursor is left unchanged.
	pub fn eat_keyword(&mut self, keyword: &[u8]) -> bool {
		if self.rest().starts_with(keyword) {
			self.pos += keyword.len();
			true
		} else {
			false
		}
	}

	/// Consume a run of ASCII digits, returning how many were read.
	pub fn eat_digits(&mut self) -> usize {
		let start = self.pos;
		while self.peek().is_some_and(|byte| byte.is_ascii_digit()) {
			self.pos += 1;
		}
		self.pos - start
	}

	/// Borrow input bytes in `start..self.pos()`.
	pub fn slice_from(&self, start: usize) -> &'a [u8] {
		&self.bytes[start..self.pos]
	}
}
