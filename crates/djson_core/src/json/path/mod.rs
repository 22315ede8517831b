use crate::json::{JsonError, Result};

/// One parsed operation in a selector expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select an object member by key.
	Field(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

/// Parsed selector expression such as `items[2].name`.
#[derive(Debug, Clone, Default)]
pub struct Selector {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl Selector {
	/// Parse dotted key syntax with optional `[index]` selectors.
	///
	/// `.` alone selects the root. A selector may start with an index so that
	/// array documents can be addressed (`[0].id`).
	pub fn parse(input: &str) -> Result<Self> {
		if input == "." {
			return Ok(Self::default());
		}
		let invalid = || JsonError::InvalidSelector { selector: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && is_key_byte(bytes[idx]) {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Field(input[start..idx].to_owned()));
			} else if !(steps.is_empty() && bytes[idx] == b'[') {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}
}

fn is_key_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-' | b'$' | b'@')
}
