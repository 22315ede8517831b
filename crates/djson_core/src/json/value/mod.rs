use std::collections::HashMap;
use std::fmt;

use crate::json::{JsonError, PathStep, Result, Selector};

/// Discriminant of a decoded [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// JSON `null`.
	Null,
	/// JSON `true` or `false`.
	Bool,
	/// JSON number.
	Number,
	/// JSON string.
	String,
	/// JSON array.
	Array,
	/// JSON object.
	Object,
}

impl Kind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One decoded JSON entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Number scalar; integers and fractions share one representation.
	Number(f64),
	/// Unescaped string contents.
	String(String),
	/// Elements in document order.
	Array(Vec<Value>),
	/// Members keyed by name; duplicate keys keep the last occurrence.
	Object(HashMap<String, Value>),
}

impl Value {
	/// Return the variant discriminant.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Null => Kind::Null,
			Self::Bool(_) => Kind::Bool,
			Self::Number(_) => Kind::Number,
			Self::String(_) => Kind::String,
			Self::Array(_) => Kind::Array,
			Self::Object(_) => Kind::Object,
		}
	}

	/// Whether this is JSON `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Boolean payload, or [`JsonError::WrongKind`] for any other variant.
	pub fn as_bool(&self) -> Result<bool> {
		match self {
			Self::Bool(value) => Ok(*value),
			_ => Err(self.wrong_kind(Kind::Bool)),
		}
	}

	/// Number payload.
	pub fn as_number(&self) -> Result<f64> {
		match self {
			Self::Number(value) => Ok(*value),
			_ => Err(self.wrong_kind(Kind::Number)),
		}
	}

	/// String payload.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			Self::String(value) => Ok(value.as_str()),
			_ => Err(self.wrong_kind(Kind::String)),
		}
	}

	/// Array elements.
	pub fn as_array(&self) -> Result<&[Value]> {
		match self {
			Self::Array(items) => Ok(items.as_slice()),
			_ => Err(self.wrong_kind(Kind::Array)),
		}
	}

	/// Object members.
	pub fn as_object(&self) -> Result<&HashMap<String, Value>> {
		match self {
			Self::Object(members) => Ok(members),
			_ => Err(self.wrong_kind(Kind::Object)),
		}
	}

	/// Number of array elements.
	pub fn array_len(&self) -> Result<usize> {
		self.as_array().map(<[Value]>::len)
	}

	/// Array element at `index`.
	pub fn get(&self, index: usize) -> Result<&Value> {
		let items = self.as_array()?;
		items.get(index).ok_or(JsonError::IndexOutOfBounds { index, len: items.len() })
	}

	/// Boolean array element at `index`.
	pub fn bool_at(&self, index: usize) -> Result<bool> {
		self.get(index)?.as_bool()
	}

	/// Number array element at `index`.
	pub fn number_at(&self, index: usize) -> Result<f64> {
		self.get(index)?.as_number()
	}

	/// String array element at `index`.
	pub fn str_at(&self, index: usize) -> Result<&str> {
		self.get(index)?.as_str()
	}

	/// Object member named `key`.
	pub fn field(&self, key: &str) -> Result<&Value> {
		self.as_object()?.get(key).ok_or_else(|| JsonError::KeyNotFound { key: key.to_owned() })
	}

	/// Boolean object member named `key`.
	pub fn bool_field(&self, key: &str) -> Result<bool> {
		self.field(key)?.as_bool()
	}

	/// Number object member named `key`.
	pub fn number_field(&self, key: &str) -> Result<f64> {
		self.field(key)?.as_number()
	}

	/// String object member named `key`.
	pub fn str_field(&self, key: &str) -> Result<&str> {
		self.field(key)?.as_str()
	}

	/// Follow every selector step from this value.
	pub fn select(&self, selector: &Selector) -> Result<&Value> {
		let mut current = self;
		for step in &selector.steps {
			current = match step {
				PathStep::Field(key) => current.field(key)?,
				PathStep::Index(index) => current.get(*index)?,
			};
		}
		Ok(current)
	}

	/// Convert the tree into a [`serde_json::Value`] for interop.
	pub fn to_dynamic(&self) -> serde_json::Value {
		use serde_json::{Map, Value as JsonValue};

		match self {
			Self::Null => JsonValue::Null,
			Self::Bool(value) => JsonValue::Bool(*value),
			Self::Number(value) => dynamic_number(*value).map_or(JsonValue::Null, JsonValue::Number),
			Self::String(value) => JsonValue::String(value.clone()),
			Self::Array(items) => JsonValue::Array(items.iter().map(Value::to_dynamic).collect()),
			Self::Object(members) => {
				let map: Map<String, JsonValue> = members.iter().map(|(key, value)| (key.clone(), value.to_dynamic())).collect();
				JsonValue::Object(map)
			}
		}
	}

	fn wrong_kind(&self, expected: Kind) -> JsonError {
		JsonError::WrongKind {
			expected: expected.as_str(),
			got: self.kind().as_str(),
		}
	}
}

/// Integral values within the exact f64 range become integer numbers.
fn dynamic_number(value: f64) -> Option<serde_json::Number> {
	const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;
	if value.fract() == 0.0 && value.abs() <= EXACT_INT_LIMIT {
		return Some(serde_json::Number::from(value as i64));
	}
	serde_json::Number::from_f64(value)
}
