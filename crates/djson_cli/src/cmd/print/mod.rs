use djson::json::Value;

use crate::cmd::util::quote;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of members printed for a single object.
	pub max_members_per_object: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_members_per_object: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Print one decoded value tree to stdout.
pub fn print_value(value: &Value, indent: usize, options: PrintOptions) {
	print!("{}", render_value(value, indent, options));
}

/// Render one decoded value tree as indented text.
///
/// Object members are listed in key order so output is stable across runs.
pub fn render_value(value: &Value, indent: usize, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, indent, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}[... {} items]\n", items.len()));
				return;
			}
			out.push_str(&format!("{pad}[\n"));
			for item in items.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				out.push_str(&format!("{pad}  ... {} more\n", items.len() - options.max_array_items));
			}
			out.push_str(&format!("{pad}]\n"));
		}
		Value::Object(members) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}{{ ... {} members }}\n", members.len()));
				return;
			}
			let mut entries: Vec<(&String, &Value)> = members.iter().collect();
			entries.sort_by(|a, b| a.0.cmp(b.0));

			out.push_str(&format!("{pad}{{\n"));
			for (key, member) in entries.iter().take(options.max_members_per_object) {
				let label = quote(key);
				match scalar(member, options) {
					Some(text) => out.push_str(&format!("{pad}  {label}: {text}\n")),
					None => {
						out.push_str(&format!("{pad}  {label}:\n"));
						write_value(out, member, indent + 4, depth + 1, options);
					}
				}
			}
			if members.len() > options.max_members_per_object {
				out.push_str(&format!("{pad}  ... {} more members\n", members.len() - options.max_members_per_object));
			}
			out.push_str(&format!("{pad}}}\n"));
		}
		_ => {
			if let Some(text) = scalar(value, options) {
				out.push_str(&format!("{pad}{text}\n"));
			}
		}
	}
}

/// Single-line rendering for scalars; `None` for containers.
fn scalar(value: &Value, options: PrintOptions) -> Option<String> {
	match value {
		Value::Null => Some("null".to_owned()),
		Value::Bool(v) => Some(v.to_string()),
		Value::Number(v) => Some(v.to_string()),
		Value::String(v) => Some(quote(&truncate(v, options.max_string_len))),
		Value::Array(_) | Value::Object(_) => None,
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
