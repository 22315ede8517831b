use djson::json::decode_str;

use super::{PrintOptions, render_value, truncate};

#[test]
fn objects_render_members_in_key_order() {
	let value = decode_str(r#"{"b": [1, true], "a": null, "c": {"d": "x"}}"#).expect("decodes");
	let rendered = render_value(&value, 0, PrintOptions::default());

	let expected = "{\n  \"a\": null\n  \"b\":\n    [\n      1\n      true\n    ]\n  \"c\":\n    {\n      \"d\": \"x\"\n    }\n}\n";
	assert_eq!(rendered, expected);
}

#[test]
fn long_arrays_are_truncated() {
	let value = decode_str("[1, 2, 3, 4, 5]").expect("decodes");
	let options = PrintOptions {
		max_array_items: 2,
		..PrintOptions::default()
	};

	assert_eq!(render_value(&value, 0, options), "[\n  1\n  2\n  ... 3 more\n]\n");
}

#[test]
fn depth_limit_collapses_nested_containers() {
	let value = decode_str(r#"[[1, 2], {"a": 1}]"#).expect("decodes");
	let options = PrintOptions {
		max_print_depth: 1,
		..PrintOptions::default()
	};

	assert_eq!(render_value(&value, 2, options), "  [\n    [... 2 items]\n    { ... 1 members }\n  ]\n");
}

#[test]
fn strings_are_escaped_and_truncated() {
	let value = decode_str(r#"["line\nbreak", "abcdefgh"]"#).expect("decodes");
	let options = PrintOptions {
		max_string_len: 4,
		..PrintOptions::default()
	};

	assert_eq!(render_value(&value, 0, options), "[\n  \"line...\"\n  \"abcd...\"\n]\n");
	assert_eq!(truncate("日本語", 2), "日本...");
	assert_eq!(truncate("short", 10), "short");
}

#[test]
fn wide_objects_report_hidden_members() {
	let value = decode_str(r#"{"a": 1, "b": 2, "c": 3}"#).expect("decodes");
	let options = PrintOptions {
		max_members_per_object: 1,
		..PrintOptions::default()
	};

	assert_eq!(render_value(&value, 0, options), "{\n  \"a\": 1\n  ... 2 more members\n}\n");
}
