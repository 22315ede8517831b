//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture's raw bytes.
pub fn read_fixture(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	fs::read(&path).unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()))
}

/// List `*.json` fixture names under `<workspace>/fixtures/<dir>`, sorted.
///
/// Returned names are relative to the fixtures root so they can be passed
/// straight back to [`fixture_path`] or [`read_fixture`].
pub fn fixtures_in(dir: &str) -> Vec<String> {
	let root = fixture_path(dir);
	let entries = fs::read_dir(&root).unwrap_or_else(|err| panic!("failed to list {}: {err}", root.display()));

	let mut names: Vec<String> = entries
		.filter_map(|entry| entry.ok())
		.map(|entry| entry.file_name().to_string_lossy().into_owned())
		.filter(|name| name.ends_with(".json"))
		.map(|name| format!("{dir}/{name}"))
		.collect();
	names.sort();
	names
}

/// Parse `bytes` with `serde_json` and normalize every number to `f64`.
///
/// The normalized tree compares equal to a decoder that stores all numbers
/// as doubles. Returns `None` when `serde_json` rejects the input.
pub fn oracle(bytes: &[u8]) -> Option<serde_json::Value> {
	serde_json::from_slice::<serde_json::Value>(bytes).ok().map(normalize_numbers)
}

/// Rewrite every number in `value` as its `f64` approximation.
pub fn normalize_numbers(value: serde_json::Value) -> serde_json::Value {
	use serde_json::Value;

	match value {
		Value::Number(number) => number
			.as_f64()
			.and_then(serde_json::Number::from_f64)
			.map_or(Value::Null, Value::Number),
		Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
		Value::Object(members) => Value::Object(members.into_iter().map(|(key, value)| (key, normalize_numbers(value))).collect()),
		other => other,
	}
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Run `bin` with `args`, capturing stdout, stderr and the exit status.
pub fn run_bin(bin: &Path, args: &[&str]) -> Output {
	Command::new(bin)
		.args(args)
		.output()
		.unwrap_or_else(|err| panic!("failed to execute {}: {err}", bin.display()))
}

/// Run `bin` with `args`, require success, and parse stdout as JSON.
pub fn run_bin_json(bin: &Path, args: &[&str]) -> serde_json::Value {
	let output = run_bin(bin, args);
	assert!(
		output.status.success(),
		"{} {args:?} failed with status={}: {}",
		bin.display(),
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
