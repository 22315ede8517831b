use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use djson_testkit::{run_bin, run_bin_json, target_dir};

pub(crate) use djson_testkit::fixture_path;

static DJSON_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_djson(args: &[&str]) -> Output {
	run_bin(djson_bin(), args)
}

pub(crate) fn run_djson_json(args: &[&str]) -> serde_json::Value {
	run_bin_json(djson_bin(), args)
}

/// Unit tests see no `CARGO_BIN_EXE_djson`, so build the binary on first use.
fn djson_bin() -> &'static Path {
	DJSON_BIN.get_or_init(|| {
		if let Some(path) = std::env::var_os("CARGO_BIN_EXE_djson") {
			return PathBuf::from(path);
		}

		let status = Command::new(env!("CARGO"))
			.current_dir(env!("CARGO_MANIFEST_DIR"))
			.args(["build", "--quiet", "--bin", "djson"])
			.status()
			.expect("cargo build executes");
		assert!(status.success(), "cargo build --bin djson failed");

		target_dir().join("debug").join(format!("djson{}", std::env::consts::EXE_SUFFIX))
	})
}
