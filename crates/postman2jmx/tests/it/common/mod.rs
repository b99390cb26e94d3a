#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

/// Returns the postman2jmx binary that cargo built before launching the
/// tests.
pub fn get_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_postman2jmx"))
}

/// Create a `postman2jmx` command for testing.
pub fn postman2jmx_command() -> Command {
    Command::new(get_bin())
}

/// Return the path to a JSON fixture under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
