// Shared test helpers for integration tests
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a filter file with the given contents into `dir` and returns its
/// path.
pub fn write_filter_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write filter file fixture");
    path
}

/// Writes a shadows allowlist file with the given contents into `dir` and
/// returns its path.
pub fn write_allowlist_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write allowlist fixture");
    path
}

/// Builds an argv slice from string literals.
pub fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}
