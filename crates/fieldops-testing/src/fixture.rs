//! Record fixture loader.
//!
//! Loads JSON arrays from `fixtures/` at the workspace root, in the same shape
//! the remote API returns from its list endpoints.

use std::path::{Path, PathBuf};

use fieldops_domain::Entity;

/// Locate the workspace root: the nearest ancestor of the crate directory
/// that contains a `fixtures/` directory.
pub fn workspace_root() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap());
    start
        .ancestors()
        .find(|p| p.join("fixtures").is_dir())
        .unwrap_or(&start)
        .to_path_buf()
}

/// Load and parse a fixture JSON file at `workspace_root/path`.
///
/// Panics if the file is missing or invalid JSON.
pub fn load(relative_path: &str) -> serde_json::Value {
    let full_path = workspace_root().join(relative_path);
    let contents = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", relative_path, e))
}

/// Load `fixtures/{name}.json` as a list of records.
pub fn records<E: Entity>(name: &str) -> Vec<E> {
    let path = Path::new("fixtures").join(format!("{name}.json"));
    let value = load(&path.to_string_lossy());
    serde_json::from_value(value)
        .unwrap_or_else(|e| panic!("fixture {name} does not match {}: {e}", E::KIND))
}
