//! Test fixture loader for statkit golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use statkit_core::config::InputPolicy;
use statkit_core::{StatError, Value};
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// Relative path (from the fixtures root) of a file returned by [`list_fixtures`].
pub fn relative_to_root(path: &std::path::Path) -> String {
    path.strip_prefix(fixtures_root())
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Expected outcome of a descriptive golden case. Absent fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DescriptiveExpectation {
    pub sanitized: Option<Vec<f64>>,
    pub count: Option<usize>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub sample_variance: Option<f64>,
    pub population_variance: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Error kind name, e.g. `"EmptyInput"`, expected from every operation.
    pub error: Option<String>,
}

/// A golden dataset for the descriptive operations.
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptiveCase {
    pub name: String,
    pub data: Vec<Value>,
    pub expected: DescriptiveExpectation,
}

/// A golden dataset for the mean confidence interval.
#[derive(Debug, Clone, Deserialize)]
pub struct IntervalCase {
    pub name: String,
    pub data: Vec<Value>,
    pub level: f64,
    /// Input policy to run the case under; the library default when absent.
    #[serde(default)]
    pub policy: InputPolicy,
    /// Expected `[lower, upper]`, when the call succeeds.
    #[serde(default)]
    pub bounds: Option<[f64; 2]>,
    /// Error kind name, when the call fails.
    #[serde(default)]
    pub error: Option<String>,
}

/// Load every descriptive golden case.
pub fn descriptive_cases() -> Vec<DescriptiveCase> {
    list_fixtures("golden/descriptive")
        .iter()
        .map(|p| load_fixture(&relative_to_root(p)))
        .collect()
}

/// Load every interval golden case.
pub fn interval_cases() -> Vec<IntervalCase> {
    list_fixtures("golden/inference")
        .iter()
        .map(|p| load_fixture(&relative_to_root(p)))
        .collect()
}

/// Variant name of a [`StatError`], as written in golden files.
pub fn error_kind(err: &StatError) -> &'static str {
    match err {
        StatError::EmptyInput => "EmptyInput",
        StatError::InsufficientData { .. } => "InsufficientData",
        StatError::UnsupportedConfidenceLevel { .. } => "UnsupportedConfidenceLevel",
        StatError::NonNumeric { .. } => "NonNumeric",
        StatError::Config(_) => "Config",
    }
}

/// Absolute-tolerance float comparison used by golden tests.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
