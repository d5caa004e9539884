//! Test fixture loader for the Empathy golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files under
//! `golden/` and helper functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
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

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    std::fs::read_dir(&dir)
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
        .collect()
}

// ── Typed golden samples ──────────────────────────────────────────────────

/// A golden masking scenario: raw text plus mapping and/or pattern set,
/// with the expected redacted output.
#[derive(Debug, Clone, Deserialize)]
pub struct MaskingSample {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub mapping: Vec<(String, String)>,
    #[serde(default)]
    pub patterns: Vec<String>,
    pub expected_output: String,
}

/// A golden rule-evaluation scenario: a rule set (settings-layer JSON
/// shape), input text, and the expected firing order by rule id.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleEvaluationSample {
    pub id: String,
    pub rules: serde_json::Value,
    pub text: String,
    pub expected_rule_ids: Vec<String>,
    #[serde(default)]
    pub expected_matched_texts: Vec<String>,
}

/// Wrapper matching the golden file layout: `{"samples": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenFile<T> {
    pub samples: Vec<T>,
}

/// Load the golden masking scenarios.
pub fn masking_samples() -> Vec<MaskingSample> {
    load_fixture::<GoldenFile<MaskingSample>>("golden/privacy/masking_cases.json").samples
}

/// Load the golden rule-evaluation scenarios.
pub fn rule_evaluation_samples() -> Vec<RuleEvaluationSample> {
    load_fixture::<GoldenFile<RuleEvaluationSample>>("golden/rules/evaluation_cases.json").samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn golden_files_parse() {
        assert!(!masking_samples().is_empty());
        assert!(!rule_evaluation_samples().is_empty());
    }

    #[test]
    fn golden_dirs_listed() {
        assert_eq!(list_fixtures("golden/privacy").len(), 1);
        assert_eq!(list_fixtures("golden/rules").len(), 1);
    }
}
