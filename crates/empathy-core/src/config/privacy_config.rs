use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AUTO_DETECT_PATTERNS, PARTIAL_MASK_KEEP_LENGTH};
use crate::errors::EmpathyResult;

/// Privacy settings for outbound masking.
///
/// `enabled_patterns` entries are catalog keys, either the internal name
/// (`phone_number`) or the Chinese label (`手机号`). Unknown entries are
/// ignored by the masking engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyConfig {
    #[serde(default = "default_enabled_patterns")]
    pub enabled_patterns: Vec<String>,
    #[serde(default = "default_keep_length")]
    pub partial_mask_keep_length: usize,
}

fn default_enabled_patterns() -> Vec<String> {
    DEFAULT_AUTO_DETECT_PATTERNS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_keep_length() -> usize {
    PARTIAL_MASK_KEEP_LENGTH
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            enabled_patterns: default_enabled_patterns(),
            partial_mask_keep_length: default_keep_length(),
        }
    }
}

impl PrivacyConfig {
    /// Parse a config persisted by the settings layer.
    pub fn from_json(json: &str) -> EmpathyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for the settings layer.
    pub fn to_json(&self) -> EmpathyResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
