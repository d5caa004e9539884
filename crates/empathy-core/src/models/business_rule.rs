use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RULE_PRIORITY;

/// How a rule's pattern is applied to text.
///
/// Closed set; the engines dispatch on it with `match`, never trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Whole-string comparison, case-sensitive.
    Exact,
    /// Case-insensitive substring search.
    Substring,
    /// Regular expression, compiled as written.
    Regex,
}

/// A user-defined matching rule.
///
/// Rules are immutable values owned by the caller; the rule store keys them
/// by `id`. `priority` resolves textual overlap between matches (higher
/// wins), it is not a general relevance ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRule {
    pub id: String,
    pub name: String,
    pub pattern: String,
    #[serde(default = "default_match_type")]
    pub match_type: MatchType,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_match_type() -> MatchType {
    MatchType::Substring
}

fn default_priority() -> i32 {
    DEFAULT_RULE_PRIORITY
}

fn default_enabled() -> bool {
    true
}

impl BusinessRule {
    /// Create an enabled rule with the default priority.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
        match_type: MatchType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pattern: pattern.into(),
            match_type,
            priority: DEFAULT_RULE_PRIORITY,
            enabled: true,
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Enable or disable the rule. Disabled rules are skipped entirely.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
