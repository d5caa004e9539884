use regex::Regex;

use empathy_core::errors::RuleError;
use empathy_core::models::{BusinessRule, MatchType};

/// A rule's pattern compiled for repeated evaluation.
///
/// The strategy set is closed, so dispatch is a `match` on the variant
/// rather than a trait object.
#[derive(Debug, Clone)]
pub(crate) enum CompiledMatcher {
    /// Whole-string comparison, case-sensitive. Not a substring search.
    Exact(String),
    /// Case-insensitive substring search, compiled to an escaped `(?i)`
    /// regex so spans always index the original text.
    Substring(Regex),
    /// User-authored regex, compiled as written. Authors control case
    /// sensitivity through pattern syntax.
    Pattern(Regex),
}

impl CompiledMatcher {
    /// Compile a rule's pattern. The only fallible arm is `Regex`; an
    /// invalid pattern is reported with the owning rule's id.
    pub(crate) fn compile(rule: &BusinessRule) -> Result<Self, RuleError> {
        match rule.match_type {
            MatchType::Exact => Ok(Self::Exact(rule.pattern.clone())),
            MatchType::Substring => {
                // An empty pattern compiles to a never-matching class
                // instead of matching at every position.
                let source = if rule.pattern.is_empty() {
                    r"[^\s\S]".to_string()
                } else {
                    format!("(?i){}", regex::escape(&rule.pattern))
                };
                let re = Regex::new(&source).map_err(|e| RuleError::InvalidPattern {
                    rule_id: rule.id.clone(),
                    reason: e.to_string(),
                })?;
                Ok(Self::Substring(re))
            }
            MatchType::Regex => {
                let re = Regex::new(&rule.pattern).map_err(|e| RuleError::InvalidPattern {
                    rule_id: rule.id.clone(),
                    reason: e.to_string(),
                })?;
                Ok(Self::Pattern(re))
            }
        }
    }

    /// Cheap match check, no span computation.
    pub(crate) fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Exact(pattern) => text == pattern,
            Self::Substring(re) | Self::Pattern(re) => re.is_match(text),
        }
    }

    /// All raw match spans, left to right. Byte offsets, half-open.
    pub(crate) fn find_spans(&self, text: &str) -> Vec<(usize, usize)> {
        match self {
            Self::Exact(pattern) => {
                if text == pattern {
                    vec![(0, text.len())]
                } else {
                    Vec::new()
                }
            }
            Self::Substring(re) | Self::Pattern(re) => {
                re.find_iter(text).map(|m| (m.start(), m.end())).collect()
            }
        }
    }
}
