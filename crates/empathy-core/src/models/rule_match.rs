use serde::{Deserialize, Serialize};

use crate::models::BusinessRule;

/// A single rule firing, with the span it claimed in the source text.
///
/// Spans are byte offsets into the evaluated text, half-open: `end` is one
/// past the last matched byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// The rule that fired.
    pub rule: BusinessRule,
    /// The matched slice of the source text.
    pub matched_text: String,
    pub start: usize,
    pub end: usize,
}

impl RuleMatch {
    /// The claimed span as a range, for indexing back into the source text.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
