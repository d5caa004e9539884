use serde::{Deserialize, Serialize};

/// A catalog pattern hit found by the sensitive-info scanner.
///
/// `pattern_name` is the catalog key exactly as the caller requested it
/// (internal key or Chinese label), so it doubles as the placeholder prefix
/// during auto-detection masking. Spans are byte offsets, half-open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitiveMatch {
    pub pattern_name: String,
    pub matched_text: String,
    pub start: usize,
    pub end: usize,
}

impl SensitiveMatch {
    /// The detected span as a range, for indexing back into the scanned text.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
