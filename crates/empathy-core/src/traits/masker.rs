use serde::{Deserialize, Serialize};

use crate::errors::EmpathyResult;
use crate::models::SensitiveMatch;

/// Result of outbound masking with metadata about what was auto-detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskedText {
    /// Redacted text, safe to hand to the AI-request layer.
    pub text: String,
    /// Catalog matches that auto-detection replaced. Spans index the text
    /// that was scanned, i.e. the input after mapping replacements.
    pub detections: Vec<SensitiveMatch>,
}

/// Redaction of conversation text before it leaves the device.
pub trait IMasker: Send + Sync {
    /// Mask text with the engine's configured mapping and patterns.
    fn mask_outbound(&self, text: &str) -> EmpathyResult<MaskedText>;
}
