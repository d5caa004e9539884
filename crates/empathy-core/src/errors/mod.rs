//! Error types for the Empathy engines.
//!
//! Sub-errors live in their own modules; `EmpathyError` is the umbrella
//! every public engine API returns via [`EmpathyResult`].

mod rule_error;

pub use rule_error::RuleError;

/// Convenience alias used across all engine crates.
pub type EmpathyResult<T> = Result<T, EmpathyError>;

/// Top-level error for the Empathy engines.
#[derive(Debug, thiserror::Error)]
pub enum EmpathyError {
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
