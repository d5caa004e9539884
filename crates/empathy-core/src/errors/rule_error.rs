/// Rule-engine errors.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A regex rule's pattern failed to compile. Raised at add-time; an
    /// invalid rule never enters the store.
    #[error("invalid regex pattern for rule '{rule_id}': {reason}")]
    InvalidPattern { rule_id: String, reason: String },

    /// The rule store lock was poisoned by a panicking writer.
    #[error("rule store lock poisoned")]
    StorePoisoned,
}
