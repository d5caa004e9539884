use crate::errors::EmpathyResult;
use crate::models::RuleMatch;

/// Business-rule evaluation over free text.
pub trait IRuleEvaluator: Send + Sync {
    /// Full evaluation: all enabled-rule matches, overlap-resolved by
    /// priority, ordered by priority descending then position ascending.
    fn evaluate(&self, text: &str) -> EmpathyResult<Vec<RuleMatch>>;

    /// Fast check: does any enabled rule match? Short-circuits without
    /// computing match positions.
    fn has_match(&self, text: &str) -> EmpathyResult<bool>;
}
