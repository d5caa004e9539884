//! Shared value types produced and consumed by the engines.

mod business_rule;
mod rule_match;
mod sensitive_match;

pub use business_rule::{BusinessRule, MatchType};
pub use rule_match::RuleMatch;
pub use sensitive_match::SensitiveMatch;
