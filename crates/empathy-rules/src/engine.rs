use tracing::debug;

use empathy_core::errors::EmpathyResult;
use empathy_core::models::{BusinessRule, RuleMatch};
use empathy_core::traits::IRuleEvaluator;

use crate::matcher::CompiledMatcher;
use crate::store::{RuleStore, StoredRule};

/// Evaluates user-defined business rules against conversation text.
///
/// Rules are compiled once at add-time; evaluation claims text spans in
/// priority order so that overlapping matches from lower-priority rules
/// are dropped. Implements `IRuleEvaluator` from empathy-core.
///
/// ```
/// use empathy_core::models::{BusinessRule, MatchType};
/// use empathy_rules::RuleEngine;
///
/// let engine = RuleEngine::new();
/// engine
///     .add_rule(BusinessRule::new(
///         "rule_001",
///         "mentions money",
///         "money",
///         MatchType::Substring,
///     ))
///     .unwrap();
/// let matches = engine.evaluate("I need money").unwrap();
/// assert_eq!(matches[0].matched_text, "money");
/// ```
pub struct RuleEngine {
    store: RuleStore,
}

impl RuleEngine {
    /// Create an engine with an empty rule store.
    pub fn new() -> Self {
        Self {
            store: RuleStore::new(),
        }
    }

    /// Add a rule, replacing any existing rule with the same id.
    ///
    /// A `Regex` rule whose pattern does not compile is rejected with
    /// `RuleError::InvalidPattern` and never enters the store.
    pub fn add_rule(&self, rule: BusinessRule) -> EmpathyResult<()> {
        let matcher = CompiledMatcher::compile(&rule)?;
        self.store.insert(StoredRule { rule, matcher })
    }

    /// Add rules one by one. Best-effort: the first invalid rule aborts
    /// the remainder, and rules added before it are kept.
    pub fn add_rules(&self, rules: impl IntoIterator<Item = BusinessRule>) -> EmpathyResult<()> {
        for rule in rules {
            self.add_rule(rule)?;
        }
        Ok(())
    }

    /// Remove a rule by id. No-op if absent.
    pub fn remove_rule(&self, rule_id: &str) -> EmpathyResult<()> {
        self.store.remove(rule_id)
    }

    /// Empty the rule store.
    pub fn clear_rules(&self) -> EmpathyResult<()> {
        self.store.clear()
    }

    /// All rules in insertion order, not priority order.
    pub fn all_rules(&self) -> EmpathyResult<Vec<BusinessRule>> {
        self.store.all()
    }

    /// Whether any enabled rule matches. Short-circuits on the first hit
    /// without computing match spans.
    pub fn has_match(&self, text: &str) -> EmpathyResult<bool> {
        self.store.with_rules(|rules| {
            rules
                .iter()
                .filter(|r| r.rule.enabled)
                .any(|r| r.matcher.is_match(text))
        })
    }

    /// Evaluate all enabled rules against `text`.
    ///
    /// Rules are visited in priority order (stable: ties keep insertion
    /// order) and each raw match claims its span; a candidate that
    /// intersects an already-claimed span is dropped, so overlapping
    /// matches survive only from the highest-priority rule. The result is
    /// ordered by priority descending, then by position ascending within
    /// equal priority.
    pub fn evaluate(&self, text: &str) -> EmpathyResult<Vec<RuleMatch>> {
        let mut matches = self.store.with_rules(|rules| {
            let mut by_priority: Vec<&StoredRule> =
                rules.iter().filter(|r| r.rule.enabled).collect();
            by_priority.sort_by(|a, b| b.rule.priority.cmp(&a.rule.priority));

            let mut claimed: Vec<(usize, usize)> = Vec::new();
            let mut accepted: Vec<RuleMatch> = Vec::new();
            for stored in by_priority {
                for (start, end) in stored.matcher.find_spans(text) {
                    if claimed.iter().any(|&span| spans_overlap(span, (start, end))) {
                        continue;
                    }
                    claimed.push((start, end));
                    accepted.push(RuleMatch {
                        rule: stored.rule.clone(),
                        matched_text: text[start..end].to_string(),
                        start,
                        end,
                    });
                }
            }
            accepted
        })?;

        matches.sort_by(|a, b| {
            b.rule
                .priority
                .cmp(&a.rule.priority)
                .then(a.start.cmp(&b.start))
        });

        debug!(matches = matches.len(), "rule evaluation complete");
        Ok(matches)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IRuleEvaluator for RuleEngine {
    fn evaluate(&self, text: &str) -> EmpathyResult<Vec<RuleMatch>> {
        RuleEngine::evaluate(self, text)
    }

    fn has_match(&self, text: &str) -> EmpathyResult<bool> {
        RuleEngine::has_match(self, text)
    }
}

/// Half-open span intersection.
fn spans_overlap(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0 < b.1 && b.0 < a.1
}
