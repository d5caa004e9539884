use std::sync::RwLock;

use empathy_core::errors::{EmpathyResult, RuleError};
use empathy_core::models::BusinessRule;

use crate::matcher::CompiledMatcher;

/// A rule paired with its compiled matcher.
#[derive(Debug, Clone)]
pub(crate) struct StoredRule {
    pub rule: BusinessRule,
    pub matcher: CompiledMatcher,
}

/// Synchronized, insertion-ordered collection of compiled rules.
///
/// Mutators and readers may run on different threads; the lock keeps a
/// reader from ever observing a half-updated set. A poisoned lock surfaces
/// as [`RuleError::StorePoisoned`] instead of a panic.
#[derive(Debug, Default)]
pub(crate) struct RuleStore {
    rules: RwLock<Vec<StoredRule>>,
}

impl RuleStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a rule. A rule with the same id is replaced in place, keeping
    /// its original insertion slot.
    pub(crate) fn insert(&self, stored: StoredRule) -> EmpathyResult<()> {
        let mut rules = self.rules.write().map_err(|_| RuleError::StorePoisoned)?;
        match rules.iter_mut().find(|r| r.rule.id == stored.rule.id) {
            Some(slot) => *slot = stored,
            None => rules.push(stored),
        }
        Ok(())
    }

    /// Remove by id. No-op if absent.
    pub(crate) fn remove(&self, rule_id: &str) -> EmpathyResult<()> {
        let mut rules = self.rules.write().map_err(|_| RuleError::StorePoisoned)?;
        rules.retain(|r| r.rule.id != rule_id);
        Ok(())
    }

    pub(crate) fn clear(&self) -> EmpathyResult<()> {
        let mut rules = self.rules.write().map_err(|_| RuleError::StorePoisoned)?;
        rules.clear();
        Ok(())
    }

    /// All rules in insertion order.
    pub(crate) fn all(&self) -> EmpathyResult<Vec<BusinessRule>> {
        let rules = self.rules.read().map_err(|_| RuleError::StorePoisoned)?;
        Ok(rules.iter().map(|r| r.rule.clone()).collect())
    }

    /// Run `f` against the current rule set under the read lock.
    pub(crate) fn with_rules<R>(&self, f: impl FnOnce(&[StoredRule]) -> R) -> EmpathyResult<R> {
        let rules = self.rules.read().map_err(|_| RuleError::StorePoisoned)?;
        Ok(f(&rules))
    }
}
