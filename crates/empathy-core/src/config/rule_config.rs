use serde::{Deserialize, Serialize};

use crate::errors::EmpathyResult;
use crate::models::BusinessRule;

/// A rule set as persisted by the settings layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    pub rules: Vec<BusinessRule>,
}

impl RuleSetConfig {
    /// Parse a rule set persisted by the settings layer.
    pub fn from_json(json: &str) -> EmpathyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for the settings layer.
    pub fn to_json(&self) -> EmpathyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Consume the config, yielding the rules for `RuleEngine::add_rules`.
    pub fn into_rules(self) -> Vec<BusinessRule> {
        self.rules
    }
}
