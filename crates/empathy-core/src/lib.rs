//! # empathy-core
//!
//! Foundation crate for the Empathy conversation engines.
//! Defines the shared models, traits, errors, config, and constants.
//! Both engine crates (`empathy-rules`, `empathy-privacy`) depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{PrivacyConfig, RuleSetConfig};
pub use errors::{EmpathyError, EmpathyResult, RuleError};
pub use models::{BusinessRule, MatchType, RuleMatch, SensitiveMatch};
