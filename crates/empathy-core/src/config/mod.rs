//! Configuration handed in by the settings layer.
//!
//! The engines own no persistence; rule sets and privacy settings are
//! stored elsewhere and arrive here as values, typically via JSON.

mod privacy_config;
mod rule_config;

pub use privacy_config::PrivacyConfig;
pub use rule_config::RuleSetConfig;
