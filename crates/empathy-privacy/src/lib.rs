//! # empathy-privacy
//!
//! Sensitive-info detection and masking for the Empathy assistant.
//! Conversation text is screened against a built-in catalog of PII
//! patterns and user-maintained plain-to-placeholder mappings before it
//! leaves the device for an AI provider.

mod engine;
pub mod patterns;

pub use engine::PrivacyEngine;
