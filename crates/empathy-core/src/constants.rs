//! Shared constants for the Empathy engines.

/// Priority assigned to a rule when none is specified.
pub const DEFAULT_RULE_PRIORITY: i32 = 50;

/// Template used by pattern masking when the caller supplies none.
/// `{index}` is replaced with the 1-based match number.
pub const DEFAULT_MASK_TEMPLATE: &str = "[PATTERN_{index}]";

/// Pattern names auto-detection masks when no explicit set is configured.
pub const DEFAULT_AUTO_DETECT_PATTERNS: &[&str] = &["手机号", "身份证号"];

/// Characters preserved at each end of a partially masked string.
pub const PARTIAL_MASK_KEEP_LENGTH: usize = 2;
