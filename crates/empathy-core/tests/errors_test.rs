use empathy_core::errors::*;

#[test]
fn invalid_pattern_carries_rule_id_and_reason() {
    let err = RuleError::InvalidPattern {
        rule_id: "rule_007".into(),
        reason: "unclosed group".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("rule_007"), "error should name the rule");
    assert!(msg.contains("unclosed group"));
}

#[test]
fn store_poisoned_names_the_store() {
    let err = RuleError::StorePoisoned;
    assert!(err.to_string().contains("poisoned"));
}

// --- From impls ---

#[test]
fn rule_error_converts_to_empathy_error() {
    let rule_err = RuleError::InvalidPattern {
        rule_id: "r1".into(),
        reason: "bad escape".into(),
    };
    let err: EmpathyError = rule_err.into();
    assert!(matches!(err, EmpathyError::Rule(_)));
}

#[test]
fn serde_json_error_converts_to_empathy_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: EmpathyError = json_err.into();
    assert!(matches!(err, EmpathyError::Serialization(_)));
}

#[test]
fn umbrella_display_includes_inner_message() {
    let err: EmpathyError = RuleError::InvalidPattern {
        rule_id: "r2".into(),
        reason: "repetition operator missing expression".into(),
    }
    .into();
    assert!(err.to_string().contains("repetition operator"));
}
