use empathy_core::config::PrivacyConfig;
use empathy_core::constants::DEFAULT_MASK_TEMPLATE;
use empathy_core::traits::IMasker;
use empathy_privacy::{patterns, PrivacyEngine};

// ── Catalog health ────────────────────────────────────────────────────────

#[test]
fn all_catalog_patterns_compile() {
    let catalog = patterns::all_patterns();
    assert!(
        catalog.len() >= 5,
        "Expected 5+ catalog patterns, got {}",
        catalog.len()
    );
    for pat in &catalog {
        assert!(
            pat.regex.is_some(),
            "Catalog pattern '{}' failed to compile",
            pat.name
        );
    }
}

#[test]
fn catalog_lookup_accepts_key_and_label() {
    assert!(patterns::lookup("phone_number").is_some());
    assert!(patterns::lookup("手机号").is_some());
    assert!(patterns::lookup("nonexistent").is_none());
}

// ── Mapping-based masking ─────────────────────────────────────────────────

#[test]
fn mask_replaces_mapped_values() {
    let engine = PrivacyEngine::new();
    let masked = engine.mask(
        "我叫张三，手机号是13800138000",
        &[("张三", "[NAME_01]"), ("13800138000", "[PHONE_01]")],
    );
    assert_eq!(masked, "我叫[NAME_01]，手机号是[PHONE_01]");
}

#[test]
fn mask_is_case_insensitive() {
    let engine = PrivacyEngine::new();
    let masked = engine.mask("I NEED MONEY", &[("money", "[SENSITIVE]")]);
    assert_eq!(masked, "I NEED [SENSITIVE]");
}

#[test]
fn mask_with_empty_mapping_returns_input() {
    let engine = PrivacyEngine::new();
    let mapping: [(&str, &str); 0] = [];
    assert_eq!(engine.mask("普通文本", &mapping), "普通文本");
}

#[test]
fn mask_applies_longest_plain_first() {
    let engine = PrivacyEngine::new();
    // "张三" is a prefix of "张三丰"; insertion order must not matter.
    let masked = engine.mask(
        "师傅张三丰和张三",
        &[("张三", "[NAME_01]"), ("张三丰", "[NAME_02]")],
    );
    assert_eq!(masked, "师傅[NAME_02]和[NAME_01]");
}

#[test]
fn mask_batch_masks_each_text_independently() {
    let engine = PrivacyEngine::new();
    let masked = engine.mask_batch(
        &["我叫张三", "我的手机号是13800138000", "张三的号码是13800138000"],
        &[("张三", "[NAME_01]"), ("13800138000", "[PHONE_01]")],
    );
    assert_eq!(masked.len(), 3);
    assert_eq!(masked[0], "我叫[NAME_01]");
    assert_eq!(masked[1], "我的手机号是[PHONE_01]");
    assert_eq!(masked[2], "[NAME_01]的号码是[PHONE_01]");
}

// ── Pattern-based masking ─────────────────────────────────────────────────

#[test]
fn mask_by_pattern_numbers_phone_matches() {
    let engine = PrivacyEngine::new();
    let phone = patterns::lookup("手机号").unwrap();
    let re = phone.regex.as_ref().unwrap();

    let masked = engine.mask_by_pattern(
        "我的手机号是13800138000，另一个是13912345678",
        re,
        "[PHONE_{index}]",
    );
    assert_eq!(masked, "我的手机号是[PHONE_1]，另一个是[PHONE_2]");
}

#[test]
fn mask_by_pattern_masks_id_card() {
    let engine = PrivacyEngine::new();
    let id_card = patterns::lookup("身份证号").unwrap();
    let re = id_card.regex.as_ref().unwrap();

    let masked = engine.mask_by_pattern("身份证号：11010519491231002X", re, "[ID_{index}]");
    assert_eq!(masked, "身份证号：[ID_1]");
}

#[test]
fn mask_by_pattern_without_matches_returns_input() {
    let engine = PrivacyEngine::new();
    let phone = patterns::lookup("手机号").unwrap();
    let re = phone.regex.as_ref().unwrap();

    let masked = engine.mask_by_pattern("普通文本内容", re, DEFAULT_MASK_TEMPLATE);
    assert_eq!(masked, "普通文本内容");
}

// ── Auto-detection masking ────────────────────────────────────────────────

#[test]
fn auto_detection_masks_a_single_phone() {
    let engine = PrivacyEngine::new();
    let masked = engine.mask_with_auto_detection("我的手机号是13800138000，请记下", &["手机号"]);
    assert_eq!(masked, "我的手机号是[手机号_1]，请记下");
}

#[test]
fn auto_detection_handles_multiple_pattern_types() {
    let engine = PrivacyEngine::new();
    let masked = engine.mask_with_auto_detection(
        "联系我：13800138000，邮箱：test@example.com",
        &["手机号", "邮箱"],
    );
    assert_eq!(masked, "联系我：[手机号_1]，邮箱：[邮箱_1]");
}

#[test]
fn auto_detection_numbers_repeated_values_sequentially() {
    let engine = PrivacyEngine::new();
    let masked =
        engine.mask_with_auto_detection("我的手机号13800138000，紧急电话也是13800138000", &["手机号"]);
    assert_eq!(masked, "我的手机号[手机号_1]，紧急电话也是[手机号_2]");
}

#[test]
fn auto_detection_ignores_unknown_pattern_names() {
    let engine = PrivacyEngine::new();
    let masked = engine.mask_with_auto_detection("手机13800138000", &["不存在", "手机号"]);
    assert_eq!(masked, "手机[手机号_1]");
}

#[test]
fn auto_detection_on_empty_text_returns_empty() {
    let engine = PrivacyEngine::new();
    assert_eq!(engine.mask_with_auto_detection("", &["手机号"]), "");
}

// ── Hybrid masking ────────────────────────────────────────────────────────

#[test]
fn hybrid_applies_mapping_before_auto_detection() {
    let engine = PrivacyEngine::new();
    let masked = engine.mask_hybrid(
        "我叫张三，手机号是13800138000",
        &[("张三", "[NAME_01]")],
        &["手机号"],
    );
    assert_eq!(masked, "我叫[NAME_01]，手机号是[手机号_1]");
}

#[test]
fn hybrid_with_empty_mapping_still_auto_detects() {
    let engine = PrivacyEngine::new();
    let mapping: [(&str, &str); 0] = [];
    let masked = engine.mask_hybrid("联系我的邮箱：test@example.com", &mapping, &["邮箱"]);
    assert_eq!(masked, "联系我的邮箱：[邮箱_1]");
}

#[test]
fn hybrid_mapping_takes_precedence_over_patterns() {
    let engine = PrivacyEngine::new();
    // The phone number is already mapped; auto-detection must not renumber it.
    let masked = engine.mask_hybrid(
        "手机号是13800138000",
        &[("13800138000", "[PHONE_01]")],
        &["手机号"],
    );
    assert_eq!(masked, "手机号是[PHONE_01]");
}

// ── Sensitive-info scanning ───────────────────────────────────────────────

#[test]
fn detect_returns_empty_for_plain_chat() {
    let engine = PrivacyEngine::new();
    assert!(engine.detect_sensitive_info("普通聊天内容").is_empty());
    assert!(engine
        .detect_sensitive_info_with("普通聊天内容", &["手机号", "身份证号", "邮箱"])
        .is_empty());
}

#[test]
fn detect_finds_every_phone_number() {
    let engine = PrivacyEngine::new();
    let detected = engine.detect_sensitive_info_with("我的电话13800138000，备用13912345678", &["手机号"]);

    assert_eq!(detected.len(), 2);
    assert_eq!(detected[0].matched_text, "13800138000");
    assert_eq!(detected[1].matched_text, "13912345678");
    assert_eq!(detected[0].pattern_name, "手机号");
}

#[test]
fn detect_finds_id_card_and_phone_together() {
    let engine = PrivacyEngine::new();
    let detected = engine.detect_sensitive_info_with(
        "我的身份证11010519491231002X，手机号13800138000",
        &["手机号", "身份证号"],
    );

    assert_eq!(detected.len(), 2);
    let phone = detected.iter().find(|d| d.pattern_name == "手机号");
    let id_card = detected.iter().find(|d| d.pattern_name == "身份证号");
    assert_eq!(phone.unwrap().matched_text, "13800138000");
    assert_eq!(id_card.unwrap().matched_text, "11010519491231002X");
}

#[test]
fn detect_sorts_by_position() {
    let engine = PrivacyEngine::new();
    let detected = engine.detect_sensitive_info_with(
        "手机13800138000然后后面的身份证号11010519491231002X",
        &["手机号", "身份证号"],
    );

    assert_eq!(detected.len(), 2);
    assert_eq!(detected[0].pattern_name, "手机号");
    assert_eq!(detected[1].pattern_name, "身份证号");
    assert!(detected[0].start < detected[1].start);
}

#[test]
fn detect_spans_index_the_scanned_text() {
    let engine = PrivacyEngine::new();
    let text = "电话13800138000，邮箱test@example.com";
    for m in engine.detect_sensitive_info(text) {
        assert_eq!(&text[m.range()], m.matched_text);
    }
}

#[test]
fn detected_types_lists_labels_in_first_appearance_order() {
    let engine = PrivacyEngine::new();
    let types = engine.detected_types("电话13800138000，邮箱test@example.com");
    assert_eq!(types, vec!["手机号", "邮箱"]);
}

// ── Partial masking ───────────────────────────────────────────────────────

#[test]
fn partial_mask_keeps_both_ends() {
    let engine = PrivacyEngine::new();
    assert_eq!(engine.partial_mask("13800138000", 3), "138*****000");
}

#[test]
fn partial_mask_fully_masks_short_strings() {
    let engine = PrivacyEngine::new();
    assert_eq!(engine.partial_mask("abcd", 2), "****");
    assert_eq!(engine.partial_mask("ab", 2), "**");
}

#[test]
fn partial_mask_counts_characters_not_bytes() {
    let engine = PrivacyEngine::new();
    assert_eq!(engine.partial_mask("张三丰真人", 1), "张***人");
}

// ── IMasker seam ──────────────────────────────────────────────────────────

#[test]
fn mask_outbound_runs_the_hybrid_pipeline() {
    let mut engine = PrivacyEngine::with_config(PrivacyConfig {
        enabled_patterns: vec!["手机号".into()],
        ..PrivacyConfig::default()
    });
    engine.set_mapping(vec![("张三".into(), "[NAME_01]".into())]);

    let result = engine.mask_outbound("我叫张三，手机号13800138000").unwrap();

    assert_eq!(result.text, "我叫[NAME_01]，手机号[手机号_1]");
    assert_eq!(result.detections.len(), 1);
    assert_eq!(result.detections[0].pattern_name, "手机号");
    assert_eq!(result.detections[0].matched_text, "13800138000");
}

#[test]
fn mask_outbound_with_clean_text_changes_nothing() {
    let engine = PrivacyEngine::new();
    let result = engine.mask_outbound("晚上一起吃饭吗").unwrap();
    assert_eq!(result.text, "晚上一起吃饭吗");
    assert!(result.detections.is_empty());
}
