use std::collections::HashMap;

use regex::{NoExpand, Regex};
use tracing::debug;

use empathy_core::config::PrivacyConfig;
use empathy_core::errors::EmpathyResult;
use empathy_core::models::SensitiveMatch;
use empathy_core::traits::{IMasker, MaskedText};

use crate::patterns;

/// Privacy masking engine.
///
/// Redacts conversation text before it is sent to an AI provider, in two
/// modes that compose: explicit plain-to-placeholder mappings and
/// catalog-driven auto-detection. All masking methods are pure functions
/// of their arguments; the fields only configure the `IMasker` seam.
/// Implements `IMasker` from empathy-core.
pub struct PrivacyEngine {
    config: PrivacyConfig,
    mapping: Vec<(String, String)>,
}

impl PrivacyEngine {
    /// Create an engine with default privacy settings and no mapping.
    pub fn new() -> Self {
        Self {
            config: PrivacyConfig::default(),
            mapping: Vec::new(),
        }
    }

    /// Create an engine with the given settings for the `IMasker` seam.
    pub fn with_config(config: PrivacyConfig) -> Self {
        Self {
            config,
            mapping: Vec::new(),
        }
    }

    /// Set the plain-to-placeholder mapping used by `mask_outbound`.
    pub fn set_mapping(&mut self, mapping: Vec<(String, String)>) {
        self.mapping = mapping;
    }

    /// Replace every case-insensitive occurrence of each mapped plain
    /// value with its placeholder.
    ///
    /// Entries apply longest-plain-first (ties keep caller order) so a key
    /// that is a substring of another key cannot shadow it; each entry
    /// sees the text produced by the previous one.
    pub fn mask<K, V>(&self, text: &str, mapping: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut order: Vec<usize> = (0..mapping.len()).collect();
        order.sort_by(|&a, &b| {
            mapping[b]
                .0
                .as_ref()
                .len()
                .cmp(&mapping[a].0.as_ref().len())
        });

        let mut masked = text.to_string();
        for idx in order {
            let (plain, placeholder) = (mapping[idx].0.as_ref(), mapping[idx].1.as_ref());
            if plain.is_empty() {
                continue;
            }
            // Escaped literal, so the pattern cannot fail to compile.
            let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(plain))) else {
                continue;
            };
            masked = re.replace_all(&masked, NoExpand(placeholder)).into_owned();
        }
        masked
    }

    /// Apply [`mask`](Self::mask) to each text independently. No index or
    /// mapping state is shared across texts.
    pub fn mask_batch<T, K, V>(&self, texts: &[T], mapping: &[(K, V)]) -> Vec<String>
    where
        T: AsRef<str>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        texts
            .iter()
            .map(|text| self.mask(text.as_ref(), mapping))
            .collect()
    }

    /// Number all non-overlapping matches of `pattern` left to right and
    /// replace each with `template`, substituting `{index}` (1-based).
    ///
    /// Matches are located on the original text and replaced in a single
    /// splice pass, so earlier replacements never shift later offsets.
    /// `DEFAULT_MASK_TEMPLATE` from empathy-core is the conventional
    /// template.
    pub fn mask_by_pattern(&self, text: &str, pattern: &Regex, template: &str) -> String {
        let replacements: Vec<(usize, usize, String)> = pattern
            .find_iter(text)
            .enumerate()
            .map(|(i, m)| {
                (
                    m.start(),
                    m.end(),
                    template.replace("{index}", &(i + 1).to_string()),
                )
            })
            .collect();
        patterns::splice(text, &replacements)
    }

    /// Auto-detect the named catalog patterns and replace each occurrence
    /// with `[<name>_<index>]`.
    ///
    /// Indices are 1-based, assigned left to right, and counted per
    /// pattern name; they reset on every call. Unknown names are ignored.
    pub fn mask_with_auto_detection(
        &self,
        text: &str,
        pattern_names: &[impl AsRef<str>],
    ) -> String {
        let detections = patterns::scan(text, pattern_names);
        apply_auto_mask(text, &detections)
    }

    /// Mapping replacements first, then auto-detection on the result:
    /// explicit mappings win over auto-detected patterns.
    pub fn mask_hybrid<K, V>(
        &self,
        text: &str,
        mapping: &[(K, V)],
        pattern_names: &[impl AsRef<str>],
    ) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mapped = self.mask(text, mapping);
        if pattern_names.is_empty() {
            return mapped;
        }
        self.mask_with_auto_detection(&mapped, pattern_names)
    }

    /// Scan with the full catalog. Pure detection, no substitution;
    /// results are sorted ascending by start offset.
    pub fn detect_sensitive_info(&self, text: &str) -> Vec<SensitiveMatch> {
        let labels: Vec<&str> = patterns::all_patterns().iter().map(|p| p.label).collect();
        patterns::scan(text, &labels)
    }

    /// Scan with an explicit pattern set. Unknown names are ignored.
    pub fn detect_sensitive_info_with(
        &self,
        text: &str,
        pattern_names: &[impl AsRef<str>],
    ) -> Vec<SensitiveMatch> {
        patterns::scan(text, pattern_names)
    }

    /// Distinct catalog labels present in `text`, in first-appearance
    /// order.
    pub fn detected_types(&self, text: &str) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for m in self.detect_sensitive_info(text) {
            if !types.contains(&m.pattern_name) {
                types.push(m.pattern_name);
            }
        }
        types
    }

    /// Keep the first and last `keep_length` characters and mask the
    /// middle with `*`. Strings of `2 * keep_length` characters or fewer
    /// are fully masked. Counted in characters, so multi-byte text
    /// survives.
    pub fn partial_mask(&self, text: &str, keep_length: usize) -> String {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= keep_length * 2 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..keep_length].iter().collect();
        let tail: String = chars[chars.len() - keep_length..].iter().collect();
        format!(
            "{}{}{}",
            head,
            "*".repeat(chars.len() - keep_length * 2),
            tail
        )
    }
}

impl Default for PrivacyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IMasker for PrivacyEngine {
    fn mask_outbound(&self, text: &str) -> EmpathyResult<MaskedText> {
        let mapped = self.mask(text, &self.mapping);
        let detections = patterns::scan(&mapped, &self.config.enabled_patterns);
        let masked = apply_auto_mask(&mapped, &detections);
        debug!(redactions = detections.len(), "outbound text masked");
        Ok(MaskedText {
            text: masked,
            detections,
        })
    }
}

/// Build `[<name>_<index>]` placeholders for the detections (1-based,
/// per pattern name, in start order) and splice them into `text`.
fn apply_auto_mask(text: &str, detections: &[SensitiveMatch]) -> String {
    if detections.is_empty() {
        return text.to_string();
    }
    let mut counters: HashMap<&str, usize> = HashMap::new();
    let replacements: Vec<(usize, usize, String)> = detections
        .iter()
        .map(|d| {
            let counter = counters.entry(d.pattern_name.as_str()).or_insert(0);
            *counter += 1;
            (d.start, d.end, format!("[{}_{}]", d.pattern_name, *counter))
        })
        .collect();
    patterns::splice(text, &replacements)
}
