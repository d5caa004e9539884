pub mod pii;

use tracing::debug;

use empathy_core::models::SensitiveMatch;

pub use pii::{all_patterns, lookup, CatalogPattern};

/// Scan `text` for every requested catalog pattern.
///
/// Matches are located against the original, unmodified text. When matches
/// from different patterns overlap, the longer one wins, so an 18-digit ID
/// card swallows the phone-shaped digit run inside it. Unknown and repeated
/// pattern names are skipped. Results are sorted ascending by start offset
/// and tagged with the name exactly as the caller requested it.
pub fn scan(text: &str, pattern_names: &[impl AsRef<str>]) -> Vec<SensitiveMatch> {
    let mut matches: Vec<SensitiveMatch> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();

    for name in pattern_names {
        let name = name.as_ref();
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);

        let Some(pattern) = pii::lookup(name) else {
            debug!(pattern = name, "unknown pattern name skipped");
            continue;
        };
        let Some(re) = pattern.regex.as_ref() else {
            continue;
        };
        for m in re.find_iter(text) {
            matches.push(SensitiveMatch {
                pattern_name: name.to_string(),
                matched_text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            });
        }
    }

    drop_overlapping(&mut matches);
    matches
}

/// Remove overlapping matches, keeping the longer (more specific) one.
/// Equal-length overlaps keep the earlier match; request order breaks
/// same-span ties. Leaves the list sorted ascending by start.
fn drop_overlapping(matches: &mut Vec<SensitiveMatch>) {
    matches.sort_by(|a, b| a.start.cmp(&b.start));
    let mut i = 0;
    while i + 1 < matches.len() {
        let a_len = matches[i].end - matches[i].start;
        let b_len = matches[i + 1].end - matches[i + 1].start;
        if matches[i + 1].start < matches[i].end {
            if b_len > a_len {
                matches.remove(i);
            } else {
                matches.remove(i + 1);
            }
        } else {
            i += 1;
        }
    }
}

/// Rebuild `text` with `replacements` applied in one left-to-right pass.
///
/// Spans are byte offsets into `text`, non-overlapping and sorted
/// ascending. Because every span was computed on `text` itself, no
/// replacement can shift the offsets of a later one.
pub(crate) fn splice(text: &str, replacements: &[(usize, usize, String)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end, replacement) in replacements {
        out.push_str(&text[cursor..*start]);
        out.push_str(replacement);
        cursor = *end;
    }
    out.push_str(&text[cursor..]);
    out
}
