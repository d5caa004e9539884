use regex::Regex;
use std::sync::LazyLock;

/// A compiled entry of the built-in sensitive-info catalog.
pub struct CatalogPattern {
    /// Stable internal key, e.g. `phone_number`.
    pub name: &'static str,
    /// Public label used in settings and as the placeholder prefix.
    pub label: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! catalog_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Mainland mobile number (11 digits, 1 + 3-9 prefix) ────────────────────
catalog_pattern!(RE_PHONE_NUMBER, r"1[3-9]\d{9}");

// ── National ID card number (18 chars, trailing checksum may be X) ────────
catalog_pattern!(RE_ID_CARD, r"\d{17}[\dXx]");

// ── Email ─────────────────────────────────────────────────────────────────
catalog_pattern!(
    RE_EMAIL,
    r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}"
);

// ── Bank card number (16-19 digits) ───────────────────────────────────────
catalog_pattern!(RE_BANK_CARD, r"\d{16,19}");

// ── Landline with area code ───────────────────────────────────────────────
catalog_pattern!(RE_LANDLINE, r"0\d{2,3}-\d{7,8}");

/// The full built-in catalog. Entries are process-wide constants; the
/// order here only breaks ties between equal-length overlapping matches.
pub fn all_patterns() -> Vec<CatalogPattern> {
    vec![
        CatalogPattern {
            name: "phone_number",
            label: "手机号",
            regex: &RE_PHONE_NUMBER,
        },
        CatalogPattern {
            name: "id_card",
            label: "身份证号",
            regex: &RE_ID_CARD,
        },
        CatalogPattern {
            name: "email",
            label: "邮箱",
            regex: &RE_EMAIL,
        },
        CatalogPattern {
            name: "bank_card",
            label: "银行卡号",
            regex: &RE_BANK_CARD,
        },
        CatalogPattern {
            name: "landline",
            label: "座机号",
            regex: &RE_LANDLINE,
        },
    ]
}

/// Look up a catalog entry by internal key or public label.
pub fn lookup(name: &str) -> Option<CatalogPattern> {
    all_patterns()
        .into_iter()
        .find(|p| p.name == name || p.label == name)
}
