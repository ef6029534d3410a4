//! Grouping-key normalization.
//!
//! ```text
//! " Web App "  →  "web_app"
//! "US-East"    →  "us_east"
//! "dc#1"       →  "dc_1"
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::KeyStyle;

/// Runs of non-word characters, collapsed into a single underscore.
///
/// Word characters are letters, numbers and `_`. Combining marks are not
/// word characters, unlike regex `\w`.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_]+").expect("valid regex"));

/// Normalize a raw field into a grouping-key-safe token.
///
/// Trims, lowercases, turns every space and hyphen into `_`, collapses the
/// remaining non-word runs into one `_` and strips outer underscores.
///
/// # Example
/// ```
/// use csv2ini::normalize_token;
///
/// assert_eq!(normalize_token(" Web App "), "web_app");
/// assert_eq!(normalize_token("US-East"), "us_east");
/// assert_eq!(normalize_token(""), "");
/// ```
pub fn normalize_token(raw: &str) -> String {
    let text = raw.trim().to_lowercase().replace([' ', '-'], "_");
    let text = NON_WORD.replace_all(&text, "_");
    text.trim_matches('_').to_string()
}

/// Normalize an attribute field (REGION, ENV or LOCATION) for `style`.
pub fn normalize_attribute(raw: &str, style: KeyStyle) -> String {
    match style {
        KeyStyle::Full => normalize_token(raw),
        KeyStyle::Legacy => raw.trim().to_lowercase(),
    }
}

/// Name of the detailed group for a normalized key tuple.
pub fn build_group_name(product: &str, region: &str, env: &str, location: &str) -> String {
    format!("{}_{}_{}_{}", product, region, env, location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_normalization() {
        assert_eq!(normalize_token("Web App"), "web_app");
        assert_eq!(normalize_token(" US-East "), "us_east");
        assert_eq!(normalize_token("PROD"), "prod");
        assert_eq!(normalize_token("dc1"), "dc1");
    }

    #[test]
    fn test_punctuation_collapsed() {
        assert_eq!(normalize_token("dc#1 (a)"), "dc_1__a");
        assert_eq!(normalize_token("a.b,c"), "a_b_c");
        assert_eq!(normalize_token("a!!!b"), "a_b");
        assert_eq!(normalize_token("--edge--"), "edge");
        assert_eq!(normalize_token("(x)"), "x");
    }

    #[test]
    fn test_spaces_are_not_collapsed() {
        // each space becomes its own underscore; only non-word runs collapse
        assert_eq!(normalize_token("a  b"), "a__b");
        assert_eq!(normalize_token("a - b"), "a___b");
        assert_eq!(normalize_token("a\tb"), "a_b");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_token(""), "");
        assert_eq!(normalize_token("   "), "");
        assert_eq!(normalize_token("-_-"), "");
    }

    #[test]
    fn test_unicode_word_characters_kept() {
        assert_eq!(normalize_token("Zürich Nord"), "zürich_nord");
    }

    #[test]
    fn test_combining_marks_are_not_word_characters() {
        assert_eq!(normalize_token("re\u{301}sume\u{301}"), "re_sume");
        assert_eq!(normalize_token("cafe\u{301}"), "cafe");
        assert_eq!(normalize_token("caf\u{e9}"), "caf\u{e9}");
        assert_eq!(normalize_token("rack\u{b2}"), "rack\u{b2}");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Web App",
            " US-East ",
            "dc#1 (a)",
            "a - b",
            "__x__",
            "Zürich Nord",
            "MiXeD_case-Thing 42",
            "",
            "İstanbul",
            "re\u{301}sume",
        ];
        for raw in samples {
            let once = normalize_token(raw);
            assert_eq!(normalize_token(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_legacy_attribute_style() {
        assert_eq!(normalize_attribute(" US-East ", KeyStyle::Legacy), "us-east");
        assert_eq!(normalize_attribute("Data Center", KeyStyle::Legacy), "data center");
        assert_eq!(normalize_attribute(" US-East ", KeyStyle::Full), "us_east");
    }

    #[test]
    fn test_build_group_name() {
        assert_eq!(
            build_group_name("web_app", "us_east", "prod", "dc1"),
            "web_app_us_east_prod_dc1"
        );
        assert_eq!(build_group_name("", "", "", ""), "___");
    }
}
