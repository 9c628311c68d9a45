//! Structurally suspicious payload detection.
//!
//! Matches the raw submitted text, never a percent-decoded form, so both
//! literal and encoded injection attempts are caught without a decode step.
//! Only specific percent-codes are listed; a blanket `%XX` rule would reject
//! legitimate encoded international text and query strings.

use once_cell::sync::Lazy;
use regex::{RegexSet, RegexSetBuilder};

/// Ordered `(label, pattern)` pairs. All patterns are compiled case-insensitive.
pub(crate) const SUSPICIOUS_PATTERNS: &[(&str, &str)] = &[
    ("javascript:", r"javascript:"),
    ("data:", r"data:"),
    ("vbscript:", r"vbscript:"),
    ("file:", r"file:"),
    ("ftp:", r"ftp:"),
    ("<script", r"<script"),
    ("onclick", r"onclick"),
    ("onload", r"onload"),
    ("eval(", r"eval\("),
    ("\\x", r"\\x"),
    ("%3C", r"%3c"),
    ("%3E", r"%3e"),
    ("%22", r"%22"),
    ("%27", r"%27"),
    ("%28", r"%28"),
    ("%29", r"%29"),
    ("%3B", r"%3b"),
    ("%00", r"%00"),
    ("%0A", r"%0a"),
    ("%0D", r"%0d"),
];

static SUSPICIOUS_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSetBuilder::new(SUSPICIOUS_PATTERNS.iter().map(|(_, p)| *p))
        .case_insensitive(true)
        .build()
        .expect("suspicious pattern set must compile")
});

/// Returns true if `text` contains any suspicious pattern.
pub fn matches_suspicious_pattern(text: &str) -> bool {
    SUSPICIOUS_SET.is_match(text)
}

/// Label of the first pattern (in declaration order) that matches `text`.
pub fn first_suspicious_pattern(text: &str) -> Option<&'static str> {
    SUSPICIOUS_SET
        .matches(text)
        .iter()
        .next()
        .map(|idx| SUSPICIOUS_PATTERNS[idx].0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_set_compiles() {
        assert_eq!(SUSPICIOUS_SET.len(), SUSPICIOUS_PATTERNS.len());
    }

    #[test]
    fn dangerous_schemes() {
        assert!(matches_suspicious_pattern("javascript:alert(1)"));
        assert!(matches_suspicious_pattern("JavaScript:alert(1)"));
        assert!(matches_suspicious_pattern("vbscript:msgbox"));
        assert!(matches_suspicious_pattern("data:text/html;base64,AAAA"));
        assert!(matches_suspicious_pattern("file:///etc/passwd"));
        assert!(matches_suspicious_pattern("ftp://files.example.com/a"));
    }

    #[test]
    fn script_and_handler_markers() {
        assert!(matches_suspicious_pattern("https://example.com/<SCRIPT>x"));
        assert!(matches_suspicious_pattern("https://example.com/?a=onload"));
        assert!(matches_suspicious_pattern("https://example.com/?a=onClick"));
        assert!(matches_suspicious_pattern("https://example.com/eval(x)"));
        assert!(matches_suspicious_pattern(r"https://example.com/\x3cscript"));
    }

    #[test]
    fn encoded_markers_either_case() {
        for enc in [
            "%3C", "%3c", "%3E", "%3e", "%22", "%27", "%28", "%29", "%3B", "%3b", "%00", "%0A",
            "%0a", "%0D", "%0d",
        ] {
            let url = format!("https://example.com/page?q={enc}");
            assert!(matches_suspicious_pattern(&url), "{enc} should match");
        }
    }

    #[test]
    fn legitimate_urls_pass() {
        assert!(!matches_suspicious_pattern("https://example.com/a-real-page"));
        assert!(!matches_suspicious_pattern(
            "https://de.wikipedia.org/wiki/M%C3%BCnchen"
        ));
        assert!(!matches_suspicious_pattern(
            "https://example.com/search?q=rust%20lang&page=2"
        ));
        assert!(!matches_suspicious_pattern("https://example.com/path%2Fencoded"));
    }

    #[test]
    fn first_match_is_in_declaration_order() {
        assert_eq!(
            first_suspicious_pattern("javascript:eval(1)"),
            Some("javascript:")
        );
        assert_eq!(
            first_suspicious_pattern("https://example.com/?q=%3Cb%3E"),
            Some("%3C")
        );
        assert_eq!(first_suspicious_pattern("https://example.com/"), None);
    }
}
