//! Text normalization applied before keyword matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref DISALLOWED_CHARS: Regex = Regex::new(r"[^\w\s.\-]").unwrap();
}

/// Lowercases, collapses whitespace and line breaks, replaces characters
/// outside `[\w\s.-]` with spaces, and trims.
pub fn normalize_document(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");
    let stripped = DISALLOWED_CHARS.replace_all(&collapsed, " ");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Removes control characters except line breaks and tabs.
pub fn strip_control_chars(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect()
}

/// Lowercases and collapses whitespace, keeping punctuation. Used for literal
/// phrase lookups such as "bachelor's degree".
pub fn fold_case_and_space(raw: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&raw.to_lowercase(), " ")
        .trim()
        .to_string()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(
            normalize_document("  Senior\r\n\r\nRust   Engineer\t"),
            "senior rust engineer"
        );
    }

    #[test]
    fn test_normalize_keeps_dots_and_hyphens() {
        assert_eq!(
            normalize_document("Node.js, React-Native & CSS3!"),
            "node.js react-native css3"
        );
    }

    #[test]
    fn test_normalize_replaces_punctuation_with_space() {
        assert_eq!(normalize_document("(React)/Redux"), "react redux");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_document(""), "");
        assert_eq!(normalize_document(" \n\t "), "");
    }

    #[test]
    fn test_strip_control_chars_keeps_line_breaks() {
        assert_eq!(strip_control_chars("a\u{0}b\u{7f}\nc\u{9c}"), "ab\nc");
    }

    #[test]
    fn test_fold_case_and_space_keeps_punctuation() {
        assert_eq!(
            fold_case_and_space("3+  Years\nExperience, Bachelor's"),
            "3+ years experience, bachelor's"
        );
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one  two\nthree"), 3);
        assert_eq!(word_count(""), 0);
    }
}
