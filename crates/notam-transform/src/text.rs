//! Whitespace and sentence helpers shared by encode and decode.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of tabs and space separators. Line and paragraph separators are not
/// included.
static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\p{Zs}]+").expect("Invalid whitespace regex"));

/// Collapse runs of spaces and tabs into one space and trim both ends.
///
/// Line breaks are kept so multi-line notices stay multi-line.
pub fn collapse_whitespace(text: &str) -> String {
    HORIZONTAL_WHITESPACE
        .replace_all(text, " ")
        .trim()
        .to_string()
}

/// Append a period unless the text already ends with one.
pub fn terminate_sentence(mut text: String) -> String {
    if !text.ends_with('.') {
        text.push('.');
    }
    text
}

/// Upper-case the first character and leave the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_spaces_and_tabs_but_keeps_newlines() {
        assert_eq!(
            collapse_whitespace("  rwy \t 09  clsd\nfrom   0600 \n"),
            "rwy 09 clsd\nfrom 0600"
        );
    }

    #[test]
    fn unicode_line_separators_are_not_collapsed() {
        assert_eq!(
            collapse_whitespace("rwy 09\u{2028}rwy 27\u{0B}rwy\u{A0}\u{A0}36\u{85}twy"),
            "rwy 09\u{2028}rwy 27\u{0B}rwy 36\u{85}twy"
        );
    }

    #[test]
    fn period_appended_once() {
        assert_eq!(terminate_sentence("RWY CLSD".to_string()), "RWY CLSD.");
        assert_eq!(terminate_sentence("RWY CLSD.".to_string()), "RWY CLSD.");
        assert_eq!(terminate_sentence(String::new()), ".");
    }

    #[test]
    fn capitalizes_only_first_character() {
        assert_eq!(capitalize_first("runway closed"), "Runway closed");
        assert_eq!(capitalize_first("élévation"), "Élévation");
        assert_eq!(capitalize_first(""), "");
    }
}
