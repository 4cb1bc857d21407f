//! Multi-line text helpers shared by titles and category labels.

use std::sync::LazyLock;

use regex::Regex;

/// Any run of CR/LF characters counts as a single line break.
static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("Invalid regex"));

/// Collapse CR/LF runs into a single `\n`.
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
    LINE_BREAKS.replace_all(text, "\n").into_owned()
}

/// Split text into display lines after normalizing line breaks.
#[must_use]
pub fn text_lines(text: &str) -> Vec<String> {
    normalize_newlines(text)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Number of display lines: 0 for absent or empty text.
#[must_use]
pub fn line_count(text: Option<&str>) -> usize {
    match text {
        None | Some("") => 0,
        Some(t) => LINE_BREAKS.find_iter(t).count() + 1,
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
