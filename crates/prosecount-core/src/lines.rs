//! Line filtering.
//!
//! Splits content on line boundaries and keeps only the lines that carry
//! something other than whitespace. Line counts are computed from this view.

/// Characters that end a line.
///
/// Covers `\n`, `\r` (and therefore `\r\n`), vertical tab, form feed, the
/// file/group/record separators, NEL, and the Unicode line and paragraph
/// separators.
const LINE_BOUNDARIES: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Returns `true` if a line is empty or made only of whitespace.
pub fn is_blank_line(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Split content into lines and drop every blank one.
///
/// Lines come back in source order, unmodified. A `\r\n` pair produces an
/// empty piece between its two characters, which is discarded along with the
/// other blank lines.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn non_blank_lines(content: &str) -> Vec<&str> {
    let lines: Vec<&str> = content
        .split(LINE_BOUNDARIES)
        .filter(|line| !is_blank_line(line))
        .collect();
    tracing::debug!(lines = lines.len(), "filtered blank lines");
    lines
}
