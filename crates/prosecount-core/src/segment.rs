//! Paragraph segmentation.
//!
//! Content is normalized so that a paragraph may wrap across several source
//! lines, then cut into candidates at double-newline boundaries. Candidates
//! keep their trailing `\n\n`; consumers trim before inspecting them.
//!
//! Normalization rewrites every run of `n` newlines as `n / 2` double
//! newlines, plus one space when `n` is odd. A lone newline therefore joins
//! two lines of the same paragraph, and three newlines leave a paragraph
//! break followed by a space.

/// Paragraph boundary in normalized text.
const BOUNDARY: &str = "\n\n";

/// Split content into paragraph candidates.
///
/// With `collapse_spaces` set, every literal space is removed before
/// normalization, so a line holding only spaces cannot split a paragraph
/// break into two single newlines. Paragraph counting uses this mode; word
/// counting does not, since removing spaces would fuse words together.
///
/// Candidates are returned in source order. Empty content yields none.
#[tracing::instrument(skip(content), fields(content_len = content.len()))]
pub fn segment(content: &str, collapse_spaces: bool) -> Vec<String> {
    let normalized = normalize(content, collapse_spaces);
    let candidates: Vec<String> = split_candidates(&normalized)
        .into_iter()
        .map(str::to_owned)
        .collect();
    tracing::debug!(candidates = candidates.len(), "segmented content");
    candidates
}

/// Apply the space-collapsing and newline-folding rules.
fn normalize(content: &str, collapse_spaces: bool) -> String {
    let mut normalized = String::with_capacity(content.len());
    let mut run = 0usize;

    for ch in content.chars() {
        if collapse_spaces && ch == ' ' {
            continue;
        }
        if ch == '\n' {
            run += 1;
            continue;
        }
        push_newline_run(&mut normalized, run);
        run = 0;
        normalized.push(ch);
    }
    push_newline_run(&mut normalized, run);

    normalized
}

fn push_newline_run(out: &mut String, run: usize) {
    for _ in 0..run / 2 {
        out.push_str(BOUNDARY);
    }
    if run % 2 == 1 {
        out.push(' ');
    }
}

/// Cut normalized text into candidates.
///
/// Each maximal run of non-newline characters becomes one candidate:
/// - followed by `\n\n`, the candidate includes the boundary;
/// - reaching the end of the text, or a single final newline, the candidate
///   ends there;
/// - followed by a lone newline anywhere else, the run yields nothing.
///
/// Newlines between runs are skipped, so no candidate is ever empty.
fn split_candidates(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut start = 0;

    while start < text.len() {
        if text[start..].starts_with('\n') {
            start += 1;
            continue;
        }

        let Some(offset) = text[start..].find('\n') else {
            candidates.push(&text[start..]);
            break;
        };
        let end = start + offset;

        if text[end..].starts_with(BOUNDARY) {
            candidates.push(&text[start..end + BOUNDARY.len()]);
            start = end + BOUNDARY.len();
        } else if end + 1 == text.len() {
            candidates.push(&text[start..end]);
            break;
        } else {
            start = end + 1;
        }
    }

    candidates
}
