//! Counters over segmented content.
//!
//! Every counter is a pure function of its input. Paragraph and word counts
//! go through [`crate::classify::paragraphs`] with different space handling:
//! paragraph counting collapses spaces so space-only lines still separate
//! paragraphs, word counting keeps them so words stay apart.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify;
use crate::error::{AnalysisError, AnalysisResult};
use crate::lines;

/// Structural counts for one piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CountReport {
    /// Number of paragraphs, excluding headers and code fences.
    pub paragraphs: usize,
    /// Word count of the shortest paragraph (0 when there are none).
    pub min_words: usize,
    /// Number of non-blank lines.
    pub lines: usize,
}

impl CountReport {
    /// Compute every structural count for `content`.
    #[tracing::instrument(skip_all, fields(content_len = content.len()))]
    pub fn from_content(content: &str) -> Self {
        Self {
            paragraphs: count_paragraphs(content),
            min_words: count_words(content),
            lines: count_lines(content),
        }
    }
}

/// Count the paragraphs in the content.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn count_paragraphs(content: &str) -> usize {
    classify::paragraphs(content, true).len()
}

/// Count the words in every paragraph, in source order.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn paragraph_word_counts(content: &str) -> Vec<usize> {
    classify::paragraphs(content, false)
        .iter()
        .map(|paragraph| count_paragraph_words(paragraph))
        .collect()
}

/// Word count of the shortest paragraph.
///
/// This is a minimum, not a total: every paragraph has to reach a word
/// threshold on its own. Content without paragraphs yields 0.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn count_words(content: &str) -> usize {
    let counts = paragraph_word_counts(content);
    let min_words = counts.iter().copied().min().unwrap_or(0);
    tracing::debug!(paragraphs = counts.len(), min_words, "counted words");
    min_words
}

/// Count the non-blank lines in the content.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn count_lines(content: &str) -> usize {
    lines::non_blank_lines(content).len()
}

/// Count non-overlapping occurrences of a literal fragment.
///
/// Matching scans left to right and resumes after each match, so `"aa"`
/// occurs twice in `"aaaa"` and once in `"aaa"`. An empty fragment matches
/// at every character boundary.
#[tracing::instrument(skip(content), fields(content_len = content.len()))]
pub fn count_fragment(content: &str, fragment: &str) -> usize {
    content.matches(fragment).count()
}

/// Count non-overlapping matches of a regular expression.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidPattern`] if `pattern` does not compile.
#[tracing::instrument(skip(content), fields(content_len = content.len()))]
pub fn count_pattern(content: &str, pattern: &str) -> AnalysisResult<usize> {
    let re = Regex::new(pattern).map_err(|e| AnalysisError::InvalidPattern {
        pattern: pattern.to_string(),
        source: Box::new(e),
    })?;
    Ok(re.find_iter(content).count())
}

/// Words are maximal runs of alphanumeric characters; everything else,
/// newlines included, separates them.
fn count_paragraph_words(paragraph: &str) -> usize {
    paragraph
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .count()
}
