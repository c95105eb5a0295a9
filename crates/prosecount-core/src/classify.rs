//! Paragraph classification.
//!
//! Some candidates produced by [`crate::segment`] look like paragraphs but
//! are Markdown structure. Each candidate is trimmed and checked against an
//! ordered table of markers; the first marker that matches decides its kind.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::segment;

/// What a paragraph candidate turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    /// Prose that counts as a paragraph.
    Paragraph,
    /// A Markdown ATX header (`#`, `##`, ...).
    Heading,
    /// A fenced code block opened with three backticks.
    CodeFence,
}

/// Structural markers, checked in order against the trimmed candidate.
///
/// Anything matching none of these is a paragraph.
const STRUCTURAL_MARKERS: &[(&str, BlockKind)] = &[
    ("#", BlockKind::Heading),
    ("```", BlockKind::CodeFence),
];

/// Classify a paragraph candidate.
pub fn classify(candidate: &str) -> BlockKind {
    let trimmed = candidate.trim();
    STRUCTURAL_MARKERS
        .iter()
        .find(|(marker, _)| trimmed.starts_with(marker))
        .map_or(BlockKind::Paragraph, |(_, kind)| *kind)
}

/// Returns `true` if the candidate is a genuine paragraph.
pub fn is_paragraph(candidate: &str) -> bool {
    classify(candidate) == BlockKind::Paragraph
}

/// Segment content and keep only the candidates that are paragraphs.
///
/// Paragraphs keep their trailing boundary and come back in source order.
#[tracing::instrument(skip(content), fields(content_len = content.len()))]
pub fn paragraphs(content: &str, collapse_spaces: bool) -> Vec<String> {
    let candidates = segment::segment(content, collapse_spaces);
    let total = candidates.len();
    let kept: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| is_paragraph(candidate))
        .collect();
    tracing::debug!(
        candidates = total,
        paragraphs = kept.len(),
        "classified candidates"
    );
    kept
}
