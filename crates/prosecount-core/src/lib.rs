//! Core library for prosecount.
//!
//! Extracts paragraphs, words, lines, and fragments from written submissions
//! (primarily Markdown) so a grading tool can compare the counts against its
//! thresholds.
//!
//! # Modules
//!
//! - [`lines`] - Blank-line filtering
//! - [`segment`] - Paragraph candidate segmentation
//! - [`classify`] - Paragraph vs. header/code-fence classification
//! - [`count`] - Paragraph, word, line, fragment, and pattern counters
//! - [`source`] - File-or-content resolution
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use prosecount_core::count;
//!
//! let essay = "# Title\n\nHello world.\n\nOne two three four.";
//! assert_eq!(count::count_paragraphs(essay), 2);
//! assert_eq!(count::count_words(essay), 2);
//! assert_eq!(count::count_fragment(essay, "o"), 4);
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod count;
pub mod error;
pub mod lines;
pub mod segment;
pub mod source;

pub use classify::BlockKind;
pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES};
pub use count::CountReport;
pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, SourceError, SourceResult,
};
pub use source::Source;
