//! Error types for prosecount-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while resolving the text to count.
///
/// Counting itself never fails; these cover the file-or-content choice and
/// the single read that follows it.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Neither an existing file nor literal content was supplied.
    #[error("no content provided and {path} does not exist")]
    Missing {
        /// The file path that was checked.
        path: Utf8PathBuf,
    },

    /// An existing file and literal content were both supplied.
    #[error("both {path} and literal content were provided; supply exactly one")]
    Conflicting {
        /// The file path that exists alongside the literal content.
        path: Utf8PathBuf,
    },

    /// The file exceeds the configured input limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// The offending file.
        path: Utf8PathBuf,
        /// Size of the file in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// The file could not be read (permissions, invalid UTF-8, ...).
    #[error("failed to read {path}")]
    Read {
        /// The file that failed to read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`SourceError`].
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A pattern passed to [`crate::count::count_pattern`] did not compile.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Compilation error from the regex engine.
        #[source]
        source: Box<regex::Error>,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
