//! Resolving the text to count.
//!
//! A check names either a file (directory plus file name) or supplies the
//! text directly. [`Source::resolve`] picks one of the two and
//! [`Source::read`] produces the text in a single read. Every failure is an
//! explicit [`SourceError`]; a missing file never turns into a zero count.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{SourceError, SourceResult};

/// Where the text to count comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on disk, read in full.
    File(Utf8PathBuf),
    /// Literal text supplied by the caller.
    Content(String),
}

impl Source {
    /// Choose between a file and literal content.
    ///
    /// | file exists | content given | result |
    /// |---|---|---|
    /// | yes | no | [`Source::File`] |
    /// | no | yes | [`Source::Content`] |
    /// | yes | yes | [`SourceError::Conflicting`] |
    /// | no | no | [`SourceError::Missing`] |
    ///
    /// `None` is the "no content provided" marker; `Some("")` is empty
    /// content and counts as given.
    #[tracing::instrument(skip(content), fields(has_content = content.is_some()))]
    pub fn resolve(
        directory: &Utf8Path,
        file_name: &str,
        content: Option<&str>,
    ) -> SourceResult<Self> {
        let path = directory.join(file_name);
        let exists = path.is_file();
        tracing::debug!(%path, exists, "checked file source");

        match (exists, content) {
            (true, None) => Ok(Self::File(path)),
            (false, Some(text)) => Ok(Self::Content(text.to_string())),
            (true, Some(_)) => Err(SourceError::Conflicting { path }),
            (false, None) => Err(SourceError::Missing { path }),
        }
    }

    /// Produce the text of this source.
    ///
    /// Files larger than `max_bytes` are rejected from their metadata before
    /// anything is read into memory. Literal content is returned as is.
    ///
    /// # Errors
    ///
    /// [`SourceError::TooLarge`] when the file exceeds the limit and
    /// [`SourceError::Read`] when it cannot be read as UTF-8 text.
    pub fn read(&self, max_bytes: Option<usize>) -> SourceResult<String> {
        match self {
            Self::File(path) => read_file(path, max_bytes),
            Self::Content(text) => Ok(text.clone()),
        }
    }

    /// Read this source and apply a counter to its text.
    ///
    /// ```no_run
    /// use camino::Utf8Path;
    /// use prosecount_core::{Source, count};
    ///
    /// let source = Source::resolve(Utf8Path::new("submission"), "README.md", None)?;
    /// let paragraphs = source.count_with(None, count::count_paragraphs)?;
    /// # Ok::<(), prosecount_core::SourceError>(())
    /// ```
    pub fn count_with<F>(&self, max_bytes: Option<usize>, counter: F) -> SourceResult<usize>
    where
        F: FnOnce(&str) -> usize,
    {
        let text = self.read(max_bytes)?;
        Ok(counter(&text))
    }
}

#[tracing::instrument(skip_all, fields(%path))]
fn read_file(path: &Utf8Path, max_bytes: Option<usize>) -> SourceResult<String> {
    let read_error = |source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    };

    // Preflight: check file size via metadata before reading into memory.
    let metadata = std::fs::metadata(path.as_std_path()).map_err(read_error)?;
    if let Some(limit) = max_bytes
        && metadata.len() > limit as u64
    {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }

    let text = std::fs::read_to_string(path.as_std_path()).map_err(read_error)?;
    tracing::debug!(bytes = text.len(), "read file source");
    Ok(text)
}
