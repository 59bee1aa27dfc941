//! Source file handle shared by parsing and translation.

use std::path::{Path, PathBuf};

use crate::Span;

/// A source file: its path and full text.
///
/// Syntax nodes only store spans; their raw text is recovered by slicing the
/// file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    /// Creates a new source file.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Returns the file path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the full source text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text covered by `span`.
    #[inline]
    pub fn slice(&self, span: Span) -> &str {
        span.slice(&self.text)
    }

    /// Returns the file extension, if any.
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }
}
