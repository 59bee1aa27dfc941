//! Translation error types.

use std::path::PathBuf;

use thiserror::Error;
use tsxlate_ast::{SyntaxKind, SyntaxNode};
use tsxlate_parser::ParseError;

/// Errors that can occur during translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The source could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The source file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The parser produced a tree without a source-file root.
    #[error("No source file root found for {}", .path.display())]
    RootNotFound {
        /// The file that was parsed.
        path: PathBuf,
    },

    /// A handler asked for a child that its node kind always has.
    #[error("{kind} node has no `{field}` child")]
    MissingChild {
        /// Kind of the node missing the child.
        kind: SyntaxKind,
        /// Grammar field that was requested.
        field: &'static str,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TranslateError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a missing child error for `node`.
    pub fn missing_child(node: &SyntaxNode<'_>, field: &'static str) -> Self {
        Self::MissingChild {
            kind: node.kind,
            field,
        }
    }
}

/// Field lookups that fail with [`TranslateError::MissingChild`].
pub trait RequiredField<'a> {
    /// Returns the child held under `field`, or a [`TranslateError::MissingChild`].
    fn required_field(&self, field: &'static str) -> Result<&'a SyntaxNode<'a>, TranslateError>;
}

impl<'a> RequiredField<'a> for SyntaxNode<'a> {
    fn required_field(&self, field: &'static str) -> Result<&'a SyntaxNode<'a>, TranslateError> {
        self.field(field)
            .ok_or_else(|| TranslateError::missing_child(self, field))
    }
}
