//! Failures surfaced by the outline pipeline.
//!
//! The structural variants are fatal for the document being processed: nothing in the pipeline
//! retries or repairs a broken token stream, it reports the problem to whoever asked for the
//! outline. [`OutlineError::Document`] wraps any of them with the path of the offending file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading a document and writing its outline.
#[derive(Debug, Error)]
pub enum OutlineError {
    /// A close event arrived with no open node left to close, or an open node was never closed.
    #[error("malformed token stream: unbalanced open/close at token {index}")]
    MalformedTokenStream {
        /// Position in the token stream where the imbalance was detected.
        index: usize,
    },
    /// A tag looked like a heading but its level suffix is not a positive integer.
    #[error("invalid heading tag `{tag}`: level must be a positive integer")]
    InvalidHeadingTag {
        /// The tag as it appeared on the render node.
        tag: String,
    },
    /// A configuration value or command line option is not recognised.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The tokenizer could not produce a syntax tree for the document.
    #[error("failed to parse document: {0}")]
    Parse(String),
    /// A pipeline failure attributed to a specific source document.
    #[error("{}: {source}", .path.display())]
    Document {
        /// Source document that failed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: Box<OutlineError>,
    },
    /// Reading sources or writing the outline failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl OutlineError {
    /// Attribute this error to the document at `path`.
    #[must_use]
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        Self::Document {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Shorthand for results carrying an [`OutlineError`].
pub type Result<T> = std::result::Result<T, OutlineError>;
