//! Format trait and implementations for different document types.
//!
//! A format turns the text of a document into the flat token stream the outline pipeline
//! consumes. Formats backed by tree-sitter expose their grammar so callers can parse with it
//! directly.

use crate::error::Result;
use crate::token::Token;

pub mod markdown;

/// A document format that can be tokenized into flat markup events.
pub trait Format {
    /// Tree-sitter grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;
    /// File suffix (without the dot) that identifies documents of this format.
    fn file_extension(&self) -> &str;
    /// Tokenize `source` into open/close/self-closing events in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed.
    fn tokenize(&self, source: &str) -> Result<Vec<Token>>;
}
