//! Flat markup events as emitted by a tokenizer.
//!
//! Tokens arrive in document order. Structural constructs are bracketed by paired open/close
//! tokens; everything else is self-closing and carries its own content, or a nested token list
//! of its own (the way inline runs carry their child spans).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a token affects the nesting of the render tree.
pub enum TokenKind {
    /// Starts a structural node; everything until the matching close nests inside it.
    Open,
    /// Ends the most recently opened structural node.
    Close,
    /// Stands alone, carrying literal content or nested child tokens.
    SelfClosing,
}

impl TokenKind {
    #[must_use]
    /// Classify a tokenizer type string such as `heading_open`, `heading_close` or `inline`.
    pub fn from_type(token_type: &str) -> Self {
        if token_type.ends_with("_open") {
            Self::Open
        } else if token_type.ends_with("_close") {
            Self::Close
        } else {
            Self::SelfClosing
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A single markup event.
pub struct Token {
    /// Element name, e.g. `h2`, `p`, `li`. Empty for pure text runs.
    pub tag: String,
    /// Structural role of the event.
    pub kind: TokenKind,
    /// Literal text carried by a self-closing token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Nested tokens carried by a self-closing token.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
}

impl Token {
    #[must_use]
    /// An open event for `tag`.
    pub fn open(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            kind: TokenKind::Open,
            content: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    /// A close event for `tag`.
    pub fn close(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            kind: TokenKind::Close,
            content: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    /// A self-closing event with a tag and literal content.
    pub fn leaf(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            kind: TokenKind::SelfClosing,
            content: Some(content.into()),
            children: Vec::new(),
        }
    }

    #[must_use]
    /// An inline run: untagged text that also carries a single text child span.
    pub fn inline(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            tag: String::new(),
            kind: TokenKind::SelfClosing,
            children: vec![Self::leaf("", content.clone())],
            content: Some(content),
        }
    }

    #[must_use]
    /// A self-closing event whose payload is a nested token list.
    pub fn with_children(tag: impl Into<String>, children: Vec<Token>) -> Self {
        Self {
            tag: tag.into(),
            kind: TokenKind::SelfClosing,
            content: None,
            children,
        }
    }
}

#[derive(Deserialize)]
/// Token as serialised by markdown-it style tokenizers, with a free-form `type` string.
struct RawToken {
    tag: String,
    #[serde(rename = "type")]
    token_type: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    children: Option<Vec<RawToken>>,
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        Self {
            kind: TokenKind::from_type(&raw.token_type),
            tag: raw.tag,
            content: raw.content.filter(|c| !c.is_empty()),
            children: raw
                .children
                .unwrap_or_default()
                .into_iter()
                .map(Token::from)
                .collect(),
        }
    }
}

/// Read a token stream exported by an external tokenizer as a JSON array of
/// `{ "tag", "type", "content"?, "children"? }` objects.
///
/// # Errors
///
/// Returns an error if the JSON does not have that shape.
pub fn tokens_from_json(json: &str) -> serde_json::Result<Vec<Token>> {
    let raw: Vec<RawToken> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(Token::from).collect())
}

#[cfg(test)]
#[path = "tests/token.rs"]
mod tests;
