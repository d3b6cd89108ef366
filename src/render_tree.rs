//! Reconstruction of a nested render tree from a flat token stream.
//!
//! A stack of open nodes tracks where content currently lands. Open events push a fresh node,
//! close events pop it into the content of the node beneath, and self-closing events append to
//! whatever is on top. While a node is open nothing else can land in its parent, so attaching it
//! on close yields the same order as attaching it on open.

use crate::error::{OutlineError, Result};
use crate::token::{Token, TokenKind};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One entry in a render node's content.
pub enum Content {
    /// A literal run of text.
    Text(String),
    /// A nested structural node.
    Subtree(RenderNode),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A structural node reconstructed from an open/close range or a self-closing token.
pub struct RenderNode {
    /// Element name; empty for the document root.
    pub tag: String,
    /// Text runs and nested nodes in document order.
    pub content: Vec<Content>,
}

impl RenderNode {
    #[must_use]
    /// An empty node for `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: Vec::new(),
        }
    }

    #[must_use]
    /// All text runs below this node concatenated depth-first.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for item in &self.content {
            match item {
                Content::Text(text) => out.push_str(text),
                Content::Subtree(node) => node.push_text(out),
            }
        }
    }
}

/// Build the render tree for `tokens`, returning the root's top-level content.
///
/// A self-closing token contributes its literal content when it has any, otherwise a subtree
/// built recursively from its child tokens, otherwise an empty text run.
///
/// # Errors
///
/// Returns [`OutlineError::MalformedTokenStream`] when a close event has nothing to close, or
/// when the stream ends with nodes still open.
pub fn build_render_tree(tokens: &[Token]) -> Result<Vec<Content>> {
    let mut root = RenderNode::default();
    let mut open: Vec<RenderNode> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Open => open.push(RenderNode::new(token.tag.clone())),
            TokenKind::Close => {
                let node = open
                    .pop()
                    .ok_or(OutlineError::MalformedTokenStream { index })?;
                open.last_mut()
                    .unwrap_or(&mut root)
                    .content
                    .push(Content::Subtree(node));
            }
            TokenKind::SelfClosing => {
                let item = self_closing_content(token)?;
                open.last_mut().unwrap_or(&mut root).content.push(item);
            }
        }
    }

    if !open.is_empty() {
        return Err(OutlineError::MalformedTokenStream {
            index: tokens.len(),
        });
    }
    Ok(root.content)
}

fn self_closing_content(token: &Token) -> Result<Content> {
    if let Some(text) = &token.content {
        return Ok(Content::Text(text.clone()));
    }
    if token.children.is_empty() {
        return Ok(Content::Text(String::new()));
    }
    Ok(Content::Subtree(RenderNode {
        tag: token.tag.clone(),
        content: build_render_tree(&token.children)?,
    }))
}

#[cfg(test)]
#[path = "tests/render_tree.rs"]
mod tests;
