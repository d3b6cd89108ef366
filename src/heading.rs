//! Heading extraction and the level-driven heading tree.
//!
//! Headings never contain other headings, so they all surface as siblings at the top of the
//! render tree whatever their visual level. The hierarchy is rebuilt purely from the numeric
//! levels: each heading hangs off the most recent earlier heading with a strictly smaller level.
//! Earlier headings stay candidates for the whole document, which is what lets an `h2` after an
//! `h1`/`h3` pair attach to the `h1` rather than to the `h3`.

use crate::error::{OutlineError, Result};
use crate::formats::Format;
use crate::render_tree::{build_render_tree, Content, RenderNode};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading before nesting: its level and literal text.
pub struct FlatHeading {
    /// Heading depth, 1 for the outermost.
    pub level: usize,
    /// Heading text with markup removed.
    pub text: String,
}

impl FlatHeading {
    #[must_use]
    /// A flat heading at `level` with `text`.
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Read the level from a heading node's tag and its text from its content.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::InvalidHeadingTag`] if the tag's suffix is not a positive integer.
    pub fn from_node(node: &RenderNode) -> Result<Self> {
        let level = heading_level(&node.tag)?;
        Ok(Self::new(level, node.text()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading with the headings nested beneath it.
pub struct HeadingNode {
    /// Heading text.
    pub text: String,
    /// Heading depth, 1 for the outermost.
    pub level: usize,
    /// Directly nested headings in document order.
    pub children: Vec<HeadingNode>,
}

impl HeadingNode {
    #[must_use]
    /// A leaf heading.
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level,
            children: Vec::new(),
        }
    }

    #[must_use]
    /// This node followed by all its descendants, depth first.
    pub fn pre_order(&self) -> Vec<&HeadingNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.pre_order());
        }
        out
    }
}

#[must_use]
/// Whether `tag` names a heading: `h` followed by one or more ASCII digits.
pub fn is_heading_tag(tag: &str) -> bool {
    tag.strip_prefix('h')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn heading_level(tag: &str) -> Result<usize> {
    let invalid = || OutlineError::InvalidHeadingTag {
        tag: tag.to_string(),
    };
    let digits = tag.strip_prefix('h').ok_or_else(invalid)?;
    match digits.parse::<usize>() {
        Ok(level) if level >= 1 => Ok(level),
        _ => Err(invalid()),
    }
}

#[must_use]
/// Select the heading nodes among the top-level entries of a render tree.
///
/// Only the given list is scanned; the content of non-heading nodes is not searched.
pub fn extract_headings(nodes: &[Content]) -> Vec<&RenderNode> {
    nodes
        .iter()
        .filter_map(|item| match item {
            Content::Subtree(node) if is_heading_tag(&node.tag) => Some(node),
            _ => None,
        })
        .collect()
}

/// Convert extracted heading nodes to flat headings, in order.
///
/// # Errors
///
/// Fails on the first node whose level cannot be read.
pub fn flatten_headings(nodes: &[&RenderNode]) -> Result<Vec<FlatHeading>> {
    nodes.iter().map(|node| FlatHeading::from_node(node)).collect()
}

/// Nest flat headings by level, returning the top-level headings.
#[must_use]
pub fn build_heading_tree(headings: &[FlatHeading]) -> Vec<HeadingNode> {
    // Candidate ancestors in document order, index 0 being the level-0 root. Never popped.
    let mut levels: Vec<usize> = vec![0];
    let mut parents: Vec<Option<usize>> = vec![None];

    for heading in headings {
        let parent = levels.iter().rposition(|&level| level < heading.level);
        levels.push(heading.level);
        parents.push(parent);
    }

    // Children are gathered back to front so each parent can take ownership of finished subtrees.
    let mut children: Vec<Vec<HeadingNode>> = vec![Vec::new(); levels.len()];
    for index in (1..levels.len()).rev() {
        let heading = &headings[index - 1];
        let mut node = HeadingNode::new(heading.level, heading.text.clone());
        node.children = std::mem::take(&mut children[index]);
        node.children.reverse();
        if let Some(parent) = parents[index] {
            children[parent].push(node);
        }
    }

    let mut roots = std::mem::take(&mut children[0]);
    roots.reverse();
    roots
}

/// Run the whole per-document pipeline: tokenize, build the render tree, pick out the headings
/// and nest them.
///
/// # Errors
///
/// Propagates tokenizer, token stream and heading tag failures.
pub fn outline_of(format: &dyn Format, source: &str) -> Result<Vec<HeadingNode>> {
    let tokens = format.tokenize(source)?;
    let tree = build_render_tree(&tokens)?;
    let flat = flatten_headings(&extract_headings(&tree))?;
    Ok(build_heading_tree(&flat))
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
