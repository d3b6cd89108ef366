//! Rendering a heading tree as a nested list of links.

use crate::hash::escape_title;
use crate::heading::HeadingNode;
use std::fmt::Write;

/// Everything the renderer needs besides the tree itself.
pub struct OutlineContext<'a> {
    /// Link target for the document, already relative to the outline's location.
    pub target: String,
    /// Heading text to anchor transform.
    pub hash: &'a dyn Fn(&str) -> String,
    /// Escape link-breaking brackets in the visible heading text.
    pub escape_titles: bool,
    /// One level of list indentation.
    pub indent: String,
}

/// Render `nodes` as list items indented `tab_level` times, each followed by its children one
/// level deeper.
///
/// Every item is a single line: `{indent}* [{text}]({target}#{anchor})`.
#[must_use]
pub fn render_outline(nodes: &[HeadingNode], tab_level: usize, ctx: &OutlineContext<'_>) -> String {
    let mut out = String::new();
    render_into(&mut out, nodes, tab_level, ctx);
    out
}

fn render_into(out: &mut String, nodes: &[HeadingNode], tab_level: usize, ctx: &OutlineContext<'_>) {
    for node in nodes {
        let text = if ctx.escape_titles {
            escape_title(&node.text)
        } else {
            node.text.clone()
        };
        let _ = writeln!(
            out,
            "{}* [{text}]({}#{})",
            ctx.indent.repeat(tab_level),
            ctx.target,
            (ctx.hash)(&node.text),
        );
        render_into(out, &node.children, tab_level + 1, ctx);
    }
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
