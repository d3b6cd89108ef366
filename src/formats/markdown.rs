//! Markdown format implementation using tree-sitter-md.
//!
//! The block grammar groups content into `section` nodes that nest by heading level. Those are
//! flattened away here: the token stream mirrors a plain markdown tokenizer, where every heading
//! is a sibling of the paragraphs around it. Inline markup is not parsed; each leaf block carries
//! its raw inline text.

use crate::error::{OutlineError, Result};
use crate::formats::Format;
use crate::token::Token;
use tree_sitter::{Node, Parser};

/// Tokenizer for ATX (`#`) and setext (underlined) markdown.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language())
            .map_err(|e| OutlineError::Parse(e.to_string()))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| OutlineError::Parse("parser produced no tree".to_string()))?;

        let mut tokens = Vec::new();
        emit_children(tree.root_node(), source.as_bytes(), &mut tokens);
        Ok(tokens)
    }
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn emit_children(node: Node<'_>, src: &[u8], out: &mut Vec<Token>) {
    for child in named_children(node) {
        emit(child, src, out);
    }
}

fn emit(node: Node<'_>, src: &[u8], out: &mut Vec<Token>) {
    match node.kind() {
        "atx_heading" => {
            let Some(level) = named_children(node)
                .into_iter()
                .find_map(|child| atx_level(child.kind()))
            else {
                return;
            };
            let text = node
                .child_by_field_name("heading_content")
                .or_else(|| {
                    named_children(node)
                        .into_iter()
                        .find(|c| c.kind() == "inline")
                })
                .map(|inline| strip_closing_sequence(node_text(inline, src)))
                .unwrap_or_default();
            emit_heading(level, &text, out);
        }
        "setext_heading" => {
            let children = named_children(node);
            let level = if children.iter().any(|c| c.kind() == "setext_h1_underline") {
                1
            } else {
                2
            };
            let text = children
                .iter()
                .find(|c| c.kind() == "paragraph")
                .map(|paragraph| join_lines(inline_text(*paragraph, src)))
                .unwrap_or_default();
            emit_heading(level, &text, out);
        }
        "paragraph" => {
            out.push(Token::open("p"));
            out.push(Token::inline(inline_text(node, src).trim()));
            out.push(Token::close("p"));
        }
        "block_quote" => {
            out.push(Token::open("blockquote"));
            emit_children(node, src, out);
            out.push(Token::close("blockquote"));
        }
        "list" => {
            let tag = if is_ordered(node) { "ol" } else { "ul" };
            out.push(Token::open(tag));
            emit_children(node, src, out);
            out.push(Token::close(tag));
        }
        "list_item" => {
            out.push(Token::open("li"));
            emit_children(node, src, out);
            out.push(Token::close("li"));
        }
        "fenced_code_block" => {
            let code = named_children(node)
                .into_iter()
                .find(|c| c.kind() == "code_fence_content")
                .map(|c| node_text(c, src).to_string())
                .unwrap_or_default();
            out.push(Token::leaf("code", code));
        }
        "indented_code_block" => out.push(Token::leaf("code", node_text(node, src))),
        "html_block" => out.push(Token::leaf("html_block", node_text(node, src))),
        "thematic_break" => out.push(Token::with_children("hr", Vec::new())),
        "pipe_table" => out.push(Token::leaf("table", node_text(node, src))),
        // Markers, continuations and link definitions carry no outline content.
        kind if kind.ends_with("_marker")
            || kind == "block_continuation"
            || kind == "link_reference_definition" => {}
        // `document`, `section` and anything else structural is walked through.
        _ => emit_children(node, src, out),
    }
}

fn emit_heading(level: usize, text: &str, out: &mut Vec<Token>) {
    let tag = format!("h{level}");
    out.push(Token::open(tag.clone()));
    out.push(Token::inline(text));
    out.push(Token::close(tag));
}

fn atx_level(kind: &str) -> Option<usize> {
    kind.strip_prefix("atx_h")?
        .strip_suffix("_marker")?
        .parse()
        .ok()
}

fn is_ordered(list: Node<'_>) -> bool {
    named_children(list)
        .first()
        .and_then(|item| named_children(*item).into_iter().next())
        .is_some_and(|marker| {
            matches!(
                marker.kind(),
                "list_marker_dot" | "list_marker_parenthesis"
            )
        })
}

fn node_text<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or_default()
}

/// Text of the first `inline` node below `node`, or of `node` itself if it has none.
fn inline_text<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
    named_children(node)
        .into_iter()
        .find(|c| c.kind() == "inline")
        .map_or_else(|| node_text(node, src), |inline| node_text(inline, src))
}

/// Drop an optional closing `#` run, which only counts when preceded by whitespace.
fn strip_closing_sequence(text: &str) -> String {
    let trimmed = text.trim();
    let without = trimmed.trim_end_matches('#');
    if without.is_empty() {
        String::new()
    } else if without.len() == trimmed.len() || !without.ends_with(char::is_whitespace) {
        trimmed.to_string()
    } else {
        without.trim_end().to_string()
    }
}

fn join_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
