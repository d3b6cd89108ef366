//! Anchor hashes and link-text escaping.
//!
//! Renderers derive a heading's fragment identifier from its text. GitHub lowercases, turns
//! whitespace into hyphens and drops a handful of punctuation characters; other hosts may use
//! the text as-is.

use std::fmt;
use std::str::FromStr;

/// Characters GitHub drops when deriving an anchor.
const GITHUB_STRIPPED: &[char] = &['_', '(', ')', '.', '、', '*'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Built-in heading text to anchor transforms.
pub enum HashFormatter {
    #[default]
    /// GitHub-style slug: lowercase, whitespace to `-`, some punctuation removed.
    GitHub,
    /// The heading text unchanged.
    Identity,
}

impl HashFormatter {
    #[must_use]
    /// Derive the anchor for heading `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::GitHub => github_hash(text),
            Self::Identity => text.to_string(),
        }
    }
}

impl FromStr for HashFormatter {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "github" => Ok(Self::GitHub),
            "identity" | "none" => Ok(Self::Identity),
            other => Err(format!(
                "unknown hash formatter `{other}` (expected `github` or `identity`)"
            )),
        }
    }
}

impl fmt::Display for HashFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitHub => f.write_str("github"),
            Self::Identity => f.write_str("identity"),
        }
    }
}

#[must_use]
/// GitHub-style anchor for `text`.
pub fn github_hash(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !GITHUB_STRIPPED.contains(c))
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

#[must_use]
/// Backslash-escape `[`, `]`, `(` and `)` so heading text can sit inside link brackets.
///
/// Backslashes already in front of those characters are replaced rather than doubled.
pub fn escape_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_backslashes = 0;
    for c in text.chars() {
        match c {
            '\\' => pending_backslashes += 1,
            '[' | ']' | '(' | ')' => {
                pending_backslashes = 0;
                out.push('\\');
                out.push(c);
            }
            _ => {
                out.extend(std::iter::repeat_n('\\', pending_backslashes));
                pending_backslashes = 0;
                out.push(c);
            }
        }
    }
    out.extend(std::iter::repeat_n('\\', pending_backslashes));
    out
}

#[cfg(test)]
#[path = "tests/hash.rs"]
mod tests;
