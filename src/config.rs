//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an mdoutline.toml, and if present we load settings from there.
//! This provides the anchor style, link-text escaping, indentation and file extension
//! preferences. Command line flags override whatever is loaded here.

use facet::Facet;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "mdoutline.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from mdoutline.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "github".to_string())]
    /// Anchor style for heading links: `github` or `identity`.
    pub hash_formatter: String,
    #[facet(default = true)]
    /// Leave documents without headings out of the outline.
    pub ignore_empty_files: bool,
    #[facet(default = false)]
    /// Backslash-escape brackets and parentheses in link text.
    pub escape_titles: bool,
    #[facet(default = "\t".to_string())]
    /// One level of list indentation.
    pub indent: String,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Config {
    #[must_use]
    /// Load configuration from mdoutline.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                log::debug!("loaded configuration from {}", path.display());
                return config;
            }
            log::warn!("ignoring unparseable {}", path.display());
        }
        Self::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash_formatter: "github".to_string(),
            ignore_empty_files: true,
            escape_titles: false,
            indent: "\t".to_string(),
            file_extensions: vec!["md".to_string()],
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
