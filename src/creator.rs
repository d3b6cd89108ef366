//! Assembling one outline document from a tree of markdown files.
//!
//! Documents are grouped by the folder they sit in (relative to the input root), each folder's
//! files are emitted in discovery order under a `## folder/file` header, and every heading links
//! back to its source relative to where the outline is written.

use crate::config::Config;
use crate::error::{OutlineError, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::hash::HashFormatter;
use crate::heading::{outline_of, HeadingNode};
use crate::input::{self, FileInfo};
use crate::outline::{render_outline, OutlineContext};
use std::borrow::Cow;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
/// Settings controlling how the outline document is written.
pub struct Options {
    /// Anchor style for heading links.
    pub hash_formatter: HashFormatter,
    /// Leave documents without headings out entirely.
    pub ignore_empty_files: bool,
    /// Backslash-escape brackets and parentheses in link text.
    pub escape_titles: bool,
    /// One level of list indentation.
    pub indent: String,
    /// File suffixes considered documents, for directory walks and single-file input alike.
    pub file_extensions: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hash_formatter: HashFormatter::GitHub,
            ignore_empty_files: true,
            escape_titles: false,
            indent: "\t".to_string(),
            file_extensions: vec![MarkdownFormat.file_extension().to_string()],
        }
    }
}

impl TryFrom<&Config> for Options {
    type Error = OutlineError;

    fn try_from(cfg: &Config) -> Result<Self> {
        Ok(Self {
            hash_formatter: cfg.hash_formatter.parse().map_err(OutlineError::Config)?,
            ignore_empty_files: cfg.ignore_empty_files,
            escape_titles: cfg.escape_titles,
            indent: cfg.indent.clone(),
            file_extensions: cfg.file_extensions.clone(),
        })
    }
}

/// Heading text to anchor transform supplied by the caller.
pub type HashFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Builds the outline document for an input file or directory.
pub struct OutlineCreator {
    input: PathBuf,
    output: PathBuf,
    options: Options,
    custom_hash: Option<HashFn>,
}

impl OutlineCreator {
    /// Prepare a run over `input`, writing to `output`.
    ///
    /// Both paths are made absolute. `.md` is appended to `output` unless it already names a
    /// markdown file.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(input: &Path, output: &Path, options: Options) -> Result<Self> {
        let input = input::resolve(input)?;
        let mut output = input::resolve(output)?;
        if output.extension().is_none_or(|ext| ext != "md") {
            let mut name = output.clone().into_os_string();
            name.push(".md");
            output = PathBuf::from(name);
        }
        Ok(Self {
            input,
            output,
            options,
            custom_hash: None,
        })
    }

    #[must_use]
    /// Use `hash` instead of the built-in anchor formatter.
    pub fn with_hash_fn(mut self, hash: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.custom_hash = Some(Box::new(hash));
        self
    }

    #[must_use]
    /// Where the outline will be written.
    pub fn output(&self) -> &Path {
        &self.output
    }

    fn output_folder(&self) -> &Path {
        self.output.parent().unwrap_or_else(|| Path::new(""))
    }

    fn input_folder(&self) -> &Path {
        if self.input.is_dir() {
            &self.input
        } else {
            self.input.parent().unwrap_or_else(|| Path::new(""))
        }
    }

    fn anchor(&self, text: &str) -> String {
        match &self.custom_hash {
            Some(hash) => hash(text),
            None => self.options.hash_formatter.apply(text),
        }
    }

    /// Source documents, excluding the output file itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be walked.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let files =
            input::find_documents(vec![self.input.clone()], &self.options.file_extensions)?;
        Ok(files.into_iter().filter(|f| *f != self.output).collect())
    }

    /// Group documents by folder, keeping folders and files in first-seen order.
    fn group_by_folder(&self, files: &[PathBuf]) -> Vec<(String, Vec<FileInfo>)> {
        let base = self.input_folder();
        let mut groups: Vec<(String, Vec<FileInfo>)> = Vec::new();
        for file in files {
            let info = input::describe(file, base);
            let folder = info.folder();
            match groups.iter_mut().find(|(name, _)| *name == folder) {
                Some((_, members)) => members.push(info),
                None => groups.push((folder, vec![info])),
            }
        }
        groups
    }

    fn file_outline(&self, info: &FileInfo, folder: &str, headings: &[HeadingNode]) -> String {
        let hash = |text: &str| self.anchor(text);
        let ctx = OutlineContext {
            target: input::relative_path(self.output_folder(), &info.path),
            hash: &hash,
            escape_titles: self.options.escape_titles,
            indent: self.options.indent.clone(),
        };
        let list = render_outline(headings, 0, &ctx);
        if list.is_empty() && self.options.ignore_empty_files {
            log::debug!("skipping {} (no headings)", info.path.display());
            return String::new();
        }

        let mut section = String::new();
        let prefix = if folder.is_empty() {
            String::new()
        } else {
            format!("{folder}/")
        };
        let _ = writeln!(section, "\n## {prefix}{}\n", info.file_name);
        section.push_str(&list);
        section
    }

    /// Build the full outline document.
    ///
    /// # Errors
    ///
    /// Returns an error if a document cannot be read, or if its outline cannot be built; the
    /// latter is reported as [`OutlineError::Document`] naming the file.
    pub fn create_doc_content(&self) -> Result<String> {
        let files = self.files()?;
        log::info!("found {} document(s) under {}", files.len(), self.input.display());

        let format = MarkdownFormat;
        let mut content = String::new();
        for (folder, members) in self.group_by_folder(&files) {
            let mut folder_content = String::new();
            for info in &members {
                let headings = read_outline(&format, &info.path)?;
                folder_content.push_str(&self.file_outline(info, &folder, &headings));
            }
            if !folder_content.is_empty() {
                content.push('\n');
                content.push_str(&folder_content);
            }
        }
        Ok(content)
    }

    /// Replace the output file with a freshly built outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the old output cannot be removed, the outline cannot be built, or
    /// the new output cannot be written.
    pub fn run(&self) -> Result<()> {
        if self.output.exists() {
            log::info!("removing {}", self.output.display());
            fs::remove_file(&self.output)?;
        }
        let content = self.create_doc_content()?;
        fs::write(&self.output, content)?;
        log::info!("wrote {}", self.output.display());
        Ok(())
    }
}

/// Outline one document. Invalid UTF-8 is replaced rather than rejected, so one badly encoded
/// file does not cost the outline of every other.
fn read_outline(format: &dyn Format, path: &Path) -> Result<Vec<HeadingNode>> {
    let bytes = fs::read(path).map_err(|e| OutlineError::from(e).in_document(path))?;
    let source = String::from_utf8_lossy(&bytes);
    if matches!(source, Cow::Owned(_)) {
        log::warn!("{} is not valid UTF-8, decoding lossily", path.display());
    }
    outline_of(format, &source).map_err(|e| {
        log::error!("failed to outline {}: {e}", path.display());
        e.in_document(path)
    })
}

#[cfg(test)]
#[path = "tests/creator.rs"]
mod tests;
