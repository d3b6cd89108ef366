//! Locating source documents and describing where they sit relative to each other.

use ignore::WalkBuilder;
use std::io;
use std::path::{Component, Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A source document's location split into the parts the outline headers use.
pub struct FileInfo {
    /// Full path to the document.
    pub path: PathBuf,
    /// Directory names between the input root and the document.
    pub dirs: Vec<String>,
    /// File name without its extension.
    pub file_name: String,
}

impl FileInfo {
    #[must_use]
    /// The folder this document is grouped under, `/`-joined; empty at the input root.
    pub fn folder(&self) -> String {
        self.dirs.join("/")
    }
}

/// Collect documents with a matching extension from a mix of file and directory paths.
///
/// Files named explicitly are kept if their extension matches. Directories are walked
/// recursively, including hidden folders such as `.github`, skipping git-ignored entries and
/// `.git` itself. The result is sorted per input path.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be walked.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_file() {
            if has_extension(&path, extensions) {
                documents.push(path);
            }
            continue;
        }
        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            ));
        }

        let mut found = Vec::new();
        let walker = WalkBuilder::new(&path)
            .hidden(false)
            .filter_entry(|entry| entry.file_name() != ".git")
            .build();
        for entry in walker {
            let entry = entry.map_err(io::Error::other)?;
            if entry.file_type().is_some_and(|t| t.is_file())
                && has_extension(entry.path(), extensions)
            {
                found.push(entry.into_path());
            }
        }
        found.sort();
        documents.extend(found);
    }

    Ok(documents)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.trim_start_matches('.') == ext))
}

#[must_use]
/// Split `path` into its folder components below `base` and its extension-less file name.
pub fn describe(path: &Path, base: &Path) -> FileInfo {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let dirs = parent
        .strip_prefix(base)
        .unwrap_or(parent)
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let file_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    FileInfo {
        path: path.to_path_buf(),
        dirs,
        file_name,
    }
}

#[must_use]
/// Path from directory `from` to `to`, `/`-separated so it can be used as a link target.
///
/// Both paths should be absolute (or both relative to the same directory).
pub fn relative_path(from: &Path, to: &Path) -> String {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();
    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for component in &from[common..] {
        if matches!(component, Component::Normal(_) | Component::ParentDir) {
            parts.push("..".to_string());
        }
    }
    for component in &to[common..] {
        if let Component::Normal(name) = component {
            parts.push(name.to_string_lossy().into_owned());
        }
    }
    parts.join("/")
}

/// Make `path` absolute against the current directory without touching the filesystem.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn resolve(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
