use super::{describe, find_documents, relative_path, resolve};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn tempdir() -> TempDir {
    tempfile::Builder::new().prefix("mdoutline").tempdir().unwrap()
}

fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "# x\n").unwrap();
    path
}

#[test]
fn test_find_documents_walks_and_filters() {
    let dir = tempdir();
    let a = touch(dir.path(), "a.md");
    let b = touch(dir.path(), "guide/b.md");
    touch(dir.path(), "guide/notes.txt");

    let docs = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();

    assert_eq!(docs, vec![a, b]);
}

#[test]
fn test_find_documents_includes_hidden_folders() {
    let dir = tempdir();
    let contributing = touch(dir.path(), ".github/CONTRIBUTING.md");
    let readme = touch(dir.path(), "README.md");
    touch(dir.path(), ".git/notes.md");

    let docs = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();

    assert_eq!(docs, vec![contributing, readme], ".git is skipped, .github is not");
}

#[test]
fn test_find_documents_explicit_files() {
    let dir = tempdir();
    let md = touch(dir.path(), "one.md");
    let txt = touch(dir.path(), "two.txt");

    let docs = find_documents(vec![md.clone(), txt], &[".md".to_string()]).unwrap();

    assert_eq!(docs, vec![md]);
}

#[test]
fn test_find_documents_missing_path() {
    let dir = tempdir();
    let missing = dir.path().join("nope");
    assert!(find_documents(vec![missing], &["md".to_string()]).is_err());
}

#[test]
fn test_describe_splits_folders() {
    let info = describe(Path::new("/docs/api/v1/auth.md"), Path::new("/docs"));
    assert_eq!(info.dirs, vec!["api".to_string(), "v1".to_string()]);
    assert_eq!(info.file_name, "auth");
    assert_eq!(info.folder(), "api/v1");

    let top = describe(Path::new("/docs/README.md"), Path::new("/docs"));
    assert!(top.dirs.is_empty());
    assert_eq!(top.folder(), "");
}

#[test]
fn test_relative_path() {
    assert_eq!(
        relative_path(Path::new("/docs"), Path::new("/docs/api/auth.md")),
        "api/auth.md"
    );
    assert_eq!(
        relative_path(Path::new("/out/toc"), Path::new("/docs/a.md")),
        "../../docs/a.md"
    );
    assert_eq!(
        relative_path(Path::new("/docs/api"), Path::new("/docs/README.md")),
        "../README.md"
    );
}

#[test]
fn test_resolve_normalises_dots() {
    let resolved = resolve(Path::new("some/./dir/../file.md")).unwrap();
    assert!(resolved.is_absolute());
    assert!(resolved.ends_with("some/file.md"));
}
