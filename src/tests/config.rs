use super::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_gives_defaults() {
    let cfg = Config::load_from(std::path::Path::new("/definitely/not/here/mdoutline.toml"));
    assert_eq!(cfg.hash_formatter, "github");
    assert!(cfg.ignore_empty_files);
    assert!(!cfg.escape_titles);
    assert_eq!(cfg.indent, "\t");
    assert_eq!(cfg.file_extensions, vec!["md".to_string()]);
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_unparseable_file_gives_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ignore_empty_files = \"sometimes\"\n[[[").unwrap();
    file.flush().unwrap();

    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "hash_formatter = \"identity\"\nescape_titles = true").unwrap();
    file.flush().unwrap();

    let cfg = Config::load_from(file.path());

    assert_eq!(cfg.hash_formatter, "identity");
    assert!(cfg.escape_titles);
    assert!(cfg.ignore_empty_files);
    assert_eq!(cfg.file_extensions, vec!["md".to_string()]);
}
