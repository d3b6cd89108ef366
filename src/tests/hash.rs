use super::{escape_title, github_hash, HashFormatter};

#[test]
fn test_github_hash() {
    assert_eq!(github_hash("Hello World (test)"), "hello-world-test");
    assert_eq!(github_hash("snake_case.rs"), "snakecasers");
    assert_eq!(github_hash("**Bold** item"), "bold-item");
    assert_eq!(github_hash("一、介绍"), "一介绍");
    assert_eq!(github_hash("Tabs\tand  spaces"), "tabs-and--spaces");
}

#[test]
fn test_identity_hash() {
    assert_eq!(
        HashFormatter::Identity.apply("Hello World (test)"),
        "Hello World (test)"
    );
}

#[test]
fn test_formatter_names() {
    assert_eq!("github".parse::<HashFormatter>(), Ok(HashFormatter::GitHub));
    assert_eq!("GitHub".parse::<HashFormatter>(), Ok(HashFormatter::GitHub));
    assert_eq!("identity".parse::<HashFormatter>(), Ok(HashFormatter::Identity));
    assert!("gitlab".parse::<HashFormatter>().is_err());
    assert_eq!(HashFormatter::default(), HashFormatter::GitHub);
    assert_eq!(HashFormatter::Identity.to_string(), "identity");
}

#[test]
fn test_escape_title() {
    assert_eq!(escape_title("fn(x) [beta]"), r"fn\(x\) \[beta\]");
    assert_eq!(escape_title(r"already \(escaped\)"), r"already \(escaped\)");
    assert_eq!(escape_title(r"double \\[x]"), r"double \[x\]");
    assert_eq!(escape_title(r"path\to"), r"path\to");
    assert_eq!(escape_title("trailing\\"), "trailing\\");
}
