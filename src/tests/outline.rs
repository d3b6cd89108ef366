use super::{render_outline, OutlineContext};
use crate::hash::github_hash;
use crate::heading::HeadingNode;

fn sample_tree() -> Vec<HeadingNode> {
    vec![
        HeadingNode {
            text: "Getting Started".to_string(),
            level: 1,
            children: vec![
                HeadingNode::new(3, "Install (macOS)"),
                HeadingNode::new(2, "Usage"),
            ],
        },
        HeadingNode::new(1, "FAQ"),
    ]
}

fn ctx(hash: &dyn Fn(&str) -> String) -> OutlineContext<'_> {
    OutlineContext {
        target: "docs/guide.md".to_string(),
        hash,
        escape_titles: false,
        indent: "\t".to_string(),
    }
}

#[test]
fn test_render_nested_links() {
    let hash = |text: &str| github_hash(text);

    let out = render_outline(&sample_tree(), 0, &ctx(&hash));

    assert_eq!(
        out,
        "* [Getting Started](docs/guide.md#getting-started)\n\
         \t* [Install (macOS)](docs/guide.md#install-macos)\n\
         \t* [Usage](docs/guide.md#usage)\n\
         * [FAQ](docs/guide.md#faq)\n"
    );
}

#[test]
fn test_render_starts_at_tab_level() {
    let hash = |text: &str| text.to_string();
    let tree = vec![HeadingNode::new(2, "Leaf")];

    let out = render_outline(&tree, 2, &ctx(&hash));

    assert_eq!(out, "\t\t* [Leaf](docs/guide.md#Leaf)\n");
}

#[test]
fn test_render_is_idempotent() {
    let hash = |text: &str| github_hash(text);
    let context = ctx(&hash);
    let tree = sample_tree();

    assert_eq!(render_outline(&tree, 0, &context), render_outline(&tree, 0, &context));
}

#[test]
fn test_render_empty_tree() {
    let hash = |text: &str| github_hash(text);
    assert_eq!(render_outline(&[], 0, &ctx(&hash)), "");
}

#[test]
fn test_escape_titles_only_affects_link_text() {
    let hash = |text: &str| github_hash(text);
    let context = OutlineContext {
        escape_titles: true,
        indent: "  ".to_string(),
        ..ctx(&hash)
    };
    let tree = vec![HeadingNode::new(1, "run(args)")];

    assert_eq!(
        render_outline(&tree, 1, &context),
        "  * [run\\(args\\)](docs/guide.md#runargs)\n"
    );
}
