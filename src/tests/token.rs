use super::{tokens_from_json, Token, TokenKind};

#[test]
fn test_kind_from_type_suffix() {
    assert_eq!(TokenKind::from_type("heading_open"), TokenKind::Open);
    assert_eq!(TokenKind::from_type("bullet_list_close"), TokenKind::Close);
    assert_eq!(TokenKind::from_type("inline"), TokenKind::SelfClosing);
    assert_eq!(TokenKind::from_type("fence"), TokenKind::SelfClosing);
    // Only the suffix counts
    assert_eq!(TokenKind::from_type("open_thing"), TokenKind::SelfClosing);
}

#[test]
fn test_inline_carries_text_child() {
    let token = Token::inline("Hello");
    assert_eq!(token.kind, TokenKind::SelfClosing);
    assert_eq!(token.content.as_deref(), Some("Hello"));
    assert_eq!(token.children, vec![Token::leaf("", "Hello")]);
}

#[test]
fn test_tokens_from_markdown_it_json() {
    let json = r#"[
        {"type":"heading_open","tag":"h1","content":"","children":null},
        {"type":"inline","tag":"","content":"Intro","children":[{"type":"text","tag":"","content":"Intro","children":null}]},
        {"type":"heading_close","tag":"h1","content":"","children":null},
        {"type":"hr","tag":"hr","content":"","children":null}
    ]"#;

    let tokens = tokens_from_json(json).unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0], Token::open("h1"));
    assert_eq!(tokens[1].content.as_deref(), Some("Intro"));
    assert_eq!(tokens[1].children.len(), 1);
    assert_eq!(tokens[2], Token::close("h1"));
    // Empty content is treated as absent
    assert_eq!(tokens[3], Token::with_children("hr", Vec::new()));
}

#[test]
fn test_tokens_from_json_rejects_wrong_shape() {
    assert!(tokens_from_json(r#"{"type":"inline"}"#).is_err());
    assert!(tokens_from_json(r#"[{"tag":"p"}]"#).is_err(), "type is required");
}
