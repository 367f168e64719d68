use super::*;
use keylex_ir::{concat_text, is_contiguous};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn summary(source: &str) -> Vec<(Category, &str)> {
    highlight(source)
        .into_iter()
        .filter(|t| t.category != Category::Whitespace)
        .map(|t| (t.category, t.text))
        .collect()
}

#[test]
fn empty_source() {
    assert!(highlight("").is_empty());
}

#[test]
fn integer_before_paren_is_a_name() {
    assert_eq!(
        summary("0(x) + 1"),
        vec![
            (Category::Name, "0"),
            (Category::Punctuation, "("),
            (Category::Name, "x"),
            (Category::Punctuation, ")"),
            (Category::Operator, "+"),
            (Category::Number, "1"),
        ]
    );
}

#[test]
fn lookahead_skips_whitespace_and_comments() {
    let tokens = highlight("7 /* c */ // d\n (y)");
    assert_eq!(tokens[0], Token::new(0, Category::Name, "7"));
}

#[test]
fn lookahead_stops_at_first_visible_token() {
    assert_eq!(summary("3 + (y)")[0], (Category::Number, "3"));
    assert_eq!(summary("3")[0], (Category::Number, "3"));
}

#[test]
fn only_plain_integers_are_reclassified() {
    assert_eq!(summary("0x1F(x)")[0], (Category::NumberHex, "0x1F"));
    assert_eq!(summary("1.5(x)")[0], (Category::NumberFloat, "1.5"));
}

#[test]
fn rule_file_snippet() {
    let source = "\\rules {\n  addZero { \\find(i + 0) \\replacewith(i) };\n}";
    let out = summary(source);
    assert_eq!(out[0], (Category::Keyword, "\\rules"));
    assert!(out.contains(&(Category::Keyword, "\\replacewith")));
    assert!(out.contains(&(Category::Name, "addZero")));
    assert!(out.contains(&(Category::Number, "0")));
}

#[test]
fn errors_are_tokens() {
    let out = summary("x ? y");
    assert_eq!(out[1], (Category::Error, "?"));
}

#[test]
fn tokens_tile_the_source() {
    let source = "\\problem { \\<{ int i = 0; }\\> i = 0 } λ \"s\" 'c' ∪";
    let tokens = highlight(source);
    assert!(is_contiguous(&tokens, 0));
    assert_eq!(concat_text(&tokens), source);
}

proptest! {
    #[test]
    fn highlight_tiles_any_document(source in "\\PC{0,96}") {
        let tokens = highlight(&source);
        prop_assert!(is_contiguous(&tokens, 0));
        prop_assert_eq!(concat_text(&tokens), source.clone());
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
    }
}
