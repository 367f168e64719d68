use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    tokenize(source)
}

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and return `(tag, text)` pairs.
fn scan_texts(source: &str) -> Vec<(RawTag, &str)> {
    let mut pos = 0usize;
    scan(source)
        .into_iter()
        .map(|t| {
            let end = pos + t.len as usize;
            let text = &source[pos..end];
            pos = end;
            (t.tag, text)
        })
        .collect()
}

// ─── Totality ──────────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "public class A { }",
        "int x = 0x1F + 0b101 - 1_000L * 2.5e-3f;",
        "//@ requires x > 0;\nvoid f() {}",
        "/*@ pure @*/ int g();",
        "String s = \"a\\\"b\"; char c = '\\n';",
        "String t = \"\"\"\n  block \"\" \n  \"\"\";",
        "  \t\n  \r\n  \r",
        "#`\\ \u{1}",
    ];
    for source in sources {
        let total: u32 = scan(source).iter().map(|t| t.len).sum();
        assert_eq!(total as usize, source.len(), "total token length mismatch for {source:?}");
    }
}

#[test]
fn every_token_has_positive_length() {
    for tok in scan("a+b //c\n/*d*/ 'e' \"f\" @g(...)") {
        assert!(tok.len > 0, "{tok:?}");
    }
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new("x");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Ident);
    for _ in 0..3 {
        let tok = scanner.next_token();
        assert_eq!(tok.tag, RawTag::Eof);
        assert_eq!(tok.len, 0);
    }
}

#[test]
fn all_256_bytes_produce_valid_token() {
    for b in 0u8..=127 {
        let source = String::from(char::from(b));
        let total: u32 = scan(&source).iter().map(|t| t.len).sum();
        assert_eq!(total as usize, source.len(), "byte {b:#04x}");
    }
}

// ─── Whitespace & comments ─────────────────────────────────────

#[test]
fn newline_crlf_normalized() {
    assert_eq!(scan_texts("\r\n"), vec![(RawTag::Newline, "\r\n")]);
}

#[test]
fn lone_cr_is_whitespace() {
    assert_eq!(scan_tags("\r"), vec![RawTag::Whitespace]);
}

#[test]
fn line_comment_does_not_consume_newline() {
    assert_eq!(
        scan_texts("//+esc@ ensures true;\nx"),
        vec![
            (RawTag::LineComment, "//+esc@ ensures true;"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn block_comment_is_one_span() {
    assert_eq!(
        scan_texts("/*@ requires a;\n  @ ensures b; @*/int"),
        vec![
            (RawTag::BlockComment, "/*@ requires a;\n  @ ensures b; @*/"),
            (RawTag::Ident, "int"),
        ]
    );
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    assert_eq!(
        scan_texts("x /*@ pure"),
        vec![
            (RawTag::Ident, "x"),
            (RawTag::Whitespace, " "),
            (RawTag::UnterminatedBlockComment, "/*@ pure"),
        ]
    );
}

#[test]
fn slash_forms() {
    assert_eq!(
        scan_texts("a/b/=c"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Operator, "/"),
            (RawTag::Ident, "b"),
            (RawTag::Operator, "/="),
            (RawTag::Ident, "c"),
        ]
    );
}

// ─── Identifiers ───────────────────────────────────────────────

#[test]
fn java_identifiers() {
    assert_eq!(
        scan_texts("$tmp _x λvalue x1"),
        vec![
            (RawTag::Ident, "$tmp"),
            (RawTag::Whitespace, " "),
            (RawTag::Ident, "_x"),
            (RawTag::Whitespace, " "),
            (RawTag::Ident, "λvalue"),
            (RawTag::Whitespace, " "),
            (RawTag::Ident, "x1"),
        ]
    );
}

// ─── Operators & delimiters ────────────────────────────────────

#[test]
fn operators_use_maximal_munch() {
    let ops: Vec<&str> = scan_texts(">>>= >>= >>> >> >= > <<= << <= < ++ -- && || -> += != == ! ~ ? : %= ^")
        .into_iter()
        .filter(|(tag, _)| *tag != RawTag::Whitespace)
        .map(|(tag, text)| {
            assert_eq!(tag, RawTag::Operator, "{text}");
            text
        })
        .collect();
    assert_eq!(
        ops,
        vec![
            ">>>=", ">>=", ">>>", ">>", ">=", ">", "<<=", "<<", "<=", "<", "++", "--", "&&",
            "||", "->", "+=", "!=", "==", "!", "~", "?", ":", "%=", "^"
        ]
    );
}

#[test]
fn delimiters() {
    assert_eq!(
        scan_tags("(){}[];,.@...::"),
        vec![
            RawTag::LeftParen,
            RawTag::RightParen,
            RawTag::LeftBrace,
            RawTag::RightBrace,
            RawTag::LeftBracket,
            RawTag::RightBracket,
            RawTag::Semicolon,
            RawTag::Comma,
            RawTag::Dot,
            RawTag::At,
            RawTag::Ellipsis,
            RawTag::ColonColon,
        ]
    );
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn numeric_literals() {
    assert_eq!(
        scan_texts("42 1_000L 0xFF 0b1010 3.14 .5 1e10 2f 7.0d"),
        vec![
            (RawTag::Int, "42"),
            (RawTag::Whitespace, " "),
            (RawTag::Int, "1_000L"),
            (RawTag::Whitespace, " "),
            (RawTag::HexInt, "0xFF"),
            (RawTag::Whitespace, " "),
            (RawTag::BinInt, "0b1010"),
            (RawTag::Whitespace, " "),
            (RawTag::Float, "3.14"),
            (RawTag::Whitespace, " "),
            (RawTag::Float, ".5"),
            (RawTag::Whitespace, " "),
            (RawTag::Float, "1e10"),
            (RawTag::Whitespace, " "),
            (RawTag::Float, "2f"),
            (RawTag::Whitespace, " "),
            (RawTag::Float, "7.0d"),
        ]
    );
}

#[test]
fn member_access_after_int_is_not_float() {
    assert_eq!(
        scan_tags("a[0].length"),
        vec![
            RawTag::Ident,
            RawTag::LeftBracket,
            RawTag::Int,
            RawTag::RightBracket,
            RawTag::Dot,
            RawTag::Ident,
        ]
    );
}

// ─── Strings & chars ───────────────────────────────────────────

#[test]
fn string_with_escaped_quote() {
    assert_eq!(scan_texts(r#""a\"b""#), vec![(RawTag::String, r#""a\"b""#)]);
}

#[test]
fn unterminated_string_stops_at_newline() {
    assert_eq!(
        scan_texts("\"abc\nx"),
        vec![
            (RawTag::UnterminatedString, "\"abc"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn comment_markers_inside_strings_are_not_comments() {
    assert_eq!(
        scan_tags(r#""//@ not a comment""#),
        vec![RawTag::String]
    );
}

#[test]
fn char_literals() {
    assert_eq!(
        scan_texts(r"'a' '\'' 'λ'"),
        vec![
            (RawTag::Char, "'a'"),
            (RawTag::Whitespace, " "),
            (RawTag::Char, r"'\''"),
            (RawTag::Whitespace, " "),
            (RawTag::Char, "'λ'"),
        ]
    );
}

#[test]
fn text_block_spans_lines() {
    let source = "\"\"\"\n  one \"two\"\n  \"\"\";";
    assert_eq!(
        scan_texts(source),
        vec![
            (RawTag::TextBlock, "\"\"\"\n  one \"two\"\n  \"\"\""),
            (RawTag::Semicolon, ";"),
        ]
    );
}

#[test]
fn unterminated_text_block_runs_to_eof() {
    assert_eq!(scan_tags("\"\"\"\nabc"), vec![RawTag::UnterminatedTextBlock]);
}

// ─── Errors ────────────────────────────────────────────────────

#[test]
fn invalid_bytes() {
    assert_eq!(
        scan_tags("#\\`"),
        vec![RawTag::InvalidByte, RawTag::InvalidByte, RawTag::InvalidByte]
    );
}

#[test]
fn interior_null_is_its_own_token() {
    assert_eq!(
        scan_tags("a\0b"),
        vec![RawTag::Ident, RawTag::InteriorNull, RawTag::Ident]
    );
}

// ─── Realistic ─────────────────────────────────────────────────

#[test]
fn realistic_method_with_annotation() {
    let source = "//@ ensures \\result > 0;\npublic int f() { return 1; }";
    let tags = scan_tags(source);
    assert_eq!(tags[0], RawTag::LineComment);
    assert_eq!(tags[1], RawTag::Newline);
    assert_eq!(tags.iter().filter(|t| **t == RawTag::Ident).count(), 4);
}

proptest! {
    #[test]
    fn scanning_is_total(source in "\\PC*") {
        let total: u32 = scan(&source).iter().map(|t| t.len).sum();
        prop_assert_eq!(total as usize, source.len());
    }

    #[test]
    fn token_boundaries_are_char_boundaries(source in "[a-z0-9 \"'/*@.;(){}λ\\n\\\\]{0,64}") {
        let mut pos = 0usize;
        for tok in scan(&source) {
            pos += tok.len as usize;
            prop_assert!(source.is_char_boundary(pos));
        }
    }
}
