use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

// === EOF Detection ===

#[test]
fn is_eof_at_sentinel() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Scanning helpers ===

#[test]
fn eat_while_stops_at_predicate_false() {
    let buf = SourceBuffer::new("abc123");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let buf = SourceBuffer::new("// note\nint");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_stops_before_carriage_return() {
    let buf = SourceBuffer::new("// note\r\nint");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\r');
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let buf = SourceBuffer::new("// trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn block_comment_end_is_consumed() {
    let buf = SourceBuffer::new("/* a */ b");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.eat_through_block_comment_end());
    assert_eq!(cursor.pos(), 7);
}

#[test]
fn unterminated_block_comment_reaches_eof() {
    let buf = SourceBuffer::new("/*@ requires x;");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(!cursor.eat_through_block_comment_end());
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_quote_delim_finds_escape_first() {
    let buf = SourceBuffer::new(r#"ab\"c""#);
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'"'), b'\\');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_quote_delim_reports_eof() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'\''), 0);
    assert!(cursor.is_eof());
}

// === UTF-8 ===

#[test]
fn advance_char_skips_whole_code_point() {
    let buf = SourceBuffer::new("λx");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn utf8_widths() {
    use crate::Cursor;
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xCE), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
}
