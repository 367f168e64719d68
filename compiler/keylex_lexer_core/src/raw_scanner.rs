//! Hand-written raw scanner producing `(RawTag, len)` pairs for Java text.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values without heap allocation. It does not resolve
//! keywords and does not look inside comments; annotation comments are
//! returned as single spans for the integration layer to expand.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner for Java host documents.
///
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`,
/// so scanning always makes progress and always covers the whole input.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' | 0x80..=0xFF => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string_or_text_block(start),
            b'\'' => self.char_literal(start),
            b'/' => self.slash_or_comment(start),
            b'.' => self.dot(start),
            b':' => self.colon(start),
            b'=' | b'>' | b'<' | b'!' | b'~' | b'?' | b'&' | b'|' | b'+' | b'-' | b'*'
            | b'^' | b'%' => self.operator(start),
            b'@' => self.single(start, RawTag::At),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b';' => self.single(start, RawTag::Semicolon),
            b',' => self.single(start, RawTag::Comma),
            // Control characters, DEL, and ASCII punctuation Java never uses.
            1..=8 | 11 | 14..=31 | 127 | b'#' | b'\\' | b'`' => self.invalid_byte(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ──────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            let start = self.cursor.pos();
            self.cursor.advance();
            self.token(start, RawTag::InteriorNull)
        }
    }

    // ─── Whitespace & Newlines ────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
            self.token(start, RawTag::Newline)
        } else {
            self.token(start, RawTag::Whitespace)
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Newline)
    }

    // ─── Comments ─────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                self.token(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance(); // consume '*'
                if self.cursor.eat_through_block_comment_end() {
                    self.token(start, RawTag::BlockComment)
                } else {
                    self.token(start, RawTag::UnterminatedBlockComment)
                }
            }
            b'=' => {
                self.cursor.advance();
                self.token(start, RawTag::Operator)
            }
            _ => self.token(start, RawTag::Operator),
        }
    }

    // ─── Identifiers ──────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::Ident)
    }

    // ─── Operators ────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// Java operators with maximal munch.
    fn operator(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();
        match first {
            // >  >=  >>  >>=  >>>  >>>=
            b'>' => {
                if self.cursor.current() == b'>' {
                    self.cursor.advance();
                    if self.cursor.current() == b'>' {
                        self.cursor.advance();
                    }
                }
                self.eat_assign_suffix();
            }
            // <  <=  <<  <<=
            b'<' => {
                if self.cursor.current() == b'<' {
                    self.cursor.advance();
                }
                self.eat_assign_suffix();
            }
            // ++ --  && ||  and their compound assignments; ->
            b'+' | b'-' | b'&' | b'|' => {
                let next = self.cursor.current();
                if next == first || next == b'=' || (first == b'-' && next == b'>') {
                    self.cursor.advance();
                }
            }
            b'=' | b'!' | b'*' | b'^' | b'%' => self.eat_assign_suffix(),
            _ => {}
        }
        self.token(start, RawTag::Operator)
    }

    fn eat_assign_suffix(&mut self) {
        if self.cursor.current() == b'=' {
            self.cursor.advance();
        }
    }

    fn colon(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume ':'
        if self.cursor.current() == b':' {
            self.cursor.advance();
            self.token(start, RawTag::ColonColon)
        } else {
            self.token(start, RawTag::Operator)
        }
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.eat_decimal_digits();
            self.eat_exponent();
            return self.float_suffix(start);
        }
        self.cursor.advance(); // consume '.'
        if self.cursor.current() == b'.' && self.cursor.peek() == b'.' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::Ellipsis);
        }
        self.token(start, RawTag::Dot)
    }

    // ─── Numeric Literals ─────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' && matches!(self.cursor.current(), b'x' | b'X') {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
            self.eat_long_suffix();
            return self.token(start, RawTag::HexInt);
        }

        if first == b'0'
            && matches!(self.cursor.current(), b'b' | b'B')
            && matches!(self.cursor.peek(), b'0' | b'1')
        {
            self.cursor.advance();
            self.cursor.eat_while(|b| b == b'0' || b == b'1' || b == b'_');
            self.eat_long_suffix();
            return self.token(start, RawTag::BinInt);
        }

        self.eat_decimal_digits();

        // `1.5`, `1.`, `1.e3` are floats; `1..2` is not Java but stays `Int Dot Dot Int`.
        if self.cursor.current() == b'.' && self.cursor.peek() != b'.' {
            let after = self.cursor.peek();
            if after.is_ascii_digit() || !is_ident_continue(after) || matches!(after, b'e' | b'E')
            {
                self.cursor.advance(); // consume '.'
                self.eat_decimal_digits();
                self.eat_exponent();
                return self.float_suffix(start);
            }
        }

        if matches!(self.cursor.current(), b'e' | b'E') {
            self.eat_exponent();
            return self.float_suffix(start);
        }

        match self.cursor.current() {
            b'f' | b'F' | b'd' | b'D' => {
                self.cursor.advance();
                self.token(start, RawTag::Float)
            }
            _ => {
                self.eat_long_suffix();
                self.token(start, RawTag::Int)
            }
        }
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    fn eat_exponent(&mut self) {
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.eat_decimal_digits();
        }
    }

    fn eat_long_suffix(&mut self) {
        if matches!(self.cursor.current(), b'l' | b'L') {
            self.cursor.advance();
        }
    }

    fn float_suffix(&mut self, start: u32) -> RawToken {
        if matches!(self.cursor.current(), b'f' | b'F' | b'd' | b'D') {
            self.cursor.advance();
        }
        self.token(start, RawTag::Float)
    }

    // ─── String & Char Literals ───────────────────────────────────

    fn string_or_text_block(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
            return self.text_block(start);
        }
        self.cursor.advance(); // consume opening '"'
        self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString)
    }

    fn char_literal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '\''
        self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar)
    }

    /// Scan the rest of a single-line quoted literal.
    fn quoted(&mut self, start: u32, quote: u8, ok: RawTag, unterminated: RawTag) -> RawToken {
        loop {
            match self.cursor.skip_to_quote_delim(quote) {
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !matches!(self.cursor.current(), b'\n' | b'\r') && !self.cursor.is_eof() {
                        self.cursor.advance_char(); // skip escaped char
                    }
                }
                b'\n' | b'\r' => return self.token(start, unterminated),
                0 => {
                    if self.cursor.is_eof() {
                        return self.token(start, unterminated);
                    }
                    self.cursor.advance(); // interior null
                }
                _ => {
                    self.cursor.advance(); // consume closing quote
                    return self.token(start, ok);
                }
            }
        }
    }

    fn text_block(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(3); // consume opening '"""'
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => {
                    return self.token(start, RawTag::UnterminatedTextBlock);
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                b'"' if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' => {
                    self.cursor.advance_n(3);
                    return self.token(start, RawTag::TextBlock);
                }
                _ => self.cursor.advance_char(),
            }
        }
    }

    // ─── Error tokens ─────────────────────────────────────────────

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::InvalidByte)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for Java identifier continuation bytes.
///
/// `true` for a-z, A-Z, 0-9, `_`, `$` and every non-ASCII byte, so
/// multi-byte identifier characters are consumed whole. The sentinel byte
/// (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$' | 0x80..=0xFF
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`.
/// For streaming access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
mod tests;
