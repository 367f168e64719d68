//! Host token stream for Java documents.
//!
//! Runs the raw scanner and assigns each span a display category. Comments
//! keep their host categories here; expanding annotations is the
//! highlighter's job.

use keylex_ir::{Category, Token};
use keylex_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::java_keywords;

/// Scan `source` into categorized host tokens.
///
/// The tokens tile the source. Sources must be shorter than `u32::MAX`
/// bytes.
pub fn host_tokens(source: &str) -> Vec<Token<'_>> {
    let buf = SourceBuffer::new(source);
    let mut tokens = Vec::with_capacity(source.len() / 4);
    let mut offset = 0u32;

    for raw in RawScanner::new(buf.cursor()) {
        let end = offset + raw.len;
        let text = &source[offset as usize..end as usize];
        tokens.push(Token::new(offset, host_category(raw.tag, text), text));
        offset = end;
    }

    tokens
}

/// Display category of a raw host token.
pub fn host_category(tag: RawTag, text: &str) -> Category {
    match tag {
        RawTag::Ident if java_keywords::is_keyword(text) => Category::Keyword,
        RawTag::Ident => Category::Name,
        RawTag::Int => Category::Number,
        RawTag::Float => Category::NumberFloat,
        RawTag::HexInt => Category::NumberHex,
        RawTag::BinInt => Category::NumberBin,
        RawTag::String | RawTag::TextBlock => Category::String,
        RawTag::Char => Category::StringChar,

        RawTag::Operator | RawTag::At => Category::Operator,

        RawTag::LeftParen
        | RawTag::RightParen
        | RawTag::LeftBrace
        | RawTag::RightBrace
        | RawTag::LeftBracket
        | RawTag::RightBracket
        | RawTag::Semicolon
        | RawTag::Comma
        | RawTag::Dot
        | RawTag::Ellipsis
        | RawTag::ColonColon => Category::Punctuation,

        RawTag::Whitespace | RawTag::Newline => Category::Whitespace,
        RawTag::LineComment => Category::CommentSingle,
        RawTag::BlockComment | RawTag::UnterminatedBlockComment => Category::CommentMultiline,

        RawTag::InvalidByte
        | RawTag::UnterminatedString
        | RawTag::UnterminatedChar
        | RawTag::UnterminatedTextBlock
        | RawTag::InteriorNull
        | RawTag::Eof => Category::Error,
    }
}
