//! Raw token tags produced by the host scanner.
//!
//! Tags are grouped into semantic ranges by discriminant so that range
//! checks (`is_literal`, `is_error`) stay cheap and the grouping is visible
//! in the declaration.

/// Kind of a raw host token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals: 0-15 ===
    /// Identifier or keyword (keywords are resolved by the integration layer).
    Ident = 0,
    Int = 1,
    Float = 2,
    HexInt = 3,
    BinInt = 4,
    /// `"..."`
    String = 5,
    /// `"""` text block `"""`
    TextBlock = 6,
    /// `'c'`
    Char = 7,

    // === Operators: 32-33 ===
    /// Any Java operator, scanned with maximal munch (`>>>=`, `->`, `+`).
    Operator = 32,
    /// `@`, which starts an annotation in Java.
    At = 33,

    // === Delimiters: 80-91 ===
    LeftParen = 80,
    RightParen = 81,
    LeftBrace = 82,
    RightBrace = 83,
    LeftBracket = 84,
    RightBracket = 85,
    Semicolon = 86,
    Comma = 87,
    Dot = 88,
    /// `...`
    Ellipsis = 89,
    /// `::`
    ColonColon = 90,

    // === Trivia: 112-115 ===
    /// Spaces, tabs, form feeds, lone `\r`.
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,
    /// `// ...` up to (not including) the line break.
    LineComment = 114,
    /// `/* ... */`, including doc comments.
    BlockComment = 115,

    // === Errors: 240-245 ===
    /// Byte that cannot start any token.
    InvalidByte = 240,
    UnterminatedString = 241,
    UnterminatedChar = 242,
    UnterminatedTextBlock = 243,
    /// `/*` without a closing `*/`; runs to EOF.
    UnterminatedBlockComment = 244,
    InteriorNull = 245,

    // === Control: 255 ===
    Eof = 255,
}

impl RawTag {
    /// Fixed spelling of the tag, if it has exactly one.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            RawTag::At => Some("@"),
            RawTag::LeftParen => Some("("),
            RawTag::RightParen => Some(")"),
            RawTag::LeftBrace => Some("{"),
            RawTag::RightBrace => Some("}"),
            RawTag::LeftBracket => Some("["),
            RawTag::RightBracket => Some("]"),
            RawTag::Semicolon => Some(";"),
            RawTag::Comma => Some(","),
            RawTag::Dot => Some("."),
            RawTag::Ellipsis => Some("..."),
            RawTag::ColonColon => Some("::"),
            _ => None,
        }
    }

    /// Line or block comment, terminated or not.
    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            RawTag::LineComment | RawTag::BlockComment | RawTag::UnterminatedBlockComment
        )
    }

    /// Whitespace, newline or comment.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self as u8, 112..=115) || matches!(self, RawTag::UnterminatedBlockComment)
    }

    /// Error tags (malformed or unterminated input).
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self as u8, 240..=254)
    }
}

/// A raw token: tag plus byte length.
///
/// The start offset is implicit: it is the sum of the lengths of all
/// previous tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
