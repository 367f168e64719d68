//! Token tags for KeY input.

use logos::Logos;

/// Kind of a KeY token.
///
/// Discriminants are dense and start at zero so a tag can index the
/// category table directly.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyTag {
    // Hidden trivia
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"//[^\n\r]*")]
    LineComment,
    #[token("/*", close_block_comment)]
    BlockComment,
    /// `/** ... */`; `/**/` is an empty block comment.
    #[regex(r"/\*\*[^/]", close_block_comment)]
    DocComment,

    // Literals
    #[regex(r"[0-9][0-9_]*[lL]?")]
    IntLiteral,
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*[lL]?")]
    HexLiteral,
    #[regex(r"0[bB][01][01_]*[lL]?")]
    BinLiteral,
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[fF]")]
    FloatLiteral,
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?[dD]?")]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?[dD]")]
    DoubleLiteral,
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[rR]")]
    RealLiteral,
    #[regex(r"'([^'\\\n\r]|\\.)'")]
    CharLiteral,
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    StringLiteral,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[regex(r"[a-zA-Z_$#][a-zA-Z0-9_$#]*")]
    Ident,

    /// `\sorts`, `\find`, `\forall`, `\endmodality`, ...
    #[regex(r"\\[a-zA-Z_][a-zA-Z0-9_]*")]
    Keyword,
    /// Whole modality with its program: `\<{ ... }\>` or `\[{ ... }\]`.
    #[regex(r"\\<([^\\]|\\[^>])*\\>")]
    #[regex(r"\\\[([^\\]|\\[^\]])*\\\]")]
    Modality,
    /// `∈ ≺ ∅ ∪ ∩ ⊆ ∖`
    #[token("∈")]
    #[token("≺")]
    #[token("∅")]
    #[token("∪")]
    #[token("∩")]
    #[token("⊆")]
    #[token("∖")]
    SetSymbol,

    // Operators
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token("«")]
    LeftGuillemets,
    #[token("<->")]
    Eqv,
    #[token("'")]
    Primes,
    #[token("^")]
    Exp,
    #[token("~")]
    Tilde,
    #[token("%")]
    Percent,
    #[token("*")]
    Star,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("/")]
    Slash,
    #[token(":=")]
    Assign,
    #[token("@")]
    At,
    #[token("||")]
    Parallel,
    #[token("|")]
    Or,
    #[token("&")]
    And,
    #[token("!")]
    Not,
    #[token("->")]
    Imp,
    #[token("=")]
    Equals,
    #[token("!=")]
    NotEquals,
    #[token("==>")]
    SeqArrow,
    #[token("..")]
    DotRange,

    // Punctuation
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token("[]")]
    EmptyBrackets,
    #[token("»")]
    RightGuillemets,
    #[token(".")]
    Dot,

    /// A character no other tag accepts.
    ErrorChar,
}

/// Extend a `/*` or `/**` match through the first `*/` after the opener.
fn close_block_comment(lex: &mut logos::Lexer<'_, KeyTag>) -> bool {
    let open_end = lex.span().start + 2;
    match lex.source()[open_end..].find("*/") {
        Some(pos) => {
            lex.bump(open_end + pos + 2 - lex.span().end);
            true
        }
        None => false,
    }
}

impl KeyTag {
    /// Number of tags; one past the largest discriminant.
    pub const COUNT: usize = KeyTag::ErrorChar as usize + 1;

    /// Trivia skipped by the integer-call lookahead.
    #[inline]
    pub const fn is_hidden(self) -> bool {
        matches!(
            self,
            KeyTag::Whitespace | KeyTag::LineComment | KeyTag::BlockComment | KeyTag::DocComment
        )
    }
}
