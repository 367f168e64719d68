//! Display categories for highlighted tokens.
//!
//! Categories are fine-grained (a hex number and a decimal number are
//! distinct) but every category belongs to exactly one coarse
//! [`CategoryClass`], which is what presentation layers usually style.

use std::fmt;

/// Display category assigned to a token.
///
/// `repr(u8)` keeps tokens compact; discriminants carry no meaning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    /// Spaces, tabs and newlines.
    Whitespace,

    /// Reserved words and annotation keywords.
    Keyword,
    /// Identifiers and keyword spellings used as names.
    Name,
    Operator,
    Punctuation,

    /// Decimal integer literal.
    Number,
    /// Floating-point literal (`1.5`, `2e10`, `3f`).
    NumberFloat,
    /// Hexadecimal literal (`0xFF`).
    NumberHex,
    /// Binary literal (`0b1010`).
    NumberBin,
    /// String literal, including Java text blocks.
    String,
    /// Character literal.
    StringChar,
    /// Documentation string (`/** ... */` in KeY files).
    StringDoc,
    /// `true` / `false` in languages that give them their own token.
    Bool,

    /// Comment inside an annotation.
    Comment,
    /// Host `//` comment.
    CommentSingle,
    /// Host `/* ... */` comment.
    CommentMultiline,
    /// Annotation sigil prefix, comment end, and key directives.
    CommentPreproc,

    /// Unrecognised input. Highlighting degrades to this, never fails.
    Error,
}

/// Coarse grouping of [`Category`] values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CategoryClass {
    Whitespace,
    Keyword,
    Identifier,
    Operator,
    Punctuation,
    Literal,
    Comment,
    Preprocessor,
    Error,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 18] = [
        Category::Whitespace,
        Category::Keyword,
        Category::Name,
        Category::Operator,
        Category::Punctuation,
        Category::Number,
        Category::NumberFloat,
        Category::NumberHex,
        Category::NumberBin,
        Category::String,
        Category::StringChar,
        Category::StringDoc,
        Category::Bool,
        Category::Comment,
        Category::CommentSingle,
        Category::CommentMultiline,
        Category::CommentPreproc,
        Category::Error,
    ];

    /// The coarse class this category belongs to.
    pub const fn class(self) -> CategoryClass {
        match self {
            Category::Whitespace => CategoryClass::Whitespace,
            Category::Keyword => CategoryClass::Keyword,
            Category::Name => CategoryClass::Identifier,
            Category::Operator => CategoryClass::Operator,
            Category::Punctuation => CategoryClass::Punctuation,
            Category::Number
            | Category::NumberFloat
            | Category::NumberHex
            | Category::NumberBin
            | Category::String
            | Category::StringChar
            | Category::StringDoc
            | Category::Bool => CategoryClass::Literal,
            Category::Comment | Category::CommentSingle | Category::CommentMultiline => {
                CategoryClass::Comment
            }
            Category::CommentPreproc => CategoryClass::Preprocessor,
            Category::Error => CategoryClass::Error,
        }
    }

    /// Host comment categories, the only ones the annotation engine expands.
    #[inline]
    pub const fn is_host_comment(self) -> bool {
        matches!(self, Category::CommentSingle | Category::CommentMultiline)
    }

    /// Short, stable name in the style of Pygments CSS classes.
    pub const fn short_name(self) -> &'static str {
        match self {
            Category::Whitespace => "w",
            Category::Keyword => "k",
            Category::Name => "n",
            Category::Operator => "o",
            Category::Punctuation => "p",
            Category::Number => "mi",
            Category::NumberFloat => "mf",
            Category::NumberHex => "mh",
            Category::NumberBin => "mb",
            Category::String => "s",
            Category::StringChar => "sc",
            Category::StringDoc => "sd",
            Category::Bool => "kc",
            Category::Comment => "c",
            Category::CommentSingle => "c1",
            Category::CommentMultiline => "cm",
            Category::CommentPreproc => "cp",
            Category::Error => "err",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
