//! Dense tag → category table.
//!
//! Built once from four groups (special tags with their own category,
//! operators, punctuation, keywords). A tag in no group maps to
//! [`Category::Error`].

use std::sync::OnceLock;

use keylex_ir::Category;

use crate::tag::KeyTag;

const SPECIAL: &[(KeyTag, Category)] = &[
    (KeyTag::Whitespace, Category::Whitespace),
    (KeyTag::LineComment, Category::CommentSingle),
    (KeyTag::BlockComment, Category::CommentMultiline),
    (KeyTag::DocComment, Category::StringDoc),
    (KeyTag::IntLiteral, Category::Number),
    (KeyTag::HexLiteral, Category::NumberHex),
    (KeyTag::BinLiteral, Category::NumberBin),
    (KeyTag::FloatLiteral, Category::NumberFloat),
    (KeyTag::DoubleLiteral, Category::NumberFloat),
    (KeyTag::RealLiteral, Category::NumberFloat),
    (KeyTag::CharLiteral, Category::StringChar),
    (KeyTag::StringLiteral, Category::String),
    (KeyTag::True, Category::Bool),
    (KeyTag::False, Category::Bool),
    (KeyTag::Ident, Category::Name),
    (KeyTag::ErrorChar, Category::Error),
];

const OPERATORS: &[KeyTag] = &[
    KeyTag::Less,
    KeyTag::LessEqual,
    KeyTag::LeftGuillemets,
    KeyTag::Eqv,
    KeyTag::Primes,
    KeyTag::Exp,
    KeyTag::Tilde,
    KeyTag::Percent,
    KeyTag::Star,
    KeyTag::Minus,
    KeyTag::Plus,
    KeyTag::Greater,
    KeyTag::GreaterEqual,
    KeyTag::Slash,
    KeyTag::Assign,
    KeyTag::At,
    KeyTag::Parallel,
    KeyTag::Or,
    KeyTag::And,
    KeyTag::Not,
    KeyTag::Imp,
    KeyTag::Equals,
    KeyTag::NotEquals,
    KeyTag::SeqArrow,
    KeyTag::DotRange,
];

const PUNCTUATION: &[KeyTag] = &[
    KeyTag::Comma,
    KeyTag::LParen,
    KeyTag::RParen,
    KeyTag::LBrace,
    KeyTag::RBrace,
    KeyTag::LBracket,
    KeyTag::RBracket,
    KeyTag::Semi,
    KeyTag::Colon,
    KeyTag::DoubleColon,
    KeyTag::EmptyBrackets,
    KeyTag::RightGuillemets,
    KeyTag::Dot,
];

const KEYWORDS: &[KeyTag] = &[KeyTag::Keyword, KeyTag::Modality, KeyTag::SetSymbol];

type Table = [Option<Category>; KeyTag::COUNT];

fn build() -> Table {
    let mut table: Table = [None; KeyTag::COUNT];
    for &(tag, category) in SPECIAL {
        table[tag as usize] = Some(category);
    }
    let groups: [(&[KeyTag], Category); 3] = [
        (OPERATORS, Category::Operator),
        (PUNCTUATION, Category::Punctuation),
        (KEYWORDS, Category::Keyword),
    ];
    for (tags, category) in groups {
        for &tag in tags {
            table[tag as usize] = Some(category);
        }
    }
    table
}

fn table() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    TABLE.get_or_init(build)
}

/// Display category of `tag`.
#[inline]
pub fn category_for(tag: KeyTag) -> Category {
    table()[tag as usize].unwrap_or(Category::Error)
}
