//! Category assignment for annotation tokens.
//!
//! Two tables, consulted in order:
//! 1. [`fixed_category`]: tags whose category never depends on position.
//! 2. [`positional_category`]: word families that read as keywords at
//!    top level and as names inside expressions.
//!
//! A tag missing from both falls back to [`Category::Error`].

use keylex_ir::Category;

use crate::annotation_lexer::AnnotTag;

/// Category of `tag` at a top-level (`top_level == true`) or nested position.
#[inline]
pub fn classify(tag: AnnotTag, top_level: bool) -> Category {
    fixed_category(tag)
        .or_else(|| positional_category(tag, top_level))
        .unwrap_or(Category::Error)
}

/// Position-independent table.
pub fn fixed_category(tag: AnnotTag) -> Option<Category> {
    let category = match tag {
        AnnotTag::Whitespace => Category::Whitespace,
        AnnotTag::Comment | AnnotTag::InformalDescription => Category::Comment,
        AnnotTag::CommentEnd => Category::CommentPreproc,

        AnnotTag::LParen
        | AnnotTag::RParen
        | AnnotTag::LBrace
        | AnnotTag::RBrace
        | AnnotTag::LBrack
        | AnnotTag::RBrack
        | AnnotTag::Semi
        | AnnotTag::Comma
        | AnnotTag::Dot => Category::Punctuation,

        AnnotTag::JavaModifier
        | AnnotTag::JavaKeyword
        | AnnotTag::SpecCaseKeyword
        | AnnotTag::BackslashKeyword => Category::Keyword,

        AnnotTag::Identifier => Category::Name,
        AnnotTag::NumLiteral => Category::Number,
        AnnotTag::StringLiteral => Category::String,
        AnnotTag::CharLiteral => Category::StringChar,

        AnnotTag::Assign
        | AnnotTag::Gt
        | AnnotTag::Lt
        | AnnotTag::Bang
        | AnnotTag::Tilde
        | AnnotTag::Question
        | AnnotTag::Colon
        | AnnotTag::Equal
        | AnnotTag::Le
        | AnnotTag::Ge
        | AnnotTag::NotEqual
        | AnnotTag::And
        | AnnotTag::Or
        | AnnotTag::Inc
        | AnnotTag::Dec
        | AnnotTag::Add
        | AnnotTag::Sub
        | AnnotTag::Mul
        | AnnotTag::Div
        | AnnotTag::BitAnd
        | AnnotTag::BitOr
        | AnnotTag::Caret
        | AnnotTag::Mod
        | AnnotTag::Shl
        | AnnotTag::Shr
        | AnnotTag::UShr
        | AnnotTag::AddAssign
        | AnnotTag::SubAssign
        | AnnotTag::MulAssign
        | AnnotTag::DivAssign
        | AnnotTag::AndAssign
        | AnnotTag::OrAssign
        | AnnotTag::XorAssign
        | AnnotTag::ModAssign
        | AnnotTag::ShlAssign
        | AnnotTag::ShrAssign
        | AnnotTag::UShrAssign
        | AnnotTag::Arrow
        | AnnotTag::ColonColon
        | AnnotTag::DotDot
        | AnnotTag::Equivalence
        | AnnotTag::Antivalence
        | AnnotTag::Implies
        | AnnotTag::ImpliesBackward
        | AnnotTag::LocksetLeq
        | AnnotTag::LocksetLt
        | AnnotTag::Subtype
        | AnnotTag::At
        | AnnotTag::Ellipsis => Category::Operator,

        AnnotTag::ErrorChar => Category::Error,

        AnnotTag::JmlModifier | AnnotTag::ToplevelExprKeyword | AnnotTag::ClauseKeyword => {
            return None;
        }
    };
    Some(category)
}

/// Position-dependent table.
pub fn positional_category(tag: AnnotTag, top_level: bool) -> Option<Category> {
    match (tag, top_level) {
        (AnnotTag::JmlModifier | AnnotTag::ClauseKeyword, true) => Some(Category::Keyword),
        (AnnotTag::JmlModifier | AnnotTag::ClauseKeyword, false) => Some(Category::Name),
        (AnnotTag::ToplevelExprKeyword, _) => Some(Category::Keyword),
        _ => None,
    }
}
