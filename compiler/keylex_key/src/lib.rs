//! Highlighting lexer for the KeY specification language.
//!
//! KeY files (`.key`, `.proof`) are classified token by token through a
//! static table. One contextual rule applies: an integer literal followed
//! by `(` (ignoring whitespace and comments) is a function symbol, as in
//! `0(x)` from KeY's arithmetic rules, and is shown as a name.

mod table;
mod tag;

use keylex_ir::{Category, Token};
use logos::Logos;

pub use table::category_for;
pub use tag::KeyTag;

/// One raw KeY token, positioned in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawKeyToken<'a> {
    pub offset: u32,
    pub tag: KeyTag,
    pub text: &'a str,
}

/// Tokenize `source` without classification.
///
/// The tokens tile the source; unrecognised input becomes
/// [`KeyTag::ErrorChar`] tokens ending on char boundaries.
pub fn tokenize(source: &str) -> Vec<RawKeyToken<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = KeyTag::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let (tag, end) = match result {
            Ok(tag) => (tag, span.end),
            Err(()) => {
                let mut end = span.end;
                while !source.is_char_boundary(end) {
                    end += 1;
                }
                lexer.bump(end - span.end);
                (KeyTag::ErrorChar, end)
            }
        };

        #[allow(
            clippy::cast_possible_truncation,
            reason = "sources are limited to u32::MAX bytes"
        )]
        let offset = span.start as u32;
        tokens.push(RawKeyToken {
            offset,
            tag,
            text: &source[span.start..end],
        });
    }

    tokens
}

/// Whether the integer literal at `idx` is applied like a function.
fn is_called_integer(tokens: &[RawKeyToken<'_>], idx: usize) -> bool {
    tokens[idx + 1..]
        .iter()
        .find(|tok| !tok.tag.is_hidden())
        .is_some_and(|tok| tok.tag == KeyTag::LParen)
}

/// Highlight a KeY document.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn highlight(source: &str) -> Vec<Token<'_>> {
    let raw = tokenize(source);
    raw.iter()
        .enumerate()
        .map(|(idx, tok)| {
            let category = if tok.tag == KeyTag::IntLiteral && is_called_integer(&raw, idx) {
                Category::Name
            } else {
                category_for(tok.tag)
            };
            Token::new(tok.offset, category, tok.text)
        })
        .collect()
}

#[cfg(test)]
mod tests;
