//! Highlighted token: `(offset, category, text)`.

use std::fmt;

use crate::Category;

/// A classified span of source text.
///
/// `text` borrows from the highlighted source, so producing tokens never
/// copies the document. `offset` is a byte offset into that same source.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub offset: u32,
    pub category: Category,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(offset: u32, category: Category, text: &'src str) -> Self {
        Token {
            offset,
            category,
            text,
        }
    }

    /// Byte offset one past the end of this token.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token text is a slice of a source whose length fits in u32"
    )]
    pub fn end(&self) -> u32 {
        self.offset + self.text.len() as u32
    }

    /// Same token moved `delta` bytes to the right.
    #[inline]
    #[must_use]
    pub const fn shifted(self, delta: u32) -> Self {
        Token {
            offset: self.offset + delta,
            category: self.category,
            text: self.text,
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.category, self.text, self.offset)
    }
}

#[cfg(target_pointer_width = "64")]
crate::static_assert_size!(Token<'static>, 24);

/// Concatenate the texts of `tokens` in order.
pub fn concat_text(tokens: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    for tok in tokens {
        out.push_str(tok.text);
    }
    out
}

/// Returns `true` when `tokens` tile `start..` without gaps or overlaps.
///
/// Empty tokens are allowed and do not advance the position.
pub fn is_contiguous(tokens: &[Token<'_>], start: u32) -> bool {
    let mut pos = start;
    for tok in tokens {
        if tok.offset != pos {
            return false;
        }
        pos = tok.end();
    }
    true
}
