//! Low-level scanner for Java host documents.
//!
//! Segments a document into `(RawTag, len)` pairs. Nothing here knows about
//! display categories or annotations: comments come out as whole spans and
//! keywords come out as [`RawTag::Ident`]. The integration layer
//! (`keylex_jml`) resolves keywords and expands annotation comments.
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner → RawToken { tag, len }
//! ```
//!
//! The scanner is total: token lengths sum to the source length, and every
//! byte sequence (including invalid ones) produces tokens.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
