//! Java highlighting with conditional JML annotation expansion.
//!
//! The host scanner (`keylex_lexer_core`) segments a Java document into
//! spans; comment spans that hold a JML annotation are re-tokenized with an
//! annotation lexer and reclassified by nesting position.
//!
//! ```text
//! host tokens ─┬─ non-comment ──────────────────────────────► output
//!              └─ comment ─► directive?  ─► ActiveKeys::replace
//!                            annotation? ─► ConditionalChecker::decide
//!                                            ├─ inactive ─────► output
//!                                            └─ active ─► tokenize ─► DepthTracker
//!                                                         ─► classify ─► output
//! ```
//!
//! # Conditional annotations
//!
//! `//+key@` and `/*-key@` annotations are only expanded when their key
//! expression holds under the active keys. Keys come from
//! [`ExpansionOptions::active_keys`] and from in-document directives of
//! the form `//-*- jml-keys: a, b -*-`.
//!
//! # Position-dependent keywords
//!
//! Clause keywords (`requires`, `ensures`, ...) and JML modifiers (`pure`,
//! `ghost`, ...) are keywords only at top level. Inside parentheses,
//! braces or brackets, and after a clause keyword until its terminating
//! `;`, the same words are highlighted as names.

mod annotation_lexer;
mod classify;
mod conditional;
mod depth;
mod directive;
mod expand;
mod highlight;
mod host;
mod java_keywords;
mod keys;
mod options;
mod sigil;

pub use annotation_lexer::{tokenize as tokenize_annotation, AnnotTag, RawAnnotationToken};
pub use classify::{classify, fixed_category, positional_category};
pub use conditional::{
    evaluate, key_expression, parse_markers, ConditionalChecker, KeyMarker, Polarity,
};
pub use depth::{track, DepthTracker};
pub use directive::parse_key_directive;
pub use expand::AnnotationExpander;
pub use highlight::Highlighter;
pub use host::{host_category, host_tokens};
pub use keys::ActiveKeys;
pub use options::{ArmPolicy, ExpansionOptions};
pub use sigil::is_annotation_comment;

/// Highlight `source` with a one-off [`Highlighter`].
pub fn highlight<'a>(source: &'a str, options: ExpansionOptions) -> Vec<keylex_ir::Token<'a>> {
    Highlighter::new(options).highlight(source)
}
