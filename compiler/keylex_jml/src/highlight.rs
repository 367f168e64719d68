//! Document-level highlighting with annotation expansion.

use keylex_ir::{Category, Token};

use crate::directive::parse_key_directive;
use crate::expand::AnnotationExpander;
use crate::host::host_tokens;
use crate::keys::ActiveKeys;
use crate::options::ExpansionOptions;
use crate::sigil::is_annotation_comment;

/// Highlights Java documents, expanding active JML annotations in place.
///
/// Key directives found in a document change the active keys for the rest
/// of that document and for every later document highlighted by the same
/// instance. Use [`Highlighter::reset`] or a fresh instance to start over.
#[derive(Clone, Debug)]
pub struct Highlighter {
    options: ExpansionOptions,
    expander: AnnotationExpander,
}

impl Highlighter {
    pub fn new(options: ExpansionOptions) -> Self {
        let expander = AnnotationExpander::new(&options);
        Self { options, expander }
    }

    /// Keys currently deciding conditional annotations.
    pub fn active_keys(&self) -> &ActiveKeys {
        self.expander.checker().keys()
    }

    /// Restore the keys the highlighter was constructed with.
    pub fn reset(&mut self) {
        self.expander = AnnotationExpander::new(&self.options);
    }

    /// Highlight a whole document.
    ///
    /// The returned tokens tile `source` in order. Comments are handled in
    /// document order: a key directive only affects comments after it.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn highlight<'a>(&mut self, source: &'a str) -> Vec<Token<'a>> {
        let host = host_tokens(source);
        let mut out = Vec::with_capacity(host.len());
        let mut expanded = 0usize;

        for token in host {
            if !token.category.is_host_comment() {
                out.push(token);
                continue;
            }

            if let Some(keys) = parse_key_directive(token.text) {
                tracing::debug!(offset = token.offset, ?keys, "key directive");
                self.expander.checker_mut().replace_keys(keys);
                out.push(Token::new(token.offset, Category::CommentPreproc, token.text));
            } else if is_annotation_comment(token.text) {
                let tokens = self.expander.expand(token.offset, token.category, token.text);
                if tokens.first().is_some_and(|t| t.category == Category::CommentPreproc) {
                    expanded += 1;
                }
                out.extend(tokens);
            } else {
                out.push(token);
            }
        }

        tracing::debug!(tokens = out.len(), expanded, "highlighted document");
        out
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(ExpansionOptions::default())
    }
}
