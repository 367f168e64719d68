//! Expansion of one annotation comment into annotation tokens.

use keylex_ir::{Category, Token};

use crate::annotation_lexer::tokenize;
use crate::classify::classify;
use crate::conditional::ConditionalChecker;
use crate::depth::track;
use crate::keys::ActiveKeys;
use crate::options::{ArmPolicy, ExpansionOptions};

/// Turns host comment tokens into annotation tokens when they are active.
///
/// Owns the [`ConditionalChecker`] and therefore the active keys; a single
/// expander is meant to serve one document at a time.
#[derive(Clone, Debug, Default)]
pub struct AnnotationExpander {
    checker: ConditionalChecker,
    arm_policy: ArmPolicy,
}

impl AnnotationExpander {
    pub fn new(options: &ExpansionOptions) -> Self {
        Self {
            checker: ConditionalChecker::new(ActiveKeys::new(&options.active_keys)),
            arm_policy: options.arm_policy,
        }
    }

    pub fn checker(&self) -> &ConditionalChecker {
        &self.checker
    }

    pub fn checker_mut(&mut self) -> &mut ConditionalChecker {
        &mut self.checker
    }

    pub fn arm_policy(&self) -> ArmPolicy {
        self.arm_policy
    }

    /// Expand the comment `text` that starts at document offset `start`.
    ///
    /// An inactive comment comes back unchanged as a single token. An active
    /// one becomes a [`Category::CommentPreproc`] token covering the sigil,
    /// key expression and `@`, followed by the classified body tokens. The
    /// result always covers `text` exactly.
    pub fn expand<'a>(
        &mut self,
        start: u32,
        category: Category,
        text: &'a str,
    ) -> Vec<Token<'a>> {
        if !self.checker.decide(text) {
            return vec![Token::new(start, category, text)];
        }

        // `decide` only accepts comments that contain an `@`.
        let Some(sigil_end) = text.find('@').map(|at| at + 1) else {
            return vec![Token::new(start, category, text)];
        };
        let (sigil, body) = text.split_at(sigil_end);

        #[allow(
            clippy::cast_possible_truncation,
            reason = "sigil_end is inside a token whose offsets fit in u32"
        )]
        let body_start = start + sigil_end as u32;

        let raw = tokenize(body);
        let mut out = Vec::with_capacity(raw.len() + 1);
        out.push(Token::new(start, Category::CommentPreproc, sigil));
        out.extend(
            track(&raw, self.arm_policy)
                .into_iter()
                .map(|(tok, top_level)| {
                    Token::new(tok.start, classify(tok.tag, top_level), tok.text)
                        .shifted(body_start)
                }),
        );

        tracing::trace!(start, tokens = out.len(), "expanded annotation");
        out
    }
}
