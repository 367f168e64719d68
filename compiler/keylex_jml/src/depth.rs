//! Nesting depth and top-level tracking for annotation tokens.
//!
//! A token is *top-level* when it sits outside every `()`, `{}` and `[]`
//! and the tracker is not waiting for the `;` that ends the current
//! clause. Both conditions are evaluated before the token itself updates
//! the state, so an opening delimiter is top-level and its closer is not.

use crate::annotation_lexer::{AnnotTag, RawAnnotationToken};
use crate::options::ArmPolicy;

/// Running nesting state for one annotation body.
#[derive(Clone, Debug, Default)]
pub struct DepthTracker {
    parens: u32,
    braces: u32,
    brackets: u32,
    awaiting_terminator: bool,
    policy: ArmPolicy,
}

impl DepthTracker {
    pub fn new(policy: ArmPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Feed one token; returns whether it is top-level.
    pub fn step(&mut self, tag: AnnotTag) -> bool {
        let level0 = self.is_level0();
        let top_level = level0 && !self.awaiting_terminator;

        if let Some(depth) = self.counter(tag) {
            if tag.is_opener() {
                *depth += 1;
            } else if tag.is_closer() {
                *depth = depth.saturating_sub(1);
            }
        }

        if top_level && self.arms(tag) {
            self.awaiting_terminator = true;
        }
        if tag == AnnotTag::Semi && self.is_level0() {
            self.awaiting_terminator = false;
        }

        top_level
    }

    /// Whether the tracker is inside a clause waiting for its `;`.
    pub fn is_awaiting_terminator(&self) -> bool {
        self.awaiting_terminator
    }

    /// `(parens, braces, brackets)`.
    pub fn depths(&self) -> (u32, u32, u32) {
        (self.parens, self.braces, self.brackets)
    }

    /// The counter a delimiter tag moves.
    fn counter(&mut self, tag: AnnotTag) -> Option<&mut u32> {
        match tag {
            AnnotTag::LParen | AnnotTag::RParen => Some(&mut self.parens),
            AnnotTag::LBrace | AnnotTag::RBrace => Some(&mut self.braces),
            AnnotTag::LBrack | AnnotTag::RBrack => Some(&mut self.brackets),
            _ => None,
        }
    }

    fn is_level0(&self) -> bool {
        self.parens == 0 && self.braces == 0 && self.brackets == 0
    }

    fn arms(&self, tag: AnnotTag) -> bool {
        match self.policy {
            ArmPolicy::Clauses => tag == AnnotTag::ClauseKeyword,
            ArmPolicy::ClausesAndModifiers => {
                matches!(tag, AnnotTag::ClauseKeyword | AnnotTag::JmlModifier)
            }
        }
    }
}

/// Pair every token of a body with its top-level flag.
pub fn track<'a>(
    tokens: &[RawAnnotationToken<'a>],
    policy: ArmPolicy,
) -> Vec<(RawAnnotationToken<'a>, bool)> {
    let mut tracker = DepthTracker::new(policy);
    tokens
        .iter()
        .map(|&token| (token, tracker.step(token.tag)))
        .collect()
}
