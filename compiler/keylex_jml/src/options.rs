//! Expansion configuration.

/// Which keywords make the tracker wait for a top-level `;`.
///
/// While waiting, nothing counts as top-level, so a keyword-like word in
/// the middle of a clause (`requires pure;`) is shown as a name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ArmPolicy {
    /// Only clause keywords (`requires`, `ensures`, `invariant`, ...) arm.
    #[default]
    Clauses,
    /// Clause keywords and JML modifiers (`pure`, `ghost`, ...) arm.
    ClausesAndModifiers,
}

/// Configuration for a [`Highlighter`](crate::Highlighter) or
/// [`AnnotationExpander`](crate::AnnotationExpander).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Keys active before the first key directive.
    pub active_keys: Vec<String>,
    pub arm_policy: ArmPolicy,
}

impl ExpansionOptions {
    #[must_use]
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_arm_policy(mut self, arm_policy: ArmPolicy) -> Self {
        self.arm_policy = arm_policy;
        self
    }
}
