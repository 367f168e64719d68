//! Conditional key evaluation for annotation comments.
//!
//! An annotation comment may carry a key expression between its two-char
//! sigil and the `@` that opens the annotation body:
//!
//! ```text
//! //+key@ ...        active only when `key` is active
//! /*-esc@ ... */     inactive when `esc` is active
//! //+a+b-c@ ...      active when `a` or `b` is, unless `c` is
//! //+a/-b@ ...       markers may be separated by `/`
//! //@ ...            always active
//! ```
//!
//! Decisions are cached per key expression. The cache is only valid for
//! one registry state, so every registry replacement goes through
//! [`ConditionalChecker::replace_keys`], which also clears the cache.

use rustc_hash::FxHashMap;

use crate::keys::ActiveKeys;

/// Length of the comment sigil (`//` or `/*`).
const SIGIL_LEN: usize = 2;

/// Polarity of one key marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// One `+key` or `-key` marker of a key expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMarker<'a> {
    pub polarity: Polarity,
    /// Marker name without its sign. Empty for a bare `+` or `-`.
    pub key: &'a str,
}

/// Split a key expression into its markers.
///
/// Splits immediately before every `+` and `-`. A leading segment without
/// a sign is not a marker and is dropped. `/` separators and whitespace
/// around a key are not part of it.
pub fn parse_markers(keys: &str) -> Vec<KeyMarker<'_>> {
    let mut markers = Vec::new();
    let mut rest = keys;

    while let Some(pos) = rest.find(['+', '-']) {
        rest = &rest[pos..];
        let polarity = if rest.starts_with('+') {
            Polarity::Positive
        } else {
            Polarity::Negative
        };
        let body = &rest[1..];
        let end = body.find(['+', '-']).unwrap_or(body.len());
        markers.push(KeyMarker {
            polarity,
            key: body[..end].trim_matches(|c: char| c == '/' || c.is_whitespace()),
        });
        rest = &body[end..];
    }

    markers
}

/// The trimmed key expression of a comment, or `None` if the comment has
/// no `@` after its sigil.
pub fn key_expression(comment: &str) -> Option<&str> {
    let text = comment.trim();
    let after_sigil = text.get(SIGIL_LEN..)?;
    let at = after_sigil.find('@')?;
    Some(after_sigil[..at].trim())
}

/// Decides whether an annotation comment is active under the current keys.
#[derive(Clone, Debug, Default)]
pub struct ConditionalChecker {
    keys: ActiveKeys,
    cache: FxHashMap<String, bool>,
}

impl ConditionalChecker {
    pub fn new(keys: ActiveKeys) -> Self {
        Self {
            keys,
            cache: FxHashMap::default(),
        }
    }

    /// The registry decisions are made against.
    pub fn keys(&self) -> &ActiveKeys {
        &self.keys
    }

    /// Replace the active keys and invalidate every cached decision.
    pub fn replace_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keys.replace(keys);
        self.cache.clear();
        tracing::debug!(active = self.keys.len(), "replaced active annotation keys");
    }

    /// Decide whether `comment` is an active annotation.
    ///
    /// Comments without an `@` after the sigil are never active.
    pub fn decide(&mut self, comment: &str) -> bool {
        let Some(expr) = key_expression(comment) else {
            return false;
        };

        if let Some(&cached) = self.cache.get(expr) {
            tracing::trace!(expr, cached, "key expression cache hit");
            return cached;
        }

        let active = evaluate(&self.keys, expr);
        tracing::trace!(expr, active, "key expression evaluated");
        self.cache.insert(expr.to_owned(), active);
        active
    }

    /// Number of cached key expressions.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

/// Evaluate a key expression against `keys` without caching.
///
/// Active iff (there is no positive marker, or some positive key is
/// active) and no negative key is active. A bare `+` or `-` makes the
/// expression inactive.
pub fn evaluate(keys: &ActiveKeys, expr: &str) -> bool {
    let mut has_positive = false;
    let mut positive_active = false;
    let mut negative_active = false;

    for marker in parse_markers(expr) {
        if marker.key.is_empty() {
            return false;
        }
        let active = keys.contains(&marker.key.to_lowercase());
        match marker.polarity {
            Polarity::Positive => {
                has_positive = true;
                positive_active |= active;
            }
            Polarity::Negative => negative_active |= active,
        }
    }

    (!has_positive || positive_active) && !negative_active
}
