//! Active-key registry.

use rustc_hash::FxHashSet;

/// Set of currently active annotation keys.
///
/// Keys are stored trimmed and lower-cased, so lookups are
/// case-insensitive as long as callers lower-case the probe (the
/// conditional checker does).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveKeys {
    keys: FxHashSet<String>,
}

impl ActiveKeys {
    /// Build a registry from raw key spellings.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();
        registry.replace(keys);
        registry
    }

    /// Replace the whole set atomically.
    ///
    /// Keys are trimmed and lower-cased; empty keys are dropped and
    /// duplicates collapse.
    pub fn replace<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keys = keys
            .into_iter()
            .filter_map(|key| normalize(key.as_ref()))
            .collect();
    }

    /// Whether `key` (already lower-case) is active.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Active keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys.into_iter()
    }
}

fn normalize(key: &str) -> Option<String> {
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_lowercase())
    }
}
