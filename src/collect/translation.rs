//! Original → generated identifier table.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::ident;

/// Mapping from every collected original identifier to its replacement.
///
/// Built once, before any document is rewritten, and read-only afterwards.
/// Generated identifiers are pairwise distinct.
#[derive(Debug, Default)]
pub struct TranslationTable {
    forward: FxHashMap<String, String>,
    generated: FxHashSet<String>,
}

impl TranslationTable {
    /// Assign a freshly minted `package` identifier to each original.
    pub fn build<I, S>(package: &str, originals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build_with(originals, || ident::mint(package))
    }

    /// Like [`build`](Self::build), drawing candidates from `mint`.
    ///
    /// A candidate already handed out is discarded and `mint` is asked
    /// again, so a repeating generator can never produce a duplicate.
    pub fn build_with<I, S, F>(originals: I, mut mint: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnMut() -> String,
    {
        let mut table = Self::default();
        for original in originals {
            let original = original.into();
            if table.forward.contains_key(&original) {
                // Same identifier in two categories keeps one replacement
                continue;
            }
            let generated = loop {
                let candidate = mint();
                if !table.generated.contains(&candidate) {
                    break candidate;
                }
            };
            table.generated.insert(generated.clone());
            table.forward.insert(original, generated);
        }
        table
    }

    /// Replacement for `original`, if it was collected.
    #[inline]
    pub fn get(&self, original: &str) -> Option<&str> {
        self.forward.get(original).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Iterate `(original, generated)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
