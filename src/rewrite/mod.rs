//! Identifier rewriting over document bodies.
//!
//! Walks a JSON value and relabels every reference to a collected
//! identifier:
//!
//! - an `id` field whose whole value is a known original identifier is
//!   replaced by its generated identifier
//! - any other string field is scanned for embedded source-package
//!   identifiers, and each known one is replaced in place
//!
//! Unknown identifiers and every non-identifier value are left untouched.
//!
//! # Example
//!
//! ```text
//! {"id": "nginx-<a>", "title": "copy of nginx-<b>"}
//!   -> {"id": "nginx_otel-<x>", "title": "copy of nginx_otel-<y>"}
//! ```

use serde_json::{Map, Value};
use std::ops::AddAssign;

use crate::collect::{DocumentSet, TranslationTable};
use crate::core::{ID_FIELD, IdentPattern};
use crate::debug;

/// Replacement counts from a rewrite pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteStats {
    /// Whole-value `id` fields replaced.
    pub ids: usize,
    /// Identifiers replaced inside larger strings.
    pub embedded: usize,
}

impl RewriteStats {
    pub fn total(self) -> usize {
        self.ids + self.embedded
    }
}

impl AddAssign for RewriteStats {
    fn add_assign(&mut self, rhs: Self) {
        self.ids += rhs.ids;
        self.embedded += rhs.embedded;
    }
}

/// Applies a translation table to document bodies.
///
/// The table and pattern are borrowed read-only for the whole walk; only
/// the visited values are mutated.
pub struct Rewriter<'a> {
    table: &'a TranslationTable,
    /// Matches identifiers of the *source* package.
    pattern: &'a IdentPattern,
}

impl<'a> Rewriter<'a> {
    pub fn new(table: &'a TranslationTable, pattern: &'a IdentPattern) -> Self {
        Self { table, pattern }
    }

    /// Rewrite every document of the collection in place.
    pub fn rewrite_all(&self, documents: &mut DocumentSet) -> RewriteStats {
        let mut stats = RewriteStats::default();
        for (category, name, body) in documents.bodies_mut() {
            let mut path = format!("{category}/{name}");
            let doc_stats = self.visit(body, &mut path);
            debug!("rewrite"; "{}/{}: {} replaced", category, name, doc_stats.total());
            stats += doc_stats;
        }
        stats
    }

    /// Rewrite a single value in place.
    #[cfg(test)]
    pub fn rewrite(&self, value: &mut Value) -> RewriteStats {
        self.visit(value, &mut String::new())
    }

    fn visit(&self, value: &mut Value, path: &mut String) -> RewriteStats {
        match value {
            Value::Object(map) => self.visit_object(map, path),
            Value::Array(items) => {
                let mut stats = RewriteStats::default();
                for (i, item) in items.iter_mut().enumerate() {
                    let len = path.len();
                    path.push_str(&format!("[{i}]"));
                    stats += self.visit(item, path);
                    path.truncate(len);
                }
                stats
            }
            // Strings are only rewritten as object fields
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
                RewriteStats::default()
            }
        }
    }

    fn visit_object(&self, map: &mut Map<String, Value>, path: &mut String) -> RewriteStats {
        let mut stats = RewriteStats::default();
        for (key, value) in map.iter_mut() {
            let len = path.len();
            path.push('.');
            path.push_str(key);

            match value {
                Value::String(id) if key == ID_FIELD => {
                    if self.replace_id(id, path) {
                        stats.ids += 1;
                    }
                }
                Value::String(text) => {
                    stats.embedded += self.replace_embedded(text, path);
                }
                other => stats += self.visit(other, path),
            }

            path.truncate(len);
        }
        stats
    }

    /// Replace a whole-value identifier. Unknown values are kept.
    fn replace_id(&self, id: &mut String, path: &str) -> bool {
        let Some(generated) = self.table.get(id) else {
            return false;
        };
        debug!("rewrite"; "{}: {} -> {}", path, id, generated);
        *id = generated.to_owned();
        true
    }

    /// Replace every known identifier embedded in `text`, returning how
    /// many were replaced.
    fn replace_embedded(&self, text: &mut String, path: &str) -> usize {
        if !self.pattern.is_match(text) {
            return 0;
        }

        let mut replaced = 0;
        let rewritten = self.pattern.replace_all(text, |found| {
            match self.table.get(found) {
                Some(generated) => {
                    replaced += 1;
                    generated.to_owned()
                }
                None => found.to_owned(),
            }
        });

        if replaced == 0 {
            return 0;
        }
        let rewritten = rewritten.into_owned();
        debug!("rewrite"; "{}: {:?} -> {:?}", path, text, rewritten);
        *text = rewritten;
        replaced
    }
}
