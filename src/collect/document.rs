//! In-memory document collection, partitioned by category.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::Category;

/// Extension of every document file.
pub const DOCUMENT_EXT: &str = "json";

/// One loaded asset.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Identifier taken from the file name, extension stripped.
    pub original_id: String,
    pub body: Value,
}

impl Document {
    pub fn new(original_id: impl Into<String>, body: Value) -> Self {
        Self {
            original_id: original_id.into(),
            body,
        }
    }
}

/// Serializes as its body only.
impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

/// Documents keyed by category, then by original file name.
///
/// Every category is present, even when it holds no documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocumentSet {
    categories: BTreeMap<Category, BTreeMap<String, Document>>,
}

impl Default for DocumentSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSet {
    pub fn new() -> Self {
        Self {
            categories: Category::ALL
                .into_iter()
                .map(|category| (category, BTreeMap::new()))
                .collect(),
        }
    }

    /// Insert a document under `category`/`file_name`.
    ///
    /// Returns the document previously stored at that key, if any.
    pub fn insert(
        &mut self,
        category: Category,
        file_name: impl Into<String>,
        document: Document,
    ) -> Option<Document> {
        self.categories
            .entry(category)
            .or_default()
            .insert(file_name.into(), document)
    }

    /// Documents of one category, by original file name.
    pub fn category(&self, category: Category) -> impl Iterator<Item = (&str, &Document)> {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|docs| docs.iter().map(|(name, doc)| (name.as_str(), doc)))
    }

    /// All documents with their category and original file name.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str, &Document)> {
        self.categories.iter().flat_map(|(category, docs)| {
            docs.iter()
                .map(move |(name, doc)| (*category, name.as_str(), doc))
        })
    }

    /// Mutable access to every document body.
    pub fn bodies_mut(&mut self) -> impl Iterator<Item = (Category, &str, &mut Value)> {
        self.categories.iter_mut().flat_map(|(category, docs)| {
            docs.iter_mut()
                .map(move |(name, doc)| (*category, name.as_str(), &mut doc.body))
        })
    }

    pub fn count(&self, category: Category) -> usize {
        self.categories.get(&category).map_or(0, BTreeMap::len)
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_set_serializes_every_category() {
        let set = DocumentSet::new();
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(
            value,
            json!({"dashboard": {}, "search": {}, "visualization": {}})
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_document_serializes_as_body() {
        let mut set = DocumentSet::new();
        set.insert(
            Category::Search,
            "s1.json",
            Document::new("s1", json!({"id": "s1", "n": 1})),
        );
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["search"]["s1.json"], json!({"id": "s1", "n": 1}));
        assert_eq!(set.count(Category::Search), 1);
        assert_eq!(set.count(Category::Dashboard), 0);
    }

    #[test]
    fn test_iteration_is_sorted_by_category_then_name() {
        let mut set = DocumentSet::new();
        set.insert(Category::Visualization, "b.json", Document::new("b", json!({})));
        set.insert(Category::Dashboard, "z.json", Document::new("z", json!({})));
        set.insert(Category::Dashboard, "a.json", Document::new("a", json!({})));

        let order: Vec<_> = set.iter().map(|(c, name, _)| (c, name)).collect();
        assert_eq!(
            order,
            vec![
                (Category::Dashboard, "a.json"),
                (Category::Dashboard, "z.json"),
                (Category::Visualization, "b.json"),
            ]
        );
    }

    #[test]
    fn test_bodies_mut_edits_in_place() {
        let mut set = DocumentSet::new();
        set.insert(Category::Dashboard, "a.json", Document::new("a", json!({"x": 1})));
        for (_, _, body) in set.bodies_mut() {
            body["x"] = json!(2);
        }
        let (_, doc) = set.category(Category::Dashboard).next().unwrap();
        assert_eq!(doc.body, json!({"x": 2}));
    }
}
