//! Emitting rewritten documents.
//!
//! - [`preview`]: the whole collection as one JSON document, keyed by
//!   category then by *original* file name.
//! - [`commit`]: one `<generated-id>.json` file per document under the
//!   destination asset root.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::collect::{DOCUMENT_EXT, DocumentSet, TranslationTable};
use crate::core::Category;
use crate::utils::plural_count;
use crate::{debug, log};

const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to marshal documents")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write preview")]
    Preview(#[source] io::Error),

    #[error("failed to create destination directory `{0}`")]
    CreateDir(PathBuf, #[source] io::Error),

    #[error("destination path is not a directory: `{0}`")]
    NotADirectory(PathBuf),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] io::Error),

    #[error("no identifier assigned to `{0}`")]
    Unassigned(String),
}

/// Serialize with four-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the whole collection to `out` as a single JSON document.
pub fn preview<W: Write>(documents: &DocumentSet, mut out: W) -> Result<(), OutputError> {
    let json = to_pretty_json(documents)?;
    out.write_all(&json).map_err(OutputError::Preview)?;
    writeln!(out).map_err(OutputError::Preview)?;
    out.flush().map_err(OutputError::Preview)
}

/// Files written by [`commit`], per category.
#[derive(Debug, Default)]
pub struct CommitSummary {
    pub written: Vec<(Category, PathBuf)>,
}

impl CommitSummary {
    pub fn count(&self, category: Category) -> usize {
        self.written.iter().filter(|(c, _)| *c == category).count()
    }
}

/// Write every document as `<dst_asset_root>/<category>/<generated-id>.json`.
///
/// Category directories are created when missing. Files that already exist
/// are overwritten; original files are never removed.
pub fn commit(
    documents: &DocumentSet,
    table: &TranslationTable,
    dst_asset_root: &Path,
) -> Result<CommitSummary, OutputError> {
    let mut summary = CommitSummary::default();

    for category in Category::ALL {
        let dir = dst_asset_root.join(category.dir_name());
        ensure_dir(&dir)?;

        for (name, document) in documents.category(category) {
            let generated = table
                .get(&document.original_id)
                .ok_or_else(|| OutputError::Unassigned(document.original_id.clone()))?;
            let path = dir.join(format!("{generated}.{DOCUMENT_EXT}"));

            let json = to_pretty_json(document)?;
            fs::write(&path, json).map_err(|e| OutputError::Write(path.clone(), e))?;
            debug!("commit"; "{} -> {}", name, path.display());

            summary.written.push((category, path));
        }

        log!("commit"; "{}: {}", category, plural_count(summary.count(category), "file"));
    }

    Ok(summary)
}

/// Create `dir` if absent; fail if something else occupies the path.
fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(OutputError::NotADirectory(dir.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|e| OutputError::CreateDir(dir.to_path_buf(), e))
        }
        Err(e) => Err(OutputError::CreateDir(dir.to_path_buf(), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::Document;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn sample() -> (DocumentSet, TranslationTable) {
        let mut documents = DocumentSet::new();
        documents.insert(
            Category::Search,
            "s1.json",
            Document::new("s1", json!({"id": "new-s1", "n": 1})),
        );
        let table = TranslationTable::build_with(["s1"], || "new-s1".to_string());
        (documents, table)
    }

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let json = to_pretty_json(&json!({"a": [1]})).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            "{\n    \"a\": [\n        1\n    ]\n}"
        );
    }

    #[test]
    fn test_preview_keys_by_original_name() {
        let (documents, _) = sample();
        let mut out = Vec::new();
        preview(&documents, &mut out).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "dashboard": {},
                "search": {"s1.json": {"id": "new-s1", "n": 1}},
                "visualization": {},
            })
        );
    }

    #[test]
    fn test_preview_of_empty_collection() {
        let mut out = Vec::new();
        preview(&DocumentSet::new(), &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            json!({"dashboard": {}, "search": {}, "visualization": {}})
        );
    }

    #[test]
    fn test_commit_writes_renamed_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("kibana");
        let (documents, table) = sample();

        let summary = commit(&documents, &table, &root).unwrap();
        assert_eq!(summary.count(Category::Search), 1);

        let written = root.join("search/new-s1.json");
        let body: Value = serde_json::from_slice(&fs::read(&written).unwrap()).unwrap();
        assert_eq!(body, json!({"id": "new-s1", "n": 1}));

        // Every category directory exists, even when empty
        assert!(root.join("dashboard").is_dir());
        assert!(root.join("visualization").is_dir());
    }

    #[test]
    fn test_commit_summary_counts_per_category() {
        let dir = TempDir::new().unwrap();
        let (documents, table) = sample();

        let summary = commit(&documents, &table, dir.path()).unwrap();
        assert_eq!(plural_count(summary.count(Category::Search), "file"), "1 file");
        assert_eq!(plural_count(summary.count(Category::Dashboard), "file"), "0 files");
    }

    #[test]
    fn test_commit_rejects_file_in_place_of_category_dir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("kibana");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("dashboard"), "").unwrap();

        let (documents, table) = sample();
        let err = commit(&documents, &table, &root).unwrap_err();
        assert!(matches!(err, OutputError::NotADirectory(_)));
    }

    #[test]
    fn test_commit_requires_assignment() {
        let dir = TempDir::new().unwrap();
        let (documents, _) = sample();
        let err = commit(&documents, &TranslationTable::default(), dir.path()).unwrap_err();
        assert!(matches!(err, OutputError::Unassigned(ref id) if id == "s1"));
    }
}
