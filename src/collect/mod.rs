//! Document discovery and identifier assignment.
//!
//! Walks the asset root, loads every document and builds the translation
//! table for the destination package.
//!
//! ```text
//! kibana/
//! ├── dashboard/
//! │   └── nginx-<uuid>.json   -> (dashboard, nginx-<uuid>)
//! ├── search/
//! │   └── notes.txt           -> (ignored, not a document)
//! └── stray.json              -> fatal, no category
//! ```

mod document;
mod translation;

pub use document::{DOCUMENT_EXT, Document, DocumentSet};
pub use translation::TranslationTable;

use jwalk::{Parallelism, WalkDir};
use serde_json::Value;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use crate::core::Category;
use crate::debug;

/// Errors that abort collection.
///
/// Individual unreadable or malformed files are not errors, they are
/// dropped from the collection.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("cannot read asset root `{0}`")]
    Root(PathBuf, #[source] std::io::Error),

    #[error("asset root `{0}` is not a directory")]
    NotADirectory(PathBuf),

    #[error("unexpected number of path elements for `{0}`")]
    Layout(PathBuf),

    #[error("unknown asset category `{category}` for `{path}`")]
    UnknownCategory { category: String, path: PathBuf },
}

/// Loaded documents plus the identifier table covering all of them.
#[derive(Debug)]
pub struct Collection {
    pub documents: DocumentSet,
    pub table: TranslationTable,
}

/// Load all documents below `asset_root` and assign each a fresh
/// `dst_package` identifier.
pub fn collect(asset_root: &Path, dst_package: &str) -> Result<Collection, CollectError> {
    let documents = scan_documents(asset_root)?;
    let table = TranslationTable::build(
        dst_package,
        documents.iter().map(|(_, _, doc)| doc.original_id.clone()),
    );
    for (original, generated) in table.iter() {
        debug!("collect"; "{} -> {}", original, generated);
    }

    Ok(Collection { documents, table })
}

/// Walk `asset_root` and load every `<category>/<id>.json` document.
pub fn scan_documents(asset_root: &Path) -> Result<DocumentSet, CollectError> {
    let meta = fs::metadata(asset_root)
        .map_err(|e| CollectError::Root(asset_root.to_path_buf(), e))?;
    if !meta.is_dir() {
        return Err(CollectError::NotADirectory(asset_root.to_path_buf()));
    }

    let mut documents = DocumentSet::new();

    let walker = WalkDir::new(asset_root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .sort(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("collect"; "skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXT) {
            continue;
        }

        let rel = path.strip_prefix(asset_root).unwrap_or(path.as_path());
        let Some((category, file_name)) = split_category(rel)? else {
            debug!("collect"; "skipping non UTF-8 path {}", path.display());
            continue;
        };

        let Some(original_id) = file_name.strip_suffix(&format!(".{DOCUMENT_EXT}")) else {
            continue;
        };
        let Some(body) = load_document(&path) else {
            debug!("collect"; "skipping malformed document {}", path.display());
            continue;
        };

        let document = Document::new(original_id, body);
        documents.insert(category, file_name, document);
    }

    Ok(documents)
}

/// Split a path relative to the asset root into `(category, file name)`.
///
/// Anything but exactly two components is a layout error. `Ok(None)` when
/// either component is not valid UTF-8.
fn split_category(rel: &Path) -> Result<Option<(Category, &str)>, CollectError> {
    let mut components = rel.components();
    let (Some(Component::Normal(dir)), Some(Component::Normal(file)), None) =
        (components.next(), components.next(), components.next())
    else {
        return Err(CollectError::Layout(rel.to_path_buf()));
    };

    let (Some(dir), Some(file)) = (dir.to_str(), file.to_str()) else {
        return Ok(None);
    };
    let category = Category::from_dir_name(dir).ok_or_else(|| CollectError::UnknownCategory {
        category: dir.to_string(),
        path: rel.to_path_buf(),
    })?;

    Ok(Some((category, file)))
}

/// Read and parse one document, `None` if it is unreadable or not a
/// JSON object.
fn load_document(path: &Path) -> Option<Value> {
    let bytes = fs::read(path).ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        body @ Value::Object(_) => Some(body),
        _ => None,
    }
}
