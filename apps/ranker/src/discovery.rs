//! Discovery — collects the `.pdf` and `.txt` resumes under an input folder.

use std::path::Path;

use anyhow::{bail, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::pipeline::text_source::{Document, DocumentKind};

/// Documents under `root`, sorted by their path relative to `root`.
///
/// Only the top level is scanned unless `recursive` is set. Entries that
/// cannot be read are logged and skipped.
pub fn discover_documents(root: &Path, recursive: bool) -> Result<Vec<Document>> {
    if !root.is_dir() {
        bail!("Input path '{}' is not a directory", root.display());
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry: {err}");
                None
            }
        })
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        let Some(kind) = DocumentKind::from_file_name(&file_name) else {
            debug!("Ignoring {}", entry.path().display());
            continue;
        };

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let id = relative.to_string_lossy().replace('\\', "/");
        documents.push(Document::file(id, kind, entry.path().to_path_buf()));
    }

    documents.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn ids(documents: &[Document]) -> Vec<&str> {
        documents.iter().map(|d| d.id.as_str()).collect()
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_only_supported_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "zoe.pdf");
        touch(dir.path(), "adam.txt");
        touch(dir.path(), "photo.png");
        touch(dir.path(), "Mia.PDF");
        touch(dir.path(), "notes");

        let documents = discover_documents(dir.path(), false).unwrap();

        assert_eq!(ids(&documents), vec!["Mia.PDF", "adam.txt", "zoe.pdf"]);
        assert_eq!(documents[0].kind, DocumentKind::Pdf);
        assert_eq!(documents[1].kind, DocumentKind::PlainText);
    }

    #[test]
    fn test_nested_files_need_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "top.txt");
        fs::create_dir(dir.path().join("batch")).unwrap();
        touch(&dir.path().join("batch"), "inner.pdf");

        let flat = discover_documents(dir.path(), false).unwrap();
        assert_eq!(ids(&flat), vec!["top.txt"]);

        let deep = discover_documents(dir.path(), true).unwrap();
        assert_eq!(ids(&deep), vec!["batch/inner.pdf", "top.txt"]);
    }

    #[test]
    fn test_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_documents(dir.path(), false).unwrap().is_empty());
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(discover_documents(&missing, false).is_err());
    }
}
