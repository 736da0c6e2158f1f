//! The two generator flows: build a fresh overview and append customer
//! stories to an existing one.

use crate::compose::Composer;
use crate::content;
use crate::error::Result;
use crate::model::Document;
use crate::store;
use crate::theme::Theme;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the persisted overview.
pub const DEFAULT_DOCUMENT_PATH: &str = "docs/ChatNIL_Platform_Overview.json";

/// Summary of a completed flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowReport {
    /// File that was written
    pub path: PathBuf,
    /// Numbered sections in the saved document
    pub sections: usize,
    /// Total blocks in the saved document
    pub blocks: usize,
}

impl FlowReport {
    fn new(path: &Path, doc: &Document) -> Self {
        Self {
            path: path.to_path_buf(),
            sections: doc.sections().len(),
            blocks: doc.block_count(),
        }
    }
}

/// Compose the full overview in memory.
pub fn overview_document(theme: &Theme) -> Result<Document> {
    let mut doc = Document::new();
    doc.metadata.title = Some("ChatNIL Platform Overview".to_string());
    doc.metadata.subject = Some("A Compliance-First Approach to NIL Education".to_string());
    doc.metadata.author = Some("ChatNIL".to_string());
    doc.metadata.created = Some(Utc::now());

    content::compose_overview(&mut Composer::new(&mut doc, theme))?;
    Ok(doc)
}

/// Build the overview and save it to `path`, creating the parent
/// directory if needed. An existing file is replaced.
pub fn build_overview<P: AsRef<Path>>(path: P, theme: &Theme) -> Result<FlowReport> {
    let path = path.as_ref();
    log::info!("building overview");
    let doc = overview_document(theme)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    store::save(&doc, path)?;

    let report = FlowReport::new(path, &doc);
    log::info!(
        "saved {} sections ({} blocks) to {}",
        report.sections,
        report.blocks,
        path.display()
    );
    Ok(report)
}

/// Append the customer stories section to the document at `path` and
/// save it back in place.
///
/// The document is loaded and validated before anything is written, so a
/// missing or invalid file leaves the filesystem untouched.
pub fn append_customer_stories<P: AsRef<Path>>(path: P, theme: &Theme) -> Result<FlowReport> {
    let path = path.as_ref();
    log::info!("opening {}", path.display());
    let mut doc = store::load(path)?;
    let before = doc.block_count();

    log::info!("adding {:?}", content::CUSTOMER_STORIES_TITLE);
    content::compose_customer_stories(&mut Composer::new(&mut doc, theme))?;
    doc.metadata.modified = Some(Utc::now());
    store::save(&doc, path)?;

    let report = FlowReport::new(path, &doc);
    log::info!(
        "appended {} blocks, {} sections total",
        report.blocks - before,
        report.sections
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_overview_metadata() {
        let doc = overview_document(&Theme::default()).unwrap();
        assert_eq!(
            doc.metadata.title.as_deref(),
            Some("ChatNIL Platform Overview")
        );
        assert!(doc.metadata.created.is_some());
        assert!(doc.metadata.modified.is_none());
    }

    #[test]
    fn test_build_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("overview.json");

        let report = build_overview(&path, &Theme::default()).unwrap();
        assert!(path.exists());
        assert_eq!(report.sections, 7);
    }

    #[test]
    fn test_append_preserves_existing_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overview.json");
        let theme = Theme::default();

        build_overview(&path, &theme).unwrap();
        let before = store::load(&path).unwrap();
        let report = append_customer_stories(&path, &theme).unwrap();
        let after = store::load(&path).unwrap();

        assert_eq!(report.sections, 8);
        assert_eq!(&after.blocks[..before.block_count()], &before.blocks[..]);
        assert_eq!(after.metadata.created, before.metadata.created);
        assert!(after.metadata.modified.is_some());
    }

    #[test]
    fn test_append_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let result = append_customer_stories(&path, &Theme::default());
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_append_rejects_foreign_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, b"{\"hello\": \"world\"}").unwrap();

        let result = append_customer_stories(&path, &Theme::default());
        assert!(matches!(result, Err(Error::UnknownFormat)));
        assert_eq!(fs::read(&path).unwrap(), b"{\"hello\": \"world\"}");
    }
}
