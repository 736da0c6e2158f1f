//! Document container format, detection and persistence.
//!
//! Documents are stored as a JSON envelope:
//!
//! ```json
//! { "format": "reportkit", "version": 1, "document": { "metadata": {}, "blocks": [] } }
//! ```
//!
//! Saves go through a temporary file in the target directory that is
//! re-read and verified before being renamed over the destination.

use crate::error::{Error, Result};
use crate::model::Document;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Container format tag.
pub const FORMAT_TAG: &str = "reportkit";

/// Newest container version this build reads and the one it writes.
pub const FORMAT_VERSION: u32 = 1;

/// Container header information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFormat {
    /// Container version
    pub version: u32,
}

impl std::fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", FORMAT_TAG, self.version)
    }
}

#[derive(Deserialize)]
struct Header {
    format: String,
    version: u32,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    format: &'static str,
    version: u32,
    document: &'a Document,
}

#[derive(Deserialize)]
struct Envelope {
    document: Document,
}

/// Detect the container format from a file path.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<StoreFormat> {
    let data = fs::read(path)?;
    detect_format_from_bytes(&data)
}

/// Detect the container format from bytes.
///
/// # Returns
/// * `Ok(StoreFormat)` if the data carries a readable reportkit header
/// * `Err(Error::UnknownFormat)` if it is not a reportkit container
/// * `Err(Error::UnsupportedVersion)` if the version is newer than this build
pub fn detect_format_from_bytes(data: &[u8]) -> Result<StoreFormat> {
    let header: Header = serde_json::from_slice(data).map_err(|_| Error::UnknownFormat)?;
    if header.format != FORMAT_TAG {
        return Err(Error::UnknownFormat);
    }
    if header.version == 0 || header.version > FORMAT_VERSION {
        return Err(Error::UnsupportedVersion(header.version));
    }
    Ok(StoreFormat {
        version: header.version,
    })
}

/// Check if a file is a readable reportkit container.
pub fn is_document<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Encode a document as container bytes.
pub fn to_bytes(doc: &Document) -> Result<Vec<u8>> {
    let envelope = EnvelopeRef {
        format: FORMAT_TAG,
        version: FORMAT_VERSION,
        document: doc,
    };
    encode(&envelope)
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| Error::Storage(e.to_string()))
}

/// Decode container bytes, validating the header first.
pub fn from_bytes(data: &[u8]) -> Result<Document> {
    detect_format_from_bytes(data)?;
    let envelope: Envelope =
        serde_json::from_slice(data).map_err(|e| Error::Corrupted(e.to_string()))?;
    Ok(envelope.document)
}

/// Load a document from a container file.
///
/// # Example
/// ```no_run
/// let doc = reportkit::store::load("docs/ChatNIL_Platform_Overview.json").unwrap();
/// println!("{} blocks", doc.block_count());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let doc = from_bytes(&data)?;
    log::debug!("loaded {} blocks from {}", doc.block_count(), path.display());
    Ok(doc)
}

/// Save a document to `path`, replacing any existing file atomically.
///
/// The parent directory must already exist.
pub fn save<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(doc)?;
    let sections = doc.sections().len();

    write_atomic(path, &bytes, |written| {
        let reread = from_bytes(written)?;
        if reread.block_count() != doc.block_count() {
            return Err(Error::Verification(format!(
                "wrote {} blocks, read back {}",
                doc.block_count(),
                reread.block_count()
            )));
        }
        if reread.sections().len() != sections {
            return Err(Error::Verification(format!(
                "wrote {} sections, read back {}",
                sections,
                reread.sections().len()
            )));
        }
        Ok(())
    })?;

    log::debug!(
        "saved {} blocks ({} sections) to {}",
        doc.block_count(),
        sections,
        path.display()
    );
    Ok(())
}

/// Write `bytes` to a temp file beside `path`, check the re-read contents
/// with `verify`, then rename over `path`.
///
/// The destination is untouched unless every step succeeds.
pub(crate) fn write_atomic<F>(path: &Path, bytes: &[u8], verify: F) -> Result<()>
where
    F: FnOnce(&[u8]) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;

    let written = fs::read(tmp.path())?;
    verify(&written)?;

    tmp.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Paragraph};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.metadata.title = Some("Overview".to_string());
        doc.push(Block::Paragraph(Paragraph::heading("Section 1: Intro", 1)));
        doc.push(Block::Paragraph(Paragraph::with_text("Body")));
        doc.push(Block::PageBreak);
        doc
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    #[test]
    fn test_encode_failure_is_storage_error() {
        match encode(&Unencodable) {
            Err(Error::Storage(msg)) => assert!(msg.contains("refused")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[test]
    fn test_detect_valid_container() {
        let bytes = to_bytes(&sample()).unwrap();
        let format = detect_format_from_bytes(&bytes).unwrap();
        assert_eq!(format.version, FORMAT_VERSION);
        assert_eq!(format.to_string(), "reportkit v1");
    }

    #[test]
    fn test_detect_foreign_json() {
        let result = detect_format_from_bytes(br#"{"name": "package", "version": 1}"#);
        assert!(matches!(result, Err(Error::UnknownFormat)));

        let result = detect_format_from_bytes(br#"{"format": "other", "version": 1}"#);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_not_json() {
        let result = detect_format_from_bytes(b"PK\x03\x04");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_newer_version() {
        let result = detect_format_from_bytes(br#"{"format": "reportkit", "version": 9}"#);
        assert!(matches!(result, Err(Error::UnsupportedVersion(9))));
    }

    #[test]
    fn test_corrupted_body() {
        let data = br#"{"format": "reportkit", "version": 1, "document": {"blocks": 3}}"#;
        assert!(matches!(from_bytes(data), Err(Error::Corrupted(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        let doc = sample();

        save(&doc, &path).unwrap();
        assert!(is_document(&path));
        assert_eq!(load(&path).unwrap(), doc);
    }

    #[test]
    fn test_failed_verify_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, b"previous").unwrap();

        let result = write_atomic(&path, b"next", |_| {
            Err(Error::Verification("rejected".to_string()))
        });
        assert!(matches!(result, Err(Error::Verification(_))));
        assert_eq!(fs::read(&path).unwrap(), b"previous");

        // temp file is cleaned up
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("doc.json");
        assert!(matches!(save(&sample(), &path), Err(Error::Io(_))));
        assert!(!path.exists());
    }
}
