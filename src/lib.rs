//! # reportkit
//!
//! Themed business-document generation for Rust.
//!
//! This library composes the ChatNIL platform overview from a small set of
//! styled building blocks (headings, bullet lists, shaded tables, callout
//! boxes, page breaks), persists it as a versioned document container, and
//! exports it to DOCX, Markdown, plain text and JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reportkit::{flow, render, Theme};
//!
//! fn main() -> reportkit::Result<()> {
//!     let theme = Theme::default();
//!
//!     // Build the overview, then add the customer stories section
//!     let path = "docs/ChatNIL_Platform_Overview.json";
//!     flow::build_overview(path, &theme)?;
//!     let report = flow::append_customer_stories(path, &theme)?;
//!     assert_eq!(report.sections, 8);
//!
//!     // Export the result
//!     let doc = reportkit::load(path)?;
//!     render::write_docx(&doc, "docs/ChatNIL_Platform_Overview.docx")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Composition helpers**: themed headings, label-aware bullet lists,
//!   alternating-row tables, highlight/quote/profile callouts
//! - **Document of record**: lossless JSON container with header validation
//! - **Atomic saves**: temp file, re-read verification, rename
//! - **Multiple output formats**: DOCX, Markdown, plain text, JSON

pub mod compose;
pub mod content;
pub mod error;
pub mod flow;
pub mod model;
pub mod render;
pub mod store;
pub mod theme;

// Re-export commonly used types
pub use compose::Composer;
pub use error::{Error, Result};
pub use flow::{FlowReport, DEFAULT_DOCUMENT_PATH};
pub use model::{
    Alignment, Block, Callout, CalloutKind, Document, InlineContent, ListInfo, Metadata,
    Paragraph, ParagraphStyle, Rgb, SectionSpan, Table, TableCell, TableRow, TextRun, TextStyle,
};
pub use render::{DocumentStats, JsonFormat, RenderOptions, TableFallback};
pub use store::{detect_format_from_bytes, detect_format_from_path, is_document, StoreFormat};
pub use theme::Theme;

use std::path::Path;

/// Load a document from a container file.
///
/// # Example
///
/// ```no_run
/// let doc = reportkit::load("docs/ChatNIL_Platform_Overview.json").unwrap();
/// println!("Sections: {}", doc.sections().len());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
    store::load(path)
}

/// Extract plain text from a container file.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load(path)?;
    render::to_text(&doc)
}

/// Convert a container file to Markdown.
///
/// # Example
///
/// ```no_run
/// let markdown = reportkit::to_markdown("docs/ChatNIL_Platform_Overview.json").unwrap();
/// std::fs::write("overview.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a container file to Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use reportkit::{to_markdown_with_options, RenderOptions, TableFallback};
///
/// let options = RenderOptions::new()
///     .with_frontmatter(true)
///     .with_table_fallback(TableFallback::Html);
/// let markdown = to_markdown_with_options("overview.json", &options).unwrap();
/// ```
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = load(path)?;
    render::to_markdown(&doc, options)
}

/// Convert a container file to JSON (bare document, no container header).
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = load(path)?;
    render::to_json(&doc, format)
}

/// Export a container file to DOCX at `output`.
///
/// Fails without writing anything when `output` names the container itself.
pub fn export_docx<P: AsRef<Path>, Q: AsRef<Path>>(path: P, output: Q) -> Result<()> {
    let (path, output) = (path.as_ref(), output.as_ref());
    if same_file(path, output) {
        return Err(Error::Export(format!(
            "{} is the document container, choose another output path",
            output.display()
        )));
    }
    let doc = load(path)?;
    render::write_docx(&doc, output)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_detect_format_empty_data() {
        let data: [u8; 0] = [];
        let result = detect_format_from_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_format_docx_bytes() {
        let result = detect_format_from_bytes(b"PK\x03\x04\x14\x00");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    // ==================== Convenience Function Tests ====================

    #[test]
    fn test_convenience_renderers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overview.json");
        flow::build_overview(&path, &Theme::default()).unwrap();

        let markdown = to_markdown(&path).unwrap();
        assert!(markdown.starts_with("\\[ChatNIL Logo\\]"));
        assert!(markdown.contains("# Section 7: Why ChatNIL?"));

        let text = extract_text(&path).unwrap();
        assert!(text.contains("Platform Overview"));
        assert!(!text.contains('#'));

        let json = to_json(&path, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"blocks\""));

        let docx = dir.path().join("overview.docx");
        export_docx(&path, &docx).unwrap();
        assert!(docx.exists());
    }

    #[test]
    fn test_export_docx_refuses_container_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ChatNIL_Platform_Overview.docx");
        flow::build_overview(&path, &Theme::default()).unwrap();

        let result = export_docx(&path, &path);
        assert!(matches!(result, Err(Error::Export(_))));

        let aliased = dir.path().join(".").join("ChatNIL_Platform_Overview.docx");
        assert!(matches!(export_docx(&path, &aliased), Err(Error::Export(_))));
        assert_eq!(load(&path).unwrap().sections().len(), 7);
    }

    #[test]
    fn test_markdown_with_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overview.json");
        flow::build_overview(&path, &Theme::default()).unwrap();

        let options = RenderOptions::new().with_frontmatter(true);
        let markdown = to_markdown_with_options(&path, &options).unwrap();
        assert!(markdown.starts_with("---"));
        assert!(markdown.contains("ChatNIL Platform Overview"));
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert!(!options.include_frontmatter);
        assert_eq!(options.table_fallback, TableFallback::Markdown);
    }
}
