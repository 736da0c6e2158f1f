//! Rendering result with metadata and statistics.

use crate::model::{Block, Document, Metadata};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Rendering statistics
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: DocumentStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }
}

/// Block and text counts for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Numbered sections
    pub section_count: u32,

    /// Body paragraphs (not headings, list items or spacers)
    pub paragraph_count: u32,

    /// Headings at any level
    pub heading_count: u32,

    /// Bullet list items
    pub list_item_count: u32,

    /// Tables
    pub table_count: u32,

    /// Callout boxes
    pub callout_count: u32,

    /// Explicit page breaks
    pub page_break_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every block of a document, plus words in its plain text.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            stats.add_block(block);
        }
        stats.section_count = doc.sections().len() as u32;
        stats.count_text(&doc.plain_text());
        stats
    }

    /// Count one block by kind.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(p) if p.is_heading() => self.add_heading(),
            Block::Paragraph(p) if p.is_list_item() => self.add_list_item(),
            Block::Paragraph(p) if !p.is_empty() => self.add_paragraph(),
            Block::Paragraph(_) => {}
            Block::Table(_) => self.add_table(),
            Block::Callout(_) => self.add_callout(),
            Block::PageBreak => self.page_break_count += 1,
        }
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment callout count.
    pub fn add_callout(&mut self) {
        self.callout_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, TextRun};

    #[test]
    fn test_count_text() {
        let mut stats = DocumentStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_from_document_counts_kinds() {
        let mut doc = Document::new();
        doc.push(Block::Paragraph(Paragraph::heading("Section 1: Intro", 1)));
        doc.push(Block::Paragraph(Paragraph::with_text("Body")));
        doc.push(Block::Paragraph(Paragraph::new()));
        doc.push(Block::Paragraph(Paragraph::bullet([TextRun::new("Item")])));
        doc.push(Block::PageBreak);

        let stats = DocumentStats::from_document(&doc);
        assert_eq!(stats.section_count, 1);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.list_item_count, 1);
        assert_eq!(stats.page_break_count, 1);
        assert_eq!(stats.table_count, 0);
    }
}
