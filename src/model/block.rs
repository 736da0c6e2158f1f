//! Block-level content types.

use super::{Paragraph, Rgb, Table};
use serde::{Deserialize, Serialize};

/// A content block in the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text (also headings and list items)
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A highlighted box
    Callout(Callout),

    /// Explicit page break
    PageBreak,
}

impl Block {
    /// The paragraph inside this block, if it is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Heading level and text, if this block is a heading.
    pub fn as_heading(&self) -> Option<(u8, String)> {
        let p = self.as_paragraph()?;
        p.heading_level().map(|level| (level, p.plain_text()))
    }

    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
            Block::Callout(c) => c.plain_text(),
            Block::PageBreak => String::new(),
        }
    }
}

/// What a callout box is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    /// Accent-filled box with a bold label
    Highlight,
    /// Centered quotation with attribution
    PullQuote,
    /// Persona card with name and details
    Profile,
}

/// A shaded box of text, emphasised apart from the body flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    /// Callout purpose
    pub kind: CalloutKind,

    /// Background fill
    pub background: Rgb,

    /// Text color for runs that do not set their own
    pub text_color: Option<Rgb>,

    /// Box content
    pub content: Vec<Paragraph>,

    /// Draw a border around the box
    pub bordered: bool,
}

impl Callout {
    /// Create an empty callout.
    pub fn new(kind: CalloutKind, background: Rgb) -> Self {
        Self {
            kind,
            background,
            text_color: None,
            content: Vec::new(),
            bordered: false,
        }
    }

    /// Set the default text color and return self.
    pub fn text_color(mut self, color: Rgb) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Enable the border and return self.
    pub fn bordered(mut self) -> Self {
        self.bordered = true;
        self
    }

    /// Add a paragraph and return self.
    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.content.push(paragraph);
        self
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_detection() {
        let block = Block::Paragraph(Paragraph::heading("Intro", 1));
        assert_eq!(block.as_heading(), Some((1, "Intro".to_string())));
        assert_eq!(Block::PageBreak.as_heading(), None);
        assert!(Block::PageBreak.is_page_break());
    }

    #[test]
    fn test_callout_builder() {
        let callout = Callout::new(CalloutKind::PullQuote, Rgb::WHITE)
            .text_color(Rgb(0, 0, 0))
            .paragraph(Paragraph::with_text("\"Quote\""))
            .paragraph(Paragraph::with_text("— Someone"));
        assert_eq!(callout.content.len(), 2);
        assert_eq!(callout.plain_text(), "\"Quote\"\n— Someone");
        assert!(!callout.bordered);
    }

    #[test]
    fn test_block_serde_tag() {
        let json = serde_json::to_string(&Block::PageBreak).unwrap();
        assert_eq!(json, r#"{"type":"page_break"}"#);
    }
}
