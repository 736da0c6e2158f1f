//! Paragraph and text-level types.

use super::Rgb;
use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline content in the paragraph
    pub content: Vec<InlineContent>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a paragraph from styled runs.
    pub fn with_runs(runs: impl IntoIterator<Item = TextRun>) -> Self {
        Self {
            content: runs.into_iter().map(InlineContent::Text).collect(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create a heading paragraph. Levels are stored as given.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.heading_level = Some(level);
        p
    }

    /// Create a bulleted list item.
    pub fn bullet(runs: impl IntoIterator<Item = TextRun>) -> Self {
        let mut p = Self::with_runs(runs);
        p.style.list_info = Some(ListInfo::bullet());
        p
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(InlineContent::Text(TextRun::new(text)));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a line break.
    pub fn add_line_break(&mut self) {
        self.content.push(InlineContent::LineBreak);
    }

    /// Add a tab.
    pub fn add_tab(&mut self) {
        self.content.push(InlineContent::Tab);
    }

    /// Iterate over the text runs, skipping breaks and tabs.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content.iter().filter_map(|c| match c {
            InlineContent::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Mutable access to every text run.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut TextRun> {
        self.content.iter_mut().filter_map(|c| match c {
            InlineContent::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::LineBreak => "\n",
                InlineContent::Tab => "\t",
            })
            .collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.style.heading_level.is_some()
    }

    /// Get the heading level or None.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.style.list_info.is_some()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// A line break within the paragraph
    LineBreak,

    /// A tab stop
    Tab,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text).with_bold()
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text).with_italic()
    }

    /// Set bold and return self.
    pub fn with_bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    /// Set italic and return self.
    pub fn with_italic(mut self) -> Self {
        self.style.italic = true;
        self
    }

    /// Set the font size in points and return self.
    pub fn with_size(mut self, points: f32) -> Self {
        self.style.font_size = Some(points);
        self
    }

    /// Set the text color and return self.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Text color
    pub color: Option<Rgb>,
}

impl TextStyle {
    /// Check if the style carries no formatting at all.
    pub fn is_plain(&self) -> bool {
        *self == TextStyle::default()
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Heading level, if this paragraph is a heading
    pub heading_level: Option<u8>,

    /// List information, if this paragraph is a list item
    pub list_info: Option<ListInfo>,

    /// Text alignment
    pub alignment: Alignment,
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left aligned
    #[default]
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

/// List item information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    /// Nesting level (0 = top level)
    pub level: u8,

    /// Bullet marker character
    pub marker: char,
}

impl ListInfo {
    /// A top-level bullet item.
    pub fn bullet() -> Self {
        Self {
            level: 0,
            marker: '•',
        }
    }
}
