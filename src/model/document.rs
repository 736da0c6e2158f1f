//! Document-level types.

use super::Block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A composed document: metadata plus an ordered run of blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Body blocks in reading order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block and return its index.
    pub fn push(&mut self, block: Block) -> usize {
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    /// Get the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The last block, if any.
    pub fn last_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// All headings as `(block index, level, text)`.
    pub fn headings(&self) -> impl Iterator<Item = (usize, u8, String)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.as_heading().map(|(level, text)| (i, level, text)))
    }

    /// Numbered sections in document order.
    ///
    /// A section starts at a level-1 heading titled `Section <n>: ...` and
    /// runs up to the next level-1 heading or the end of the document.
    pub fn sections(&self) -> Vec<SectionSpan> {
        let top: Vec<(usize, String)> = self
            .headings()
            .filter(|(_, level, _)| *level == 1)
            .map(|(i, _, text)| (i, text))
            .collect();

        top.iter()
            .enumerate()
            .filter_map(|(k, (start, title))| {
                let number = section_number(title)?;
                let end = top
                    .get(k + 1)
                    .map(|(next, _)| *next)
                    .unwrap_or(self.blocks.len());
                Some(SectionSpan {
                    number,
                    title: title.clone(),
                    start: *start,
                    end,
                })
            })
            .collect()
    }

    /// Blocks belonging to a section span.
    pub fn section_blocks(&self, span: &SectionSpan) -> &[Block] {
        &self.blocks[span.start..span.end.min(self.blocks.len())]
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.plain_text())
            .filter(|t| !t.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Parse the number out of a `Section <n>: ...` title.
fn section_number(title: &str) -> Option<u32> {
    let rest = title.strip_prefix("Section ")?;
    let (number, _) = rest.split_once(':')?;
    number.trim().parse().ok()
}

/// The block range covered by one numbered section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpan {
    /// Section number from the heading
    pub number: u32,

    /// Full heading text
    pub title: String,

    /// Index of the heading block
    pub start: usize,

    /// One past the last block of the section
    pub end: usize,
}

impl SectionSpan {
    /// Number of blocks in the section, heading included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref subject) = self.subject {
            lines.push(format!("subject: \"{}\"", escape_yaml(subject)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }
        if let Some(ref modified) = self.modified {
            lines.push(format!("modified: {}", modified.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
