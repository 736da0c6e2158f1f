//! Composition helpers for themed documents.
//!
//! A [`Composer`] borrows a [`Document`] and a [`Theme`] and appends styled
//! blocks in call order. Content modules are plain sequences of calls:
//!
//! ```
//! use reportkit::compose::Composer;
//! use reportkit::{Document, Theme};
//!
//! fn main() -> reportkit::Result<()> {
//!     let theme = Theme::default();
//!     let mut doc = Document::new();
//!     let mut c = Composer::new(&mut doc, &theme);
//!
//!     c.section("Section 1: Overview", |c| {
//!         c.paragraph("Plain body text.");
//!         c.bullet_list(["Label: detail"], true);
//!         c.table(&["Key", "Value"], [["a", "1"], ["b", "2"]], true)?;
//!         Ok(())
//!     })?;
//!
//!     assert_eq!(doc.sections().len(), 1);
//!     Ok(())
//! }
//! ```

mod callout;
mod heading;
mod list;
mod shading;
mod table;

pub use callout::ProfileLine;
pub use list::split_label;
pub use shading::shade_cell;
pub use table::build_table;

use crate::error::Result;
use crate::model::{Alignment, Block, Document, Paragraph, TextRun};
use crate::theme::Theme;

/// Appends themed blocks to a document.
pub struct Composer<'a> {
    doc: &'a mut Document,
    theme: &'a Theme,
}

impl<'a> Composer<'a> {
    /// Create a composer writing into `doc`.
    pub fn new(doc: &'a mut Document, theme: &'a Theme) -> Self {
        Self { doc, theme }
    }

    /// The theme used for styling.
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// The document being composed.
    pub fn document(&self) -> &Document {
        self.doc
    }

    /// Append a raw block and return its index.
    pub fn push(&mut self, block: Block) -> usize {
        self.doc.push(block)
    }

    /// Append a paragraph and return a handle to it.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        let index = self.doc.push(Block::Paragraph(paragraph));
        match &mut self.doc.blocks[index] {
            Block::Paragraph(p) => p,
            _ => unreachable!("block {index} was just pushed as a paragraph"),
        }
    }

    /// Plain body paragraph.
    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.push_paragraph(Paragraph::with_text(text))
    }

    /// Paragraph built from explicit runs.
    pub fn styled(&mut self, runs: impl IntoIterator<Item = TextRun>) -> &mut Paragraph {
        self.push_paragraph(Paragraph::with_runs(runs))
    }

    /// Paragraph holding a single bold run.
    pub fn bold_line(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.styled([TextRun::bold(text)])
    }

    /// Bold `label` followed by plain `body` in one paragraph.
    pub fn labeled(&mut self, label: impl Into<String>, body: impl Into<String>) -> &mut Paragraph {
        self.styled([TextRun::bold(label), TextRun::new(body)])
    }

    /// Centered single-run paragraph.
    pub fn banner(&mut self, run: TextRun) -> &mut Paragraph {
        self.push_paragraph(Paragraph::with_runs([run]).align(Alignment::Center))
    }

    /// Empty paragraph used as vertical space.
    pub fn spacer(&mut self) {
        self.doc.push(Block::Paragraph(Paragraph::new()));
    }

    /// Several spacers in a row.
    pub fn spacers(&mut self, count: usize) {
        for _ in 0..count {
            self.spacer();
        }
    }

    /// Explicit page break.
    pub fn page_break(&mut self) {
        self.doc.push(Block::PageBreak);
    }

    /// Emit one section: a page break when earlier content exists, the
    /// level-1 heading, then whatever `body` composes.
    ///
    /// Breaks go before a section rather than after it, so the last section
    /// of a document never ends with a dangling page break.
    pub fn section<F>(&mut self, title: &str, body: F) -> Result<()>
    where
        F: FnOnce(&mut Composer<'_>) -> Result<()>,
    {
        let needs_break = self
            .doc
            .last_block()
            .is_some_and(|block| !block.is_page_break());
        if needs_break {
            self.page_break();
        }

        log::debug!("composing {title:?} at block {}", self.doc.block_count());
        self.heading(title, 1)?;
        body(self)
    }
}
