//! DOCX export.
//!
//! The export is presentation-only: the container written by
//! [`crate::store`] remains the document of record. Callouts become
//! single-cell shaded tables and headings use the built-in `HeadingN`
//! paragraph styles.

use crate::error::{Error, Result};
use crate::model::{
    Alignment, Block, Callout, Document, InlineContent, Paragraph, Table, TableCell, TextRun,
};
use crate::store;
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    NumberFormat, Numbering, NumberingId, Run, Shading, Start, Style, StyleType, TableAlignmentType,
    TableBorders,
};
use std::io::Cursor;
use std::path::Path;

/// Numbering definition shared by every bullet item.
const BULLET_NUMBERING: usize = 1;

/// Bullet glyphs per list level.
const BULLET_GLYPHS: [&str; 3] = ["•", "◦", "▪"];

/// Deepest heading style emitted.
const MAX_HEADING_LEVEL: u8 = 6;

/// ZIP local file header signature; every DOCX package starts with it.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Render a document to DOCX bytes.
pub fn to_docx(doc: &Document) -> Result<Vec<u8>> {
    let mut docx = base_package();
    for block in &doc.blocks {
        docx = match block {
            Block::Paragraph(p) => docx.add_paragraph(convert_paragraph(p)),
            Block::Table(t) => docx.add_table(convert_table(t)),
            Block::Callout(c) => docx.add_table(convert_callout(c)),
            Block::PageBreak => docx.add_paragraph(
                docx_rs::Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            ),
        };
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| Error::Export(e.to_string()))?;

    let bytes = buffer.into_inner();
    log::debug!("packed {} blocks into {} bytes", doc.block_count(), bytes.len());
    Ok(bytes)
}

/// Render a document to DOCX and write it to `path` atomically.
pub fn write_docx<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let bytes = to_docx(doc)?;
    store::write_atomic(path.as_ref(), &bytes, |written| {
        if written.starts_with(ZIP_MAGIC) {
            Ok(())
        } else {
            Err(Error::Verification("DOCX output is not a ZIP package".to_string()))
        }
    })
}

fn base_package() -> Docx {
    let mut docx = Docx::new();
    for level in 1..=MAX_HEADING_LEVEL {
        docx = docx.add_style(
            Style::new(&format!("Heading{level}"), StyleType::Paragraph)
                .name(&format!("Heading {level}")),
        );
    }

    let mut bullets = AbstractNumbering::new(BULLET_NUMBERING);
    for (level, glyph) in BULLET_GLYPHS.iter().enumerate() {
        bullets = bullets.add_level(Level::new(
            level,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new(*glyph),
            LevelJc::new("left"),
        ));
    }

    docx.add_abstract_numbering(bullets)
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}

fn convert_paragraph(para: &Paragraph) -> docx_rs::Paragraph {
    let mut out = docx_rs::Paragraph::new().align(convert_alignment(para.style.alignment));

    if let Some(level) = para.style.heading_level {
        let level = level.clamp(1, MAX_HEADING_LEVEL);
        out = out.style(&format!("Heading{level}"));
    }
    if let Some(ref list_info) = para.style.list_info {
        let level = (list_info.level as usize).min(BULLET_GLYPHS.len() - 1);
        out = out.numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(level));
    }

    for item in &para.content {
        out = out.add_run(match item {
            InlineContent::Text(run) => convert_run(run),
            InlineContent::LineBreak => Run::new().add_break(BreakType::TextWrapping),
            InlineContent::Tab => Run::new().add_tab(),
        });
    }
    out
}

fn convert_run(run: &TextRun) -> Run {
    let mut out = Run::new().add_text(run.text.as_str());
    if run.style.bold {
        out = out.bold();
    }
    if run.style.italic {
        out = out.italic();
    }
    if let Some(points) = run.style.font_size {
        out = out.size(half_points(points));
    }
    if let Some(color) = run.style.color {
        out = out.color(color.hex());
    }
    out
}

fn convert_cell(cell: &TableCell) -> docx_rs::TableCell {
    let mut out = docx_rs::TableCell::new();
    for para in &cell.content {
        out = out.add_paragraph(convert_paragraph(para));
    }
    if let Some(fill) = cell.fill() {
        out = out.shading(Shading::new().fill(fill.hex()));
    }
    out
}

fn convert_table(table: &Table) -> docx_rs::Table {
    let rows = table
        .rows
        .iter()
        .map(|row| docx_rs::TableRow::new(row.cells.iter().map(convert_cell).collect()))
        .collect();

    let out = docx_rs::Table::new(rows).align(convert_table_alignment(table.alignment));
    if table.bordered {
        out
    } else {
        out.set_borders(TableBorders::with_empty())
    }
}

fn convert_callout(callout: &Callout) -> docx_rs::Table {
    let mut cell = docx_rs::TableCell::new().shading(Shading::new().fill(callout.background.hex()));
    for para in &callout.content {
        cell = cell.add_paragraph(convert_paragraph(para));
    }

    let out = docx_rs::Table::new(vec![docx_rs::TableRow::new(vec![cell])]);
    if callout.bordered {
        out
    } else {
        out.set_borders(TableBorders::with_empty())
    }
}

fn convert_alignment(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
    }
}

fn convert_table_alignment(alignment: Alignment) -> TableAlignmentType {
    match alignment {
        Alignment::Left => TableAlignmentType::Left,
        Alignment::Center => TableAlignmentType::Center,
        Alignment::Right => TableAlignmentType::Right,
    }
}

/// DOCX run sizes are in half-points.
fn half_points(points: f32) -> usize {
    (points * 2.0).round().max(1.0) as usize
}
