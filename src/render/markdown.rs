//! Markdown rendering for composed documents.

use crate::error::Result;
use crate::model::{Block, Callout, Document, InlineContent, Paragraph, Table, TextRun, TextStyle};

use super::{DocumentStats, RenderOptions, RenderResult, TableFallback};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: DocumentStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: DocumentStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;

        self.stats.section_count = doc.sections().len() as u32;
        self.stats.count_text(&doc.plain_text());

        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for block in &doc.blocks {
            if self.options.collect_stats {
                self.stats.add_block(block);
            }
            self.render_block(&mut output, block);
        }

        Ok(output.trim().to_string())
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Table(t) => self.render_table(output, t),
            Block::Callout(c) => self.render_callout(output, c),
            Block::PageBreak => {
                end_block(output);
                if self.options.page_break_rules {
                    output.push_str("---\n\n");
                }
            }
        }
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }

        if let Some(level) = para.style.heading_level {
            end_block(output);
            let level = level.clamp(1, self.options.max_heading_level.max(1));
            output.push_str(&"#".repeat(level as usize));
            output.push(' ');
            // headings carry their own size and color, so only emphasis is kept
            self.render_inline_content(output, &para.content, false);
            output.push_str("\n\n");
            return;
        }

        if let Some(ref list_info) = para.style.list_info {
            output.push_str(&"  ".repeat(list_info.level as usize));
            output.push(self.options.list_marker);
            output.push(' ');
            self.render_inline_content(output, &para.content, true);
            output.push('\n');
            return;
        }

        end_block(output);
        self.render_inline_content(output, &para.content, true);
        output.push_str("\n\n");
    }

    fn render_inline_content(&self, output: &mut String, content: &[InlineContent], emphasis: bool) {
        for item in content {
            match item {
                InlineContent::Text(run) => self.render_text_run(output, run, emphasis),
                InlineContent::LineBreak => {
                    if self.options.preserve_line_breaks {
                        output.push_str("  \n");
                    } else {
                        output.push(' ');
                    }
                }
                InlineContent::Tab => {
                    if !output.ends_with(' ') {
                        output.push(' ');
                    }
                }
            }
        }
    }

    fn render_text_run(&self, output: &mut String, run: &TextRun, emphasis: bool) {
        if run.text.is_empty() {
            return;
        }
        let text = if self.options.escape_special_chars {
            escape_markdown(&run.text)
        } else {
            run.text.clone()
        };

        if emphasis {
            output.push_str(&apply_text_style(&text, &run.style));
        } else {
            output.push_str(&text);
        }
    }

    fn render_callout(&self, output: &mut String, callout: &Callout) {
        end_block(output);

        let mut body = String::new();
        for (i, para) in callout.content.iter().enumerate() {
            if i > 0 {
                body.push_str("\n\n");
            }
            self.render_inline_content(&mut body, &para.content, true);
        }

        for line in body.trim_end().lines() {
            if line.is_empty() {
                output.push_str(">\n");
            } else {
                output.push_str("> ");
                output.push_str(line);
                output.push('\n');
            }
        }
        output.push('\n');
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        if table.is_empty() {
            return;
        }
        end_block(output);

        match self.options.table_fallback {
            TableFallback::Markdown => self.render_table_markdown(output, table),
            TableFallback::Html => self.render_table_html(output, table),
        }
    }

    fn render_table_markdown(&self, output: &mut String, table: &Table) {
        let col_count = table.column_count();
        if col_count == 0 {
            return;
        }

        for (i, row) in table.rows.iter().enumerate() {
            output.push('|');
            for cell in &row.cells {
                let content = self.cell_text(&cell.plain_text());
                output.push_str(&format!(" {} |", content.trim()));
            }
            output.push('\n');

            // separator after the header row
            let header_end = (table.header_rows as usize).max(1) - 1;
            if i == header_end {
                output.push('|');
                for _ in 0..col_count {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }

    fn render_table_html(&self, output: &mut String, table: &Table) {
        output.push_str("<table>\n");

        if table.header_rows > 0 {
            output.push_str("<thead>\n");
            for row in table.header() {
                self.render_html_row(output, row, true);
            }
            output.push_str("</thead>\n");
        }

        output.push_str("<tbody>\n");
        for row in table.body() {
            self.render_html_row(output, row, false);
        }
        output.push_str("</tbody>\n");

        output.push_str("</table>\n\n");
    }

    fn render_html_row(&self, output: &mut String, row: &crate::model::TableRow, is_header: bool) {
        let tag = if is_header { "th" } else { "td" };
        output.push_str("<tr>");

        for cell in &row.cells {
            let attrs = cell
                .fill()
                .map(|fill| format!(" style=\"background:#{}\"", fill.hex()))
                .unwrap_or_default();
            output.push_str(&format!("<{}{}>", tag, attrs));
            output.push_str(&escape_html(&cell.plain_text()));
            output.push_str(&format!("</{}>", tag));
        }

        output.push_str("</tr>\n");
    }

    fn cell_text(&self, text: &str) -> String {
        let text = text.replace('\n', " ");
        if self.options.escape_special_chars {
            escape_markdown(&text)
        } else {
            text.replace('|', "\\|")
        }
    }
}

/// Make sure the next block starts after a blank line.
fn end_block(output: &mut String) {
    if output.is_empty() || output.ends_with("\n\n") {
        return;
    }
    if output.ends_with('\n') {
        output.push('\n');
    } else {
        output.push_str("\n\n");
    }
}

fn apply_text_style(text: &str, style: &TextStyle) -> String {
    // keep surrounding whitespace outside the markers
    let trimmed = text.trim();
    if trimmed.is_empty() || (!style.bold && !style.italic) {
        return text.to_string();
    }
    let lead = &text[..text.len() - text.trim_start().len()];
    let trail = &text[text.trim_end().len()..];

    let mut result = trimmed.to_string();
    if style.italic {
        result = format!("*{}*", result);
    }
    if style.bold {
        result = format!("**{}**", result);
    }
    format!("{lead}{result}{trail}")
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Composer;
    use crate::theme::Theme;

    fn render(build: impl FnOnce(&mut Composer<'_>)) -> String {
        render_with(build, &RenderOptions::new())
    }

    fn render_with(build: impl FnOnce(&mut Composer<'_>), options: &RenderOptions) -> String {
        let theme = Theme::default();
        let mut doc = Document::new();
        build(&mut Composer::new(&mut doc, &theme));
        to_markdown(&doc, options).unwrap()
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("[link]"), "\\[link\\]");
    }

    #[test]
    fn test_bold_keeps_trailing_space_outside() {
        let style = TextStyle {
            bold: true,
            ..Default::default()
        };
        assert_eq!(apply_text_style("Our Position: ", &style), "**Our Position:** ");
    }

    #[test]
    fn test_render_heading_and_paragraph() {
        let md = render(|c| {
            c.heading("Section 1: The Problem We Solve", 1).unwrap();
            c.paragraph("Hello, world!");
        });
        assert_eq!(md, "# Section 1: The Problem We Solve\n\nHello, world!");
    }

    #[test]
    fn test_zero_max_heading_field_renders_level_one() {
        let mut options = RenderOptions::new();
        options.max_heading_level = 0;
        let md = render_with(|c| {
            c.heading("Stories", 2).unwrap();
        }, &options);
        assert_eq!(md, "# Stories");
    }

    #[test]
    fn test_render_bullets_with_labels() {
        let md = render(|c| c.bullet_list(["Parents: Oversight", "Schools: Tools"], true));
        assert_eq!(md, "- **Parents:** Oversight\n- **Schools:** Tools");
    }

    #[test]
    fn test_render_table() {
        let md = render(|c| {
            c.table(&["Stakeholder", "Risk"], [["Athletes", "Eligibility"]], false)
                .unwrap();
        });
        assert_eq!(
            md,
            "| Stakeholder | Risk |\n| --- | --- |\n| Athletes | Eligibility |"
        );
    }

    #[test]
    fn test_render_html_table_shading() {
        let options = RenderOptions::new().with_table_fallback(TableFallback::Html);
        let md = render_with(
            |c| {
                c.table(&["A"], [["x"], ["y"]], false).unwrap();
            },
            &options,
        );
        assert!(md.contains("<th style=\"background:#F97316\">A</th>"));
        assert!(md.contains("<td style=\"background:#FFF7ED\">x</td>"));
        assert!(md.contains("<td>y</td>"));
    }

    #[test]
    fn test_render_callout_as_blockquote() {
        let md = render(|c| c.pull_quote("\"Quoted.\"", "Darius Johnson"));
        assert_eq!(md, "> *\"Quoted.\"*\n>\n> — Darius Johnson");
    }

    #[test]
    fn test_page_break_rules() {
        let build = |c: &mut Composer<'_>| {
            c.paragraph("one");
            c.page_break();
            c.paragraph("two");
        };
        assert_eq!(render(build), "one\n\ntwo");

        let options = RenderOptions::new().with_page_break_rules(true);
        assert_eq!(render_with(build, &options), "one\n\n---\n\ntwo");
    }

    #[test]
    fn test_tabs_collapse_to_space() {
        let md = render(|c| {
            let p = c.paragraph("Executive Summary");
            p.add_tab();
            p.add_tab();
            p.add_text("3");
        });
        assert_eq!(md, "Executive Summary 3");
    }

    #[test]
    fn test_render_with_frontmatter() {
        let mut doc = Document::new();
        doc.metadata.title = Some("Test Doc".to_string());

        let options = RenderOptions::new().with_frontmatter(true);
        let result = to_markdown(&doc, &options).unwrap();
        assert!(result.contains("---"));
        assert!(result.contains("title:"));
    }

    #[test]
    fn test_render_with_stats() {
        let theme = Theme::default();
        let mut doc = Document::new();
        let mut c = Composer::new(&mut doc, &theme);
        c.section("Section 1: Only", |c| {
            c.bullet_list(["a", "b"], false);
            Ok(())
        })
        .unwrap();

        let result = to_markdown_with_stats(&doc, &RenderOptions::new()).unwrap();
        assert_eq!(result.stats.section_count, 1);
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.list_item_count, 2);
    }
}
