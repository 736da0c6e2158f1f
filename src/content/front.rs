//! Cover page, table of contents and executive summary.

use crate::compose::Composer;
use crate::error::Result;
use crate::model::{Paragraph, TextRun};

/// One fixed table-of-contents line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading text as it appears in the body
    pub title: &'static str,
    /// Printed page number
    pub page: u32,
}

/// Table of contents entries. Page numbers are printed as given.
pub const TOC: [TocEntry; 8] = [
    TocEntry { title: "Executive Summary", page: 3 },
    TocEntry { title: "Section 1: The Problem We Solve", page: 4 },
    TocEntry { title: "Section 2: High School Student Experience", page: 6 },
    TocEntry { title: "Section 3: College Athlete Experience", page: 9 },
    TocEntry { title: "Section 4: Parent Experience", page: 12 },
    TocEntry { title: "Section 5: Compliance Officer Experience", page: 14 },
    TocEntry { title: "Section 6: The 6-Dimension Scoring System", page: 18 },
    TocEntry { title: "Section 7: Why ChatNIL?", page: 20 },
];

/// Tabs between a TOC title and its page number.
const TOC_TABS: usize = 6;

pub(super) fn cover(c: &mut Composer<'_>) {
    let theme = *c.theme();

    c.spacers(3);
    c.banner(
        TextRun::new("[ChatNIL Logo]")
            .with_size(14.0)
            .with_color(theme.light_gray),
    );
    c.spacers(2);
    c.banner(
        TextRun::bold("Platform Overview")
            .with_size(48.0)
            .with_color(theme.dark_gray),
    );
    c.spacer();
    c.banner(
        TextRun::new("A Compliance-First Approach to NIL Education")
            .with_size(24.0)
            .with_color(theme.accent),
    );
    c.spacers(4);
    c.banner(
        TextRun::new("January 2026")
            .with_size(14.0)
            .with_color(theme.light_gray),
    );
    c.spacer();
    c.banner(
        TextRun::new("CONFIDENTIAL")
            .with_size(12.0)
            .with_color(theme.light_gray),
    );
}

pub(super) fn table_of_contents(c: &mut Composer<'_>) -> Result<()> {
    c.section("Table of Contents", |c| {
        for entry in &TOC {
            let mut line = Paragraph::with_text(entry.title);
            for _ in 0..TOC_TABS {
                line.add_tab();
            }
            line.add_text(entry.page.to_string());
            c.push_paragraph(line);
        }
        Ok(())
    })
}

pub(super) fn executive_summary(c: &mut Composer<'_>) -> Result<()> {
    c.section("Executive Summary", |c| {
        c.styled([TextRun::bold("The NIL landscape is broken.").with_size(14.0)]);
        c.paragraph(
            "Two competing frameworks—the SCORE Act and the House Settlement—have created massive \
             confusion about what constitutes legitimate third-party NIL versus disguised \
             pay-for-play. Schools need compliance tools NOW, not after the dust settles.",
        );
        c.paragraph(
            "ChatNIL doesn't try to solve pay-for-play. Instead, we clearly define, document, and \
             enforce what legitimate third-party NIL looks like. We are the neutral compliance \
             authority, not a marketplace participant.",
        );
        c.labeled(
            "Our Position: ",
            "Neutral compliance authority, not marketplace participant.",
        );

        c.spacer();
        c.styled([TextRun::bold("Four User Types:").with_size(12.0)]);
        c.bullet_list(
            [
                "High School Students: Education & preparation for NIL",
                "College Athletes: Compliance validation & deal scoring",
                "Parents: Oversight, consent, and peace of mind",
                "Compliance Officers: Institutional management & NCAA documentation",
            ],
            true,
        );

        c.bold_line("What Makes Us Different:");
        c.paragraph(
            "We don't connect athletes to brands. We don't take a cut of deals. We don't compete \
             with collectives or agencies. We are the referee, not a player. This neutrality is \
             why schools trust us and why our compliance scoring carries weight.",
        );
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use crate::theme::Theme;

    #[test]
    fn test_toc_lines_use_tabs() {
        let theme = Theme::default();
        let mut doc = Document::new();
        let mut c = Composer::new(&mut doc, &theme);
        table_of_contents(&mut c).unwrap();

        // heading + one paragraph per entry
        assert_eq!(doc.block_count(), 1 + TOC.len());
        let first = doc.blocks[1].as_paragraph().unwrap();
        assert_eq!(first.plain_text(), "Executive Summary\t\t\t\t\t\t3");
    }

    #[test]
    fn test_cover_has_no_headings() {
        let theme = Theme::default();
        let mut doc = Document::new();
        cover(&mut Composer::new(&mut doc, &theme));
        assert_eq!(doc.headings().count(), 0);
        assert!(doc.plain_text().contains("Platform Overview"));
    }
}
