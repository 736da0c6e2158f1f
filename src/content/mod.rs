//! Report content.
//!
//! The overview is composed in a fixed order: cover, table of contents,
//! executive summary, then sections 1 through 7. Customer stories are a
//! separate eighth section appended to an existing overview.

mod front;
mod sections;
mod stories;

pub use front::{TocEntry, TOC};
pub(crate) use stories::TITLE as CUSTOMER_STORIES_TITLE;

use crate::compose::Composer;
use crate::error::Result;

/// Compose the complete overview into an empty document.
pub fn compose_overview(c: &mut Composer<'_>) -> Result<()> {
    front::cover(c);
    front::table_of_contents(c)?;
    front::executive_summary(c)?;

    sections::problem(c)?;
    sections::high_school_students(c)?;
    sections::college_athletes(c)?;
    sections::parents(c)?;
    sections::compliance_officers(c)?;
    sections::scoring_system(c)?;
    sections::why_chatnil(c)?;
    Ok(())
}

/// Compose the customer stories section after whatever the document holds.
pub fn compose_customer_stories(c: &mut Composer<'_>) -> Result<()> {
    stories::customer_stories(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Document};
    use crate::theme::Theme;

    fn overview() -> Document {
        let theme = Theme::default();
        let mut doc = Document::new();
        compose_overview(&mut Composer::new(&mut doc, &theme)).unwrap();
        doc
    }

    #[test]
    fn test_overview_has_seven_sections() {
        let doc = overview();
        let numbers: Vec<_> = doc.sections().iter().map(|s| s.number).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_toc_titles_match_headings() {
        let doc = overview();
        let titles: Vec<String> = doc
            .headings()
            .filter(|(_, level, _)| *level == 1)
            .map(|(_, _, text)| text)
            .collect();
        for entry in &TOC {
            assert!(
                titles.iter().any(|t| t == entry.title),
                "missing heading for {:?}",
                entry.title
            );
        }
    }

    #[test]
    fn test_cover_is_first_page() {
        let doc = overview();
        let first_break = doc.blocks.iter().position(Block::is_page_break).unwrap();
        let (first_heading, _, title) = doc.headings().next().unwrap();
        assert_eq!(title, "Table of Contents");
        assert_eq!(first_heading, first_break + 1);
    }

    #[test]
    fn test_every_section_but_last_ends_with_break() {
        let doc = overview();
        let sections = doc.sections();
        let (last, rest) = sections.split_last().unwrap();
        for span in rest {
            let blocks = doc.section_blocks(span);
            assert!(blocks.last().unwrap().is_page_break(), "{}", span.title);
        }
        assert!(!doc.section_blocks(last).last().unwrap().is_page_break());
    }

    #[test]
    fn test_stories_append_after_last_section() {
        let theme = Theme::default();
        let mut doc = overview();
        compose_customer_stories(&mut Composer::new(&mut doc, &theme)).unwrap();

        let sections = doc.sections();
        assert_eq!(sections.len(), 8);
        let stories = &sections[7];
        assert_eq!(stories.title, CUSTOMER_STORIES_TITLE);
        assert_eq!(stories.end, doc.block_count());
        assert!(doc.blocks[stories.start - 1].is_page_break());
    }
}
