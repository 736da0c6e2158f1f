use super::Composer;
use crate::error::{Error, Result};
use crate::model::Paragraph;

impl Composer<'_> {
    /// Emit a heading at `level`.
    ///
    /// Levels 1-3 take their color and size from the theme; any other level
    /// is emitted as a heading with no style override.
    pub fn heading(&mut self, text: &str, level: u8) -> Result<&mut Paragraph> {
        if text.trim().is_empty() {
            return Err(Error::EmptyHeading);
        }

        let mut heading = Paragraph::heading(text, level);
        if let Some((color, size)) = self.theme().heading_style(level) {
            for run in heading.runs_mut() {
                run.style.color = Some(color);
                run.style.font_size = Some(size);
            }
        }
        Ok(self.push_paragraph(heading))
    }
}

#[cfg(test)]
mod tests {
    use crate::compose::Composer;
    use crate::error::Error;
    use crate::model::{Document, Paragraph};
    use crate::theme::Theme;

    fn heading_at(level: u8) -> Paragraph {
        let theme = Theme::default();
        let mut doc = Document::new();
        Composer::new(&mut doc, &theme)
            .heading("Title", level)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_level_one_uses_accent() {
        let theme = Theme::default();
        let h = heading_at(1);
        let run = h.runs().next().unwrap();
        assert_eq!(h.heading_level(), Some(1));
        assert_eq!(run.style.color, Some(theme.accent));
        assert_eq!(run.style.font_size, Some(24.0));
    }

    #[test]
    fn test_levels_two_and_three_use_dark_gray() {
        let theme = Theme::default();
        for (level, size) in [(2, 18.0), (3, 14.0)] {
            let h = heading_at(level);
            let run = h.runs().next().unwrap();
            assert_eq!(run.style.color, Some(theme.dark_gray));
            assert_eq!(run.style.font_size, Some(size));
        }
    }

    #[test]
    fn test_unknown_level_gets_no_override() {
        let h = heading_at(4);
        let run = h.runs().next().unwrap();
        assert_eq!(h.heading_level(), Some(4));
        assert!(run.style.is_plain());
    }

    #[test]
    fn test_empty_heading_rejected() {
        let theme = Theme::default();
        let mut doc = Document::new();
        let mut c = Composer::new(&mut doc, &theme);
        assert!(matches!(c.heading("  ", 1), Err(Error::EmptyHeading)));
        assert!(doc.is_empty());
    }
}
