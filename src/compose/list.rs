use super::Composer;
use crate::model::{Paragraph, TextRun};

/// Split a list item into runs.
///
/// With `bold_first_part` set and a colon present, the text up to and
/// including the first colon becomes a bold run and the remainder a plain
/// run. Otherwise the whole item is one plain run.
pub fn split_label(item: &str, bold_first_part: bool) -> Vec<TextRun> {
    match item.split_once(':') {
        Some((label, rest)) if bold_first_part => {
            vec![TextRun::bold(format!("{label}:")), TextRun::new(rest)]
        }
        _ => vec![TextRun::new(item)],
    }
}

impl Composer<'_> {
    /// Emit one bullet item per entry, in order.
    pub fn bullet_list<I, S>(&mut self, items: I, bold_first_part: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            let runs = split_label(item.as_ref(), bold_first_part);
            self.push_paragraph(Paragraph::bullet(runs));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use crate::theme::Theme;

    #[test]
    fn test_split_on_first_colon_only() {
        let runs = split_label("A: B: C", true);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "A:");
        assert!(runs[0].style.bold);
        assert_eq!(runs[1].text, " B: C");
        assert!(runs[1].style.is_plain());
    }

    #[test]
    fn test_no_colon_single_plain_run() {
        let runs = split_label("No label here", true);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "No label here");
        assert!(runs[0].style.is_plain());
    }

    #[test]
    fn test_flag_unset_keeps_colon_item_whole() {
        let runs = split_label("Label: detail", false);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Label: detail");
        assert!(!runs[0].style.bold);
    }

    #[test]
    fn test_trailing_colon() {
        let runs = split_label("Key Components:", true);
        assert_eq!(runs[0].text, "Key Components:");
        assert_eq!(runs[1].text, "");
    }

    #[test]
    fn test_bullet_list_preserves_order_and_duplicates() {
        let theme = Theme::default();
        let mut doc = Document::new();
        let mut c = Composer::new(&mut doc, &theme);
        c.bullet_list(["b", "a", "b"], false);

        let texts: Vec<_> = doc.blocks.iter().map(|b| b.plain_text()).collect();
        assert_eq!(texts, ["b", "a", "b"]);
        assert!(doc
            .blocks
            .iter()
            .all(|b| b.as_paragraph().is_some_and(|p| p.is_list_item())));
    }
}
