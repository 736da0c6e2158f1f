use super::Composer;
use crate::model::{Alignment, Block, Callout, CalloutKind, Paragraph, TextRun};

/// One line of a profile card.
#[derive(Debug, Clone, Copy)]
pub enum ProfileLine<'s> {
    /// Rendered bold (placeholders, names)
    Strong(&'s str),
    /// Rendered plain (roles, reach)
    Plain(&'s str),
}

impl Composer<'_> {
    /// Emit a callout box.
    pub fn callout(&mut self, callout: Callout) {
        self.push(Block::Callout(callout));
    }

    /// Accent-filled box: bold `label` then `body`, both in the on-accent color.
    pub fn highlight(&mut self, label: &str, body: &str) {
        let theme = *self.theme();
        let text = Paragraph::with_runs([
            TextRun::bold(label).with_color(theme.on_accent),
            TextRun::new(body).with_color(theme.on_accent),
        ]);
        self.callout(
            Callout::new(CalloutKind::Highlight, theme.accent)
                .text_color(theme.on_accent)
                .paragraph(text),
        );
    }

    /// Tinted box with a centered italic quote and an attribution line.
    pub fn pull_quote(&mut self, quote: &str, attribution: &str) {
        let theme = *self.theme();
        let quote = Paragraph::with_runs([TextRun::italic(quote)
            .with_size(theme.quote_size)
            .with_color(theme.accent)])
        .align(Alignment::Center);
        let byline = Paragraph::with_text(format!("— {attribution}")).align(Alignment::Center);

        self.callout(
            Callout::new(CalloutKind::PullQuote, theme.tint)
                .paragraph(quote)
                .paragraph(byline),
        );
    }

    /// Bordered, tinted persona card; lines are separated by line breaks.
    pub fn profile_card(&mut self, lines: &[ProfileLine<'_>]) {
        let theme = *self.theme();
        let mut card = Paragraph::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                card.add_line_break();
            }
            match line {
                ProfileLine::Strong(text) => card.add_run(TextRun::bold(*text)),
                ProfileLine::Plain(text) => card.add_text(*text),
            }
        }

        self.callout(
            Callout::new(CalloutKind::Profile, theme.tint)
                .bordered()
                .paragraph(card),
        );
    }
}
