//! Brand theme shared by every composition helper.
//!
//! A [`Theme`] is an immutable value: build it once and pass `&Theme` to
//! whatever composes content. Styling is resolved from it when a block is
//! created, so stored documents do not depend on the theme that made them.

use crate::model::Rgb;

/// Fixed brand colors and type sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Brand accent (level-1 headings, table headers, highlight boxes)
    pub accent: Rgb,

    /// Body and sub-heading color
    pub dark_gray: Rgb,

    /// Muted text (cover placeholders, dates, notices)
    pub light_gray: Rgb,

    /// Light accent tint (alternate table rows, quote and profile boxes)
    pub tint: Rgb,

    /// Text drawn on top of the accent color
    pub on_accent: Rgb,

    /// Heading sizes in points for levels 1, 2 and 3
    pub heading_sizes: [f32; 3],

    /// Pull-quote text size in points
    pub quote_size: f32,
}

impl Theme {
    /// The ChatNIL brand theme.
    pub const BRAND: Theme = Theme {
        accent: Rgb(249, 115, 22),
        dark_gray: Rgb(31, 41, 55),
        light_gray: Rgb(107, 114, 128),
        tint: Rgb(255, 247, 237),
        on_accent: Rgb::WHITE,
        heading_sizes: [24.0, 18.0, 14.0],
        quote_size: 12.0,
    };

    /// Color and size for a heading level, or `None` when the level has no
    /// themed style.
    pub fn heading_style(&self, level: u8) -> Option<(Rgb, f32)> {
        match level {
            1 => Some((self.accent, self.heading_sizes[0])),
            2 => Some((self.dark_gray, self.heading_sizes[1])),
            3 => Some((self.dark_gray, self.heading_sizes[2])),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::BRAND
    }
}
