//! Document model types.
//!
//! The model is the document of record: composition helpers append to it,
//! the store persists it losslessly, and every renderer reads from it.

mod block;
mod color;
mod document;
mod paragraph;
mod table;

pub use block::{Block, Callout, CalloutKind};
pub use color::Rgb;
pub use document::{Document, Metadata, SectionSpan};
pub use paragraph::{
    Alignment, InlineContent, ListInfo, Paragraph, ParagraphStyle, TextRun, TextStyle,
};
pub use table::{CellProperties, Shading, Table, TableCell, TableRow};
