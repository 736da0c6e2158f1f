//! Plain text rendering for composed documents.

use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text.
///
/// Blocks are separated by blank lines; spacers and page breaks vanish.
pub fn to_text(doc: &Document) -> Result<String> {
    Ok(doc.plain_text().trim().to_string())
}
