//! Integration tests for the composition helpers through the public API.

use reportkit::compose::{build_table, shade_cell, split_label, Composer, ProfileLine};
use reportkit::content::{compose_overview, TOC};
use reportkit::{Block, Document, Error, Rgb, TableCell, Theme};

#[test]
fn test_theme_brand_colors() {
    let theme = Theme::default();
    assert_eq!(theme.accent, "F97316".parse::<Rgb>().unwrap());
    assert_eq!(theme.dark_gray.hex(), "1F2937");
    assert_eq!(theme.light_gray.hex(), "6B7280");
    assert_eq!(theme.tint.hex(), "FFF7ED");
}

#[test]
fn test_shading_is_idempotent() {
    let mut cell = TableCell::text("x");
    shade_cell(&mut cell, Rgb(1, 2, 3));
    let once = cell.clone();
    shade_cell(&mut cell, Rgb(1, 2, 3));
    assert_eq!(cell, once);
    assert_eq!(cell.fill(), Some(Rgb(1, 2, 3)));
}

#[test]
fn test_label_splitting() {
    let runs = split_label("Policy Fit: Does this comply?", true);
    assert_eq!(runs[0].text, "Policy Fit:");
    assert_eq!(runs[1].text, " Does this comply?");
}

#[test]
fn test_table_parity_over_many_rows() {
    let theme = Theme::default();
    let rows: Vec<[String; 2]> = (0..7).map(|i| [i.to_string(), "v".to_string()]).collect();
    let table = build_table(&theme, &["N", "V"], rows, false).unwrap();

    for (i, row) in table.body().iter().enumerate() {
        let expected = if i % 2 == 0 { Some(theme.tint) } else { None };
        assert_eq!(row.cells[0].fill(), expected, "row {i}");
    }
}

#[test]
fn test_row_width_error_message() {
    let err = build_table(&Theme::default(), &["A", "B", "C"], [vec!["1", "2"]], false)
        .unwrap_err();
    assert_eq!(err.to_string(), "Table row 0 has 2 cells, expected 3");
}

#[test]
fn test_empty_heading_is_error() {
    let theme = Theme::default();
    let mut doc = Document::new();
    let mut c = Composer::new(&mut doc, &theme);
    assert!(matches!(c.heading("", 2), Err(Error::EmptyHeading)));
}

#[test]
fn test_profile_card_through_composer() {
    let theme = Theme::default();
    let mut doc = Document::new();
    Composer::new(&mut doc, &theme).profile_card(&[
        ProfileLine::Strong("Angela Washington, J.D."),
        ProfileLine::Plain("D1 • 650 Athletes • 22 Sports"),
    ]);
    assert!(matches!(doc.last_block(), Some(Block::Callout(c)) if c.bordered));
}

#[test]
fn test_overview_toc_and_sections() {
    let theme = Theme::default();
    let mut doc = Document::new();
    compose_overview(&mut Composer::new(&mut doc, &theme)).unwrap();

    let level_one: Vec<String> = doc
        .headings()
        .filter(|(_, level, _)| *level == 1)
        .map(|(_, _, text)| text)
        .collect();
    for entry in TOC.iter() {
        assert!(level_one.iter().any(|t| t == entry.title));
    }
    assert_eq!(doc.sections().len(), 7);
    assert_eq!(TOC.len(), 8);
}
