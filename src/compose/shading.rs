use crate::model::{Rgb, Shading, TableCell};

/// Set a cell's background fill.
///
/// Creates the cell's property container when it has none. Only the
/// shading changes; text and other properties are left alone, and applying
/// the same color twice is the same as applying it once.
pub fn shade_cell(cell: &mut TableCell, fill: Rgb) {
    cell.properties_mut().shading = Some(Shading { fill });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shading_creates_properties() {
        let mut cell = TableCell::text("x");
        shade_cell(&mut cell, Rgb(1, 2, 3));
        assert_eq!(cell.fill(), Some(Rgb(1, 2, 3)));
        assert_eq!(cell.plain_text(), "x");
    }

    #[test]
    fn test_shading_is_idempotent() {
        let mut once = TableCell::text("x");
        shade_cell(&mut once, Rgb::WHITE);
        let mut twice = once.clone();
        shade_cell(&mut twice, Rgb::WHITE);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reshading_replaces_fill() {
        let mut cell = TableCell::text("x");
        shade_cell(&mut cell, Rgb::WHITE);
        shade_cell(&mut cell, Rgb(0, 0, 0));
        assert_eq!(cell.fill(), Some(Rgb(0, 0, 0)));
    }
}
