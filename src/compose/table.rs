use super::{shade_cell, Composer};
use crate::error::{Error, Result};
use crate::model::{Alignment, Block, Table, TableCell, TableRow};
use crate::theme::Theme;

/// Build a themed table from headers and rows.
///
/// Every row must have exactly `headers.len()` cells; a mismatch is
/// rejected before anything is built. The header row is accent-filled with
/// bold white text. Data rows at even 0-based index get the light tint and
/// odd rows stay unshaded. With `first_col_bold`, column 0 of each data row
/// is bold.
pub fn build_table<R, C>(
    theme: &Theme,
    headers: &[&str],
    rows: impl IntoIterator<Item = R>,
    first_col_bold: bool,
) -> Result<Table>
where
    R: IntoIterator<Item = C>,
    C: ToString,
{
    if headers.is_empty() {
        return Err(Error::EmptyTable);
    }

    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(|c| c.to_string()).collect())
        .collect();
    if let Some((row, cells)) = rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != headers.len())
    {
        return Err(Error::RowWidth {
            row,
            expected: headers.len(),
            found: cells.len(),
        });
    }

    let mut table = Table::with_header(1);
    table.alignment = Alignment::Center;
    table.bordered = true;

    let header_cells = headers
        .iter()
        .map(|text| {
            let mut cell = TableCell::text(*text);
            for run in cell.content.iter_mut().flat_map(|p| p.runs_mut()) {
                run.style.bold = true;
                run.style.color = Some(theme.on_accent);
            }
            shade_cell(&mut cell, theme.accent);
            cell
        })
        .collect();
    table.add_row(TableRow::header(header_cells));

    for (row_idx, values) in rows.into_iter().enumerate() {
        let cells = values
            .into_iter()
            .enumerate()
            .map(|(col_idx, text)| {
                let mut cell = TableCell::text(text);
                if first_col_bold && col_idx == 0 {
                    for run in cell.content.iter_mut().flat_map(|p| p.runs_mut()) {
                        run.style.bold = true;
                    }
                }
                if row_idx % 2 == 0 {
                    shade_cell(&mut cell, theme.tint);
                }
                cell
            })
            .collect();
        table.add_row(TableRow::new(cells));
    }

    Ok(table)
}

impl Composer<'_> {
    /// Emit a themed table followed by a spacing paragraph.
    ///
    /// See [`build_table`] for styling and the row-width precondition.
    /// Returns the emitted table for further adjustment.
    pub fn table<R, C>(
        &mut self,
        headers: &[&str],
        rows: impl IntoIterator<Item = R>,
        first_col_bold: bool,
    ) -> Result<&mut Table>
    where
        R: IntoIterator<Item = C>,
        C: ToString,
    {
        let table = build_table(self.theme(), headers, rows, first_col_bold)?;
        let index = self.push(Block::Table(table));
        self.spacer();

        match &mut self.doc.blocks[index] {
            Block::Table(t) => Ok(t),
            _ => unreachable!("block {index} was just pushed as a table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, Rgb};

    fn sample(first_col_bold: bool) -> Table {
        build_table(
            &Theme::default(),
            &["Stakeholder", "Risk"],
            [
                ["Athletes", "Eligibility"],
                ["Schools", "Sanctions"],
                ["Brands", "Association"],
                ["Parents", "Safety"],
            ],
            first_col_bold,
        )
        .unwrap()
    }

    #[test]
    fn test_header_row_styling() {
        let theme = Theme::default();
        let table = sample(false);
        let header = &table.header()[0];
        assert!(header.is_header);
        for cell in &header.cells {
            assert_eq!(cell.fill(), Some(theme.accent));
            let run = cell.content[0].runs().next().unwrap();
            assert!(run.style.bold);
            assert_eq!(run.style.color, Some(Rgb::WHITE));
        }
    }

    #[test]
    fn test_alternating_rows_by_index_parity() {
        let theme = Theme::default();
        let table = sample(false);
        let fills: Vec<_> = table.body().iter().map(|r| r.cells[0].fill()).collect();
        assert_eq!(fills, [Some(theme.tint), None, Some(theme.tint), None]);
        assert!(table
            .body()
            .iter()
            .all(|r| r.cells.iter().all(|c| c.fill() == r.cells[0].fill())));
    }

    #[test]
    fn test_first_column_bold() {
        let table = sample(true);
        for row in table.body() {
            assert!(row.cells[0].content[0].runs().all(|r| r.style.bold));
            assert!(row.cells[1].content[0].runs().all(|r| !r.style.bold));
        }

        let plain = sample(false);
        assert!(plain
            .body()
            .iter()
            .all(|r| r.cells[0].content[0].runs().all(|run| !run.style.bold)));
    }

    #[test]
    fn test_row_width_mismatch_rejected() {
        let result = build_table(
            &Theme::default(),
            &["A", "B"],
            vec![vec!["1", "2"], vec!["3"]],
            false,
        );
        assert!(matches!(
            result,
            Err(Error::RowWidth {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_empty_headers_rejected() {
        let rows: Vec<Vec<&str>> = Vec::new();
        let result = build_table(&Theme::default(), &[], rows, false);
        assert!(matches!(result, Err(Error::EmptyTable)));
    }

    #[test]
    fn test_cells_coerced_to_text() {
        let table = build_table(&Theme::default(), &["N", "Pct"], [[1, 30]], false).unwrap();
        assert_eq!(table.body()[0].plain_text(), "1\t30");
    }

    #[test]
    fn test_composer_table_adds_spacer() {
        let theme = Theme::default();
        let mut doc = Document::new();
        let mut c = Composer::new(&mut doc, &theme);
        let table = c.table(&["A"], [["x"]], false).unwrap();
        table.bordered = false;

        assert_eq!(doc.block_count(), 2);
        assert!(matches!(&doc.blocks[0], Block::Table(t) if !t.bordered));
        assert!(doc.blocks[1].as_paragraph().is_some_and(|p| p.is_empty()));
    }

    #[test]
    fn test_rejected_table_emits_nothing() {
        let theme = Theme::default();
        let mut doc = Document::new();
        let mut c = Composer::new(&mut doc, &theme);
        assert!(c.table(&["A", "B"], [["only one"]], false).is_err());
        assert!(doc.is_empty());
    }
}
