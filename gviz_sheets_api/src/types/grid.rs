//! Rectangular-ish string grid produced by one feed query.

use serde::Serialize;

use super::payload::Table;

/// One positional row of cell text. Column index is the only key.
pub type Row = Vec<String>;

/// Rows returned by a single sheet query, in feed order.
///
/// Row 0 is conventionally a header. Rows may differ in length; a missing
/// cell reads as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Cell text at `(row, col)`, or `""` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Rows after the header. Empty for grids with one row or fewer.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Column 0 of every row, `""` for rows without cells.
    pub fn first_column(&self) -> Vec<&str> {
        (0..self.rows.len()).map(|i| self.cell(i, 0)).collect()
    }
}

impl From<Table> for Grid {
    fn from(table: Table) -> Self {
        let rows = table
            .rows
            .into_iter()
            .map(|row| match row.c {
                Some(cells) => cells
                    .into_iter()
                    .map(|c| c.map(|c| c.text()).unwrap_or_default())
                    .collect(),
                None => Vec::new(),
            })
            .collect();
        Grid { rows }
    }
}
