use serde::{Deserialize, Serialize};

use crate::models::text::TextContent;
use crate::models::Extra;

/// A location of a single table cell within a table.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/tables#TableCellLocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellLocation {
    /// The 0-based row index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index: Option<i32>,
    /// The 0-based column index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_index: Option<i32>,
}

/// Properties and contents of each cell.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/tables#TableCell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// The location of the cell within the table. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<TableCellLocation>,

    /// The text content of the cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,

    /// Spans, cell properties and the rest.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Properties and contents of each row in a table.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/tables#TableRow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Cells spanning multiple columns are represented only once, so the
    /// position in this list is not always the column index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_cells: Option<Vec<TableCell>>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// A PageElement kind representing a table.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/tables#Table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Number of rows in the table.
    pub rows: i32,
    /// Number of columns in the table.
    pub columns: i32,

    /// Properties and contents of each row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_rows: Option<Vec<TableRow>>,

    /// Column widths, border grids and the rest.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Table {
    /// Cell at a 1-based row and column, `None` when outside the table.
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        let (r, c) = (row.checked_sub(1)?, col.checked_sub(1)?);
        let cells = self.table_rows.as_ref()?.get(r)?.table_cells.as_ref()?;
        position_of(cells, c).map(|i| &cells[i])
    }

    /// Mutable cell at a 1-based row and column.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        let (r, c) = (row.checked_sub(1)?, col.checked_sub(1)?);
        let cells = self.table_rows.as_mut()?.get_mut(r)?.table_cells.as_mut()?;
        let index = position_of(cells, c)?;
        cells.get_mut(index)
    }

    /// Text of a cell, empty for cells that never held text.
    pub fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        self.cell(row, col)
            .map(|cell| cell.text.as_ref().map(|t| t.plain_text()).unwrap_or_default())
    }
}

fn position_of(cells: &[TableCell], column: usize) -> Option<usize> {
    let located = cells.iter().position(|cell| {
        cell.location
            .as_ref()
            .and_then(|l| l.column_index)
            .is_some_and(|c| c >= 0 && c as usize == column)
    });
    match located {
        Some(index) => Some(index),
        None if cells.iter().all(|cell| cell.location.is_none()) && column < cells.len() => {
            Some(column)
        }
        None => None,
    }
}
