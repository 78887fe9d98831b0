//! Workbook reader - .xlsx → grids of typed cells

use crate::error::{CastError, CastResult};
use crate::types::Cell;
use calamine::{open_workbook, Reader, Xlsx};
use std::path::Path;

/// A sheet materialized as rows of [`Cell`]s, 0-based and addressed by the
/// sheet's absolute coordinates. Trailing empty cells are trimmed from each
/// row, so a row's length is its last populated column + 1.
#[derive(Debug, Clone)]
pub struct SheetGrid {
    rows: Vec<Vec<Cell>>,
}

impl SheetGrid {
    /// Build a grid, trimming trailing empty cells from every row. A row
    /// with no populated cells at all is kept as a placeholder so absolute
    /// row indices stay valid, but reads back as absent.
    pub fn from_rows(mut rows: Vec<Vec<Cell>>) -> Self {
        for row in &mut rows {
            while row.last().is_some_and(Cell::is_empty) {
                row.pop();
            }
        }
        Self { rows }
    }

    /// The cells of row `index`, or `None` for out-of-range or blank rows.
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        match self.rows.get(index) {
            Some(row) if !row.is_empty() => Some(row.as_slice()),
            _ => None,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Index of the last populated row, if any.
    pub fn last_row_index(&self) -> Option<usize> {
        self.rows.iter().rposition(|row| !row.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.last_row_index().is_none()
    }
}

/// Read-only handle on a data workbook. Opened once per run; sheet ranges
/// are pulled lazily per configuration.
pub struct WorkbookReader {
    workbook: Xlsx<std::io::BufReader<std::fs::File>>,
}

impl WorkbookReader {
    pub fn open<P: AsRef<Path>>(path: P) -> CastResult<Self> {
        let workbook: Xlsx<_> = open_workbook(path.as_ref())?;
        Ok(Self { workbook })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// (rows, columns) of a sheet's populated range.
    pub fn sheet_size(&mut self, sheet_name: &str) -> CastResult<(usize, usize)> {
        if !self.sheet_names().iter().any(|n| n == sheet_name) {
            return Err(CastError::SheetNotFound(sheet_name.to_string()));
        }
        let range = self.workbook.worksheet_range(sheet_name)?;
        Ok(range.get_size())
    }

    /// Load one sheet as a [`SheetGrid`], overlaying the formula range so
    /// formula cells carry their literal expression text.
    pub fn sheet_grid(&mut self, sheet_name: &str) -> CastResult<SheetGrid> {
        if !self.sheet_names().iter().any(|n| n == sheet_name) {
            return Err(CastError::SheetNotFound(sheet_name.to_string()));
        }

        let range = self.workbook.worksheet_range(sheet_name)?;
        let formulas = self.workbook.worksheet_formula(sheet_name).ok();

        let mut rows = Vec::new();
        if let Some((end_row, end_col)) = range.end() {
            // Walk absolute coordinates from (0, 0): calamine ranges start
            // at the first populated cell, but extraction indexes from A1.
            for r in 0..=end_row {
                let mut cells = Vec::with_capacity(end_col as usize + 1);
                for c in 0..=end_col {
                    let mut cell = range
                        .get_value((r, c))
                        .map(Cell::from)
                        .unwrap_or(Cell::Empty);
                    if let Some(formula) = formulas
                        .as_ref()
                        .and_then(|f| f.get_value((r, c)))
                        .filter(|f| !f.is_empty())
                    {
                        cell = Cell::Formula(formula.clone());
                    }
                    cells.push(cell);
                }
                rows.push(cells);
            }
        }

        Ok(SheetGrid::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_grid_trims_trailing_empties() {
        let grid = SheetGrid::from_rows(vec![vec![
            text("a"),
            Cell::Empty,
            text("b"),
            Cell::Empty,
            Cell::Empty,
        ]]);
        let row = grid.row(0).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row[2], text("b"));
    }

    #[test]
    fn test_blank_rows_read_as_absent() {
        let grid = SheetGrid::from_rows(vec![
            vec![text("a")],
            vec![Cell::Empty, Cell::Empty],
            vec![text("c")],
        ]);
        assert!(grid.row(0).is_some());
        assert!(grid.row(1).is_none());
        assert!(grid.row(2).is_some());
        assert!(grid.row(99).is_none());
        assert_eq!(grid.last_row_index(), Some(2));
    }

    #[test]
    fn test_empty_grid() {
        let grid = SheetGrid::from_rows(vec![]);
        assert!(grid.is_empty());
        assert_eq!(grid.last_row_index(), None);
        assert!(grid.cell(0, 0).is_none());
    }
}
