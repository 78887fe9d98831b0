//! Sheet extraction - grid of cells + configuration → string matrix
//!
//! Column 0 is never emitted: it is the sheet's label/key column. The
//! "Comment"/"Comments" column and `#`-prefixed rows are filtered according
//! to the configuration's `comment_read` flag.

use crate::excel::SheetGrid;
use crate::range::RangeSpec;
use crate::types::{Cell, Matrix, SheetConfig};

/// First emitted column; column 0 is always the excluded label column.
const START_COLUMN: usize = 1;

/// Extract a sheet into a (possibly ragged) matrix of strings.
///
/// Returns the matrix plus any non-fatal warnings (malformed range tokens).
pub fn extract_matrix(grid: &SheetGrid, config: &SheetConfig) -> (Matrix, Vec<String>) {
    let spec = RangeSpec::parse(&config.range);
    let warnings: Vec<String> = spec
        .invalid_tokens()
        .iter()
        .map(|token| {
            format!(
                "invalid range token '{}' in range '{}'",
                token,
                config.range.trim()
            )
        })
        .collect();

    let comment_column = find_comment_column(grid);

    // Transposed sheets reserve two leading rows (title + true header); the
    // header surfaces as the first data column after transposition.
    let start_row = if config.transpose { 2 } else { 0 };

    let mut matrix = Matrix::new();
    let Some(last_row) = grid.last_row_index() else {
        return (matrix, warnings);
    };

    for row_index in start_row..=last_row {
        if !spec.contains(row_index) {
            continue;
        }
        let Some(row) = grid.row(row_index) else {
            continue;
        };

        if config.comment_read {
            let first = row.first().map(Cell::canonical).unwrap_or_default();
            if first.starts_with('#') {
                continue;
            }
        }

        let mut out = Vec::with_capacity(row.len().saturating_sub(START_COLUMN));
        for (col_index, cell) in row.iter().enumerate().skip(START_COLUMN) {
            if !config.comment_read && Some(col_index) == comment_column {
                continue;
            }
            out.push(cell.canonical());
        }
        matrix.push(out);
    }

    (matrix, warnings)
}

/// Column index of the "Comment"/"Comments" header in source row 0, if any.
/// Exact, case-sensitive match on text cells only.
fn find_comment_column(grid: &SheetGrid) -> Option<usize> {
    grid.row(0)?
        .iter()
        .position(|cell| matches!(cell, Cell::Text(s) if s == "Comment" || s == "Comments"))
}
