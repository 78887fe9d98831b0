//! Configuration loading
//!
//! The configuration lives in its own workbook: the first sheet, one header
//! row, then one row per sheet to convert. Fields sit at fixed columns
//! (column 0 is a reserved row id and ignored).

use crate::error::{CastError, CastResult};
use crate::excel::WorkbookReader;
use crate::types::{Cell, SheetConfig};
use std::path::Path;

const COL_SHEET_NAME: usize = 1;
const COL_CSV_NAME: usize = 2;
const COL_TRANSPOSE: usize = 3;
const COL_COMMENT_READ: usize = 4;
const COL_RANGE: usize = 5;
const COL_EXCLUDE: usize = 6;
const COL_OUTPUT_DIR: usize = 7;

/// Load every configuration row from the workbook's first sheet. Missing
/// fields default (empty string / false / empty list); blank rows are
/// skipped. Fails only when the workbook itself cannot be read.
pub fn load_sheet_configs<P: AsRef<Path>>(path: P) -> CastResult<Vec<SheetConfig>> {
    let mut reader = WorkbookReader::open(path)?;
    let first_sheet = reader
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CastError::Config("configuration workbook has no sheets".to_string()))?;
    let grid = reader.sheet_grid(&first_sheet)?;

    let mut configs = Vec::new();
    let Some(last_row) = grid.last_row_index() else {
        return Ok(configs);
    };

    // Row 0 is the header row.
    for row_index in 1..=last_row {
        let Some(row) = grid.row(row_index) else {
            continue;
        };
        configs.push(SheetConfig {
            sheet_name: text_field(row, COL_SHEET_NAME),
            csv_name: text_field(row, COL_CSV_NAME),
            transpose: bool_field(row, COL_TRANSPOSE),
            comment_read: bool_field(row, COL_COMMENT_READ),
            range: text_field(row, COL_RANGE),
            exclude_from_transpose: list_field(row, COL_EXCLUDE),
            output_directory: text_field(row, COL_OUTPUT_DIR),
        });
    }

    Ok(configs)
}

fn text_field(row: &[Cell], index: usize) -> String {
    row.get(index).map(Cell::canonical).unwrap_or_default()
}

/// Boolean-as-text: a true Boolean cell, or text equal to "true" after
/// trimming, case-insensitive. Everything else is false.
fn bool_field(row: &[Cell], index: usize) -> bool {
    match row.get(index) {
        Some(Cell::Boolean(b)) => *b,
        Some(Cell::Text(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Comma-separated text cell → trimmed entries. Non-text cells decode to an
/// empty list.
fn list_field(row: &[Cell], index: usize) -> Vec<String> {
    match row.get(index) {
        Some(Cell::Text(s)) => s.split(',').map(|part| part.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}
