//! Sheetcast - config-driven Excel to CSV conversion
//!
//! A configuration workbook describes, per sheet, how rows are selected,
//! filtered and optionally transposed before being written out as CSV.
//!
//! # Features
//!
//! - Row-selection mini-language: ranges (`2-4`), single rows (`7`) and
//!   cell references (`A12`), or `NA` for everything
//! - Comment handling: drop `#`-prefixed rows, or drop the
//!   `Comment`/`Comments` column
//! - Optional transposition with per-sheet exemptions
//! - Header standardization (lowercase, whitespace to `_`, `*` removal)
//! - CSV escaping for commas, quotes and newlines
//!
//! Numeric cells export integer-truncated (`3.9` → `"3"`); formula cells
//! export their literal expression text, never an evaluated result.
//!
//! # Example
//!
//! ```no_run
//! use sheetcast::config::load_sheet_configs;
//! use sheetcast::excel::WorkbookReader;
//! use sheetcast::{extract, transform, writer};
//! use std::path::Path;
//!
//! let configs = load_sheet_configs("config.xlsx")?;
//! let mut reader = WorkbookReader::open("data.xlsx")?;
//!
//! for cfg in &configs {
//!     let grid = reader.sheet_grid(&cfg.sheet_name)?;
//!     let (matrix, _warnings) = extract::extract_matrix(&grid, cfg);
//!     let matrix = transform::apply(matrix, cfg.should_transpose());
//!     let path = Path::new("output").join(&cfg.output_directory).join(&cfg.csv_name);
//!     writer::write_csv(&path, &matrix)?;
//! }
//! # Ok::<(), sheetcast::CastError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod extract;
pub mod range;
pub mod transform;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{CastError, CastResult};
pub use types::{Cell, Matrix, SheetConfig};
