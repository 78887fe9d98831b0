//! CSV serialization

use crate::error::CastResult;
use crate::types::Matrix;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Quote a value only when it needs it: a comma, newline or double quote
/// forces quoting, with internal quotes doubled.
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('\n') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write a matrix to `path` as CSV, creating missing parent directories.
/// Rows may be ragged; each is written as-is.
pub fn write_csv(path: &Path, data: &Matrix) -> CastResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for row in data {
        let line = row
            .iter()
            .map(|value| escape_csv(value))
            .collect::<Vec<_>>()
            .join(",");
        writer.write_all(line.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()?;

    Ok(())
}
