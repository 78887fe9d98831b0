//! Matrix transformation - transposition and header normalization

use crate::types::Matrix;
use regex::Regex;
use std::sync::OnceLock;

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

/// Apply the post-extraction transformation steps in order: optional
/// transposition, header standardization, header cleanup.
pub fn apply(matrix: Matrix, transpose_matrix: bool) -> Matrix {
    let mut matrix = if transpose_matrix {
        transpose(&matrix)
    } else {
        matrix
    };
    standardize_headers(&mut matrix);
    clean_headers(&mut matrix);
    matrix
}

/// Swap rows and columns. Output column count = input row count; ragged
/// input rows pad with empty strings. A matrix that is empty, or whose
/// first row is empty, is returned unchanged.
pub fn transpose(data: &[Vec<String>]) -> Matrix {
    if data.is_empty() || data[0].is_empty() {
        return data.to_vec();
    }

    let col_count = data[0].len();
    (0..col_count)
        .map(|col| {
            data.iter()
                .map(|row| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Canonicalize one header cell.
///
/// Strips `*`, strips trailing `_`, then either applies a special case
/// (`username` → `user_name`, `primarykeylist` → `primarykey_list`, both
/// case-insensitive) or lowercases and collapses each whitespace run to a
/// single `_`. Idempotent.
pub fn standardize_header(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let stripped = input.replace('*', "");
    let stripped = stripped.trim_end_matches('_');

    if stripped.eq_ignore_ascii_case("username") {
        return "user_name".to_string();
    }
    if stripped.eq_ignore_ascii_case("primarykeylist") {
        return "primarykey_list".to_string();
    }

    whitespace_re()
        .replace_all(&stripped.to_lowercase(), "_")
        .into_owned()
}

/// Replace row 0 with a standardized header row. No-op on an empty matrix.
pub fn standardize_headers(matrix: &mut Matrix) {
    if let Some(header) = matrix.first_mut() {
        *header = header.iter().map(|h| standardize_header(h)).collect();
    }
}

/// Cosmetic safety net: drop any `*` still present in row 0.
pub fn clean_headers(matrix: &mut Matrix) {
    if let Some(header) = matrix.first_mut() {
        *header = header.iter().map(|h| h.replace('*', "")).collect();
    }
}
