//! Row-selection mini-language
//!
//! A range spec is a comma-separated list of tokens, each one of:
//!
//! - `A-B`  - 1-based inclusive bounds, e.g. `2-4`
//! - `N`    - a single 1-based row, e.g. `7`
//! - a cell reference, e.g. `A12` - selects that cell's row, column ignored
//!
//! An empty spec, or the case-insensitive literal `NA`, disables selection
//! entirely. Malformed tokens are collected rather than failing the parse;
//! the remaining tokens still apply.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn bare_row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").expect("static pattern"))
}

fn cell_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]+(\d+)$").expect("static pattern"))
}

#[derive(Debug, Clone, PartialEq)]
enum Selection {
    /// No restriction: every row in the scan window is eligible
    All,
    /// Only these 0-based row indices. An empty set selects nothing.
    Rows(HashSet<usize>),
}

/// A parsed row-selection spec. Ephemeral: built per configuration, used as
/// a membership test during extraction, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSpec {
    selection: Selection,
    invalid_tokens: Vec<String>,
}

impl RangeSpec {
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.is_empty() || spec.eq_ignore_ascii_case("NA") {
            return Self {
                selection: Selection::All,
                invalid_tokens: Vec::new(),
            };
        }

        let mut rows = HashSet::new();
        let mut invalid_tokens = Vec::new();

        for token in spec.split(',') {
            let token = token.trim();
            if !parse_token(token, &mut rows) {
                invalid_tokens.push(token.to_string());
            }
        }

        Self {
            selection: Selection::Rows(rows),
            invalid_tokens,
        }
    }

    /// True when the spec imposes no restriction (empty / "NA").
    pub fn is_unrestricted(&self) -> bool {
        self.selection == Selection::All
    }

    /// Membership test for a 0-based row index.
    pub fn contains(&self, row_index: usize) -> bool {
        match &self.selection {
            Selection::All => true,
            Selection::Rows(rows) => rows.contains(&row_index),
        }
    }

    /// Tokens that matched no production and were skipped.
    pub fn invalid_tokens(&self) -> &[String] {
        &self.invalid_tokens
    }
}

/// Parse one token into 0-based row indices. Returns false for tokens that
/// match no production.
fn parse_token(token: &str, rows: &mut HashSet<usize>) -> bool {
    if let Some((low, high)) = token.split_once('-') {
        // `A-B` bounds are 1-based and must both parse; a reversed range
        // simply expands to nothing.
        let (Ok(low), Ok(high)) = (low.trim().parse::<usize>(), high.trim().parse::<usize>())
        else {
            return false;
        };
        if low == 0 || high == 0 {
            return false;
        }
        for row in low..=high {
            rows.insert(row - 1);
        }
        true
    } else if bare_row_re().is_match(token) {
        match token.parse::<usize>() {
            Ok(row) if row > 0 => {
                rows.insert(row - 1);
                true
            }
            _ => false,
        }
    } else if let Some(captures) = cell_ref_re().captures(token) {
        // Cell reference: only the row part matters.
        match captures[1].parse::<usize>() {
            Ok(row) if row > 0 => {
                rows.insert(row - 1);
                true
            }
            _ => false,
        }
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(spec: &str) -> Vec<usize> {
        let spec = RangeSpec::parse(spec);
        let mut rows: Vec<usize> = (0..100).filter(|&i| spec.contains(i)).collect();
        rows.sort_unstable();
        rows
    }

    #[test]
    fn test_empty_and_na_are_unrestricted() {
        assert!(RangeSpec::parse("").is_unrestricted());
        assert!(RangeSpec::parse("  ").is_unrestricted());
        assert!(RangeSpec::parse("NA").is_unrestricted());
        assert!(RangeSpec::parse("na").is_unrestricted());
        assert!(RangeSpec::parse("Na").is_unrestricted());
        assert!(RangeSpec::parse("NA").contains(12345));
    }

    #[test]
    fn test_range_and_single_tokens() {
        assert_eq!(selected("2-4,7"), vec![1, 2, 3, 6]);
        assert_eq!(selected("1"), vec![0]);
        assert_eq!(selected("1-1"), vec![0]);
    }

    #[test]
    fn test_cell_reference_token_uses_row_only() {
        assert_eq!(selected("A12"), vec![11]);
        assert_eq!(selected("ZZ3"), vec![2]);
        assert_eq!(selected("A12,B2"), vec![1, 11]);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(selected("3,3,2-3"), vec![1, 2]);
    }

    #[test]
    fn test_reversed_range_selects_nothing() {
        let spec = RangeSpec::parse("7-3");
        assert!(spec.invalid_tokens().is_empty());
        assert_eq!(selected("7-3"), Vec::<usize>::new());
    }

    #[test]
    fn test_malformed_tokens_are_skipped_not_fatal() {
        let spec = RangeSpec::parse("2-4,potato,7");
        assert_eq!(spec.invalid_tokens(), ["potato"]);
        assert_eq!(selected("2-4,potato,7"), vec![1, 2, 3, 6]);
    }

    #[test]
    fn test_zero_rows_are_malformed() {
        assert_eq!(RangeSpec::parse("0").invalid_tokens(), ["0"]);
        assert_eq!(RangeSpec::parse("0-2").invalid_tokens(), ["0-2"]);
        assert_eq!(RangeSpec::parse("A0").invalid_tokens(), ["A0"]);
    }

    #[test]
    fn test_lowercase_cell_reference_is_malformed() {
        assert_eq!(RangeSpec::parse("a12").invalid_tokens(), ["a12"]);
    }

    #[test]
    fn test_well_formed_empty_selection_selects_nothing() {
        // Not unrestricted: valid spec, empty result set.
        let spec = RangeSpec::parse("7-3");
        assert!(!spec.is_unrestricted());
        assert!(!spec.contains(0));
    }

    #[test]
    fn test_tokens_are_trimmed() {
        assert_eq!(selected(" 2 - 4 , 7 "), vec![1, 2, 3, 6]);
    }
}
