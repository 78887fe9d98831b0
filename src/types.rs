use calamine::Data;

//==============================================================================
// Cells
//==============================================================================

/// A single spreadsheet cell, reduced to the variants the converter cares
/// about. Anything calamine reports beyond these (dates, durations, cell
/// errors) normalizes to the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// String cell
    Text(String),
    /// Numeric cell
    Number(f64),
    /// Boolean cell
    Boolean(bool),
    /// Formula cell - carries the literal expression text, never a result
    Formula(String),
    /// Blank or unsupported cell
    Empty,
}

impl Cell {
    /// Canonical string form of the cell.
    ///
    /// Numbers are truncated toward zero before formatting (`3.9` → `"3"`,
    /// `-3.9` → `"-3"`). This is a deliberate lossy policy inherited from
    /// the export format, not rounding.
    pub fn canonical(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => (*n as i64).to_string(),
            Cell::Boolean(b) => b.to_string(),
            Cell::Formula(f) => f.clone(),
            Cell::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Boolean(*b),
            _ => Cell::Empty,
        }
    }
}

//==============================================================================
// Sheet configuration
//==============================================================================

/// One row of the configuration workbook: how a single sheet is extracted,
/// transformed and written. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Sheet to read from the data workbook
    pub sheet_name: String,
    /// Output file name (e.g. "orders.csv")
    pub csv_name: String,
    /// Swap rows and columns before writing
    pub transpose: bool,
    /// When true, rows whose first column starts with '#' are dropped;
    /// when false, the "Comment"/"Comments" column is dropped instead
    pub comment_read: bool,
    /// Row-selection spec ("2-4,7", "A12", ...); empty or "NA" = all rows
    pub range: String,
    /// Sheet names exempt from transposition even when `transpose` is set
    pub exclude_from_transpose: Vec<String>,
    /// Directory under the base output directory
    pub output_directory: String,
}

impl SheetConfig {
    /// Whether this sheet's matrix actually gets transposed.
    pub fn should_transpose(&self) -> bool {
        self.transpose
            && !self
                .exclude_from_transpose
                .iter()
                .any(|name| name == &self.sheet_name)
    }
}

//==============================================================================
// Matrices
//==============================================================================

/// Extracted sheet data: ordered rows of strings. Rows may be ragged; row 0
/// (if present) is the header row.
pub type Matrix = Vec<Vec<String>>;
