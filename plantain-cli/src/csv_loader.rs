//! CSV loader for quarterly actuals.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). All header
//! names are case-sensitive and must match exactly.
//!
//! | Column       | Required | Type    | Notes                               |
//! |--------------|----------|---------|-------------------------------------|
//! | `quarter`    | yes      | string  | Free label, e.g. `Q1 2025`          |
//! | `revenue`    | yes      | decimal | Naira, e.g. `2500000`               |
//! | `production` | yes      | decimal | Kilograms of flour                  |
//! | `target`     | yes      | decimal | Revenue target for the quarter      |
//! | `expenses`   | yes      | decimal | Naira                               |
//!
//! ### Example
//!
//! ```csv
//! quarter,revenue,production,target,expenses
//! Q1 2025,2500000,5000,3000000,1800000
//! Q2 2025,3200000,6500,3200000,2100000
//! ```
use std::path::{Path, PathBuf};

use plantain_core::calculations::progress::QuarterRecord;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    quarter: String,
    revenue: Decimal,
    production: Decimal,
    target: Decimal,
    expenses: Decimal,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row has an empty `quarter` label. `row` is 1-based (header = row 0).
    #[error("missing quarter label on row {row}")]
    MissingQuarter { row: usize },

    #[error("column '{column}' must be non-negative on row {row}, got {value}")]
    NegativeValue {
        column: &'static str,
        value: Decimal,
        row: usize,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<QuarterRecord, CsvLoadError> {
    if row.quarter.is_empty() {
        return Err(CsvLoadError::MissingQuarter { row: row_number });
    }
    for (column, value) in [
        ("revenue", row.revenue),
        ("production", row.production),
        ("target", row.target),
        ("expenses", row.expenses),
    ] {
        if value < Decimal::ZERO {
            return Err(CsvLoadError::NegativeValue {
                column,
                value,
                row: row_number,
            });
        }
    }

    Ok(QuarterRecord {
        quarter: row.quarter,
        revenue: row.revenue,
        production: row.production,
        target: row.target,
        expenses: row.expenses,
    })
}

/// Parse CSV text and return the quarters in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [CsvLoadError::MissingQuarter] / [CsvLoadError::NegativeValue] – if a
///   row fails validation.
pub fn load_from_str(input: &str) -> Result<Vec<QuarterRecord>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads a file from disk and delegates to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<QuarterRecord>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let quarters = load_from_str(&contents)?;
    debug!(path = %path.display(), rows = quarters.len(), "loaded quarterly actuals");
    Ok(quarters)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const HEADER: &str = "quarter,revenue,production,target,expenses";

    // -----------------------------------------------------------------------
    // Helper: two quarters
    // -----------------------------------------------------------------------
    const TWO_QUARTERS_CSV: &str = "\
quarter,revenue,production,target,expenses
Q1 2025,2500000,5000,3000000,1800000
Q2 2025,3200000.50,6500,3200000,2100000
";

    // -----------------------------------------------------------------------
    // 1. Happy path
    // -----------------------------------------------------------------------
    #[test]
    fn test_rows_parse_in_file_order() {
        let quarters = load_from_str(TWO_QUARTERS_CSV).expect("should parse");

        assert_eq!(quarters.len(), 2);
        assert_eq!(quarters[0].quarter, "Q1 2025");
        assert_eq!(quarters[0].revenue, dec!(2500000));
        assert_eq!(quarters[0].expenses, dec!(1800000));
        assert_eq!(quarters[1].quarter, "Q2 2025");
        assert_eq!(quarters[1].revenue, dec!(3200000.50));
        assert_eq!(quarters[1].production, dec!(6500));
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "\
expenses,target,quarter,production,revenue
1800000,3000000,Q1,5000,2500000
";
        let quarters = load_from_str(csv).expect("column order should not matter");

        assert_eq!(quarters[0].quarter, "Q1");
        assert_eq!(quarters[0].target, dec!(3000000));
        assert_eq!(quarters[0].revenue, dec!(2500000));
    }

    #[test]
    fn test_whitespace_around_values_is_trimmed() {
        let csv = "\
quarter , revenue , production , target , expenses
 Q3 2025 , 3800000 , 7200 , 3500000 , 2300000
";
        let quarters = load_from_str(csv).expect("should tolerate surrounding whitespace");

        assert_eq!(quarters[0].quarter, "Q3 2025");
        assert_eq!(quarters[0].production, dec!(7200));
    }

    #[test]
    fn test_header_only_returns_empty_vec() {
        let quarters = load_from_str(&format!("{HEADER}\n")).expect("header-only CSV is valid");
        assert!(quarters.is_empty());
    }

    // -----------------------------------------------------------------------
    // 2. Errors
    // -----------------------------------------------------------------------
    #[test]
    fn test_missing_column_returns_parse_error() {
        let csv = "quarter,revenue,production,target\nQ1,1,1,1\n";

        match load_from_str(csv).unwrap_err() {
            CsvLoadError::Parse(_) => {}
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_value_returns_parse_error() {
        let csv = format!("{HEADER}\nQ1,lots,5000,3000000,1800000\n");

        match load_from_str(&csv).unwrap_err() {
            CsvLoadError::Parse(_) => {}
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_quarter_label_reports_row() {
        let csv = format!("{HEADER}\nQ1,1,1,1,1\n,2,2,2,2\n");

        match load_from_str(&csv).unwrap_err() {
            CsvLoadError::MissingQuarter { row } => assert_eq!(row, 2),
            other => panic!("expected MissingQuarter, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_value_names_column() {
        let csv = format!("{HEADER}\nQ1,2500000,5000,3000000,-1\n");

        match load_from_str(&csv).unwrap_err() {
            CsvLoadError::NegativeValue { column, value, row } => {
                assert_eq!(column, "expenses");
                assert_eq!(value, dec!(-1));
                assert_eq!(row, 1);
            }
            other => panic!("expected NegativeValue, got {:?}", other),
        }
    }
}
