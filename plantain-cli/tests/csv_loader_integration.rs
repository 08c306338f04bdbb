//! Integration tests that exercise the loader against an on-disk fixture file.
//!
//! These complement the unit tests inside csv_loader.rs (which all use
//! inline string literals) by verifying that the full read-from-disk path
//! works end-to-end, including feeding the imported quarters to progress
//! tracking.

use std::path::Path;

use plantain_cli::commands;
use plantain_cli::csv_loader::{self, CsvLoadError};
use plantain_cli::forms::ProgressForm;
use plantain_core::calculations::progress::{Targets, track_progress};
use rust_decimal_macros::dec;

/// Path to the sample CSV shipped with the test fixtures.
fn fixture_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("quarterly_actuals.csv")
        .leak()
}

#[test]
fn test_load_fixture_file_succeeds() {
    let quarters =
        csv_loader::load_from_file(fixture_path()).expect("fixture file should load without error");

    assert_eq!(quarters.len(), 3);
}

#[test]
fn test_load_fixture_keeps_labels_and_values() {
    let quarters = csv_loader::load_from_file(fixture_path()).unwrap();

    assert_eq!(quarters[0].quarter, "Q3 2025");
    assert_eq!(quarters[0].revenue, dec!(2800000));
    assert_eq!(quarters[2].quarter, "Q1 2026");
    assert_eq!(quarters[2].production, dec!(7400));
    assert_eq!(quarters[2].expenses, dec!(2400000));
}

#[test]
fn test_fixture_metrics() {
    let quarters = csv_loader::load_from_file(fixture_path()).unwrap();

    let report = track_progress(quarters, None).unwrap();

    assert_eq!(report.metrics.total_revenue, dec!(10100000));
    assert_eq!(report.metrics.total_production, dec!(19800));
    // (3.9M - 2.8M) / 2.8M = 39.28...%
    assert_eq!(report.metrics.growth_rate, dec!(39.3));
}

#[test]
fn test_fixture_with_targets_moves_last_target() {
    let quarters = csv_loader::load_from_file(fixture_path()).unwrap();
    let targets = Targets {
        revenue: dec!(5000000),
        production: dec!(8000),
    };

    let report = track_progress(quarters, Some(&targets)).unwrap();

    assert!(report.targets_applied);
    assert_eq!(report.quarters[2].target, dec!(5000000));
    assert_eq!(report.quarters[2].revenue, dec!(3900000));
}

#[test]
fn test_progress_command_reads_actuals_flag() {
    let form = ProgressForm {
        actuals: Some(fixture_path().to_path_buf()),
        ..Default::default()
    };

    let report = commands::progress(&form).unwrap();

    assert_eq!(report.quarters.len(), 3);
    assert_eq!(report.quarters[1].quarter, "Q4 2025");
}

#[test]
fn test_load_nonexistent_file_returns_io_error() {
    let bad_path = Path::new("/this/path/does/not/exist.csv");

    match csv_loader::load_from_file(bad_path) {
        Err(CsvLoadError::Io { path, .. }) => assert_eq!(path, bad_path),
        other => panic!("expected Io error, got {:?}", other),
    }
}
