//! On-disk testdata packages
//!
//! `succdata` must be clean, `faildata` must produce six diagnostics, and
//! the mixed scenario reports exactly its unsafe launches in source order.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use recovergoroutine::{Analyzer, AnalyzerConfig};

#[test]
fn test_succdata_is_clean() {
    let report = Analyzer::default()
        .run_paths([testdata_package("succdata")])
        .unwrap();
    assert_eq!(report.packages, 1);
    assert_eq!(report.files, 2);
    assert_clean(&report);
}

#[test]
fn test_faildata_reports_six() {
    let report = Analyzer::default()
        .run_paths([testdata_package("faildata")])
        .unwrap();
    assert_fixed_message(&report);
    let lines: Vec<u32> = report.diagnostics.iter().map(|d| d.line()).collect();
    assert_eq!(lines, vec![4, 10, 20, 25, 31, 32]);
    assert!(report.diagnostics.iter().all(|d| d.column() == 2));
}

/// Six launches: two literals deferring `recover()`, a method on `*Server`
/// that defers it, and three unsafe ones (a bare `recover()` call, a
/// deferred helper without `recover`, an unresolvable `fmt.Println`). Only
/// those three are reported; the safe method launch is not counted as a
/// fourth.
#[test]
fn test_mixed_scenario_reports_unsafe_launches_in_order() {
    let report = Analyzer::default()
        .run_paths([testdata_package("mixed")])
        .unwrap();
    assert_fixed_message(&report);
    assert_eq!(
        diagnostic_positions(&report.diagnostics),
        vec![
            ("mixed.go".to_string(), 26),
            ("mixed.go".to_string(), 30),
            ("mixed.go".to_string(), 34),
        ]
    );
}

#[test]
fn test_custom_recover_option() {
    let package = testdata_package("customrecover");

    let report = Analyzer::default().run_paths([&package]).unwrap();
    assert_eq!(report.diagnostics.len(), 2);

    let config = AnalyzerConfig::new().with_recover("Recover").unwrap();
    let report = Analyzer::new(config).run_paths([&package]).unwrap();
    assert_eq!(diagnostic_positions(&report.diagnostics), vec![("custom.go".to_string(), 10)]);
}

#[test]
fn test_all_packages_in_one_run() {
    let report = Analyzer::default()
        .run_paths([
            testdata_package("succdata"),
            testdata_package("faildata"),
            testdata_package("mixed"),
        ])
        .unwrap();
    assert_eq!(report.packages, 3);
    assert_eq!(report.diagnostics.len(), 9);
}
