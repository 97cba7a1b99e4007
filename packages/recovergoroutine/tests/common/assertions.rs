//! Custom assertions for test verification

use recovergoroutine::{AnalysisReport, Diagnostic};

/// `(file name, line)` of every diagnostic, in report order
pub fn diagnostic_positions(diagnostics: &[Diagnostic]) -> Vec<(String, u32)> {
    diagnostics
        .iter()
        .map(|d| {
            let name = d
                .file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            (name, d.line())
        })
        .collect()
}

/// Assert that the report has no diagnostics
pub fn assert_clean(report: &AnalysisReport) {
    assert!(
        report.diagnostics.is_empty(),
        "Expected no diagnostics, got:\n{}",
        report
            .diagnostics
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Assert that every diagnostic carries the fixed category and message
pub fn assert_fixed_message(report: &AnalysisReport) {
    for diagnostic in &report.diagnostics {
        assert_eq!(diagnostic.category, "goroutine");
        assert_eq!(diagnostic.message, "goroutine must have recover");
    }
}
