//! Validation report formatting.

use std::fmt::Write;

use gwasgene_core::ValidationReport;

/// Truncates a string to a maximum length, adding "..." if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Render a report as human-readable lines.
pub fn format_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    let status = if report.is_ok() { "OK  " } else { "FAIL" };
    let _ = writeln!(
        out,
        "{status} {} ({} rows, {} invalid)",
        report.path.display(),
        report.rows,
        report.invalid()
    );

    for row in &report.errors {
        let _ = writeln!(out, "     {}", truncate_string(&row.to_string(), 160));
    }
    if report.is_truncated() {
        let _ = writeln!(
            out,
            "     ... {} more invalid row(s)",
            report.invalid() - report.errors.len()
        );
    }
    out
}
