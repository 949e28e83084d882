//! End-of-run summary
//!
//! Renders the per-phase counters and the list of URLs the run gave up on.

use crate::crawler::HarvestReport;
use crate::model::{Phase, PhaseStats};
use std::fmt::Write;

/// Formats the run summary as human-readable text
pub fn format_summary(report: &HarvestReport, csv_path: &str) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Scraped metadata for {} courses. Data saved to '{}'",
        report.records.len(),
        csv_path
    );
    out.push('\n');

    let _ = writeln!(out, "=== Harvest Statistics ===");
    let _ = writeln!(out, "  Category pages found: {}", report.categories.len());
    let _ = writeln!(out, "  Course pages found: {}", report.courses.len());
    if let Some(duration) = summary.duration_seconds() {
        let _ = writeln!(
            out,
            "  Duration: {} seconds ({:.2} minutes)",
            duration,
            duration as f64 / 60.0
        );
    }
    out.push('\n');

    let _ = writeln!(out, "{:<10} {:>8} {:>8} {:>8}", "Phase", "Fetched", "Skipped", "Failed");
    for phase in [
        Phase::Categories,
        Phase::CourseLinks,
        Phase::Metadata,
        Phase::Reviews,
    ] {
        let PhaseStats {
            fetched,
            skipped,
            failed,
        } = *summary.stats(phase);
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>8} {:>8}",
            phase.to_string(),
            fetched,
            skipped,
            failed
        );
    }

    if !summary.failures.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Failures ({}):", summary.failures.len());
        for failure in &summary.failures {
            let _ = writeln!(
                out,
                "  [{}] {}: {}",
                failure.phase, failure.url, failure.reason
            );
        }
    }

    out
}

/// Prints the run summary to stdout
pub fn print_summary(report: &HarvestReport, csv_path: &str) {
    println!();
    print!("{}", format_summary(report, csv_path));
}
