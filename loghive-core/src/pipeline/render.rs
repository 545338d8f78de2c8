use crate::analysis::{AggregationResult, Query};
use crate::export::encode_table;
use crate::pipeline::summary::{JobOutcome, JobSummary};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Human-oriented summary for a terminal.
pub fn render_pretty(summary: &JobSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "loghive job summary".bold());
    let _ = writeln!(out, "===================");
    let _ = writeln!(
        out,
        "Lines read: {} | valid: {} | parse errors: {}",
        summary.lines_read, summary.valid_records, summary.parse_error_count
    );
    if summary.blank_lines > 0 || summary.header_lines > 0 {
        let _ = writeln!(
            out,
            "Skipped: {} blank, {} header",
            summary.blank_lines, summary.header_lines
        );
    }
    let _ = writeln!(out, "Status: {}\n", summary.status_classes);

    for report in &summary.results {
        let _ = writeln!(out, "{}", report.query.name().cyan().bold());
        let _ = write!(out, "{}", indent(&table(report.query, &report.result)));
        let _ = writeln!(out);
    }

    if !summary.partitions.is_empty() {
        let _ = write!(out, "{} ", "Partitions:".bold());
        for p in &summary.partitions {
            let _ = write!(out, "{}={} ", p.status, p.records);
        }
        let _ = writeln!(out, "\n");
    }

    if !summary.parse_errors.is_empty() {
        let _ = writeln!(out, "{}", "Parse errors".yellow().bold());
        for e in &summary.parse_errors {
            let _ = writeln!(out, "  {}: {}", e.file.display(), e.error);
        }
        let hidden = summary.parse_error_count - summary.parse_errors.len() as u64;
        if hidden > 0 {
            let _ = writeln!(out, "  ... and {hidden} more");
        }
        let _ = writeln!(out);
    }

    for a in &summary.artifacts {
        let _ = writeln!(out, "{} {} ({} rows)", "✔".green(), a.path.display(), a.rows);
    }
    for f in &summary.failed_artifacts {
        let _ = writeln!(out, "{} {}: {}", "✘".red(), f.path.display(), f.error);
    }

    if summary.outcome() == JobOutcome::PartialFailure {
        let _ = writeln!(
            out,
            "\n{}: {} of {} artifacts failed",
            "partial failure".red().bold(),
            summary.failed_artifacts.len(),
            summary.failed_artifacts.len() + summary.artifacts.len()
        );
    }

    out
}

/// Uncolored `key: value` lines, stable for scripts and log files.
pub fn render_plain(summary: &JobSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "lines_read: {}", summary.lines_read);
    let _ = writeln!(out, "blank_lines: {}", summary.blank_lines);
    let _ = writeln!(out, "header_lines: {}", summary.header_lines);
    let _ = writeln!(out, "valid_records: {}", summary.valid_records);
    let _ = writeln!(out, "parse_errors: {}", summary.parse_error_count);
    for e in &summary.parse_errors {
        let _ = writeln!(out, "parse_error: {}: {}", e.file.display(), e.error);
    }
    for p in &summary.partitions {
        let _ = writeln!(out, "partition: {} {}", p.status, p.records);
    }
    for a in &summary.artifacts {
        let _ = writeln!(out, "written: {} {}", a.path.display(), a.rows);
    }
    for f in &summary.failed_artifacts {
        let _ = writeln!(out, "failed: {} {}", f.path.display(), f.error);
    }

    out
}

pub fn render_json(summary: &JobSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// One result as delimited text, with the column header when `header` is set.
pub fn table_with_delimiter(
    query: Query,
    result: &AggregationResult,
    delimiter: char,
    header: bool,
) -> String {
    encode_table(header.then(|| query.columns()), &result.rows(), delimiter)
}

fn table(query: Query, result: &AggregationResult) -> String {
    if result.is_empty() {
        return "(no rows)\n".to_string();
    }

    let rows = result.rows();
    let columns = query.columns();
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (w, field) in widths.iter_mut().zip(row) {
            *w = (*w).max(field.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(f, &w)| format!("{f:<w$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    out
}

fn indent(text: &str) -> String {
    text.lines().map(|l| format!("  {l}\n")).collect()
}
