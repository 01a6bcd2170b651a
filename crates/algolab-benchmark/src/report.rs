//! Report generation for experiment results.
//!
//! Exporters consume a finished [`ExperimentReport`]; they never run inside
//! a timed window.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::ExperimentConfig;
use crate::result::ExperimentReport;

/// CSV exporter for experiment reports.
///
/// Columns: input size, repetitions, total elapsed milliseconds, mean
/// microseconds per call, mean nanoseconds per logical unit of work.
///
/// # Example
///
/// ```
/// use algolab_benchmark::{CsvExporter, ExperimentReport};
///
/// let report = ExperimentReport::new("sum", "sum_array");
/// let csv = CsvExporter::to_string(&report);
/// assert!(csv.starts_with("size,repetitions,total_ms"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a report to a CSV string.
    ///
    /// # Example
    ///
    /// ```
    /// use algolab_benchmark::{CsvExporter, ExperimentReport, TrialResult};
    /// use std::time::Duration;
    ///
    /// let mut report = ExperimentReport::new("sum", "sum_array");
    /// report.add_trial(TrialResult::new(1000, 10, Duration::from_millis(20)));
    ///
    /// let csv = CsvExporter::to_string(&report);
    /// assert!(csv.contains("1000,10,20.000"));
    /// ```
    pub fn to_string(report: &ExperimentReport) -> String {
        let mut output = String::new();

        writeln!(output, "size,repetitions,total_ms,mean_us,per_unit_ns").unwrap();
        for trial in &report.trials {
            writeln!(
                output,
                "{},{},{:.3},{:.3},{:.3}",
                trial.size,
                trial.repetitions,
                trial.elapsed_total.as_secs_f64() * 1000.0,
                trial.mean_nanos() / 1000.0,
                trial.time_per_unit_nanos(),
            )
            .unwrap();
        }

        output
    }

    /// Exports a report to a CSV file.
    pub fn to_file(report: &ExperimentReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }

    /// Writes a report as CSV to a writer.
    pub fn write<W: Write>(report: &ExperimentReport, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(report).as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a human-readable summary plus a per-size table.
///
/// # Example
///
/// ```
/// use algolab_benchmark::{ExperimentReport, MarkdownReport};
///
/// let report = ExperimentReport::new("sum", "sum_array");
/// let md = MarkdownReport::to_string(&report);
/// assert!(md.contains("# Experiment: sum"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(report: &ExperimentReport) -> String {
        let mut output = String::new();

        writeln!(output, "# Experiment: {}", report.name).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "- **Subject**: {}", report.subject_name).unwrap();
        if let Some(note) = &report.complexity_note {
            writeln!(output, "- **Theoretical complexity**: {}", note).unwrap();
        }
        writeln!(output, "- **Trials**: {}", report.len()).unwrap();
        writeln!(output).unwrap();

        if report.is_empty() {
            writeln!(output, "*No trials completed.*").unwrap();
            return output;
        }

        writeln!(output, "## Summary").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Metric | Value |").unwrap();
        writeln!(output, "|--------|-------|").unwrap();
        writeln!(
            output,
            "| Min mean | {:.3} µs |",
            report.min_mean_time().as_secs_f64() * 1e6
        )
        .unwrap();
        writeln!(
            output,
            "| Max mean | {:.3} µs |",
            report.max_mean_time().as_secs_f64() * 1e6
        )
        .unwrap();
        writeln!(
            output,
            "| Avg mean | {:.3} µs |",
            report.avg_mean_time().as_secs_f64() * 1e6
        )
        .unwrap();
        writeln!(output).unwrap();

        writeln!(output, "## Trials").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Size | Reps | Total (ms) | Mean (µs) | Per unit (ns) |"
        )
        .unwrap();
        writeln!(
            output,
            "|------|------|------------|-----------|---------------|"
        )
        .unwrap();
        for trial in &report.trials {
            writeln!(
                output,
                "| {} | {} | {:.3} | {:.3} | {:.3} |",
                trial.size,
                trial.repetitions,
                trial.elapsed_total.as_secs_f64() * 1000.0,
                trial.mean_nanos() / 1000.0,
                trial.time_per_unit_nanos(),
            )
            .unwrap();
        }

        output
    }

    /// Generates a comparison table for multiple reports over the same
    /// sizes, e.g. linear vs binary search.
    pub fn comparison(reports: &[&ExperimentReport]) -> String {
        let mut output = String::new();

        writeln!(output, "## Comparison").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Subject | Complexity | Min mean (µs) | Max mean (µs) | Avg mean (µs) |"
        )
        .unwrap();
        writeln!(
            output,
            "|---------|------------|---------------|---------------|---------------|"
        )
        .unwrap();
        for report in reports {
            writeln!(
                output,
                "| {} | {} | {:.3} | {:.3} | {:.3} |",
                report.subject_name,
                report.complexity_note.as_deref().unwrap_or("-"),
                report.min_mean_time().as_secs_f64() * 1e6,
                report.max_mean_time().as_secs_f64() * 1e6,
                report.avg_mean_time().as_secs_f64() * 1e6,
            )
            .unwrap();
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(report: &ExperimentReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(report: &ExperimentReport, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(report).as_bytes())
    }
}

/// Writes the report to whichever output paths the config carries.
///
/// A config without output paths makes this a no-op.
pub fn export_configured(config: &ExperimentConfig, report: &ExperimentReport) -> io::Result<()> {
    if let Some(path) = config.csv_output_path() {
        CsvExporter::to_file(report, path)?;
    }
    if let Some(path) = config.markdown_output_path() {
        MarkdownReport::to_file(report, path)?;
    }
    Ok(())
}
