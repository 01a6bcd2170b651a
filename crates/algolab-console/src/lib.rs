//! Console output for experiment reports.
//!
//! Renders finished reports as aligned terminal tables and wires up
//! `tracing` so per-trial debug events become visible via `RUST_LOG`.
//! Rendering always happens after measurement; nothing here runs inside a
//! timed window.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use algolab_benchmark::ExperimentReport;

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output and tracing.
///
/// Safe to call multiple times - only the first call has effect. Prints the
/// banner and installs an env-filtered `tracing` subscriber (default level
/// `info`, override with `RUST_LOG`, e.g.
/// `RUST_LOG=algolab_benchmark=debug`).
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
        _             _       _
   __ _| | __ _  ___ | | __ _| |__
  / _` | |/ _` |/ _ \| |/ _` | '_ \
 | (_| | | (_| | (_) | | (_| | |_) |
  \__,_|_|\__, |\___/|_|\__,_|_.__/
          |___/
"#;
    let version_line = format!("        v{} - Measured Algorithms Lab\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// Renders one report as an aligned terminal table.
///
/// # Example
///
/// ```
/// use algolab_benchmark::{ExperimentReport, TrialResult};
/// use std::time::Duration;
///
/// let mut report = ExperimentReport::new("sum", "sum_array");
/// report.add_trial(TrialResult::new(1000, 10, Duration::from_micros(50)));
///
/// let table = algolab_console::report_table(&report);
/// assert!(table.contains("1,000"));
/// assert!(table.contains("Mean"));
/// ```
pub fn report_table(report: &ExperimentReport) -> String {
    let mut out = String::new();

    let title = match &report.complexity_note {
        Some(note) => format!("{} [{}] - {}", report.name, report.subject_name, note),
        None => format!("{} [{}]", report.name, report.subject_name),
    };
    out.push_str(&format!("\n{}\n", title.bright_white().bold()));
    out.push_str(&format!(
        "{:>12} {:>8} {:>14} {:>14} {:>16}\n",
        "Size".bright_cyan(),
        "Reps".bright_cyan(),
        "Total (ms)".bright_cyan(),
        "Mean (us)".bright_cyan(),
        "Per unit (ns)".bright_cyan(),
    ));
    out.push_str(&format!("{}\n", "-".repeat(68)));

    for trial in &report.trials {
        out.push_str(&format!(
            "{:>12} {:>8} {:>14.3} {:>14.3} {:>16.3}\n",
            trial.size.to_formatted_string(&Locale::en),
            trial.repetitions,
            trial.elapsed_total.as_secs_f64() * 1000.0,
            trial.mean_nanos() / 1000.0,
            trial.time_per_unit_nanos(),
        ));
    }

    out
}

/// Renders several reports side by side, one summary row per subject.
pub fn comparison_table(reports: &[&ExperimentReport]) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "Comparison".bright_white().bold()));
    out.push_str(&format!(
        "{:<24} {:<14} {:>14} {:>14}\n",
        "Subject".bright_cyan(),
        "Complexity".bright_cyan(),
        "Min mean (us)".bright_cyan(),
        "Max mean (us)".bright_cyan(),
    ));
    out.push_str(&format!("{}\n", "-".repeat(68)));

    for report in reports {
        out.push_str(&format!(
            "{:<24} {:<14} {:>14.3} {:>14.3}\n",
            report.subject_name,
            report.complexity_note.as_deref().unwrap_or("-"),
            report.min_mean_time().as_secs_f64() * 1e6,
            report.max_mean_time().as_secs_f64() * 1e6,
        ));
    }

    out
}
