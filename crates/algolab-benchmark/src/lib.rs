//! Benchmarking harness for algolab.
//!
//! This crate times candidate functions across input sizes and aggregates
//! the measurements into per-size statistics.
//!
//! # Overview
//!
//! The harness composes three pluggable pieces:
//! - a [`Subject`] under test: a plain function, or a cacheable function
//!   with an explicit reset capability
//! - an input generator mapping a size `N` to a concrete input (see
//!   [`generators`])
//! - a reporting sink consuming the finished [`ExperimentReport`]
//!   (CSV, Markdown, or a console table)
//!
//! Execution is strictly single-threaded and sequential: wall-clock
//! comparisons require uncontended execution, and reporting only ever runs
//! after the last trial has finished.
//!
//! # Example
//!
//! ```
//! use algolab_benchmark::{generators, Experiment, ExperimentConfig, Subject};
//!
//! let config = ExperimentConfig::new("array sum")
//!     .with_sizes([10, 100, 1000])
//!     .with_repetitions(5);
//!
//! let subject = Subject::plain(|arr: &Vec<i64>| Ok(algolab_core::sum_array(arr)));
//! let report = Experiment::new(config, subject, generators::sorted_array)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(report.len(), 3);
//! assert_eq!(report.sizes(), vec![10, 100, 1000]);
//! ```

mod config;
mod error;
pub mod generators;
mod report;
mod result;
mod runner;
mod subject;

pub use config::{CachePolicy, ConfigError, ExperimentConfig};
pub use error::BenchError;
pub use report::{export_configured, CsvExporter, MarkdownReport};
pub use result::{ExperimentReport, TrialResult};
pub use runner::{run_trial, Experiment};
pub use subject::{CachedAlgorithm, Subject};
