//! algolab - measured textbook algorithms and their benchmark harness.
//!
//! This facade re-exports the workspace crates:
//! - [`core`](algolab_core) - the algorithm catalogue
//! - [`benchmark`](algolab_benchmark) - the timing harness
//! - `console` (feature-gated) - terminal tables and tracing setup
//!
//! # Example
//!
//! ```
//! use algolab::prelude::*;
//!
//! let config = ExperimentConfig::new("linear search")
//!     .with_sizes([100, 1000])
//!     .with_repetitions(10)
//!     .with_complexity_note("O(n)");
//!
//! let subject = Subject::plain(|arr: &Vec<i64>| {
//!     Ok(linear_search(arr, &generators::worst_case_target(arr)))
//! });
//!
//! let report = Experiment::new(config, subject, generators::sorted_array)
//!     .run()
//!     .unwrap();
//! assert_eq!(report.sizes(), vec![100, 1000]);
//! ```

pub use algolab_benchmark as benchmark;
pub use algolab_core as core;

#[cfg(feature = "console")]
pub use algolab_console as console;

/// Commonly used items in one import.
pub mod prelude {
    pub use algolab_benchmark::{
        export_configured, generators, run_trial, BenchError, CachePolicy, CachedAlgorithm,
        CsvExporter, Experiment, ExperimentConfig, ExperimentReport, MarkdownReport, Subject,
        TrialResult,
    };
    pub use algolab_core::{
        binary_search, binary_search_recursive, factorial, fast_pow, fib_naive,
        fib_naive_counted, hanoi_moves, is_balanced_brackets, is_palindrome, linear_search,
        naive_call_count, sum_array, AlgoError, FibMemo, LinkedList, Move, Peg,
    };
}
