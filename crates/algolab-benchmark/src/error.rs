//! Error types for the benchmark harness

use algolab_core::AlgoError;
use thiserror::Error;

use crate::config::ConfigError;

/// Error raised by the benchmark harness.
///
/// Invalid harness parameters are rejected before any timing starts.
/// Errors raised by the subject itself pass through transparently; the
/// harness never translates an algorithm failure into a timing value.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A trial was requested with fewer than one repetition.
    #[error("repetitions must be at least 1, got {0}")]
    InvalidRepetitions(u32),

    /// An experiment was requested with no input sizes.
    #[error("experiment requires at least one input size")]
    EmptySizes,

    /// The subject under test failed; propagated unmodified.
    #[error(transparent)]
    Algorithm(#[from] AlgoError),

    /// The experiment configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
