//! Error types for algolab algorithms

use thiserror::Error;

/// Domain error raised by an algorithm under measurement.
///
/// Algorithms signal domain violations through this type instead of a
/// sentinel return value, so the harness can propagate them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// The function is undefined for negative input.
    #[error("{name} is undefined for negative input {value}")]
    NegativeInput { name: &'static str, value: i64 },

    /// The result does not fit the return type.
    #[error("{name}({value}) overflows the result type")]
    Overflow { name: &'static str, value: u64 },
}

/// Result type alias for algolab algorithms
pub type Result<T> = std::result::Result<T, AlgoError>;
