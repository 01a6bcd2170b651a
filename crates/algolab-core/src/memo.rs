//! Explicit memoization cache for Fibonacci.
//!
//! The cache is an ordinary value owned by the caller. Clearing it is an
//! explicit operation, which lets the harness distinguish cold-cache from
//! warm-cache measurements without any hidden global state.

use crate::error::{AlgoError, Result};

/// Memoized Fibonacci with a caller-owned cache.
///
/// `compute` runs in O(n) on a cold cache and O(1) for any `n` already
/// cached. The cache grows to `n + 1` entries and lives exactly as long as
/// this value.
///
/// # Example
///
/// ```
/// use algolab_core::FibMemo;
///
/// let mut memo = FibMemo::new();
/// assert_eq!(memo.compute(10).unwrap(), 55);
/// assert!(!memo.is_empty());
///
/// memo.clear();
/// assert!(memo.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FibMemo {
    cache: Vec<Option<u128>>,
}

impl FibMemo {
    /// Creates a memoizer with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the n-th Fibonacci number, reusing any cached prefix.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::NegativeInput`] for negative `n` and
    /// [`AlgoError::Overflow`] once the value no longer fits `u128`
    /// (first at `n = 187`).
    pub fn compute(&mut self, n: i64) -> Result<u128> {
        if n < 0 {
            return Err(AlgoError::NegativeInput {
                name: "fib_memo",
                value: n,
            });
        }
        let n = n as usize;
        if self.cache.len() <= n {
            self.cache.resize(n + 1, None);
        }
        self.fill(n)
    }

    fn fill(&mut self, n: usize) -> Result<u128> {
        if let Some(value) = self.cache[n] {
            return Ok(value);
        }
        let value = if n < 2 {
            n as u128
        } else {
            let a = self.fill(n - 1)?;
            let b = self.fill(n - 2)?;
            a.checked_add(b).ok_or(AlgoError::Overflow {
                name: "fib_memo",
                value: n as u64,
            })?
        };
        self.cache[n] = Some(value);
        Ok(value)
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cache slots currently allocated.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
