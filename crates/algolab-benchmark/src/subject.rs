//! Algorithms under test.
//!
//! A subject is either a plain function or a cacheable function carrying an
//! explicit reset capability. Modelling the capability as an enum variant
//! lets the harness branch on it directly instead of probing at runtime.

use algolab_core::{FibMemo, Result as AlgoResult};

/// A function with internal memoized state that can be reset.
///
/// Aside from its cache the function must be pure: the same input yields the
/// same output whether or not the cache is warm.
pub trait CachedAlgorithm<In, Out> {
    /// Invokes the algorithm, possibly reading and extending the cache.
    fn call(&mut self, input: &In) -> AlgoResult<Out>;

    /// Drops all memoized state.
    fn clear_cache(&mut self);
}

impl CachedAlgorithm<i64, u128> for FibMemo {
    fn call(&mut self, input: &i64) -> AlgoResult<u128> {
        self.compute(*input)
    }

    fn clear_cache(&mut self) {
        self.clear();
    }
}

/// An algorithm under measurement.
///
/// The harness owns the subject exclusively for the duration of an
/// experiment, so memoized state can never be mutated by concurrent trials.
///
/// # Example
///
/// ```
/// use algolab_benchmark::Subject;
/// use algolab_core::{factorial, FibMemo};
///
/// let mut plain = Subject::plain(|n: &i64| factorial(*n));
/// assert_eq!(plain.invoke(&5).unwrap(), 120);
/// assert!(!plain.is_cached());
///
/// let mut memoized = Subject::cached(FibMemo::new());
/// assert_eq!(memoized.invoke(&10).unwrap(), 55);
/// assert!(memoized.is_cached());
/// memoized.reset();
/// ```
pub enum Subject<In, Out> {
    /// A pure function with no internal state.
    Plain(Box<dyn FnMut(&In) -> AlgoResult<Out>>),
    /// A function with a resettable cache.
    Cached(Box<dyn CachedAlgorithm<In, Out>>),
}

impl<In, Out> Subject<In, Out> {
    /// Wraps a plain function.
    pub fn plain(f: impl FnMut(&In) -> AlgoResult<Out> + 'static) -> Self {
        Subject::Plain(Box::new(f))
    }

    /// Wraps a cacheable algorithm.
    pub fn cached(algorithm: impl CachedAlgorithm<In, Out> + 'static) -> Self {
        Subject::Cached(Box::new(algorithm))
    }

    /// Invokes the subject once.
    ///
    /// # Errors
    ///
    /// Whatever the algorithm raises, unmodified.
    pub fn invoke(&mut self, input: &In) -> AlgoResult<Out> {
        match self {
            Subject::Plain(f) => f(input),
            Subject::Cached(algorithm) => algorithm.call(input),
        }
    }

    /// Clears memoized state; a no-op for plain subjects.
    pub fn reset(&mut self) {
        if let Subject::Cached(algorithm) = self {
            algorithm.clear_cache();
        }
    }

    /// Returns true when the subject carries a resettable cache.
    pub fn is_cached(&self) -> bool {
        matches!(self, Subject::Cached(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::AlgoError;

    use std::cell::Cell;
    use std::rc::Rc;

    // Cached test double that records how often it was called and cleared.
    struct Counting {
        calls: Rc<Cell<u32>>,
        clears: Rc<Cell<u32>>,
    }

    impl CachedAlgorithm<u64, u64> for Counting {
        fn call(&mut self, input: &u64) -> AlgoResult<u64> {
            self.calls.set(self.calls.get() + 1);
            Ok(*input)
        }

        fn clear_cache(&mut self) {
            self.clears.set(self.clears.get() + 1);
        }
    }

    #[test]
    fn test_plain_invoke_and_reset() {
        let mut subject = Subject::plain(|n: &u64| Ok(n * 2));
        assert_eq!(subject.invoke(&21).unwrap(), 42);
        assert!(!subject.is_cached());
        // Reset on a plain subject does nothing and must not panic.
        subject.reset();
    }

    #[test]
    fn test_cached_reset_reaches_algorithm() {
        let calls = Rc::new(Cell::new(0));
        let clears = Rc::new(Cell::new(0));
        let mut subject = Subject::cached(Counting {
            calls: Rc::clone(&calls),
            clears: Rc::clone(&clears),
        });
        subject.invoke(&1).unwrap();
        subject.invoke(&2).unwrap();
        subject.reset();
        subject.reset();
        assert_eq!(calls.get(), 2);
        assert_eq!(clears.get(), 2);
    }

    #[test]
    fn test_error_passes_through() {
        let mut subject: Subject<i64, u128> =
            Subject::plain(|n: &i64| algolab_core::factorial(*n));
        let err = subject.invoke(&-1).unwrap_err();
        assert_eq!(
            err,
            AlgoError::NegativeInput {
                name: "factorial",
                value: -1
            }
        );
    }

    #[test]
    fn test_fib_memo_as_subject() {
        let mut subject = Subject::cached(FibMemo::new());
        assert_eq!(subject.invoke(&20).unwrap(), 6765);
        subject.reset();
        assert_eq!(subject.invoke(&20).unwrap(), 6765);
    }
}
