//! Input generation strategies.
//!
//! Each generator maps a requested size `N` to a concrete input value. They
//! are caller-supplied collaborators of the harness: an [`Experiment`]
//! invokes one generator per size, outside the timed window.
//!
//! Random data comes from a seeded [`ChaCha8Rng`] so experiments are
//! reproducible run to run.
//!
//! [`Experiment`]: crate::Experiment

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed for [`random_array`] when an experiment has no reason to
/// pick its own.
pub const DEFAULT_SEED: u64 = 0x5eed;

/// The size is the input, unchanged. For subjects like recursive Fibonacci
/// whose workload is the number itself.
pub fn identity(n: u64) -> u64 {
    n
}

/// Sorted array `[0, 1, .., n-1]`, the precondition shape for binary
/// search.
pub fn sorted_array(n: u64) -> Vec<i64> {
    (0..n as i64).collect()
}

/// Array of `n` uniform values in `0..1000`, reproducible for a given seed.
/// Use [`DEFAULT_SEED`] unless the experiment calls for a specific stream.
pub fn random_array(n: u64, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..1000)).collect()
}

/// Worst-case search target for a sorted array: its last element.
///
/// Linear search then scans the entire array. Empty arrays fall back to
/// zero.
pub fn worst_case_target(arr: &[i64]) -> i64 {
    arr.last().copied().unwrap_or(0)
}

/// `n` nested bracket pairs, e.g. `{[({[(...)]})]}` for the balance check.
pub fn nested_brackets(n: u64) -> String {
    let open = ['(', '[', '{'];
    let close = [')', ']', '}'];
    let mut s = String::with_capacity(2 * n as usize);
    for i in 0..n {
        s.push(open[(i % 3) as usize]);
    }
    for i in (0..n).rev() {
        s.push(close[(i % 3) as usize]);
    }
    s
}

/// Palindromic text of roughly `n` characters for the palindrome check.
pub fn palindrome_text(n: u64) -> String {
    let half: String = (0..n / 2)
        .map(|i| (b'a' + (i % 26) as u8) as char)
        .collect();
    let mut s = half.clone();
    if n % 2 == 1 {
        s.push('x');
    }
    s.extend(half.chars().rev());
    s
}
