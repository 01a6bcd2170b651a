//! Recursive algorithms: factorial, Fibonacci, fast exponentiation.
//!
//! The naive Fibonacci variants exist to give the harness an exponential
//! subject; [`fib_naive_counted`] additionally reports the exact number of
//! recursive invocations by threading an accumulator through the recursion,
//! so no process-wide counter is needed.

use crate::error::{AlgoError, Result};

/// Computes `n!` recursively.
///
/// Runs in O(n) time with O(n) recursion depth.
///
/// # Errors
///
/// Returns [`AlgoError::NegativeInput`] for negative `n` and
/// [`AlgoError::Overflow`] once the product no longer fits `u128`
/// (first at `n = 35`).
///
/// # Example
///
/// ```
/// use algolab_core::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(AlgoError::NegativeInput {
            name: "factorial",
            value: n,
        });
    }
    factorial_inner(n as u64)
}

fn factorial_inner(n: u64) -> Result<u128> {
    if n == 0 {
        return Ok(1);
    }
    let rest = factorial_inner(n - 1)?;
    (n as u128).checked_mul(rest).ok_or(AlgoError::Overflow {
        name: "factorial",
        value: n,
    })
}

/// Computes the n-th Fibonacci number by naive double recursion.
///
/// Runs in O(φⁿ) time, the textbook exponential baseline the harness
/// compares against the memoized variant.
///
/// # Errors
///
/// Returns [`AlgoError::NegativeInput`] for negative `n`.
///
/// # Example
///
/// ```
/// use algolab_core::fib_naive;
///
/// assert_eq!(fib_naive(0).unwrap(), 0);
/// assert_eq!(fib_naive(10).unwrap(), 55);
/// ```
pub fn fib_naive(n: i64) -> Result<u128> {
    fib_inner(checked_fib_index(n)?)
}

// Validates a Fibonacci index: non-negative and within u32, so the cast
// below cannot truncate. The value overflows u128 long before u32::MAX
// anyway, so out-of-range indices are reported as Overflow.
fn checked_fib_index(n: i64) -> Result<u32> {
    if n < 0 {
        return Err(AlgoError::NegativeInput {
            name: "fib_naive",
            value: n,
        });
    }
    u32::try_from(n).map_err(|_| AlgoError::Overflow {
        name: "fib_naive",
        value: n as u64,
    })
}

fn fib_inner(n: u32) -> Result<u128> {
    if n < 2 {
        return Ok(n as u128);
    }
    let a = fib_inner(n - 1)?;
    let b = fib_inner(n - 2)?;
    a.checked_add(b).ok_or(AlgoError::Overflow {
        name: "fib_naive",
        value: n as u64,
    })
}

/// Computes the n-th Fibonacci number naively, returning the value together
/// with the exact number of recursive invocations.
///
/// The count includes the top-level call, so it satisfies
/// `C(0) = C(1) = 1`, `C(n) = C(n-1) + C(n-2) + 1` and matches
/// [`naive_call_count`].
///
/// # Errors
///
/// Returns [`AlgoError::NegativeInput`] for negative `n`.
pub fn fib_naive_counted(n: i64) -> Result<(u128, u64)> {
    fib_counted_inner(checked_fib_index(n)?)
}

fn fib_counted_inner(n: u32) -> Result<(u128, u64)> {
    if n < 2 {
        return Ok((n as u128, 1));
    }
    let (a, calls_a) = fib_counted_inner(n - 1)?;
    let (b, calls_b) = fib_counted_inner(n - 2)?;
    let value = a.checked_add(b).ok_or(AlgoError::Overflow {
        name: "fib_naive",
        value: n as u64,
    })?;
    Ok((value, calls_a + calls_b + 1))
}

/// Closed-form call count for the naive Fibonacci recursion.
///
/// Evaluates `C(0) = C(1) = 1`, `C(n) = C(n-1) + C(n-2) + 1` by dynamic
/// programming in O(n), without executing the exponential recursion itself.
///
/// # Errors
///
/// Returns [`AlgoError::Overflow`] once the count no longer fits `u128`.
///
/// # Example
///
/// ```
/// use algolab_core::naive_call_count;
///
/// assert_eq!(naive_call_count(5).unwrap(), 15);
/// ```
pub fn naive_call_count(n: u32) -> Result<u128> {
    if n < 2 {
        return Ok(1);
    }
    let mut prev: u128 = 1;
    let mut curr: u128 = 1;
    for _ in 2..=n {
        let next = curr
            .checked_add(prev)
            .and_then(|sum| sum.checked_add(1))
            .ok_or(AlgoError::Overflow {
                name: "naive_call_count",
                value: n as u64,
            })?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// Raises `a` to the integer power `n` by repeated squaring.
///
/// Runs in O(log n) multiplications. Negative exponents are handled via the
/// reciprocal of the positive-exponent result.
///
/// # Example
///
/// ```
/// use algolab_core::fast_pow;
///
/// assert_eq!(fast_pow(2.0, 10), 1024.0);
/// assert!((fast_pow(2.0, -3) - 0.125).abs() < 1e-12);
/// ```
pub fn fast_pow(a: f64, n: i32) -> f64 {
    // Widen before negating so that i32::MIN does not overflow.
    let n = n as i64;
    if n < 0 {
        return 1.0 / pow_inner(a, -n);
    }
    pow_inner(a, n)
}

fn pow_inner(a: f64, n: i64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    if n % 2 == 0 {
        let half = pow_inner(a, n / 2);
        half * half
    } else {
        a * pow_inner(a, n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_base_and_step() {
        assert_eq!(factorial(0).unwrap(), 1);
        for n in 1..=20 {
            assert_eq!(
                factorial(n).unwrap(),
                n as u128 * factorial(n - 1).unwrap()
            );
        }
    }

    #[test]
    fn test_factorial_negative() {
        assert_eq!(
            factorial(-3),
            Err(AlgoError::NegativeInput {
                name: "factorial",
                value: -3
            })
        );
    }

    #[test]
    fn test_factorial_overflow() {
        // 34! still fits u128, 35! does not.
        assert!(factorial(34).is_ok());
        assert!(matches!(factorial(35), Err(AlgoError::Overflow { .. })));
    }

    #[test]
    fn test_fib_naive_known_values() {
        let expected = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fib_naive(n as i64).unwrap(), *want);
        }
    }

    #[test]
    fn test_fib_naive_negative() {
        assert!(fib_naive(-1).is_err());
    }

    #[test]
    fn test_fib_index_beyond_u32_rejected() {
        // A cast-truncated index would silently compute fib(10) here.
        let n = (1i64 << 32) + 10;
        assert_eq!(
            fib_naive(n),
            Err(AlgoError::Overflow {
                name: "fib_naive",
                value: n as u64
            })
        );
        assert!(fib_naive_counted(n).is_err());
    }

    #[test]
    fn test_counted_matches_plain_value() {
        for n in 0..=20 {
            let (value, _) = fib_naive_counted(n).unwrap();
            assert_eq!(value, fib_naive(n).unwrap());
        }
    }

    #[test]
    fn test_call_count_recurrence() {
        assert_eq!(naive_call_count(0).unwrap(), 1);
        assert_eq!(naive_call_count(1).unwrap(), 1);
        assert_eq!(naive_call_count(5).unwrap(), 15);
        for n in 2..=25 {
            assert_eq!(
                naive_call_count(n).unwrap(),
                naive_call_count(n - 1).unwrap() + naive_call_count(n - 2).unwrap() + 1
            );
        }
    }

    #[test]
    fn test_call_count_overflow() {
        assert!(naive_call_count(150).is_ok());
        assert_eq!(
            naive_call_count(200),
            Err(AlgoError::Overflow {
                name: "naive_call_count",
                value: 200
            })
        );
    }

    #[test]
    fn test_counted_matches_closed_form() {
        for n in 0..=25 {
            let (_, calls) = fib_naive_counted(n).unwrap();
            assert_eq!(calls as u128, naive_call_count(n as u32).unwrap());
        }
    }

    #[test]
    fn test_fast_pow_matches_powi() {
        for a in [0.5, 1.0, 1.5, 2.0, 3.0] {
            for n in -16..=16 {
                let got = fast_pow(a, n);
                let want = a.powi(n);
                assert!(
                    (got - want).abs() <= 1e-9 * want.abs().max(1.0),
                    "fast_pow({a}, {n}) = {got}, powi = {want}"
                );
            }
        }
    }

    #[test]
    fn test_fast_pow_negative_is_reciprocal() {
        for n in 1..=12 {
            let pos = fast_pow(3.0, n);
            let neg = fast_pow(3.0, -n);
            assert!((neg - 1.0 / pos).abs() < 1e-12);
        }
    }
}
