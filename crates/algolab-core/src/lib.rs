//! algolab-core - Algorithm catalogue for the algolab measurement workspace
//!
//! This crate provides the textbook algorithms that the benchmark harness
//! measures:
//! - Recursive functions (factorial, Fibonacci, fast exponentiation)
//! - An explicit, caller-owned memoization cache
//! - Array algorithms (sum, linear and binary search)
//! - Tower of Hanoi move generation
//! - Stack/deque string checks (bracket balance, palindrome)
//! - A singly linked list
//!
//! Every function is pure with respect to its arguments; the only stateful
//! entity is [`FibMemo`], whose cache is owned by the caller and cleared
//! through an explicit method rather than hidden process-wide state.

pub mod arrays;
pub mod error;
pub mod hanoi;
pub mod list;
pub mod memo;
pub mod recursion;
pub mod strings;

pub use arrays::{binary_search, binary_search_recursive, linear_search, sum_array};
pub use error::{AlgoError, Result};
pub use hanoi::{hanoi_moves, Move, Peg};
pub use list::LinkedList;
pub use memo::FibMemo;
pub use recursion::{factorial, fast_pow, fib_naive, fib_naive_counted, naive_call_count};
pub use strings::{is_balanced_brackets, is_palindrome};
