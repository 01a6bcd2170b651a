//! Array algorithms: summation, linear and binary search.
//!
//! Searches return `Option<usize>`: `None` is the explicit "not found"
//! result, distinct from every valid index.

/// Sums all elements of the slice. O(n).
///
/// The accumulator is `i128`, wide enough for any `i64` slice that fits in
/// memory.
pub fn sum_array(arr: &[i64]) -> i128 {
    arr.iter().map(|&x| x as i128).sum()
}

/// Scans the slice front to back for `target`. O(n).
///
/// # Example
///
/// ```
/// use algolab_core::linear_search;
///
/// let data = [4, 8, 15, 16, 23, 42];
/// assert_eq!(linear_search(&data, &23), Some(4));
/// assert_eq!(linear_search(&data, &7), None);
/// ```
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|value| value == target)
}

/// Binary search over a slice sorted ascending. O(log n).
///
/// The result is unspecified when the slice is not sorted; on success the
/// returned index points at *an* occurrence of `target`, not necessarily the
/// first.
///
/// # Example
///
/// ```
/// use algolab_core::binary_search;
///
/// let data = [1, 3, 5, 7, 9, 11];
/// assert_eq!(binary_search(&data, &7), Some(3));
/// assert_eq!(binary_search(&data, &4), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut left = 0usize;
    let mut right = arr.len();
    while left < right {
        let mid = left + (right - left) / 2;
        match arr[mid].cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => right = mid,
        }
    }
    None
}

/// Recursive binary search over a slice sorted ascending. O(log n) time and
/// recursion depth.
pub fn binary_search_recursive<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_range(arr, target, 0, arr.len())
}

fn search_range<T: Ord>(arr: &[T], target: &T, left: usize, right: usize) -> Option<usize> {
    if left >= right {
        return None;
    }
    let mid = left + (right - left) / 2;
    match arr[mid].cmp(target) {
        std::cmp::Ordering::Equal => Some(mid),
        std::cmp::Ordering::Less => search_range(arr, target, mid + 1, right),
        std::cmp::Ordering::Greater => search_range(arr, target, left, mid),
    }
}
