//! Stack and deque based string checks.

use std::collections::VecDeque;

/// Checks that `()`, `[]` and `{}` pairs in `s` are balanced. O(n).
///
/// Non-bracket characters are ignored. Unclosed or mismatched brackets make
/// the string unbalanced; the empty string is balanced.
///
/// # Example
///
/// ```
/// use algolab_core::is_balanced_brackets;
///
/// assert!(is_balanced_brackets("(a+b)*[c-d]"));
/// assert!(!is_balanced_brackets("([)]"));
/// ```
pub fn is_balanced_brackets(s: &str) -> bool {
    let mut stack = Vec::new();
    for ch in s.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Checks whether `s` reads the same from both ends, ignoring case and
/// whitespace. O(n).
///
/// Comparison runs over a double-ended queue, consuming one character from
/// each end per step. Lowercase Latin letters that are visually identical
/// to a Cyrillic letter (`a c e o p x y`) are folded onto the Cyrillic
/// one, so mixed-script text typed with a stray Latin keystroke still
/// compares by appearance.
///
/// # Example
///
/// ```
/// use algolab_core::is_palindrome;
///
/// assert!(is_palindrome("racecar"));
/// assert!(is_palindrome("never odd or even"));
/// assert!(!is_palindrome("python"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let mut deque: VecDeque<char> = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(fold_homoglyph)
        .collect();
    while deque.len() > 1 {
        if deque.pop_front() != deque.pop_back() {
            return false;
        }
    }
    true
}

// Maps a lowercase Latin letter to the Cyrillic letter it is
// indistinguishable from in print.
fn fold_homoglyph(c: char) -> char {
    match c {
        'a' => 'а',
        'c' => 'с',
        'e' => 'е',
        'o' => 'о',
        'p' => 'р',
        'x' => 'х',
        'y' => 'у',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced() {
        assert!(is_balanced_brackets("()[]{}"));
        assert!(is_balanced_brackets("(a+b)*[c-d]"));
        assert!(is_balanced_brackets(""));
        assert!(is_balanced_brackets("{[()]}"));
    }

    #[test]
    fn test_unbalanced() {
        assert!(!is_balanced_brackets("([)]"));
        assert!(!is_balanced_brackets("(()"));
        assert!(!is_balanced_brackets(")("));
        assert!(!is_balanced_brackets("]"));
    }

    #[test]
    fn test_palindrome() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("x"));
        assert!(is_palindrome("AрозаупаланалапуАзора"));
        assert!(is_palindrome("А роза упала на лапу Азора"));
    }

    #[test]
    fn test_palindrome_mixed_scripts() {
        // Latin "a" at one end, Cyrillic "а" at the other: identical in
        // print, distinct code points.
        assert!(is_palindrome("a\u{0431}\u{0431}\u{0430}"));
        assert!(is_palindrome("A\u{0437}\u{0430}\u{0437}\u{0430}"));
        assert!(!is_palindrome("a\u{0431}\u{0432}"));
    }

    #[test]
    fn test_not_palindrome() {
        assert!(!is_palindrome("python"));
        assert!(!is_palindrome("ab"));
    }
}
