//! A singly linked list.
//!
//! Exists as a measurement subject for front-insertion experiments against
//! `Vec::insert(0, ..)`. Front operations are O(1); `push_back` walks the
//! list and is O(n), the price of staying in safe code without a tail
//! pointer.

/// Singly linked list with O(1) front operations.
///
/// # Example
///
/// ```
/// use algolab_core::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_front(2);
/// list.push_front(1);
/// list.push_back(3);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(list.pop_front(), Some(1));
/// ```
#[derive(Debug, Default)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

#[derive(Debug)]
struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Inserts at the front. O(1).
    pub fn push_front(&mut self, data: T) {
        let node = Box::new(Node {
            data,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends at the back. O(n).
    pub fn push_back(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data, next: None }));
        self.len += 1;
    }

    /// Removes and returns the front element. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.data
        })
    }

    /// Returns the front element without removing it.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.data)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Iterative drop so long lists cannot overflow the stack.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_operations() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.pop_front(), None);

        list.push_front(2);
        list.push_front(1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_back_order() {
        let mut list = LinkedList::new();
        for i in 0..5 {
            list.push_back(i);
        }
        let collected: Vec<i32> = list.iter().copied().collect();
        assert_eq!(collected, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_mixed_order() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_long_list_drop() {
        let mut list = LinkedList::new();
        for i in 0..200_000 {
            list.push_front(i);
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
