//! Doubly-linked list stored in an arena of index-linked nodes.
//!
//! Nodes live in a `Vec` and point at their neighbours by slot index, so the
//! list can be walked from either end without reference cycles. Slots freed
//! by [`DoublyLinkedList::remove`] are reused by later insertions.

use std::fmt;
use std::iter::FromIterator;

use crate::error::{Error, IndexError};

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly-linked list with insertion at the tail and removal at the head.
///
/// # Examples
///
/// ```rust
/// use tagrail::collection::DoublyLinkedList;
///
/// let list: DoublyLinkedList<_> = ["a", "b", "c"].into_iter().collect();
///
/// let mut visited = Vec::new();
/// list.for_each(|value| visited.push(*value), true);
/// assert_eq!(visited, vec!["c", "b", "a"]);
/// ```
pub struct DoublyLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Appends `value` after the current tail.
    pub fn insert(&mut self, value: T) -> &mut Self {
        let node = Node {
            value,
            prev: self.tail,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail.and_then(|tail| self.node_mut(tail)) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.length += 1;
        self
    }

    /// Detaches the head and returns its value.
    pub fn remove(&mut self) -> Option<T> {
        let slot = self.head?;
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        self.head = node.next;
        match self.head.and_then(|head| self.node_mut(head)) {
            Some(head) => head.prev = None,
            None => self.tail = None,
        }
        self.length -= 1;

        if self.length == 0 {
            self.slots.clear();
            self.free.clear();
        }
        Some(node.value)
    }

    /// Returns `true` if a node exists at `index`.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        index < self.length
    }

    /// Returns the value at `index`, counted from the head.
    ///
    /// # Errors
    ///
    /// Returns "Index {index} is out of range" past the tail.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.iter()
            .nth(index)
            .ok_or_else(|| IndexError::OutOfRange { index }.into())
    }

    /// Calls `function` on every value, from the tail when `reversed`.
    pub fn for_each<F>(&self, function: F, reversed: bool)
    where
        F: FnMut(&T),
    {
        if reversed {
            self.iter_rev().for_each(function);
        } else {
            self.iter().for_each(function);
        }
    }

    /// Builds a new list from the mapped values, leaving `self` untouched.
    pub fn map<U, F>(&self, function: F) -> DoublyLinkedList<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Returns the number of nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if there are no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if there is at least one node.
    #[inline]
    pub const fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    /// Iterates from head to tail. The iterator is double-ended.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    /// Iterates from tail to head.
    pub fn iter_rev(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`DoublyLinkedList`].
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for DoublyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert(value);
        }
        list
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn walks_both_directions() {
        let list: DoublyLinkedList<_> = (1..=4).collect();

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);

        let mut forward = Vec::new();
        list.for_each(|value| forward.push(*value), false);
        assert_eq!(forward, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn get_counts_from_the_head() {
        let list: DoublyLinkedList<_> = ["x", "y"].into_iter().collect();
        assert_eq!(list.get(1).copied(), Ok("y"));
        assert_eq!(list.get(2), Err(Error::new("Index 2 is out of range")));
    }

    #[rstest]
    fn removed_slots_are_reused() {
        let mut list = DoublyLinkedList::new();
        list.insert(1).insert(2).insert(3);
        assert_eq!(list.remove(), Some(1));
        list.insert(4);

        assert_eq!(list.slots.len(), 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
    }

    #[rstest]
    fn draining_resets_the_arena() {
        let mut list: DoublyLinkedList<_> = (0..3).collect();
        while list.remove().is_some() {}

        assert!(list.is_empty());
        assert!(list.slots.is_empty());
        assert_eq!(list.iter_rev().next(), None);
    }

    #[rstest]
    fn map_leaves_the_source_untouched() {
        let list: DoublyLinkedList<_> = (1..=3).collect();
        let doubled = list.map(|value| value * 2);

        assert_eq!(doubled.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
        assert_eq!(list.len(), 3);
    }

    proptest! {
        #[test]
        fn reverse_iteration_mirrors_forward(values in prop::collection::vec(any::<i16>(), 0..64), drops in 0_usize..8) {
            let mut list: DoublyLinkedList<_> = values.iter().copied().collect();
            for _ in 0..drops {
                list.remove();
            }
            let mut forward = list.iter().copied().collect::<Vec<_>>();
            forward.reverse();
            prop_assert_eq!(forward, list.iter_rev().copied().collect::<Vec<_>>());
            prop_assert_eq!(list.len(), values.len().saturating_sub(drops));
        }
    }
}
