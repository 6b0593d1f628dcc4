//! Singly-linked list with insertion at the tail and removal at the head.
//!
//! Nodes live in a slot arena and link forward by index. The list tracks its
//! tail slot, so appending never walks the chain.

use std::fmt;
use std::iter::FromIterator;

use crate::error::{Error, IndexError};

struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// A singly-linked list of arena-stored nodes.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `insert`  | O(1)       |
/// | `remove`  | O(1)       |
/// | `get`     | O(n)       |
/// | `len`     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use tagrail::collection::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.insert(1).insert(2).insert(3);
///
/// assert_eq!(list.get(1).copied(), Ok(2));
/// assert_eq!(list.remove(), Some(1));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
/// ```
pub struct LinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> LinkedList<T> {
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

    /// Appends `value` after the current tail.
    pub fn insert(&mut self, value: T) -> &mut Self {
        let node = Node { value, next: None };
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

        match self.tail.and_then(|tail| self.slots.get_mut(tail)).and_then(Option::as_mut) {
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
        self.length -= 1;

        if self.head.is_none() {
            self.tail = None;
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

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns "Index {index} is out of range" past the tail.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.iter()
            .nth(index)
            .ok_or_else(|| IndexError::OutOfRange { index }.into())
    }

    /// Builds a new list from the mapped values, leaving `self` untouched.
    pub fn map<U, F>(&self, function: F) -> LinkedList<U>
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

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.length,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
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

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert(value);
        }
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}
