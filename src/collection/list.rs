//! An immutable sequence whose operations return new lists.

use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

use crate::container::Maybe;
use crate::error::Error;

const EMPTY_MESSAGE: &str = "List is empty";
const EMPTY_RESULT_MESSAGE: &str = "Empty list provided";

/// A shared, never-mutated sequence of values.
///
/// `insert`, `remove`, `filter` and `map` build a new `List`; the receiver
/// keeps its elements. Cloning a `List` shares the storage.
///
/// Conditionals treat an empty list like an inactive container: `and`
/// passes through only from a filled list, `or` falls back only from an
/// empty one.
///
/// # Examples
///
/// ```rust
/// use tagrail::list;
///
/// let numbers = list![1, 2, 3];
/// let above_one = numbers.filter(|value| *value > 1);
///
/// assert_eq!(above_one.to_vec(), vec![2, 3]);
/// assert_eq!(numbers.len(), 3);
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct List<T> {
    items: Arc<[T]>,
}

impl<T> List<T> {
    /// Creates a list holding `items`.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Creates a list without elements.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    // =========================================================================
    // Conditionals
    // =========================================================================

    /// Returns `other` if `self` is filled, otherwise an empty list.
    #[must_use]
    pub fn and<U>(&self, other: List<U>) -> List<U> {
        if self.is_filled() { other } else { List::empty() }
    }

    /// Returns `self` if it is filled, otherwise `other`.
    #[must_use]
    pub fn or(&self, other: Self) -> Self {
        if self.is_filled() { self.clone() } else { other }
    }

    // =========================================================================
    // Assertables
    // =========================================================================

    /// Returns `self` if it is filled.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the list is empty.
    #[track_caller]
    pub fn expect(&self, message: &str) -> &Self {
        assert!(self.is_filled(), "{message}");
        self
    }

    /// Returns `self` if it is empty.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the list is filled.
    #[track_caller]
    pub fn unexpect(&self, message: &str) -> &Self {
        assert!(self.is_empty(), "{message}");
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if there is at least one element.
    #[inline]
    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    /// Borrows the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Builds a list of the mapped elements. An empty list maps to an empty
    /// list without calling `function`.
    pub fn map<U, F>(&self, function: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Like [`map`](Self::map), but returns `fallback` for an empty list.
    pub fn map_or<U, F>(&self, fallback: List<U>, function: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        if self.is_filled() { self.map(function) } else { fallback }
    }
}

impl<T: Clone> List<T> {
    /// Returns a new list with `item` appended.
    #[must_use]
    pub fn insert(&self, item: T) -> Self {
        self.iter().cloned().chain(std::iter::once(item)).collect()
    }

    /// Returns a new list without any element equal to `value`.
    #[must_use]
    pub fn remove(&self, value: &T) -> Self
    where
        T: PartialEq,
    {
        self.filter(|item| item != value)
    }

    /// Returns a new list of the elements satisfying `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// Like [`filter`](Self::filter), but returns `fallback` when nothing
    /// passes.
    pub fn filter_or<P>(&self, fallback: Self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let filtered = self.filter(predicate);
        if filtered.is_filled() { filtered } else { fallback }
    }

    /// Copies the elements into a `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }

    // =========================================================================
    // Conversions and Unwrappables
    // =========================================================================

    /// `Just` of the elements, or `Nothing` for an empty list.
    pub fn maybe(&self) -> Maybe<Vec<T>> {
        if self.is_filled() { Maybe::Just(self.to_vec()) } else { Maybe::Nothing }
    }

    /// `Some` of the elements, or `None` for an empty list.
    pub fn option(&self) -> Option<Vec<T>> {
        self.is_filled().then(|| self.to_vec())
    }

    /// `Ok` of the elements.
    ///
    /// # Errors
    ///
    /// Returns "Empty list provided" for an empty list.
    pub fn result(&self) -> Result<Vec<T>, Error> {
        self.option().ok_or_else(|| Error::new(EMPTY_RESULT_MESSAGE))
    }

    /// Returns the elements.
    ///
    /// # Panics
    ///
    /// Panics with "List is empty" for an empty list.
    #[track_caller]
    pub fn unwrap(&self) -> Vec<T> {
        self.expect(EMPTY_MESSAGE).to_vec()
    }

    /// Returns the elements, or `fallback` for an empty list.
    pub fn unwrap_or(&self, fallback: Vec<T>) -> Vec<T> {
        self.option().unwrap_or(fallback)
    }

    /// Returns the elements, or the result of `fallback` for an empty list.
    pub fn unwrap_or_else<F>(&self, fallback: F) -> Vec<T>
    where
        F: FnOnce() -> Vec<T>,
    {
        self.option().unwrap_or_else(fallback)
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Builds a [`List`] from its elements.
#[macro_export]
macro_rules! list {
    () => {
        $crate::collection::List::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collection::List::new(vec![$($item),+])
    };
}
