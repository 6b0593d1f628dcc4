//! Fixed-size, read-only sequences.

use std::ops::Index;

/// A frozen sequence: its arity and elements never change after creation.
///
/// Heterogeneous tuples hold a common type such as `serde_json::Value`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tagrail::tuple;
///
/// let pair = tuple![json!(10), json!("hello")];
///
/// assert_eq!(pair.size(), 2);
/// assert_eq!(pair.index_of(&json!("hello")), Some(1));
/// assert_eq!(pair[0], json!(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tuple<T> {
    items: Box<[T]>,
}

impl<T> Tuple<T> {
    /// Freezes `items` into a tuple.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }

    /// Returns the arity.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns the valid positions, `0..size`.
    #[inline]
    pub fn keys(&self) -> std::ops::Range<usize> {
        0..self.size()
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    /// Returns the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Index<usize> for Tuple<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> From<Vec<T>> for Tuple<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Tuple<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(items.into())
    }
}

/// Builds a [`Tuple`] from its elements.
#[macro_export]
macro_rules! tuple {
    ($($item:expr),* $(,)?) => {
        $crate::collection::Tuple::new(vec![$($item),*])
    };
}
