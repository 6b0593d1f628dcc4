//! Indexable sequences produced by a generator function.

use std::fmt;
use std::ops::Index;

use chrono::NaiveDate;

use crate::error::{Error, IndexError};

/// A growable, indexable sequence.
///
/// [`remove`](Self::remove) compacts in place: later elements shift left to
/// fill the gap and the length shrinks.
///
/// # Examples
///
/// ```rust
/// use tagrail::collection::range;
///
/// let mut numbers = range(1, 3);
/// numbers.remove(&1);
/// numbers.insert(4);
///
/// assert_eq!(numbers.to_vec(), vec![2, 3, 4]);
/// assert_eq!(numbers[0], 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    items: Vec<T>,
}

impl<T> Range<T> {
    /// Creates a range holding `items`.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns `true` if an element exists at `index`.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns "Item at position {index} is undefined" past the end.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.items
            .get(index)
            .ok_or_else(|| IndexError::Undefined { index }.into())
    }

    /// Appends `item`.
    pub fn insert(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Removes every element equal to `item`, compacting the rest.
    pub fn remove(&mut self, item: &T) -> &mut Self
    where
        T: PartialEq,
    {
        self.items.retain(|element| element != item);
        self
    }

    /// Calls `function` on every element, from the end when `reversed`.
    pub fn for_each<F>(&self, function: F, reversed: bool)
    where
        F: FnMut(&T),
    {
        if reversed {
            self.items.iter().rev().for_each(function);
        } else {
            self.items.iter().for_each(function);
        }
    }

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

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> Index<usize> for Range<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<T> for Range<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

// =============================================================================
// Factories
// =============================================================================

/// Turns a generator of bounds into a [`Range`] factory.
///
/// # Examples
///
/// ```rust
/// use tagrail::collection::range_factory;
///
/// let doubled = range_factory(|start: i64, end: i64| (start..=end).map(|n| n * 2).collect());
/// assert_eq!(doubled(1, 3).to_vec(), vec![2, 4, 6]);
/// ```
pub fn range_factory<T, G>(generator: G) -> impl Fn(T, T) -> Range<T>
where
    G: Fn(T, T) -> Vec<T>,
{
    move |start, end| Range::new(generator(start, end))
}

/// Every integer from `start` to `end`, both included, stepping towards `end`.
///
/// ```rust
/// use tagrail::collection::range;
///
/// assert_eq!(range(0, 10).len(), 11);
/// assert_eq!(range(3, 1).to_vec(), vec![3, 2, 1]);
/// ```
pub fn range(start: i64, end: i64) -> Range<i64> {
    range_factory(|start: i64, end: i64| {
        if start <= end {
            (start..=end).collect()
        } else {
            (end..=start).rev().collect()
        }
    })(start, end)
}

/// Every day from `start` to `end`, both included, stepping towards `end`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use tagrail::collection::date_range;
///
/// let january = date_range(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
/// );
/// assert_eq!(january.len(), 32);
/// ```
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Range<NaiveDate> {
    range_factory(|start: NaiveDate, end: NaiveDate| {
        let days = end.signed_duration_since(start).num_days();
        let step = if days >= 0 { NaiveDate::succ_opt } else { NaiveDate::pred_opt };
        let count = usize::try_from(days.unsigned_abs()).unwrap_or(usize::MAX);
        std::iter::successors(Some(start), move |day| step(day))
            .take(count.saturating_add(1))
            .collect()
    })(start, end)
}
