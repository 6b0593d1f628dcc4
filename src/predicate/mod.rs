//! Composable predicates.
//!
//! A [`Predicate`] is a shareable `Fn(&T) -> bool`. Predicates combine with
//! AND/OR/NOT; every combinator short-circuits in argument order.
//!
//! # Examples
//!
//! ```rust
//! use tagrail::predicate::{Predicate, all_of, any_of, reverse};
//!
//! let is_even = Predicate::new(|value: &i32| value % 2 == 0);
//! let is_positive = Predicate::new(|value: &i32| *value > 0);
//!
//! let even_and_positive = all_of([is_even.clone(), is_positive.clone()]);
//! assert!(even_and_positive.test(&4));
//! assert!(!even_and_positive.test(&-4));
//!
//! let odd = reverse(is_even);
//! assert!(odd.test(&3));
//!
//! let either = any_of([odd, is_positive]);
//! assert!(either.test(&-3));
//! assert!(!either.test(&-2));
//! ```

use std::fmt;
use std::sync::Arc;

/// A cloneable, thread-safe predicate over `T`.
pub struct Predicate<T: ?Sized> {
    function: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Predicate<T> {
    /// Wraps a closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// Evaluates the predicate.
    #[inline]
    pub fn test(&self, value: &T) -> bool {
        (self.function)(value)
    }

    /// Returns a predicate accepting values accepted by both.
    #[must_use]
    pub fn and(self, other: Self) -> Self
    where
        T: 'static,
    {
        Self::new(move |value| self.test(value) && other.test(value))
    }

    /// Returns a predicate accepting values accepted by either.
    #[must_use]
    pub fn or(self, other: Self) -> Self
    where
        T: 'static,
    {
        Self::new(move |value| self.test(value) || other.test(value))
    }

    /// Returns the negation.
    #[must_use]
    pub fn negate(self) -> Self
    where
        T: 'static,
    {
        reverse(self)
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Predicate(<fn>)")
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Accepts a value only if every predicate accepts it.
///
/// Evaluation stops at the first rejection. An empty set accepts everything.
pub fn all_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: Vec<Predicate<T>> = predicates.into_iter().collect();
    Predicate::new(move |value| predicates.iter().all(|predicate| predicate.test(value)))
}

/// Accepts a value if at least one predicate accepts it.
///
/// Evaluation stops at the first acceptance. An empty set rejects everything.
pub fn any_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: Vec<Predicate<T>> = predicates.into_iter().collect();
    Predicate::new(move |value| predicates.iter().any(|predicate| predicate.test(value)))
}

/// Accepts a value only if no predicate accepts it.
///
/// ```rust
/// use tagrail::predicate::{Predicate, none_of};
///
/// let neither = none_of([
///     Predicate::new(|value: &str| value.is_empty()),
///     Predicate::new(|value: &str| value.starts_with('#')),
/// ]);
/// assert!(neither.test("hello"));
/// assert!(!neither.test("#comment"));
/// ```
pub fn none_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    reverse(any_of(predicates))
}

/// Negates a predicate.
pub fn reverse<T: ?Sized + 'static>(predicate: Predicate<T>) -> Predicate<T> {
    Predicate::new(move |value| !predicate.test(value))
}

/// Fixes the value and lets the caller choose the predicate.
///
/// ```rust
/// use tagrail::predicate::{Predicate, from_value};
///
/// let check_two = from_value(2);
/// assert!(check_two(&Predicate::new(|value: &i32| value % 2 == 0)));
/// ```
pub fn from_value<T>(value: T) -> impl Fn(&Predicate<T>) -> bool {
    move |predicate| predicate.test(&value)
}

/// Checks whether every one of `values` satisfies the chosen predicate.
pub fn from_values<T, I>(values: I) -> impl Fn(&Predicate<T>) -> bool
where
    I: IntoIterator<Item = T>,
{
    let values: Vec<T> = values.into_iter().collect();
    move |predicate| values.iter().all(|value| predicate.test(value))
}

/// Accepts values equal to `expected`.
pub fn with_same_value<T>(expected: T) -> Predicate<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Predicate::new(move |value| *value == expected)
}

/// Accepts values different from `unexpected`.
pub fn with_different_value<T>(unexpected: T) -> Predicate<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Predicate::new(move |value| *value != unexpected)
}
