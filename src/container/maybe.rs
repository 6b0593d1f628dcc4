//! The Maybe family: `Just` a truthy value, or `Nothing`.
//!
//! `Maybe` is stricter than [`Option`]: a `Just` payload must be truthy, so
//! `0`, `""`, `false` and `NaN` are rejected along with nullish values. Every
//! operation that produces a new payload re-checks that rule, which means a
//! mapping that yields a falsy value ends in `Nothing`.
//!
//! # Examples
//!
//! ```rust
//! use tagrail::container::maybe::{self, Maybe};
//!
//! assert_eq!(maybe::maybe(10), Maybe::Just(10));
//! assert_eq!(maybe::maybe(0), Maybe::Nothing);
//!
//! let halved = maybe::maybe(10).map(|value| value / 2);
//! assert_eq!(halved.unwrap(), 5);
//!
//! let zeroed = maybe::maybe(10).map(|value| value - 10);
//! assert!(zeroed.is_nothing());
//! ```

use serde::Serialize;
use serde_json::Value;

use super::Truthy;
use crate::error::{ContainerError, Error};
use crate::tagged::{IntoTagged, Tagged, TaggedUnion, create_tagged};
use crate::variant::{self, JustVariant};

/// Tag of the `Just` variant.
pub const JUST_TAG: &str = "just";
/// Tag of the `Nothing` variant.
pub const NOTHING_TAG: &str = "nothing";
/// Name of the validating constructor.
pub const MAYBE_TAG: &str = "maybe";

const UNWRAP_MESSAGE: &str = "value T is nothing";

/// A truthy value, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A truthy payload.
    Just(T),
    /// No payload.
    Nothing,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Wraps `value` in `Just` when it is truthy, `Nothing` otherwise.
#[inline]
pub fn maybe<T: Truthy>(value: T) -> Maybe<T> {
    if value.is_truthy() {
        Maybe::Just(value)
    } else {
        Maybe::Nothing
    }
}

/// Wraps a truthy `value` in `Just`.
///
/// # Panics
///
/// Panics with "just argument is falsy" when `value` is falsy. See
/// [`try_just`] for the non-panicking form.
#[track_caller]
pub fn just<T: Truthy>(value: T) -> Maybe<T> {
    match try_just(value) {
        Ok(just) => just,
        Err(error) => panic!("{error}"),
    }
}

/// Wraps a truthy `value` in `Just`.
///
/// # Errors
///
/// Returns [`ContainerError::FalsyValue`] when `value` is falsy.
pub fn try_just<T: Truthy>(value: T) -> Result<Maybe<T>, ContainerError> {
    if value.is_truthy() {
        Ok(Maybe::Just(value))
    } else {
        Err(ContainerError::FalsyValue)
    }
}

/// Returns `Nothing`.
#[inline]
pub const fn nothing<T>() -> Maybe<T> {
    Maybe::Nothing
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        !self.is_just()
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Conditionals
    // =========================================================================

    /// Returns `other` if this is `Just`, otherwise `Nothing`.
    ///
    /// ```rust
    /// use tagrail::container::maybe::{maybe, Maybe};
    ///
    /// assert_eq!(maybe(10).and(maybe(20)), Maybe::Just(20));
    /// assert_eq!(maybe(0).and(maybe(20)), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Just(_) => other,
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Calls `function` with the payload and wraps its result with [`maybe`].
    ///
    /// `function` is not called on `Nothing`.
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        U: Truthy,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => maybe(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `self` if this is `Just`, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other,
        }
    }

    /// Returns `self` if this is `Just`, otherwise wraps the result of
    /// `function` with [`maybe`].
    #[must_use]
    pub fn or_then<F>(self, function: F) -> Self
    where
        T: Truthy,
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => maybe(function()),
        }
    }

    // =========================================================================
    // Mappables and Filterables
    // =========================================================================

    /// Applies `function` to the payload, re-checking truthiness.
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        U: Truthy,
        F: FnOnce(T) -> U,
    {
        variant::map::<JustVariant, _, _>(self, maybe, function)
    }

    /// Like [`Maybe::map`], but returns `fallback` on `Nothing`.
    pub fn map_or<U, F>(self, fallback: Maybe<U>, function: F) -> Maybe<U>
    where
        U: Truthy,
        F: FnOnce(T) -> U,
    {
        variant::map_or::<JustVariant, _, _>(self, fallback, maybe, function)
    }

    /// Like [`Maybe::map`], but wraps the result of `fallback` on `Nothing`.
    pub fn map_or_else<U, D, F>(self, fallback: D, function: F) -> Maybe<U>
    where
        U: Truthy,
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        variant::map_or_else::<JustVariant, _, _>(self, fallback, maybe, function)
    }

    /// Keeps the payload when `predicate` accepts it.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        variant::filter::<JustVariant, _>(self, Maybe::Just, nothing, predicate)
    }

    /// Keeps the payload when `predicate` accepts it, otherwise returns `fallback`.
    #[must_use]
    pub fn filter_or<P>(self, fallback: Self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        variant::filter_or::<JustVariant, _>(self, fallback, Maybe::Just, predicate)
    }

    // =========================================================================
    // Assertables and Unwrappables
    // =========================================================================

    /// Returns `self` if this is `Just`.
    ///
    /// # Panics
    ///
    /// Panics with `message` on `Nothing`.
    #[track_caller]
    #[must_use]
    pub fn expect(self, message: &str) -> Self {
        variant::expect::<JustVariant, _>(self, message)
    }

    /// Returns `self` if this is `Nothing`.
    ///
    /// # Panics
    ///
    /// Panics with `message` on `Just`.
    #[track_caller]
    #[must_use]
    pub fn unexpect(self, message: &str) -> Self {
        variant::unexpect::<JustVariant, _>(self, message)
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with "value T is nothing" on `Nothing`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        variant::unwrap::<JustVariant, _>(self, UNWRAP_MESSAGE)
    }

    /// Returns the payload, or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        variant::unwrap_or::<JustVariant, _>(self, fallback)
    }

    /// Returns the payload, or the result of `fallback`.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        variant::unwrap_or_else::<JustVariant, _>(self, fallback)
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into an [`Option`]: `Just` becomes `Some`.
    #[inline]
    pub fn option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts into a `Result`: `Nothing` becomes `Err("value is nothing")`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] on `Nothing`.
    pub fn result(self) -> Result<T, Error> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(Error::new("value is nothing")),
        }
    }
}

impl<T> TaggedUnion for Maybe<T> {
    fn tag(&self) -> &'static str {
        match self {
            Self::Just(_) => JUST_TAG,
            Self::Nothing => NOTHING_TAG,
        }
    }
}

impl<T: Serialize> IntoTagged for Maybe<T> {
    fn to_tagged(&self) -> serde_json::Result<Tagged<Value>> {
        let value = match self {
            Self::Just(value) => serde_json::to_value(value)?,
            Self::Nothing => Value::Null,
        };
        Ok(create_tagged(value, self.tag()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[should_panic(expected = "inner failure")]
    fn map_lets_panics_through() {
        let _ = just(1).map(|_: i32| -> i32 { panic!("inner failure") });
    }

    #[rstest]
    #[case(0.0_f64)]
    #[case(-0.0_f64)]
    #[case(f64::NAN)]
    fn falsy_floats_are_nothing(#[case] value: f64) {
        assert!(maybe(value).is_nothing());
        assert_eq!(try_just(value), Err(ContainerError::FalsyValue));
    }

    #[rstest]
    #[should_panic(expected = "just argument is falsy")]
    fn just_rejects_empty_strings() {
        let _ = just("");
    }

    #[rstest]
    #[should_panic(expected = "value T is nothing")]
    fn unwrap_nothing_panics() {
        nothing::<i32>().unwrap();
    }

    #[rstest]
    fn or_then_rechecks_the_fallback() {
        assert_eq!(nothing().or_then(|| 0), Maybe::Nothing);
        assert_eq!(nothing().or_then(|| 4), Maybe::Just(4));
        assert_eq!(maybe(1).or_then(|| 4), Maybe::Just(1));
    }

    #[rstest]
    fn map_or_else_wraps_the_fallback() {
        assert_eq!(nothing::<i32>().map_or_else(|| 7, |value| value * 2), Maybe::Just(7));
        assert_eq!(nothing::<i32>().map_or_else(|| 0, |value| value * 2), Maybe::Nothing);
    }

    #[rstest]
    fn filter_discards_rejected_values() {
        assert_eq!(maybe(4).filter(|value| value % 2 == 0), Maybe::Just(4));
        assert_eq!(maybe(3).filter(|value| value % 2 == 0), Maybe::Nothing);
        assert_eq!(maybe(3).filter_or(maybe(8), |value| value % 2 == 0), Maybe::Just(8));
    }

    #[rstest]
    fn conversions() {
        assert_eq!(maybe("a").option(), Some("a"));
        assert_eq!(maybe("").option(), None);
        assert_eq!(maybe(0).result(), Err(Error::new("value is nothing")));
    }

    #[rstest]
    fn to_tagged_renders_nothing_as_null() {
        let tagged = nothing::<i32>().to_tagged().unwrap();
        assert_eq!(tagged, create_tagged(Value::Null, "nothing"));
        assert_eq!(maybe(3).to_tagged().unwrap().tag(), "just");
    }
}
