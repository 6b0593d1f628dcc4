//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is a symmetric union with no success or failure polarity:
//! every operation exists for both sides (`map_left`/`map_right`,
//! `filter_left`/`filter_right`, ...). Use [`Either::fold`] to eliminate it
//! into a single value and [`Either::swap`] to exchange the sides.
//!
//! # Examples
//!
//! ```rust
//! use tagrail::container::either::{self, Either};
//!
//! let value: Either<i32, String> = either::right("hello".to_string());
//!
//! let length = value.clone().fold(|_| 0, |text| text.len());
//! assert_eq!(length, 5);
//!
//! assert_eq!(value.swap(), Either::Left("hello".to_string()));
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::guard::{self, Typeguard};
use crate::predicate::Predicate;
use crate::tagged::{self, IntoTagged, Tagged, TaggedUnion, create_tagged};
use crate::variant::{self, LeftVariant, RightVariant};

/// Tag of the `Left` variant.
pub const LEFT_TAG: &str = "left";
/// Tag of the `Right` variant.
pub const RIGHT_TAG: &str = "right";

const UNWRAP_LEFT_MESSAGE: &str = "Cannot unwrap Right, expected to be Left";
const UNWRAP_RIGHT_MESSAGE: &str = "Cannot unwrap Left, expected to be Right";

/// A value that is one of two types.
///
/// # Examples
///
/// ```rust
/// use tagrail::container::Either;
///
/// let chosen: Either<String, i32> = Either::Right(42);
/// assert_eq!(chosen.map_right(|value| value * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

/// Wraps `value` in `Left`.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Wraps `value` in `Right`.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Sorts values with `predicate`: accepted values go `Right`, the rest `Left`.
///
/// ```rust
/// use tagrail::container::either::{Either, from_predicate};
/// use tagrail::predicate::Predicate;
///
/// let sort = from_predicate(Predicate::new(|value: &i32| *value >= 0));
/// assert_eq!(sort(3), Either::Right(3));
/// assert_eq!(sort(-3), Either::Left(-3));
/// ```
pub fn from_predicate<T>(predicate: Predicate<T>) -> impl Fn(T) -> Either<T, T> {
    move |value| {
        if predicate.test(&value) {
            Either::Right(value)
        } else {
            Either::Left(value)
        }
    }
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<L>`, discarding a right value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the left value, leaving a right value untouched.
    ///
    /// ```rust
    /// use tagrail::container::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|value| value * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        variant::map::<LeftVariant<R>, _, _>(self, Either::Left, function)
    }

    /// Applies `function` to the right value, leaving a left value untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        variant::map::<RightVariant<L>, _, _>(self, Either::Right, function)
    }

    /// Maps a left value, or returns `fallback` for a right one.
    pub fn map_left_or<T, F>(self, fallback: Either<T, R>, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        variant::map_or::<LeftVariant<R>, _, _>(self, fallback, Either::Left, function)
    }

    /// Maps a right value, or returns `fallback` for a left one.
    pub fn map_right_or<T, F>(self, fallback: Either<L, T>, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        variant::map_or::<RightVariant<L>, _, _>(self, fallback, Either::Right, function)
    }

    /// Maps a left value; a right value is replaced by `Left(fallback())`.
    ///
    /// ```rust
    /// use tagrail::container::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("skip");
    /// assert_eq!(right.map_left_or_else(|| 0, |value| value + 1), Either::Left(0));
    /// ```
    pub fn map_left_or_else<T, D, F>(self, fallback: D, function: F) -> Either<T, R>
    where
        D: FnOnce() -> T,
        F: FnOnce(L) -> T,
    {
        variant::map_or_else::<LeftVariant<R>, _, _>(self, fallback, Either::Left, function)
    }

    /// Maps a right value; a left value is replaced by `Right(fallback())`.
    pub fn map_right_or_else<T, D, F>(self, fallback: D, function: F) -> Either<L, T>
    where
        D: FnOnce() -> T,
        F: FnOnce(R) -> T,
    {
        variant::map_or_else::<RightVariant<L>, _, _>(self, fallback, Either::Right, function)
    }

    /// Applies one of two functions depending on the side.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Filter Operations
    // =========================================================================

    /// Keeps a left value accepted by `predicate`, falling back to
    /// `fallback` otherwise.
    #[must_use]
    pub fn filter_left_or<P>(self, fallback: Self, predicate: P) -> Self
    where
        P: FnOnce(&L) -> bool,
    {
        variant::filter_or::<LeftVariant<R>, _>(self, fallback, Either::Left, predicate)
    }

    /// Keeps a right value accepted by `predicate`, falling back to
    /// `fallback` otherwise.
    #[must_use]
    pub fn filter_right_or<P>(self, fallback: Self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        variant::filter_or::<RightVariant<L>, _>(self, fallback, Either::Right, predicate)
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// ```rust
    /// use tagrail::container::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|value| value.to_string(), |text| text), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        variant::fold::<LeftVariant<R>, _, _>(self, left_function, right_function)
    }

    /// Swaps the Left and Right variants, keeping the payload.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        variant::swap::<LeftVariant<R>, LeftVariant<L>, L>(self)
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics with "Cannot unwrap Right, expected to be Left" on a right value.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        variant::unwrap::<LeftVariant<R>, _>(self, UNWRAP_LEFT_MESSAGE)
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics with "Cannot unwrap Left, expected to be Right" on a left value.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        variant::unwrap::<RightVariant<L>, _>(self, UNWRAP_RIGHT_MESSAGE)
    }

    /// Returns the left value, or `fallback`.
    #[inline]
    pub fn unwrap_left_or(self, fallback: L) -> L {
        variant::unwrap_or::<LeftVariant<R>, _>(self, fallback)
    }

    /// Returns the right value, or `fallback`.
    #[inline]
    pub fn unwrap_right_or(self, fallback: R) -> R {
        variant::unwrap_or::<RightVariant<L>, _>(self, fallback)
    }

    /// Returns the left value, or the result of `fallback`.
    #[inline]
    pub fn unwrap_left_or_else<F>(self, fallback: F) -> L
    where
        F: FnOnce() -> L,
    {
        variant::unwrap_or_else::<LeftVariant<R>, _>(self, fallback)
    }

    /// Returns the right value, or the result of `fallback`.
    #[inline]
    pub fn unwrap_right_or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce() -> R,
    {
        variant::unwrap_or_else::<RightVariant<L>, _>(self, fallback)
    }
}

impl<T> Either<T, T> {
    /// Returns the value regardless of the side.
    #[inline]
    pub fn unwrap_either(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L, R: Default> Either<L, R> {
    /// Keeps a left value accepted by `predicate`.
    ///
    /// Anything else becomes `Right(R::default())`: the failure branch
    /// carries no payload, even when the input was already a right value.
    ///
    /// ```rust
    /// use tagrail::container::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(3);
    /// assert_eq!(left.filter_left(|value| *value > 5), Either::Right(String::new()));
    /// ```
    #[must_use]
    pub fn filter_left<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&L) -> bool,
    {
        variant::filter::<LeftVariant<R>, _>(self, Either::Left, || Either::Right(R::default()), predicate)
    }
}

impl<L: Default, R> Either<L, R> {
    /// Keeps a right value accepted by `predicate`.
    ///
    /// Anything else becomes `Left(L::default())`.
    #[must_use]
    pub fn filter_right<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        variant::filter::<RightVariant<L>, _>(self, Either::Right, || Either::Left(L::default()), predicate)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Tagged form
// =============================================================================

impl<L, R> TaggedUnion for Either<L, R> {
    fn tag(&self) -> &'static str {
        match self {
            Self::Left(_) => LEFT_TAG,
            Self::Right(_) => RIGHT_TAG,
        }
    }
}

impl<L: Serialize, R: Serialize> IntoTagged for Either<L, R> {
    fn to_tagged(&self) -> serde_json::Result<Tagged<Value>> {
        let value = match self {
            Self::Left(value) => serde_json::to_value(value)?,
            Self::Right(value) => serde_json::to_value(value)?,
        };
        Ok(create_tagged(value, self.tag()))
    }
}

/// Accepts serialized `Left` and `Right` records.
pub fn is_either() -> Typeguard {
    guard::any_of([is_left(), is_right()])
}

/// Accepts serialized `Left` records.
pub fn is_left() -> Typeguard {
    tagged::is_tagged_with(LEFT_TAG)
}

/// Accepts serialized `Right` records.
pub fn is_right() -> Typeguard {
    tagged::is_tagged_with(RIGHT_TAG)
}

/// Accepts serialized eithers whose payload satisfies `value_guard`.
pub fn is_either_of(value_guard: Typeguard) -> Typeguard {
    guard::combine([is_either(), has_value_of(value_guard)])
}

/// Accepts serialized `Left` records whose payload satisfies `value_guard`.
pub fn is_left_of(value_guard: Typeguard) -> Typeguard {
    tagged::is_tagged_with_value_of(LEFT_TAG, value_guard)
}

/// Accepts serialized `Right` records whose payload satisfies `value_guard`.
pub fn is_right_of(value_guard: Typeguard) -> Typeguard {
    tagged::is_tagged_with_value_of(RIGHT_TAG, value_guard)
}

fn has_value_of(value_guard: Typeguard) -> Typeguard {
    guard::has_key_of_type(tagged::VALUE_KEY, value_guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[should_panic(expected = "inner failure")]
    fn map_left_lets_panics_through() {
        let _ = Either::<i32, ()>::Left(1).map_left(|_| -> i32 { panic!("inner failure") });
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }

    #[rstest]
    #[case(left(1), Either::Right(String::new()))]
    #[case(left(8), Either::Left(8))]
    #[case(right("kept".to_string()), Either::Right(String::new()))]
    fn filter_left_discards_the_payload(#[case] input: Either<i32, String>, #[case] expected: Either<i32, String>) {
        assert_eq!(input.filter_left(|value| *value > 5), expected);
    }

    #[rstest]
    fn filter_right_or_uses_the_fallback() {
        let fallback: Either<i32, i32> = Either::Left(-1);
        assert_eq!(right(2).filter_right_or(fallback, |value| *value > 5), fallback);
        assert_eq!(right(9).filter_right_or(fallback, |value| *value > 5), Either::Right(9));
    }

    #[rstest]
    fn map_or_variants() {
        let right_value: Either<i32, &str> = Either::Right("text");
        assert_eq!(right_value.map_left_or(Either::Left(0), |value| value + 1), Either::Left(0));
        assert_eq!(right_value.map_right_or(Either::Right(0), str::len), Either::Right(4));
        let left_value: Either<i32, &str> = Either::Left(1);
        assert_eq!(left_value.map_right_or_else(|| 7, str::len), Either::Right(7));
    }

    #[rstest]
    #[should_panic(expected = "Cannot unwrap Right, expected to be Left")]
    fn unwrap_left_on_right_panics() {
        right::<i32, i32>(1).unwrap_left();
    }

    #[rstest]
    #[should_panic(expected = "Cannot unwrap Left, expected to be Right")]
    fn unwrap_right_on_left_panics() {
        left::<i32, i32>(1).unwrap_right();
    }

    #[rstest]
    fn unwrap_fallbacks() {
        assert_eq!(right::<i32, i32>(1).unwrap_left_or(0), 0);
        assert_eq!(left::<i32, i32>(1).unwrap_right_or_else(|| 5), 5);
        assert_eq!(right::<i32, i32>(1).unwrap_either(), 1);
    }

    #[rstest]
    fn guards_recognize_serialized_sides() {
        let dynamic = serde_json::to_value(left::<&str, i32>("a").to_tagged().unwrap()).unwrap();
        assert!(is_either().test(&dynamic));
        assert!(is_left().test(&dynamic));
        assert!(!is_right().test(&dynamic));
        assert!(is_left_of(guard::is_string()).test(&dynamic));
        assert!(!is_right_of(guard::is_string()).test(&dynamic));
        assert!(is_either_of(guard::is_string()).test(&dynamic));
        assert!(!is_either_of(guard::is_number()).test(&dynamic));
        assert!(!is_either().test(&json!({ "tag": "some", "value": 1 })));
    }
}
