//! The Option family over [`std::option::Option`].
//!
//! The functions here are the validating counterparts of the std methods:
//! a new payload goes through [`option`], so a transformation that yields a
//! nullish value (`Value::Null`, `None`, `()`) ends in `None`. The dynamic
//! guards recognize the serialized `{ tag: "some" | "none", value }` form.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::{Value, json};
//! use tagrail::container::option;
//!
//! assert_eq!(option::option(json!(null)), None);
//! assert_eq!(option::option(0), Some(0));
//!
//! let name = option::map(Some(json!({ "name": "tagrail" })), |user| user["name"].clone());
//! assert_eq!(name, Some(json!("tagrail")));
//!
//! let missing = option::map(Some(json!({})), |user| user["name"].clone());
//! assert_eq!(missing, None::<Value>);
//! ```

use serde::Serialize;
use serde_json::Value;

use super::maybe::{self, Maybe};
use super::{Nullable, Truthy};
use crate::error::{ContainerError, Error};
use crate::guard::{self, Typeguard};
use crate::tagged::{self, IntoTagged, Tagged, TaggedUnion, create_tagged};
use crate::variant::{self, SomeVariant};

/// Tag of the `Some` variant.
pub const SOME_TAG: &str = "some";
/// Tag of the `None` variant.
pub const NONE_TAG: &str = "none";
/// Name of the validating constructor.
pub const OPTION_TAG: &str = "option";

const UNWRAP_MESSAGE: &str = "option.unwrap argument must be some";

// =============================================================================
// Constructors
// =============================================================================

/// Wraps `value` in `Some` unless it is nullish.
#[inline]
pub fn option<T: Nullable>(value: T) -> Option<T> {
    if value.is_nullish() { None } else { Some(value) }
}

/// Wraps a non-nullish `value` in `Some`.
///
/// # Panics
///
/// Panics with "some value cannot be undefined nor null" when `value` is
/// nullish. See [`try_some`] for the non-panicking form.
#[track_caller]
pub fn some<T: Nullable>(value: T) -> Option<T> {
    match try_some(value) {
        Ok(some) => some,
        Err(error) => panic!("{error}"),
    }
}

/// Wraps a non-nullish `value` in `Some`.
///
/// # Errors
///
/// Returns [`ContainerError::NullishValue`] when `value` is nullish.
pub fn try_some<T: Nullable>(value: T) -> Result<Option<T>, ContainerError> {
    if value.is_nullish() {
        Err(ContainerError::NullishValue)
    } else {
        Ok(Some(value))
    }
}

/// Returns `None`.
#[inline]
pub const fn none<T>() -> Option<T> {
    None
}

// =============================================================================
// Conditionals
// =============================================================================

/// Returns `other` if `source` is `Some`, otherwise `None`.
#[inline]
pub fn and<T, U>(source: Option<T>, other: Option<U>) -> Option<U> {
    source.and(other)
}

/// Calls `function` with the payload and wraps its result with [`option`].
///
/// `function` is not called on `None`.
pub fn and_then<T, U, F>(source: Option<T>, function: F) -> Option<U>
where
    U: Nullable,
    F: FnOnce(T) -> U,
{
    source.and_then(|value| option(function(value)))
}

/// Returns `source` if it is `Some`, otherwise `other`.
#[inline]
pub fn or<T>(source: Option<T>, other: Option<T>) -> Option<T> {
    source.or(other)
}

/// Returns `source` if it is `Some`, otherwise wraps the result of `function`
/// with [`option`].
pub fn or_then<T, F>(source: Option<T>, function: F) -> Option<T>
where
    T: Nullable,
    F: FnOnce() -> T,
{
    source.or_else(|| option(function()))
}

// =============================================================================
// Filterables and Mappables
// =============================================================================

/// Keeps the payload when `predicate` accepts it.
pub fn filter<T, P>(source: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    variant::filter::<SomeVariant, _>(source, Some, none, predicate)
}

/// Keeps the payload when `predicate` accepts it, otherwise returns `fallback`.
///
/// ```rust
/// use tagrail::container::option;
///
/// assert_eq!(option::filter_or(Some(3), Some(0), |value| value % 2 == 0), Some(0));
/// assert_eq!(option::filter_or(None, Some(0), |value: &i32| value % 2 == 0), Some(0));
/// ```
pub fn filter_or<T, P>(source: Option<T>, fallback: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    variant::filter_or::<SomeVariant, _>(source, fallback, Some, predicate)
}

/// Applies `function` to the payload, re-checking nullishness.
pub fn map<T, U, F>(source: Option<T>, function: F) -> Option<U>
where
    U: Nullable,
    F: FnOnce(T) -> U,
{
    variant::map::<SomeVariant, _, _>(source, option, function)
}

/// Like [`map`], but returns `fallback` on `None`.
pub fn map_or<T, U, F>(source: Option<T>, fallback: Option<U>, function: F) -> Option<U>
where
    U: Nullable,
    F: FnOnce(T) -> U,
{
    variant::map_or::<SomeVariant, _, _>(source, fallback, option, function)
}

/// Like [`map`], but wraps the result of `fallback` on `None`.
pub fn map_or_else<T, U, D, F>(source: Option<T>, fallback: D, function: F) -> Option<U>
where
    U: Nullable,
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    variant::map_or_else::<SomeVariant, _, _>(source, fallback, option, function)
}

// =============================================================================
// Assertables and Unwrappables
// =============================================================================

/// Returns `source` if it is `Some`.
///
/// # Panics
///
/// Panics with `message` on `None`.
#[track_caller]
pub fn expect<T>(source: Option<T>, message: &str) -> Option<T> {
    variant::expect::<SomeVariant, _>(source, message)
}

/// Returns `source` if it is `None`.
///
/// # Panics
///
/// Panics with `message` on `Some`.
#[track_caller]
pub fn unexpect<T>(source: Option<T>, message: &str) -> Option<T> {
    variant::unexpect::<SomeVariant, _>(source, message)
}

/// Returns the payload.
///
/// # Panics
///
/// Panics with "option.unwrap argument must be some" on `None`.
#[track_caller]
pub fn unwrap<T>(source: Option<T>) -> T {
    variant::unwrap::<SomeVariant, _>(source, UNWRAP_MESSAGE)
}

/// Returns the payload, or `fallback`.
#[inline]
pub fn unwrap_or<T>(source: Option<T>, fallback: T) -> T {
    variant::unwrap_or::<SomeVariant, _>(source, fallback)
}

/// Returns the payload, or the result of `fallback`.
#[inline]
pub fn unwrap_or_else<T, F>(source: Option<T>, fallback: F) -> T
where
    F: FnOnce() -> T,
{
    variant::unwrap_or_else::<SomeVariant, _>(source, fallback)
}

// =============================================================================
// Conversions
// =============================================================================

/// Converts into a [`Maybe`], re-checking truthiness of the payload.
#[inline]
pub fn maybe<T: Truthy>(source: Option<T>) -> Maybe<T> {
    source.map_or(Maybe::Nothing, maybe::maybe)
}

/// Converts into a `Result`: `None` becomes `Err("value is none")`.
///
/// # Errors
///
/// Returns an [`Error`] on `None`.
#[inline]
pub fn result<T>(source: Option<T>) -> Result<T, Error> {
    source.ok_or_else(|| Error::new("value is none"))
}

/// Conversions and assertions the std [`Option`] does not provide.
///
/// ```rust
/// use tagrail::container::{Maybe, OptionExt};
///
/// assert_eq!(Some(10).maybe().option().unwrap(), 10);
/// assert_eq!(Some(0).maybe(), Maybe::Nothing);
/// assert!(None::<i32>.result().is_err());
/// ```
pub trait OptionExt<T> {
    /// See [`maybe`].
    fn maybe(self) -> Maybe<T>
    where
        T: Truthy;

    /// See [`result`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] on `None`.
    fn result(self) -> Result<T, Error>;

    /// See [`filter_or`].
    #[must_use]
    fn filter_or<P>(self, fallback: Option<T>, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool;

    /// See [`unexpect`].
    #[must_use]
    fn unexpect(self, message: &str) -> Option<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn maybe(self) -> Maybe<T>
    where
        T: Truthy,
    {
        maybe(self)
    }

    fn result(self) -> Result<T, Error> {
        result(self)
    }

    fn filter_or<P>(self, fallback: Self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        filter_or(self, fallback, predicate)
    }

    #[track_caller]
    fn unexpect(self, message: &str) -> Self {
        unexpect(self, message)
    }
}

// =============================================================================
// Tagged form
// =============================================================================

impl<T> TaggedUnion for Option<T> {
    fn tag(&self) -> &'static str {
        if self.is_some() { SOME_TAG } else { NONE_TAG }
    }
}

impl<T: Serialize> IntoTagged for Option<T> {
    fn to_tagged(&self) -> serde_json::Result<Tagged<Value>> {
        let value = match self {
            Some(value) => serde_json::to_value(value)?,
            None => Value::Null,
        };
        Ok(create_tagged(value, self.tag()))
    }
}

/// Accepts serialized `Some` and `None` records.
pub fn is_option() -> Typeguard {
    guard::any_of([is_some(), is_none()])
}

/// Accepts serialized `Some` records.
pub fn is_some() -> Typeguard {
    tagged::is_tagged_with(SOME_TAG)
}

/// Accepts serialized `None` records.
pub fn is_none() -> Typeguard {
    tagged::is_tagged_with(NONE_TAG)
}

/// Accepts serialized options whose payload satisfies `value_guard`.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::container::option::is_option_of;
/// use tagrail::guard::is_string;
///
/// assert!(is_option_of(is_string()).test(&json!({ "tag": "some", "value": "a" })));
/// assert!(!is_option_of(is_string()).test(&json!({ "tag": "some", "value": 1 })));
/// ```
pub fn is_option_of(value_guard: Typeguard) -> Typeguard {
    guard::combine([
        is_option(),
        guard::has_key_of_type(tagged::VALUE_KEY, value_guard),
    ])
}
