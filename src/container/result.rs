//! The Result family over [`std::result::Result`] with [`Error`] as the
//! failure payload.
//!
//! [`result`] sorts a value into `Ok` or `Err` depending on whether it is an
//! error: [`Error`], one of the crate's error enums or a boxed
//! `std::error::Error`. Mapping functions go through [`result`] as well, so a
//! transformation returning an [`Error`] switches the track to `Err`.
//! Panics raised by caller-supplied functions are not caught here; wrap the
//! call with [`crate::control::safe`] for that.
//!
//! # Examples
//!
//! ```rust
//! use tagrail::Error;
//! use tagrail::container::result;
//!
//! let total = result::and_then(result::ok(10), |value| value + 5);
//! assert_eq!(result::unwrap(total), 15);
//!
//! let failed = result::and_then(result::ok(10), |_| Error::new("boom"));
//! assert_eq!(failed, Err(Error::new("boom")));
//!
//! assert_eq!(result::unwrap_or(result::err("boom"), 99), 99);
//! ```

use std::any::Any;

use serde::Serialize;
use serde_json::Value;

use super::maybe::{self, Maybe};
use super::option;
use super::{Nullable, Truthy};
use crate::error::{CastError, ContainerError, Error, IndexError};
use crate::guard;
use crate::tagged::{IntoTagged, Tagged, TaggedUnion, create_tagged};
use crate::variant::{self, OkVariant};

/// Tag of the `Ok` variant.
pub const OK_TAG: &str = "ok";
/// Tag of the `Err` variant.
pub const ERR_TAG: &str = "err";
/// Name of the sorting constructor.
pub const RESULT_TAG: &str = "result";

const UNWRAP_MESSAGE: &str = "Cannot unwrap Err<T>";

type Family = OkVariant<Error>;

// =============================================================================
// Constructors
// =============================================================================

/// Converts `value` into an [`Error`] if it is one of the error types the
/// Result family recognizes: [`Error`], the crate's error enums,
/// `Thrown<Error>`, serialized errors and boxed `std::error::Error` objects.
fn as_error(value: &dyn Any) -> Option<Error> {
    if let Some(error) = value.downcast_ref::<Error>() {
        return Some(error.clone());
    }
    if let Some(error) = value.downcast_ref::<ContainerError>() {
        return Some(Error::from(*error));
    }
    if let Some(error) = value.downcast_ref::<IndexError>() {
        return Some(Error::from(*error));
    }
    if let Some(error) = value.downcast_ref::<CastError>() {
        return Some(Error::from(error.clone()));
    }
    if let Some(error) = thrown(value) {
        return Some(error);
    }
    if let Some(dynamic) = value.downcast_ref::<Value>() {
        return guard::is_error()
            .test(dynamic)
            .then(|| Error::new(dynamic["message"].as_str().unwrap_or_default()));
    }
    if let Some(error) = value.downcast_ref::<Box<dyn std::error::Error + Send + Sync>>() {
        return Some(Error::new(error.to_string()));
    }
    value
        .downcast_ref::<Box<dyn std::error::Error>>()
        .map(|error| Error::new(error.to_string()))
}

#[cfg(feature = "control")]
fn thrown(value: &dyn Any) -> Option<Error> {
    value
        .downcast_ref::<crate::control::Thrown<Error>>()
        .map(|thrown| Error::from(thrown.clone()))
}

#[cfg(not(feature = "control"))]
const fn thrown(_: &dyn Any) -> Option<Error> {
    None
}

/// Sorts `value` onto a track: an error becomes `Err`, anything else `Ok`.
///
/// Errors are [`Error`] itself, [`ContainerError`], [`IndexError`],
/// [`CastError`], `Thrown<Error>`, boxed `std::error::Error` objects and
/// dynamic values shaped like a serialized error (`{"message": "..."}`); all
/// of them are converted into [`Error`].
///
/// ```rust
/// use tagrail::{Error, IndexError};
/// use tagrail::container::result::result;
///
/// assert_eq!(result(3), Ok(3));
/// assert_eq!(result(Error::new("boom")), Err(Error::new("boom")));
/// assert_eq!(
///     result(IndexError::OutOfRange { index: 1 }),
///     Err(Error::new("Index 1 is out of range"))
/// );
/// ```
pub fn result<T: Any>(value: T) -> Result<T, Error> {
    match as_error(&value) {
        Some(error) => Err(error),
        None => Ok(value),
    }
}

/// Wraps `value` in `Ok`.
///
/// # Panics
///
/// Panics with "ok value must not be an error" when `value` is an error
/// in the sense of [`result`]. See [`try_ok`] for the non-panicking form.
#[track_caller]
pub fn ok<T: Any>(value: T) -> Result<T, Error> {
    match try_ok(value) {
        Ok(ok) => ok,
        Err(error) => panic!("{error}"),
    }
}

/// Wraps `value` in `Ok`.
///
/// # Errors
///
/// Returns [`ContainerError::ErrorAsOk`] when `value` is an error in the
/// sense of [`result`].
pub fn try_ok<T: Any>(value: T) -> Result<Result<T, Error>, ContainerError> {
    if as_error(&value).is_some() {
        Err(ContainerError::ErrorAsOk)
    } else {
        Ok(Ok(value))
    }
}

/// Wraps a message or an existing error in `Err`.
#[inline]
pub fn err<T>(error: impl Into<Error>) -> Result<T, Error> {
    Err(error.into())
}

// =============================================================================
// Conditionals
// =============================================================================

/// Returns `other` if `source` is `Ok`, otherwise the `Err` of `source`.
#[inline]
pub fn and<T, U>(source: Result<T, Error>, other: Result<U, Error>) -> Result<U, Error> {
    source.and(other)
}

/// Calls `function` with the payload and sorts its result with [`result`].
///
/// `function` is not called on `Err`.
pub fn and_then<T, U, F>(source: Result<T, Error>, function: F) -> Result<U, Error>
where
    U: Any,
    F: FnOnce(T) -> U,
{
    source.and_then(|value| result(function(value)))
}

/// Returns `source` if it is `Ok`, otherwise `other`.
#[inline]
pub fn or<T>(source: Result<T, Error>, other: Result<T, Error>) -> Result<T, Error> {
    source.or(other)
}

/// Returns `source` if it is `Ok`, otherwise sorts the result of calling
/// `function` with the error.
pub fn or_then<T, F>(source: Result<T, Error>, function: F) -> Result<T, Error>
where
    T: Any,
    F: FnOnce(Error) -> T,
{
    source.or_else(|error| result(function(error)))
}

// =============================================================================
// Mappables
// =============================================================================

/// Applies `function` to the payload and sorts the outcome with [`result`].
pub fn map<T, U, F>(source: Result<T, Error>, function: F) -> Result<U, Error>
where
    U: Any,
    F: FnOnce(T) -> U,
{
    variant::map::<Family, _, _>(source, result, function)
}

/// Like [`map`], but returns `fallback` on `Err`.
pub fn map_or<T, U, F>(source: Result<T, Error>, fallback: Result<U, Error>, function: F) -> Result<U, Error>
where
    U: Any,
    F: FnOnce(T) -> U,
{
    variant::map_or::<Family, _, _>(source, fallback, result, function)
}

/// Like [`map`], but sorts the result of `fallback` on `Err`.
pub fn map_or_else<T, U, D, F>(source: Result<T, Error>, fallback: D, function: F) -> Result<U, Error>
where
    U: Any,
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    variant::map_or_else::<Family, _, _>(source, fallback, result, function)
}

// =============================================================================
// Assertables and Unwrappables
// =============================================================================

/// Returns `source` if it is `Ok`.
///
/// # Panics
///
/// Panics with `message` on `Err`.
#[track_caller]
pub fn expect<T>(source: Result<T, Error>, message: &str) -> Result<T, Error> {
    variant::expect::<Family, _>(source, message)
}

/// Returns `source`, an `Err`, unchanged.
///
/// # Panics
///
/// Panics with `message` on `Ok`.
#[track_caller]
pub fn unexpect<T>(source: Result<T, Error>, message: &str) -> Result<T, Error> {
    variant::unexpect::<Family, _>(source, message)
}

/// Returns the payload.
///
/// # Panics
///
/// Panics with "Cannot unwrap Err<T>" on `Err`.
#[track_caller]
pub fn unwrap<T>(source: Result<T, Error>) -> T {
    variant::unwrap::<Family, _>(source, UNWRAP_MESSAGE)
}

/// Returns the payload, or `fallback`.
#[inline]
pub fn unwrap_or<T>(source: Result<T, Error>, fallback: T) -> T {
    variant::unwrap_or::<Family, _>(source, fallback)
}

/// Returns the payload, or the result of `fallback`.
#[inline]
pub fn unwrap_or_else<T, F>(source: Result<T, Error>, fallback: F) -> T
where
    F: FnOnce() -> T,
{
    variant::unwrap_or_else::<Family, _>(source, fallback)
}

// =============================================================================
// Conversions
// =============================================================================

/// Converts into a [`Maybe`]; a falsy `Ok` payload becomes `Nothing`.
#[inline]
pub fn maybe<T: Truthy>(source: Result<T, Error>) -> Maybe<T> {
    source.map_or(Maybe::Nothing, maybe::maybe)
}

/// Converts into an [`Option`]; a nullish `Ok` payload becomes `None`.
#[inline]
pub fn option<T: Nullable>(source: Result<T, Error>) -> Option<T> {
    source.ok().and_then(option::option)
}

/// Conversions and assertions the std [`Result`] does not provide.
///
/// ```rust
/// use tagrail::container::ResultExt;
/// use tagrail::container::result::{err, ok};
///
/// assert_eq!(ok(3).option(), Some(3));
/// assert!(err::<i32>("boom").maybe().is_nothing());
/// assert!(err::<i32>("boom").unexpect("must fail").is_err());
/// ```
pub trait ResultExt<T> {
    /// See [`maybe`].
    fn maybe(self) -> Maybe<T>
    where
        T: Truthy;

    /// See [`option`].
    fn option(self) -> Option<T>
    where
        T: Nullable;

    /// See [`unexpect`].
    #[must_use]
    fn unexpect(self, message: &str) -> Self;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn maybe(self) -> Maybe<T>
    where
        T: Truthy,
    {
        maybe(self)
    }

    fn option(self) -> Option<T>
    where
        T: Nullable,
    {
        option(self)
    }

    #[track_caller]
    fn unexpect(self, message: &str) -> Self {
        unexpect(self, message)
    }
}

// =============================================================================
// Tagged form
// =============================================================================

impl<T, E> TaggedUnion for Result<T, E> {
    fn tag(&self) -> &'static str {
        if self.is_ok() { OK_TAG } else { ERR_TAG }
    }
}

impl<T: Serialize, E: Serialize> IntoTagged for Result<T, E> {
    fn to_tagged(&self) -> serde_json::Result<Tagged<Value>> {
        let value = match self {
            Ok(value) => serde_json::to_value(value)?,
            Err(error) => serde_json::to_value(error)?,
        };
        Ok(create_tagged(value, self.tag()))
    }
}
