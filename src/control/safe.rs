//! Boundary adapters turning panics into `Err`.
//!
//! Fail-fast operations in this crate (`unwrap`, `expect`, the panicking
//! constructors) panic. [`safe`] and [`trycatch`] run a function and convert
//! such a panic into an `Err` instead of letting it unwind further.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::Error;

/// How a guarded call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Thrown<E> {
    /// The function returned this error.
    #[error("{0}")]
    Raised(E),
    /// The function panicked.
    #[error("{0}")]
    Panicked(Error),
}

impl<E> Thrown<E> {
    /// Returns `true` if the function panicked.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}

impl<E: Into<Error>> From<Thrown<E>> for Error {
    fn from(thrown: Thrown<E>) -> Self {
        match thrown {
            Thrown::Raised(error) => error.into(),
            Thrown::Panicked(error) => error,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn panicked(payload: &(dyn Any + Send)) -> Error {
    let message = panic_message(payload);
    tracing::warn!(%message, "panic converted into an error");
    Error::new(message)
}

/// Calls `function` with `args`, converting a panic into `Err` carrying the
/// panic message.
///
/// # Errors
///
/// Returns an [`Error`] with the panic message if `function` panics.
///
/// # Examples
///
/// ```rust
/// use tagrail::container::option;
/// use tagrail::control::safe;
///
/// assert_eq!(safe(|(a, b)| a + b, (1, 2)), Ok(3));
///
/// let failed = safe(option::unwrap::<i32>, None);
/// assert_eq!(failed.unwrap_err().message(), "option.unwrap argument must be some");
/// ```
pub fn safe<A, T, F>(function: F, args: A) -> Result<T, Error>
where
    F: FnOnce(A) -> T,
{
    catch_unwind(AssertUnwindSafe(|| function(args))).map_err(|payload| panicked(payload.as_ref()))
}

/// Calls a fallible `function` with `args`, keeping its own error and
/// converting a panic into [`Thrown::Panicked`].
///
/// # Errors
///
/// Returns [`Thrown::Raised`] with the error `function` returned, or
/// [`Thrown::Panicked`] if it panicked.
///
/// # Examples
///
/// ```rust
/// use tagrail::control::{Thrown, trycatch};
///
/// let parsed = trycatch(|text: &str| text.parse::<i32>(), "12");
/// assert_eq!(parsed, Ok(12));
///
/// let invalid = trycatch(|text: &str| text.parse::<i32>(), "twelve");
/// assert!(matches!(invalid, Err(Thrown::Raised(_))));
/// ```
pub fn trycatch<A, T, E, F>(function: F, args: A) -> Result<T, Thrown<E>>
where
    F: FnOnce(A) -> Result<T, E>,
{
    match catch_unwind(AssertUnwindSafe(|| function(args))) {
        Ok(outcome) => outcome.map_err(Thrown::Raised),
        Err(payload) => Err(Thrown::Panicked(panicked(payload.as_ref()))),
    }
}

// =============================================================================
// Async
// =============================================================================

/// Awaits `function(args)`, converting a panic into `Err`.
///
/// A panic raised while building the future is caught as well.
///
/// # Errors
///
/// Returns an [`Error`] with the panic message if the call or the future
/// panics.
#[cfg(feature = "async")]
pub async fn safe_async<A, T, F, Fut>(function: F, args: A) -> Result<T, Error>
where
    F: FnOnce(A) -> Fut,
    Fut: Future<Output = T>,
{
    use futures::FutureExt;

    AssertUnwindSafe(async move { function(args).await })
        .catch_unwind()
        .await
        .map_err(|payload| panicked(payload.as_ref()))
}

/// Awaits a fallible `function(args)`, keeping its own error and converting
/// a panic into [`Thrown::Panicked`].
///
/// # Errors
///
/// Returns [`Thrown::Raised`] with the error the future resolved to, or
/// [`Thrown::Panicked`] if it panicked.
#[cfg(feature = "async")]
pub async fn trycatch_async<A, T, E, F, Fut>(function: F, args: A) -> Result<T, Thrown<E>>
where
    F: FnOnce(A) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    use futures::FutureExt;

    match AssertUnwindSafe(async move { function(args).await }).catch_unwind().await {
        Ok(outcome) => outcome.map_err(Thrown::Raised),
        Err(payload) => Err(Thrown::Panicked(panicked(payload.as_ref()))),
    }
}
