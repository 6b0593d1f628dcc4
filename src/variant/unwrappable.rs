//! Extracting the active payload and asserting on the active variant.

use super::Variant;

/// Returns the active payload.
///
/// # Panics
///
/// Panics with `message` when the family is inactive.
#[track_caller]
pub fn unwrap<V: Variant, A>(family: V::Family<A>, message: &str) -> A {
    match V::split(family) {
        Ok(value) => value,
        Err(_) => panic!("{message}"),
    }
}

/// Returns the active payload, or `fallback`.
#[inline]
pub fn unwrap_or<V: Variant, A>(family: V::Family<A>, fallback: A) -> A {
    V::split(family).unwrap_or(fallback)
}

/// Returns the active payload, or the value produced by `fallback`.
///
/// `fallback` is only called when the family is inactive.
#[inline]
pub fn unwrap_or_else<V: Variant, A>(family: V::Family<A>, fallback: impl FnOnce() -> A) -> A {
    V::split(family).unwrap_or_else(|_| fallback())
}

/// Returns `family` unchanged when it holds the variant `V`.
///
/// # Panics
///
/// Panics with `message` otherwise.
#[track_caller]
pub fn expect<V: Variant, A>(family: V::Family<A>, message: &str) -> V::Family<A> {
    assert!(V::recognize(&family), "{message}");
    family
}

/// Returns `family` unchanged when it does not hold the variant `V`.
///
/// # Panics
///
/// Panics with `message` otherwise.
#[track_caller]
pub fn unexpect<V: Variant, A>(family: V::Family<A>, message: &str) -> V::Family<A> {
    assert!(!V::recognize(&family), "{message}");
    family
}
