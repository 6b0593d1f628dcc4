//! Eliminating a family into a single value.

use super::Variant;

/// Applies `active` to the active payload or `rest` to the other one.
///
/// ```rust
/// use tagrail::container::Either;
/// use tagrail::variant::{self, LeftVariant};
///
/// let text = variant::fold::<LeftVariant<&str>, i32, String>(
///     Either::Left(4),
///     |number| number.to_string(),
///     str::to_uppercase,
/// );
/// assert_eq!(text, "4");
/// ```
pub fn fold<V, A, T>(
    family: V::Family<A>,
    active: impl FnOnce(A) -> T,
    rest: impl FnOnce(V::Rest) -> T,
) -> T
where
    V: Variant,
{
    match V::split(family) {
        Ok(value) => active(value),
        Err(other) => rest(other),
    }
}

/// Exchanges the variants of a family, keeping both payloads.
///
/// The active payload of `V` becomes the inactive payload of `W`, and the
/// rest of `V` becomes the active payload of `W`.
///
/// ```rust
/// use tagrail::container::Either;
/// use tagrail::variant::{self, LeftVariant};
///
/// let swapped = variant::swap::<LeftVariant<char>, LeftVariant<i32>, i32>(Either::Left(1));
/// assert_eq!(swapped, Either::Right(1));
/// ```
pub fn swap<V, W, A>(family: V::Family<A>) -> W::Family<V::Rest>
where
    V: Variant,
    W: Variant<Rest = A>,
{
    match V::split(family) {
        Ok(value) => W::restore(value),
        Err(rest) => W::wrap(rest),
    }
}
