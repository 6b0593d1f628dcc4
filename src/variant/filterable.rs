//! Filtering the active variant.

use super::Variant;

/// Keeps the active payload when `predicate` accepts it, re-wrapping it with
/// `construct`; everything else becomes `fail()`.
///
/// The failure branch carries no payload: an inactive input does not keep
/// its own payload either.
///
/// ```rust
/// use tagrail::container::Either;
/// use tagrail::variant::{self, LeftVariant};
///
/// let kept = variant::filter::<LeftVariant<i32>, _>(
///     Either::Left(4),
///     Either::Left,
///     || Either::Right(0),
///     |value| value % 2 == 0,
/// );
/// assert_eq!(kept, Either::Left(4));
///
/// let dropped = variant::filter::<LeftVariant<i32>, _>(
///     Either::Right(7),
///     Either::Left,
///     || Either::Right(0),
///     |value: &i32| value % 2 == 0,
/// );
/// assert_eq!(dropped, Either::Right(0));
/// ```
pub fn filter<V, A>(
    family: V::Family<A>,
    construct: impl FnOnce(A) -> V::Family<A>,
    fail: impl FnOnce() -> V::Family<A>,
    predicate: impl FnOnce(&A) -> bool,
) -> V::Family<A>
where
    V: Variant,
{
    match V::split(family) {
        Ok(value) if predicate(&value) => construct(value),
        _ => fail(),
    }
}

/// Like [`filter`], but returns `fallback` instead of building a failure.
pub fn filter_or<V, A>(
    family: V::Family<A>,
    fallback: V::Family<A>,
    construct: impl FnOnce(A) -> V::Family<A>,
    predicate: impl FnOnce(&A) -> bool,
) -> V::Family<A>
where
    V: Variant,
{
    match V::split(family) {
        Ok(value) if predicate(&value) => construct(value),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::SomeVariant;
    use rstest::rstest;

    #[rstest]
    #[case(Some(4), Some(4))]
    #[case(Some(3), None)]
    #[case(None, None)]
    fn filter_option(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(filter::<SomeVariant, _>(input, Some, || None, |value| value % 2 == 0), expected);
    }

    #[rstest]
    #[case(Some(4), Some(4))]
    #[case(Some(3), Some(100))]
    #[case(None, Some(100))]
    fn filter_or_option(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(filter_or::<SomeVariant, _>(input, Some(100), Some, |value| value % 2 == 0), expected);
    }

    #[rstest]
    fn predicate_is_not_called_on_inactive() {
        let mut called = false;
        let filtered = filter::<SomeVariant, i32>(None, Some, || None, |_| {
            called = true;
            true
        });
        assert_eq!(filtered, None);
        assert!(!called);
    }
}
