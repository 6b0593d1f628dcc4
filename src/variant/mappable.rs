//! Mapping over the active variant.

use super::Variant;

/// Applies `function` to the active payload and re-wraps it with `construct`.
///
/// An inactive family passes through unchanged and `function` is not called.
/// Panics raised by `function` propagate to the caller.
pub fn map<V, A, B>(
    family: V::Family<A>,
    construct: impl FnOnce(B) -> V::Family<B>,
    function: impl FnOnce(A) -> B,
) -> V::Family<B>
where
    V: Variant,
{
    match V::split(family) {
        Ok(value) => construct(function(value)),
        Err(rest) => V::restore(rest),
    }
}

/// Like [`map`], but returns `fallback` when the family is inactive.
pub fn map_or<V, A, B>(
    family: V::Family<A>,
    fallback: V::Family<B>,
    construct: impl FnOnce(B) -> V::Family<B>,
    function: impl FnOnce(A) -> B,
) -> V::Family<B>
where
    V: Variant,
{
    match V::split(family) {
        Ok(value) => construct(function(value)),
        Err(_) => fallback,
    }
}

/// Like [`map`], but wraps the value produced by `fallback` when the family
/// is inactive. `fallback` is only called in that case.
pub fn map_or_else<V, A, B>(
    family: V::Family<A>,
    fallback: impl FnOnce() -> B,
    construct: impl FnOnce(B) -> V::Family<B>,
    function: impl FnOnce(A) -> B,
) -> V::Family<B>
where
    V: Variant,
{
    match V::split(family) {
        Ok(value) => construct(function(value)),
        Err(_) => construct(fallback()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Either;
    use crate::variant::{LeftVariant, OkVariant, SomeVariant};
    use rstest::rstest;

    #[rstest]
    fn map_skips_function_on_inactive() {
        let mut called = false;
        let mapped = map::<OkVariant<&str>, i32, i32>(Err("boom"), Ok, |value| {
            called = true;
            value + 1
        });

        assert_eq!(mapped, Err("boom"));
        assert!(!called);
    }

    #[rstest]
    fn map_uses_the_given_constructor() {
        let rejecting = |value: i32| if value > 10 { None } else { Some(value) };
        assert_eq!(map::<SomeVariant, _, _>(Some(4), rejecting, |value| value * 2), Some(8));
        assert_eq!(map::<SomeVariant, _, _>(Some(6), rejecting, |value| value * 2), None);
    }

    #[rstest]
    fn map_or_returns_the_fallback_untouched() {
        let fallback: Either<i32, char> = Either::Right('z');
        let mapped = map_or::<LeftVariant<char>, i32, i32>(Either::Right('a'), fallback, Either::Left, |value| value);
        assert_eq!(mapped, Either::Right('z'));
    }

    #[rstest]
    #[case(Some(2), Some(4))]
    #[case(None, Some(-1))]
    fn map_or_else_wraps_the_fallback(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(map_or_else::<SomeVariant, _, _>(input, || -1, Some, |value| value * 2), expected);
    }
}
