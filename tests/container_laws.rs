#![cfg(feature = "container")]
//! Property-based tests for the container families.
//!
//! - **Validity**: `option(v)` is `Some` exactly when `v` is not nullish and
//!   `maybe(v)` is `Just` exactly when `v` is truthy
//! - **Fallback**: `unwrap_or(default)` on an inactive container returns
//!   `default` without calling anything else
//! - **Identity**: mapping with the identity function keeps the payload
//! - **Round trip**: Option to Maybe to Option keeps a truthy payload
//! - **Swap involution**: folding `swap(swap(e))` equals folding `e`

use proptest::prelude::*;
use serde_json::{Value, json};
use tagrail::container::{Either, Maybe, Nullable, OptionExt, Truthy, maybe, option, result};

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|number| json!(number)),
        any::<f64>().prop_filter("finite", |number| number.is_finite()).prop_map(|number| json!(number)),
        ".{0,4}".prop_map(Value::String),
        prop::collection::vec(any::<i8>(), 0..3).prop_map(|items| json!(items)),
    ]
}

fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        any::<String>().prop_map(Either::Right),
    ]
}

proptest! {
    #[test]
    fn prop_option_is_some_unless_nullish(value in value_strategy()) {
        let nullish = value.is_nullish();
        prop_assert_eq!(option::option(value).is_some(), !nullish);
    }

    #[test]
    fn prop_maybe_is_just_when_truthy(value in value_strategy()) {
        let truthy = value.is_truthy();
        prop_assert_eq!(maybe::maybe(value).is_just(), truthy);
    }

    #[test]
    fn prop_maybe_over_integers(number in any::<i64>()) {
        prop_assert_eq!(maybe::maybe(number).is_just(), number != 0);
    }

    #[test]
    fn prop_unwrap_or_returns_the_default(default in any::<i32>()) {
        prop_assert_eq!(option::unwrap_or(option::none(), default), default);
        prop_assert_eq!(maybe::nothing().unwrap_or(default), default);
        prop_assert_eq!(result::unwrap_or(result::err("inactive"), default), default);
        prop_assert_eq!(Either::<String, i32>::Left("inactive".into()).unwrap_right_or(default), default);
    }

    #[test]
    fn prop_unwrap_or_else_skips_the_fallback_when_active(number in 1_i32..) {
        let mut called = false;
        let value = maybe::just(number).unwrap_or_else(|| {
            called = true;
            0
        });
        prop_assert_eq!(value, number);
        prop_assert!(!called);
    }

    #[test]
    fn prop_map_identity(number in 1_i32..) {
        prop_assert_eq!(option::map(Some(number), |x| x), Some(number));
        prop_assert_eq!(maybe::just(number).map(|x| x), Maybe::Just(number));
        prop_assert_eq!(result::map(result::ok(number), |x| x), Ok(number));
        prop_assert_eq!(Either::<i32, ()>::Left(number).map_left(|x| x), Either::Left(number));
    }

    #[test]
    fn prop_option_maybe_option_round_trip(number in any::<i32>().prop_filter("truthy", |n| *n != 0)) {
        prop_assert_eq!(option::option(number).maybe().option(), Some(number));
    }

    #[test]
    fn prop_fold_after_double_swap(either in either_strategy()) {
        let describe_left = |number: i32| format!("left {number}");
        let describe_right = |text: String| format!("right {text}");

        let twice = either.clone().swap().swap().fold(describe_left, describe_right);
        prop_assert_eq!(twice, either.fold(describe_left, describe_right));
    }

    #[test]
    fn prop_result_sorts_errors_onto_err(message in ".{0,8}") {
        let sorted = result::result(tagrail::Error::new(message.clone()));
        prop_assert_eq!(sorted, Err(tagrail::Error::new(message)));
    }
}

#[test]
fn round_trip_from_ten() {
    assert_eq!(option::unwrap(option::option(10).maybe().option()), 10);
}

#[test]
fn falsy_payloads_fall_off_the_round_trip() {
    assert_eq!(option::option(0).maybe().option(), None);
    assert_eq!(option::option("").maybe(), Maybe::Nothing);
}
