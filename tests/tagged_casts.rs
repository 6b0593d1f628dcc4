#![cfg(feature = "container")]
//! Integration tests for the tagged form and the cast table.
//!
//! - **Tag agreement**: `to_tagged().tag()` equals `TaggedUnion::tag()`
//! - **Recognition**: a rendered family member is recognized by the dynamic
//!   guard of its family
//! - **Casting**: moving a payload through the cast table applies the
//!   validity rule of the target family

use proptest::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};
use tagrail::CastError;
use tagrail::container::{Either, Maybe, either, maybe, option, result};
use tagrail::tagged::{CastTable, IntoTagged, TaggedUnion, create_tagged, is_tagged, is_tagged_with};

#[rstest]
fn families_render_their_active_variant() {
    let some = Some(3).to_tagged().unwrap();
    let nothing = maybe::nothing::<i32>().to_tagged().unwrap();
    let failed = result::err::<i32>("boom").to_tagged().unwrap();
    let right = Either::<i32, &str>::Right("r").to_tagged().unwrap();

    assert_eq!(some, create_tagged(json!(3), "some"));
    assert_eq!(nothing, create_tagged(Value::Null, "nothing"));
    assert_eq!(failed, create_tagged(json!({ "message": "boom" }), "err"));
    assert_eq!(right, create_tagged(json!("r"), "right"));
}

#[rstest]
fn rendered_records_are_recognized_dynamically() {
    let record = serde_json::to_value(Some("hi").to_tagged().unwrap()).unwrap();

    assert!(is_tagged().test(&record));
    assert!(is_tagged_with("some").test(&record));
    assert!(option::is_some().test(&record));
    assert!(!either::is_either().test(&record));
}

#[rstest]
#[case(json!(0), "option", Ok("some"))]
#[case(json!(0), "maybe", Ok("nothing"))]
#[case(json!(0), "just", Err("just"))]
#[case(json!(null), "some", Err("some"))]
#[case(json!("value"), "result", Ok("ok"))]
#[case(json!({ "message": "bad" }), "result", Ok("err"))]
#[case(json!(1), "right", Ok("right"))]
fn cast_applies_the_target_rule(
    #[case] payload: Value,
    #[case] to: &str,
    #[case] expected: Result<&str, &str>,
) {
    let table = CastTable::wellknown();
    let source = create_tagged(payload, "left");

    let outcome = table.cast(source, to);
    match expected {
        Ok(tag) => assert_eq!(outcome.unwrap().tag(), tag),
        Err(tag) => assert!(matches!(outcome, Err(CastError::Rejected { tag: rejected, .. }) if rejected == tag)),
    }
}

#[rstest]
fn casting_to_an_unknown_family_fails() {
    let outcome = CastTable::wellknown().cast(create_tagged(json!(1), "some"), "vector");
    assert_eq!(outcome, Err(CastError::UnknownTag("vector".to_owned())));
}

#[rstest]
fn custom_tables_carry_their_own_constructors() {
    let table = CastTable::builder()
        .register("celsius", |value: Value| {
            Ok(create_tagged(value, "celsius"))
        })
        .register("fahrenheit", |value: Value| {
            let degrees = value.as_f64().unwrap_or_default();
            Ok(create_tagged(json!(degrees * 9.0 / 5.0 + 32.0), "fahrenheit"))
        })
        .build();

    let boiling = table.construct("celsius", json!(100.0)).unwrap();
    let converted = table.cast(boiling, "fahrenheit").unwrap();

    assert_eq!(converted, create_tagged(json!(212.0), "fahrenheit"));
}

fn maybe_strategy() -> impl Strategy<Value = Maybe<i64>> {
    prop_oneof![
        Just(Maybe::Nothing),
        any::<i64>().prop_filter("truthy", |n| *n != 0).prop_map(Maybe::Just),
    ]
}

proptest! {
    #[test]
    fn prop_rendered_tag_matches_the_active_variant(value in maybe_strategy()) {
        let tagged = value.to_tagged().unwrap();
        prop_assert_eq!(tagged.tag(), value.tag());
    }

    #[test]
    fn prop_option_cast_to_maybe_follows_truthiness(number in any::<i64>()) {
        let table = CastTable::wellknown();
        let source = Some(number).to_tagged().unwrap();

        let cast = table.cast(source, "maybe").unwrap();
        prop_assert_eq!(cast.tag(), if number == 0 { "nothing" } else { "just" });
    }
}
