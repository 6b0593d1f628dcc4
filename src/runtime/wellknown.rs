//! Ready-made runtime types.
//!
//! The base types classify a [`Value`] by its JSON kind. The refined types
//! are built from them with [`RuntimeType::derive`], so `uint` is `int`
//! plus a non-negativity check and carries the name `"uint"`.
//!
//! | Type | Accepts |
//! |---|---|
//! | `any` | everything |
//! | `array` | arrays |
//! | `bigint` | numbers stored as integers |
//! | `boolean` | booleans |
//! | `byte` | numbers in `-128..=127` |
//! | `char` | strings of exactly one character |
//! | `defined` | anything but `null` |
//! | `float` | numbers |
//! | `int` | numbers without a fractional part |
//! | `nullable` | `null`, arrays and objects |
//! | `object` | arrays and objects |
//! | `string` | strings |
//!
//! Functions have no [`Value`] form, so there are no function types.

use serde_json::Value;

use super::RuntimeType;
use crate::guard::{self, Schema};

// =============================================================================
// Base types
// =============================================================================

/// Accepts every value.
pub fn any() -> RuntimeType {
    RuntimeType::new("any", |_| true)
}

/// Accepts arrays.
pub fn array() -> RuntimeType {
    RuntimeType::from_guard("array", guard::is_array())
}

/// Accepts numbers held in integer form, either sign.
pub fn bigint() -> RuntimeType {
    RuntimeType::new("bigint", |value| value.is_i64() || value.is_u64())
}

/// Accepts booleans.
pub fn boolean() -> RuntimeType {
    RuntimeType::from_guard("boolean", guard::is_boolean())
}

/// Accepts numbers from -128 to 127.
pub fn byte() -> RuntimeType {
    RuntimeType::new("byte", |value| {
        value.as_f64().is_some_and(|number| (-128.0..=127.0).contains(&number))
    })
}

/// Accepts strings holding exactly one character.
pub fn char() -> RuntimeType {
    RuntimeType::new("char", |value| {
        value.as_str().is_some_and(|text| text.chars().count() == 1)
    })
}

/// Accepts anything except `null`.
pub fn defined() -> RuntimeType {
    RuntimeType::from_guard("defined", guard::is_not_null())
}

/// Accepts numbers.
pub fn float() -> RuntimeType {
    RuntimeType::from_guard("float", guard::is_number())
}

/// Accepts numbers without a fractional part, `10.0` included.
pub fn int() -> RuntimeType {
    RuntimeType::from_guard("int", guard::is_integer())
}

/// Accepts `null` and the object-like kinds.
pub fn nullable() -> RuntimeType {
    RuntimeType::new("nullable", |value| {
        value.is_null() || value.is_array() || value.is_object()
    })
}

/// Accepts arrays and objects.
pub fn object() -> RuntimeType {
    RuntimeType::new("object", |value| value.is_array() || value.is_object())
}

/// Accepts strings.
pub fn string() -> RuntimeType {
    RuntimeType::from_guard("string", guard::is_string())
}

// =============================================================================
// Derived types
// =============================================================================

fn every(element: RuntimeType) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
    move |value| {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(|item| element.accepts(item)))
    }
}

fn non_negative(value: &Value) -> bool {
    value.as_f64().is_some_and(|number| number >= 0.0)
}

/// Arrays of [`char`] values.
pub fn chararray() -> RuntimeType {
    array().derive("char", every(char()))
}

/// Arrays of [`int`] values.
pub fn intarray() -> RuntimeType {
    array().derive("int", every(int()))
}

/// Arrays of [`float`] values.
pub fn floatarray() -> RuntimeType {
    array().derive("float", every(float()))
}

/// Objects that are not arrays.
pub fn plainobject() -> RuntimeType {
    object().derive("plain", Value::is_object)
}

/// Arrays of [`string`] values.
pub fn stringarray() -> RuntimeType {
    array().derive("string", every(string()))
}

/// Non-negative [`bigint`] values.
pub fn ubigint() -> RuntimeType {
    bigint().derive("u", Value::is_u64)
}

/// Non-negative [`float`] values.
pub fn ufloat() -> RuntimeType {
    float().derive("u", non_negative)
}

/// Arrays of [`ufloat`] values.
pub fn ufloatarray() -> RuntimeType {
    array().derive("ufloat", every(ufloat()))
}

/// Non-negative [`int`] values.
pub fn uint() -> RuntimeType {
    int().derive("u", non_negative)
}

/// Arrays of [`uint`] values.
pub fn uintarray() -> RuntimeType {
    array().derive("uint", every(uint()))
}

/// A [`plainobject`] refined by a structural schema, named `"implplainobject"`.
///
/// Runtime types join a schema through [`RuntimeType::guard`].
///
/// ```rust
/// use serde_json::json;
/// use tagrail::guard::Schema;
/// use tagrail::runtime::wellknown::{float, impl_of, int, string};
///
/// let complex = impl_of(
///     Schema::new()
///         .field("bar", float().guard())
///         .field("baz", string().guard())
///         .nested("hello", Schema::new().field("world", int().guard())),
/// );
///
/// assert!(complex.check(json!({ "bar": 10, "baz": "qwerty", "hello": { "world": 10 } })).is_valid());
/// assert!(complex.check(json!({ "bar": 10, "baz": "qwerty", "hello": {} })).is_not_valid());
/// ```
pub fn impl_of(schema: Schema) -> RuntimeType {
    plainobject().derive("impl", move |value| schema.matches(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(int(), json!(10), true)]
    #[case(int(), json!(10.0), true)]
    #[case(int(), json!(10.12), false)]
    #[case(uint(), json!(5), true)]
    #[case(uint(), json!(-5), false)]
    #[case(byte(), json!(-128), true)]
    #[case(byte(), json!(128), false)]
    #[case(char(), json!("a"), true)]
    #[case(char(), json!("ab"), false)]
    #[case(char(), json!(""), false)]
    #[case(defined(), json!(null), false)]
    #[case(nullable(), json!(null), true)]
    #[case(nullable(), json!(0), false)]
    #[case(object(), json!([]), true)]
    #[case(plainobject(), json!([]), false)]
    #[case(plainobject(), json!({}), true)]
    #[case(bigint(), json!(9_007_199_254_740_993_u64), true)]
    #[case(bigint(), json!(1.5), false)]
    #[case(ubigint(), json!(-1), false)]
    #[case(ufloat(), json!(0.5), true)]
    #[case(ufloat(), json!(-0.5), false)]
    #[case(any(), json!(null), true)]
    fn base_and_derived_types(#[case] runtime_type: RuntimeType, #[case] value: Value, #[case] valid: bool) {
        assert_eq!(runtime_type.check(value).is_valid(), valid);
    }

    #[rstest]
    #[case(chararray(), json!(["a", "b"]), true)]
    #[case(chararray(), json!(["ab"]), false)]
    #[case(intarray(), json!([1, 2, 3]), true)]
    #[case(intarray(), json!([1, 2.5]), false)]
    #[case(floatarray(), json!([1, 2.5]), true)]
    #[case(stringarray(), json!(["x", 1]), false)]
    #[case(ufloatarray(), json!([0.1, 2]), true)]
    #[case(uintarray(), json!([0, -1]), false)]
    #[case(uintarray(), json!([]), true)]
    fn array_types_check_every_element(#[case] runtime_type: RuntimeType, #[case] value: Value, #[case] valid: bool) {
        assert_eq!(runtime_type.check(value).is_valid(), valid);
    }

    #[rstest]
    #[case(chararray(), "chararray")]
    #[case(plainobject(), "plainobject")]
    #[case(ubigint(), "ubigint")]
    #[case(ufloatarray(), "ufloatarray")]
    #[case(uint(), "uint")]
    fn derived_names_prefix_the_base(#[case] runtime_type: RuntimeType, #[case] name: &str) {
        assert_eq!(runtime_type.name(), name);
    }

    #[rstest]
    fn casting_between_well_known_types() {
        assert!(int().check(json!(10)).cast(&float()).is_ok());
        assert!(int().check(json!(10)).cast(&string()).is_err());
        assert!(int().check(json!(10)).cast(&boolean()).is_err());
        assert!(int().check(json!(10)).cast(&uint()).is_ok());
        assert!(int().check(json!(-10)).cast(&uint()).is_err());
    }

    #[rstest]
    fn conditionals_between_types() {
        assert_eq!(char().check(json!("a")).and(int().check(json!(0))), int().check(json!(0)));
        assert_eq!(char().check(json!("")).and(int().check(json!(0))), char().check(json!("")));
        assert_eq!(char().check(json!("a")).or(int().check(json!(10))), char().check(json!("a")));
        assert_eq!(char().check(json!("")).or(int().check(json!(10))), int().check(json!(10)));
    }

    #[rstest]
    fn impl_of_is_named_after_plainobject() {
        assert_eq!(impl_of(Schema::new()).name(), "implplainobject");
        assert!(impl_of(Schema::new()).check(json!([])).is_not_valid());
    }
}
