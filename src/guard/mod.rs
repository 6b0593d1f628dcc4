//! Runtime type guards over dynamic values.
//!
//! A [`Typeguard`] is a [`Predicate`] over [`serde_json::Value`]: it answers
//! "does this value have the expected shape?". Guards are built from the
//! primitive checks in this module and combined with [`combine`] (AND) and
//! [`any_of`] (OR). Structural guards live in [`structural`] and are
//! re-exported here.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tagrail::guard::{self, Schema};
//!
//! let is_user = guard::create_struct_of(
//!     Schema::new()
//!         .field("name", guard::is_string())
//!         .field("age", guard::is_integer())
//!         .optional("status", guard::is_string()),
//! );
//!
//! assert!(is_user.test(&json!({ "name": "foo", "age": 100 })));
//! assert!(!is_user.test(&json!({ "name": "foo", "age": "100" })));
//! assert!(!is_user.test(&json!({ "age": 100 })));
//! ```

mod structural;

pub use structural::{
    Schema, SchemaNode, create_struct_of, create_tuple_of, has_key, has_key_of_type,
    has_key_with_value, has_length, has_length_of,
};

use serde_json::Value;

use crate::predicate::{self, Predicate};

/// A predicate recognizing a shape of dynamic value.
pub type Typeguard = Predicate<Value>;

// =============================================================================
// Primitives
// =============================================================================

/// Accepts arrays.
pub fn is_array() -> Typeguard {
    Predicate::new(Value::is_array)
}

/// Accepts booleans.
pub fn is_boolean() -> Typeguard {
    Predicate::new(Value::is_boolean)
}

/// Accepts numbers.
pub fn is_number() -> Typeguard {
    Predicate::new(Value::is_number)
}

/// Accepts numbers without a fractional part.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::guard::is_integer;
///
/// assert!(is_integer().test(&json!(10)));
/// assert!(is_integer().test(&json!(10.0)));
/// assert!(!is_integer().test(&json!(10.12)));
/// ```
pub fn is_integer() -> Typeguard {
    Predicate::new(is_integral)
}

/// Accepts indexable values: objects and arrays.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::guard::is_object;
///
/// assert!(is_object().test(&json!({ "id": 1 })));
/// assert!(is_object().test(&json!([1])));
/// assert!(!is_object().test(&json!(null)));
/// ```
pub fn is_object() -> Typeguard {
    Predicate::new(is_indexable)
}

/// Accepts strings.
pub fn is_string() -> Typeguard {
    Predicate::new(Value::is_string)
}

/// Accepts `null`.
pub fn is_null() -> Typeguard {
    Predicate::new(Value::is_null)
}

/// Accepts anything except `null`.
pub fn is_not_null() -> Typeguard {
    reverse(is_null())
}

/// Accepts serialized errors: objects whose only key is a string `message`.
pub fn is_error() -> Typeguard {
    Predicate::new(|value: &Value| {
        value
            .as_object()
            .is_some_and(|object| object.len() == 1 && object.get("message").is_some_and(Value::is_string))
    })
}

pub(crate) const fn is_indexable(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

pub(crate) fn is_integral(value: &Value) -> bool {
    value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|number| number.fract() == 0.0)
}

// =============================================================================
// Composition
// =============================================================================

/// Accepts a value only if every guard accepts it, stopping at the first rejection.
pub fn combine<I>(guards: I) -> Typeguard
where
    I: IntoIterator<Item = Typeguard>,
{
    predicate::all_of(guards)
}

/// Accepts a value if any guard accepts it, stopping at the first acceptance.
pub fn any_of<I>(guards: I) -> Typeguard
where
    I: IntoIterator<Item = Typeguard>,
{
    predicate::any_of(guards)
}

/// Negates a guard.
pub fn reverse(guard: Typeguard) -> Typeguard {
    predicate::reverse(guard)
}

/// Accepts `null` or whatever `guard` accepts.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::guard::{is_number, nullable};
///
/// let nullable_number = nullable(is_number());
/// assert!(nullable_number.test(&json!(null)));
/// assert!(nullable_number.test(&json!(1000)));
/// assert!(!nullable_number.test(&json!("10")));
/// ```
pub fn nullable(guard: Typeguard) -> Typeguard {
    any_of([is_null(), guard])
}

/// Accepts arrays whose every element satisfies `guard`.
pub fn is_array_of(guard: Typeguard) -> Typeguard {
    Predicate::new(move |value: &Value| {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(|item| guard.test(item)))
    })
}

/// Combines guards with AND.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::combine;
/// use tagrail::guard::{has_key, is_object};
///
/// let guard = combine![is_object(), has_key("id")];
/// assert!(guard.test(&json!({ "id": 1 })));
/// ```
#[macro_export]
macro_rules! combine {
    ($($guard:expr),* $(,)?) => {
        $crate::guard::combine([$($guard),*])
    };
}

/// Combines guards with OR.
#[macro_export]
macro_rules! any_of {
    ($($guard:expr),* $(,)?) => {
        $crate::guard::any_of([$($guard),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!([1, 2]), true)]
    #[case(json!({}), false)]
    #[case(json!(null), false)]
    fn array_guard(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_array().test(&value), expected);
    }

    #[rstest]
    #[case(json!({}), true)]
    #[case(json!([1, 2]), true)]
    #[case(json!(null), false)]
    #[case(json!("text"), false)]
    #[case(json!(1), false)]
    fn object_guard_accepts_indexables(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_object().test(&value), expected);
    }

    #[rstest]
    #[case(json!({ "message": "boom" }), true)]
    #[case(json!({ "message": 1 }), false)]
    #[case(json!({ "message": "boom", "code": 1 }), false)]
    #[case(json!("boom"), false)]
    fn error_guard(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_error().test(&value), expected);
    }

    #[rstest]
    fn is_array_of_checks_every_element() {
        let strings = is_array_of(is_string());
        assert!(strings.test(&json!(["hello", "world"])));
        assert!(!strings.test(&json!([10, 20, "hello"])));
        assert!(strings.test(&json!([])));
        assert!(!strings.test(&json!("hello")));
    }

    #[rstest]
    fn macros_expand_to_combinators() {
        let numeric_or_text = crate::any_of![is_number(), is_string()];
        assert!(numeric_or_text.test(&json!(1)));
        assert!(numeric_or_text.test(&json!("a")));
        assert!(!numeric_or_text.test(&json!(true)));

        let integral_number = crate::combine![is_number(), is_integer()];
        assert!(integral_number.test(&json!(3)));
        assert!(!integral_number.test(&json!(3.5)));
    }

    #[rstest]
    fn not_null_rejects_only_null() {
        assert!(is_not_null().test(&json!(0)));
        assert!(!is_not_null().test(&json!(null)));
    }
}
