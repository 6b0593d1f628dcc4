//! Named validators over dynamic values and their refinement chains.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::container::{Maybe, maybe, option};
use crate::error::{CastError, Error};
use crate::guard::Typeguard;
use crate::predicate::Predicate;

/// A named check over [`Value`]s.
///
/// [`derive`](Self::derive) refines a type into a new, independent one whose
/// name is `prefix + name` and whose check is the conjunction of both
/// checks. Refinements compose; they never override.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tagrail::runtime::RuntimeType;
///
/// let int = RuntimeType::new("int", |value| value.is_i64());
/// let uint = int.derive("u", |value| value.as_i64().is_some_and(|n| n >= 0));
///
/// assert_eq!(uint.name(), "uint");
/// assert!(uint.check(json!(5)).is_valid());
/// assert!(uint.check(json!(-5)).is_not_valid());
/// ```
#[derive(Clone)]
pub struct RuntimeType {
    name: Arc<str>,
    checker: Typeguard,
}

impl RuntimeType {
    /// Creates a runtime type named `name` accepting what `checker` accepts.
    pub fn new<F>(name: impl Into<String>, checker: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::from_guard(name, Predicate::new(checker))
    }

    /// Creates a runtime type from an existing guard.
    pub fn from_guard(name: impl Into<String>, guard: Typeguard) -> Self {
        Self {
            name: Arc::from(name.into()),
            checker: guard,
        }
    }

    /// Returns the type name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if `value` satisfies this type.
    #[inline]
    pub fn accepts(&self, value: &Value) -> bool {
        self.checker.test(value)
    }

    /// Returns the check as a guard, for use in schemas and guard
    /// combinators.
    pub fn guard(&self) -> Typeguard {
        self.checker.clone()
    }

    /// Validates `value` against this type.
    pub fn check(&self, value: Value) -> Checked {
        let valid = self.accepts(&value);
        Checked {
            value,
            runtime_type: self.clone(),
            valid,
        }
    }

    /// Refines this type with an additional check.
    #[must_use]
    pub fn derive<F>(&self, prefix: &str, checker: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(format!("{prefix}{}", self.name)),
            checker: self.checker.clone().and(Predicate::new(checker)),
        }
    }
}

impl fmt::Debug for RuntimeType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("RuntimeType").field(&self.name).finish()
    }
}

// =============================================================================
// Checked
// =============================================================================

/// A value paired with the runtime type it was checked against.
///
/// Behaves like a container whose active variant is "the value satisfies
/// the type".
#[derive(Clone)]
pub struct Checked {
    value: Value,
    runtime_type: RuntimeType,
    valid: bool,
}

/// The JSON kind of `value`, used in diagnostics.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Checked {
    /// Returns `true` if the value satisfies the type.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns `true` if the value does not satisfy the type.
    #[inline]
    pub const fn is_not_valid(&self) -> bool {
        !self.valid
    }

    /// Returns the checked value whether or not it is valid.
    #[inline]
    pub const fn underlying_value(&self) -> &Value {
        &self.value
    }

    /// Returns the name of the type the value was checked against.
    #[inline]
    pub fn type_name(&self) -> &str {
        self.runtime_type.name()
    }

    /// Returns `other` if `self` is valid, otherwise `self`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        if self.valid { other } else { self }
    }

    /// Returns `self` if it is valid, otherwise `other`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        if self.valid { self } else { other }
    }

    /// Re-checks a valid value against `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::InvalidSource`] if `self` is invalid, and
    /// [`CastError::InvalidCast`] if the value does not satisfy `target`.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use tagrail::runtime::wellknown::{int, string, uint};
    ///
    /// assert!(int().check(json!(10)).cast(&uint()).is_ok());
    /// assert!(int().check(json!(-10)).cast(&uint()).is_err());
    /// assert!(int().check(json!(10)).cast(&string()).is_err());
    /// ```
    pub fn cast(&self, target: &RuntimeType) -> Result<Self, CastError> {
        if !self.valid {
            return Err(CastError::InvalidSource {
                type_name: self.type_name().to_string(),
            });
        }

        let casted = target.check(self.value.clone());
        if casted.valid {
            Ok(casted)
        } else {
            Err(CastError::InvalidCast {
                from: self.type_name().to_string(),
                to: target.name().to_string(),
            })
        }
    }

    /// Returns `self` if it is valid.
    ///
    /// # Panics
    ///
    /// Panics with "Expected type to be {name}, got {kind}" otherwise.
    #[track_caller]
    #[must_use]
    pub fn expect(self) -> Self {
        assert!(
            self.valid,
            "Expected type to be {}, got {}",
            self.type_name(),
            kind_of(&self.value)
        );
        self
    }

    /// Returns `self` if it is invalid.
    ///
    /// # Panics
    ///
    /// Panics with "Expected type not to be {name}" otherwise.
    #[track_caller]
    #[must_use]
    pub fn unexpect(self) -> Self {
        assert!(!self.valid, "Expected type not to be {}", self.type_name());
        self
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with "Cannot unwrap invalid type {name}" if it is invalid.
    #[track_caller]
    pub fn unwrap(self) -> Value {
        assert!(self.valid, "Cannot unwrap invalid type {}", self.type_name());
        self.value
    }

    /// Returns the value, or `fallback` if it is invalid.
    pub fn unwrap_or(self, fallback: Value) -> Value {
        if self.valid { self.value } else { fallback }
    }

    /// Returns the value, or the result of `fallback` if it is invalid.
    pub fn unwrap_or_else<F>(self, fallback: F) -> Value
    where
        F: FnOnce() -> Value,
    {
        if self.valid { self.value } else { fallback() }
    }

    /// A valid value sorted with [`maybe::maybe`], so falsy values become
    /// `Nothing`; an invalid one is `Nothing`.
    pub fn maybe(self) -> Maybe<Value> {
        if self.valid { maybe::maybe(self.value) } else { Maybe::Nothing }
    }

    /// A valid value sorted with [`option::option`], so `null` becomes
    /// `None`; an invalid one is `None`.
    pub fn option(self) -> Option<Value> {
        if self.valid { option::option(self.value) } else { None }
    }

    /// `Ok` of a valid value.
    ///
    /// # Errors
    ///
    /// Returns "Invalid type {kind} expected {name}" if it is invalid.
    pub fn result(self) -> Result<Value, Error> {
        if self.valid {
            Ok(self.value)
        } else {
            Err(Error::new(format!(
                "Invalid type {} expected {}",
                kind_of(&self.value),
                self.type_name()
            )))
        }
    }
}

impl PartialEq for Checked {
    fn eq(&self, other: &Self) -> bool {
        self.valid == other.valid && self.value == other.value && self.type_name() == other.type_name()
    }
}

impl fmt::Debug for Checked {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Checked")
            .field("type", &self.type_name())
            .field("value", &self.value)
            .field("valid", &self.valid)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn number() -> RuntimeType {
        RuntimeType::new("test1", Value::is_number)
    }

    #[rstest]
    fn derived_types_chain_names_and_checks() {
        let positive = number().derive("positive", |value| value.as_f64().is_some_and(|n| n > 1.0));
        let between = positive.derive("between2and5", |value| value.as_f64().is_some_and(|n| n < 5.0));

        assert!(number().check(json!(0)).is_valid());
        assert_eq!(positive.check(json!(0)).type_name(), "positivetest1");
        assert!(positive.check(json!(0)).is_not_valid());
        assert!(positive.check(json!(2)).is_valid());
        assert!(between.check(json!(4)).is_valid());
        assert!(between.check(json!(1)).is_not_valid());
        assert!(between.check(json!(5)).is_not_valid());
        assert_eq!(between.name(), "between2and5positivetest1");
    }

    #[rstest]
    fn conditionals_pick_by_validity() {
        let valid = number().check(json!(1));
        let invalid = number().check(json!("one"));

        assert_eq!(valid.clone().and(invalid.clone()), invalid);
        assert_eq!(invalid.clone().and(valid.clone()), invalid);
        assert_eq!(valid.clone().or(invalid.clone()), valid);
        assert_eq!(invalid.or(valid.clone()), valid);
    }

    #[rstest]
    fn unwrappables() {
        assert_eq!(number().check(json!(10)).unwrap_or(json!(20)), json!(10));
        assert_eq!(number().check(json!(null)).unwrap_or(json!(20)), json!(20));
        assert_eq!(number().check(json!(null)).unwrap_or_else(|| json!(30)), json!(30));
    }

    #[rstest]
    #[should_panic(expected = "Cannot unwrap invalid type test1")]
    fn unwrap_panics_when_invalid() {
        number().check(json!([])).unwrap();
    }

    #[rstest]
    #[should_panic(expected = "Expected type to be test1, got string")]
    fn expect_names_the_actual_kind() {
        let _ = number().check(json!("")).expect();
    }

    #[rstest]
    fn conversions_use_container_rules() {
        assert_eq!(number().check(json!(0)).maybe(), Maybe::Nothing);
        assert_eq!(number().check(json!(3)).option(), Some(json!(3)));
        assert_eq!(
            number().check(json!(true)).result(),
            Err(Error::new("Invalid type boolean expected test1"))
        );
    }

    #[rstest]
    fn cast_reports_which_side_failed() {
        let text = RuntimeType::new("string", Value::is_string);

        let invalid_source = number().check(json!("x")).cast(&text);
        assert!(matches!(invalid_source, Err(CastError::InvalidSource { type_name }) if type_name == "test1"));

        let invalid_cast = number().check(json!(1)).cast(&text);
        assert!(matches!(invalid_cast, Err(CastError::InvalidCast { ref to, .. }) if to == "string"));
    }
}
