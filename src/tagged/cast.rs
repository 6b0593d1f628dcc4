//! Re-tagging payloads across families.
//!
//! [`cast`] moves a payload from one tagged record into another constructor.
//! [`CastTable`] does the same by tag name: it is an explicit registry of
//! named constructors, assembled once through [`CastTableBuilder`] and
//! read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::{Tagged, create_tagged};
use crate::container::{Maybe, either, maybe, option, result};
use crate::error::{CastError, ContainerError};
use crate::guard;

/// Re-wraps the payload of `tagged` with `to`.
///
/// ```rust
/// use tagrail::tagged::{cast, create_tagged, tagged_factory};
///
/// let error = create_tagged("this is an error", "err");
/// let some = cast(error, tagged_factory("some"));
/// assert_eq!(some.tag(), "some");
/// assert_eq!(*some.value(), "this is an error");
/// ```
pub fn cast<T, R, F>(tagged: Tagged<T>, to: F) -> R
where
    F: FnOnce(T) -> R,
{
    to(tagged.into_value())
}

/// Returns a function casting any tagged record with `to`.
pub fn create_cast<T, R, F>(to: F) -> impl Fn(Tagged<T>) -> R
where
    F: Fn(T) -> R,
{
    move |tagged| to(tagged.into_value())
}

/// A named constructor producing a dynamic tagged record.
pub type Constructor = Arc<dyn Fn(Value) -> Result<Tagged<Value>, ContainerError> + Send + Sync>;

/// Builds a [`CastTable`].
#[derive(Default)]
pub struct CastTableBuilder {
    constructors: BTreeMap<String, Constructor>,
}

impl CastTableBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constructor` under `tag`, replacing any previous entry.
    #[must_use]
    pub fn register<F>(mut self, tag: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(Value) -> Result<Tagged<Value>, ContainerError> + Send + Sync + 'static,
    {
        self.constructors.insert(tag.into(), Arc::new(constructor));
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> CastTable {
        tracing::debug!(
            tags = ?self.constructors.keys().collect::<Vec<_>>(),
            "cast table built"
        );
        CastTable {
            constructors: Arc::new(self.constructors),
        }
    }
}

/// An immutable registry of tagged constructors addressed by name.
///
/// Cloning is cheap; clones share the same entries.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tagrail::tagged::{CastTable, create_tagged};
///
/// let table = CastTable::wellknown();
///
/// let just = table.cast(create_tagged(json!("hello"), "some"), "just").unwrap();
/// assert_eq!(just.tag(), "just");
///
/// let rejected = table.cast(create_tagged(json!(0), "ok"), "just");
/// assert!(rejected.is_err());
///
/// let option = table.construct("option", json!(null)).unwrap();
/// assert_eq!(option.tag(), "none");
/// ```
#[derive(Clone)]
pub struct CastTable {
    constructors: Arc<BTreeMap<String, Constructor>>,
}

impl CastTable {
    /// Starts an empty registry.
    #[must_use]
    pub fn builder() -> CastTableBuilder {
        CastTableBuilder::new()
    }

    /// Builds a registry holding the constructors of every container family:
    /// `none`, `some`, `option`, `nothing`, `just`, `maybe`, `ok`, `err`,
    /// `result`, `left` and `right`.
    #[must_use]
    pub fn wellknown() -> Self {
        Self::builder()
            .register(option::NONE_TAG, |_| Ok(none()))
            .register(option::SOME_TAG, some)
            .register(option::OPTION_TAG, |value| {
                Ok(option::option(value).map_or_else(none, |value| create_tagged(value, option::SOME_TAG)))
            })
            .register(maybe::NOTHING_TAG, |_| Ok(nothing()))
            .register(maybe::JUST_TAG, just)
            .register(maybe::MAYBE_TAG, |value| {
                Ok(match maybe::maybe(value) {
                    Maybe::Just(value) => create_tagged(value, maybe::JUST_TAG),
                    Maybe::Nothing => nothing(),
                })
            })
            .register(result::OK_TAG, ok)
            .register(result::ERR_TAG, |value| Ok(err(value)))
            .register(result::RESULT_TAG, |value| {
                Ok(match result::result(value) {
                    Ok(value) => create_tagged(value, result::OK_TAG),
                    Err(error) => err(Value::from(error.message())),
                })
            })
            .register(either::LEFT_TAG, |value| Ok(create_tagged(value, either::LEFT_TAG)))
            .register(either::RIGHT_TAG, |value| Ok(create_tagged(value, either::RIGHT_TAG)))
            .build()
    }

    /// Returns `true` if a constructor is registered under `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Iterates over the registered tags in lexical order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Builds a tagged record through the constructor registered under `tag`.
    ///
    /// # Errors
    ///
    /// [`CastError::UnknownTag`] when nothing is registered under `tag`, and
    /// [`CastError::Rejected`] when the constructor refuses `value`.
    pub fn construct(&self, tag: &str, value: Value) -> Result<Tagged<Value>, CastError> {
        let Some(constructor) = self.constructors.get(tag) else {
            tracing::debug!(tag, "cast to unregistered tag");
            return Err(CastError::UnknownTag(tag.to_owned()));
        };

        constructor(value).map_err(|source| CastError::Rejected {
            tag: tag.to_owned(),
            source,
        })
    }

    /// Moves the payload of `tagged` into the family registered under `to`.
    ///
    /// # Errors
    ///
    /// Same as [`CastTable::construct`].
    pub fn cast(&self, tagged: Tagged<Value>, to: &str) -> Result<Tagged<Value>, CastError> {
        self.construct(to, tagged.into_value())
    }
}

impl fmt::Debug for CastTable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CastTable")
            .field("tags", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn none() -> Tagged<Value> {
    create_tagged(Value::Null, option::NONE_TAG)
}

fn nothing() -> Tagged<Value> {
    create_tagged(Value::Null, maybe::NOTHING_TAG)
}

fn some(value: Value) -> Result<Tagged<Value>, ContainerError> {
    option::try_some(value).map(|some| create_tagged(some.unwrap_or_default(), option::SOME_TAG))
}

fn just(value: Value) -> Result<Tagged<Value>, ContainerError> {
    maybe::try_just(value).map(|just| create_tagged(just.unwrap_or(Value::Null), maybe::JUST_TAG))
}

fn ok(value: Value) -> Result<Tagged<Value>, ContainerError> {
    result::try_ok(value).map(|ok| create_tagged(ok.unwrap_or_default(), result::OK_TAG))
}

fn err(value: Value) -> Tagged<Value> {
    let message = match value {
        Value::String(message) => message,
        error if guard::is_error().test(&error) => {
            return create_tagged(error, result::ERR_TAG);
        }
        other => other.to_string(),
    };

    create_tagged(serde_json::json!({ "message": message }), result::ERR_TAG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("some", json!(null), None)]
    #[case("some", json!(0), Some("some"))]
    #[case("option", json!(null), Some("none"))]
    #[case("option", json!(false), Some("some"))]
    #[case("just", json!(0), None)]
    #[case("just", json!(""), None)]
    #[case("just", json!("a"), Some("just"))]
    #[case("maybe", json!(0), Some("nothing"))]
    #[case("ok", json!({ "message": "boom" }), None)]
    #[case("result", json!({ "message": "boom" }), Some("err"))]
    #[case("result", json!(1), Some("ok"))]
    #[case("left", json!(null), Some("left"))]
    fn wellknown_constructors(
        #[case] tag: &str,
        #[case] value: Value,
        #[case] expected: Option<&str>,
    ) {
        let constructed = CastTable::wellknown().construct(tag, value);
        assert_eq!(constructed.as_ref().ok().map(Tagged::tag), expected);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(0))]
    #[case(json!(""))]
    #[case(json!(false))]
    #[case(json!("text"))]
    #[case(json!([]))]
    #[case(json!({ "message": "boom" }))]
    #[case(json!({ "message": "boom", "code": 1 }))]
    fn constructors_agree_with_the_families(#[case] value: Value) {
        let table = CastTable::wellknown();
        let accepted = |tag: &str| table.construct(tag, value.clone()).is_ok();

        assert_eq!(accepted("some"), option::try_some(value.clone()).is_ok());
        assert_eq!(accepted("just"), maybe::try_just(value.clone()).is_ok());
        assert_eq!(accepted("ok"), result::try_ok(value.clone()).is_ok());

        let sorted = table.construct("result", value.clone()).unwrap();
        assert_eq!(sorted.tag(), result::result(value).map_or("err", |_| "ok"));
    }

    #[rstest]
    fn err_wraps_strings_into_error_objects() {
        let error = CastTable::wellknown().construct("err", json!("boom")).unwrap();
        assert_eq!(*error.value(), json!({ "message": "boom" }));
    }

    #[rstest]
    fn unknown_tags_are_reported() {
        let error = CastTable::wellknown().construct("pizza", json!(1)).unwrap_err();
        assert_eq!(error, CastError::UnknownTag("pizza".to_owned()));
    }

    #[rstest]
    fn custom_registries_do_not_share_entries() {
        let table = CastTable::builder()
            .register("wrapped", |value| Ok(create_tagged(value, "wrapped")))
            .build();

        assert!(table.contains("wrapped"));
        assert!(!table.contains("some"));
        assert_eq!(table.tags().collect::<Vec<_>>(), vec!["wrapped"]);
        assert!(!CastTable::wellknown().contains("wrapped"));
    }

    #[rstest]
    fn create_cast_reuses_the_constructor() {
        let to_right = create_cast(|value: i32| either::Either::<i32, i32>::Right(value));
        assert_eq!(to_right(create_tagged(4, "left")), either::Either::Right(4));
    }
}
