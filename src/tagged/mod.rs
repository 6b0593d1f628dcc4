//! The tagged-value model.
//!
//! A [`Tagged`] value is an immutable `{ tag, value }` record: a payload
//! paired with the name of the variant it belongs to. Every container family
//! in [`crate::container`] has exactly this shape once serialized, which is
//! what lets the dynamic guards here recognize them at runtime.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tagrail::tagged::{create_tagged, is_tagged, is_tagged_with};
//!
//! let tagged = create_tagged(10, "ok");
//! assert_eq!(tagged.tag(), "ok");
//! assert_eq!(*tagged.value(), 10);
//!
//! let dynamic = serde_json::to_value(&tagged).unwrap();
//! assert_eq!(dynamic, json!({ "tag": "ok", "value": 10 }));
//! assert!(is_tagged().test(&dynamic));
//! assert!(is_tagged_with("ok").test(&dynamic));
//! assert!(!is_tagged_with("err").test(&dynamic));
//! ```

mod cast;

pub use cast::{CastTable, CastTableBuilder, Constructor, cast, create_cast};

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::guard::{self, Typeguard};

/// Field holding the discriminant in the serialized form.
pub const TAG_KEY: &str = "tag";
/// Field holding the payload in the serialized form.
pub const VALUE_KEY: &str = "value";

/// A payload paired with its variant name.
///
/// Equality is structural: two tagged values are equal when both the tag
/// and the payload are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tagged<T> {
    tag: Cow<'static, str>,
    value: T,
}

impl<T> Tagged<T> {
    /// Returns the tag.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns a reference to the payload.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the record, returning the payload.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the record, returning tag and payload.
    pub fn into_parts(self) -> (Cow<'static, str>, T) {
        (self.tag, self.value)
    }

    /// Returns `true` if the tag equals `tag`.
    #[inline]
    pub fn is_tagged_with(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Applies `function` to the payload, keeping the tag.
    pub fn map<U, F>(self, function: F) -> Tagged<U>
    where
        F: FnOnce(T) -> U,
    {
        Tagged {
            tag: self.tag,
            value: function(self.value),
        }
    }
}

impl<T: Serialize> Tagged<T> {
    /// Converts the payload into a dynamic value.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the payload cannot be represented.
    pub fn to_dynamic(&self) -> serde_json::Result<Tagged<Value>> {
        Ok(Tagged {
            tag: self.tag.clone(),
            value: serde_json::to_value(&self.value)?,
        })
    }
}

/// Wraps `value` under `tag`.
pub fn create_tagged<T>(value: T, tag: impl Into<Cow<'static, str>>) -> Tagged<T> {
    Tagged {
        tag: tag.into(),
        value,
    }
}

/// Returns a constructor wrapping values under `tag`.
///
/// ```rust
/// use tagrail::tagged::tagged_factory;
///
/// let left = tagged_factory("left");
/// assert_eq!(left(1).tag(), "left");
/// assert_eq!(left(2).into_value(), 2);
/// ```
pub fn tagged_factory<T>(tag: &'static str) -> impl Fn(T) -> Tagged<T> + Clone {
    move |value| create_tagged(value, tag)
}

// =============================================================================
// Typed families
// =============================================================================

/// A closed sum type whose active variant has a name.
pub trait TaggedUnion {
    /// Returns the name of the active variant.
    fn tag(&self) -> &'static str;
}

/// A family that can be rendered as a dynamic tagged record.
pub trait IntoTagged: TaggedUnion {
    /// Renders the active variant and its payload.
    ///
    /// Variants without a payload render `null`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the payload cannot be represented.
    fn to_tagged(&self) -> serde_json::Result<Tagged<Value>>;
}

// =============================================================================
// Dynamic recognition
// =============================================================================

fn has_tag() -> Typeguard {
    guard::has_key_of_type(TAG_KEY, guard::is_string())
}

/// Accepts any `{ tag, value }` object with a string tag.
pub fn is_tagged() -> Typeguard {
    guard::combine([guard::is_object(), guard::has_key(VALUE_KEY), has_tag()])
}

/// Accepts `{ tag, value }` objects whose tag equals `tag`.
pub fn is_tagged_with(tag: &str) -> Typeguard {
    guard::combine([
        guard::is_object(),
        guard::has_key(VALUE_KEY),
        has_tag(),
        guard::has_key_with_value(TAG_KEY, Value::from(tag)),
    ])
}

/// Accepts objects tagged with `tag` whose payload satisfies `value_guard`.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::guard::is_string;
/// use tagrail::tagged::is_tagged_with_value_of;
///
/// let some_text = is_tagged_with_value_of("some", is_string());
/// assert!(some_text.test(&json!({ "tag": "some", "value": "hi" })));
/// assert!(!some_text.test(&json!({ "tag": "some", "value": 1 })));
/// ```
pub fn is_tagged_with_value_of(tag: &str, value_guard: Typeguard) -> Typeguard {
    guard::combine([
        is_tagged_with(tag),
        guard::has_key_of_type(VALUE_KEY, value_guard),
    ])
}
