//! Structural guards: object keys, lengths, nested schemas and tuples.

use serde_json::Value;

use super::Typeguard;
use crate::predicate::Predicate;

/// Looks up `key` in an indexable value: a field of an object, or the
/// element of an array when `key` is a decimal index.
pub(crate) fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(object) => object.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Accepts indexable values that contain `key`.
///
/// Arrays are indexable by position:
///
/// ```rust
/// use serde_json::json;
/// use tagrail::guard::has_key;
///
/// assert!(has_key("id").test(&json!({ "id": 1 })));
/// assert!(has_key("0").test(&json!(["a"])));
/// assert!(!has_key("1").test(&json!(["a"])));
/// ```
pub fn has_key(key: impl Into<String>) -> Typeguard {
    let key = key.into();
    Predicate::new(move |value: &Value| field(value, &key).is_some())
}

/// Accepts indexable values whose `key` holds a value accepted by `guard`.
pub fn has_key_of_type(key: impl Into<String>, guard: Typeguard) -> Typeguard {
    let key = key.into();
    Predicate::new(move |value: &Value| field(value, &key).is_some_and(|found| guard.test(found)))
}

/// Accepts indexable values whose `key` holds exactly `expected`.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::guard::has_key_with_value;
///
/// let is_ok = has_key_with_value("tag", json!("ok"));
/// assert!(is_ok.test(&json!({ "tag": "ok", "value": 1 })));
/// assert!(!is_ok.test(&json!({ "tag": "err" })));
/// assert!(!is_ok.test(&json!("ok")));
/// ```
pub fn has_key_with_value(key: impl Into<String>, expected: Value) -> Typeguard {
    let key = key.into();
    Predicate::new(move |value: &Value| field(value, &key).is_some_and(|found| *found == expected))
}

/// Accepts values with a length: arrays, strings, and objects holding a
/// numeric `length` key.
pub fn has_length() -> Typeguard {
    Predicate::new(|value: &Value| length_of(value).is_some())
}

/// Accepts values whose length is exactly `expected`.
pub fn has_length_of(expected: usize) -> Typeguard {
    Predicate::new(move |value: &Value| length_of(value) == Some(expected))
}

fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::String(text) => Some(text.chars().count()),
        Value::Object(object) => object
            .get("length")
            .and_then(Value::as_u64)
            .and_then(|length| usize::try_from(length).ok()),
        _ => None,
    }
}

// =============================================================================
// Schemas
// =============================================================================

/// A node of a [`Schema`].
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// The key must be present and satisfy the guard.
    Guard(Typeguard),
    /// The key may be absent; when present it must satisfy the guard.
    Optional(Typeguard),
    /// The key must be present and hold an object matching the nested schema.
    Nested(Schema),
}

/// An ordered description of the keys an indexable value must hold.
///
/// Schemas are finite trees, so validation depth is bounded by the schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, SchemaNode)>,
}

impl Schema {
    /// Creates an empty schema, which accepts every indexable value.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a required key checked by `guard`.
    #[must_use]
    pub fn field(self, key: impl Into<String>, guard: Typeguard) -> Self {
        self.node(key, SchemaNode::Guard(guard))
    }

    /// Adds a key that may be absent.
    #[must_use]
    pub fn optional(self, key: impl Into<String>, guard: Typeguard) -> Self {
        self.node(key, SchemaNode::Optional(guard))
    }

    /// Adds a required key holding a nested object.
    #[must_use]
    pub fn nested(self, key: impl Into<String>, schema: Self) -> Self {
        self.node(key, SchemaNode::Nested(schema))
    }

    /// Adds an arbitrary node.
    #[must_use]
    pub fn node(mut self, key: impl Into<String>, node: SchemaNode) -> Self {
        self.fields.push((key.into(), node));
        self
    }

    /// Iterates over `(key, node)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Validates `value` against the schema.
    ///
    /// Only indexable values (objects and arrays) can match.
    pub fn matches(&self, value: &Value) -> bool {
        if !super::is_indexable(value) {
            return false;
        }

        self.fields.iter().all(|(key, node)| match (node, field(value, key)) {
            (SchemaNode::Optional(_), None) => true,
            (_, None) => false,
            (SchemaNode::Guard(guard) | SchemaNode::Optional(guard), Some(found)) => guard.test(found),
            (SchemaNode::Nested(schema), Some(found)) => schema.matches(found),
        })
    }
}

/// Creates a guard validating objects against `schema`.
///
/// Any missing required key rejects the value, at any depth.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::guard::{self, Schema};
///
/// let is_complex = guard::create_struct_of(
///     Schema::new()
///         .field("bar", guard::is_number())
///         .nested("hello", Schema::new().field("world", guard::is_integer())),
/// );
///
/// assert!(is_complex.test(&json!({ "bar": 1.5, "hello": { "world": 10 } })));
/// assert!(!is_complex.test(&json!({ "bar": 1.5, "hello": {} })));
/// ```
pub fn create_struct_of(schema: Schema) -> Typeguard {
    Predicate::new(move |value: &Value| schema.matches(value))
}

/// Creates a guard validating fixed-length arrays position by position.
///
/// A length mismatch rejects immediately.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::guard::{create_tuple_of, is_number, is_string};
///
/// let pair = create_tuple_of([is_string(), is_number()]);
/// assert!(pair.test(&json!(["a", 1])));
/// assert!(!pair.test(&json!(["a", 1, 2])));
/// assert!(!pair.test(&json!([1, "a"])));
/// ```
pub fn create_tuple_of<I>(guards: I) -> Typeguard
where
    I: IntoIterator<Item = Typeguard>,
{
    let guards: Vec<Typeguard> = guards.into_iter().collect();
    Predicate::new(move |value: &Value| {
        value.as_array().is_some_and(|items| {
            items.len() == guards.len()
                && items.iter().zip(&guards).all(|(item, guard)| guard.test(item))
        })
    })
}
