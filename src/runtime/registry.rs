//! Name lookup for runtime types.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use super::{Checked, RuntimeType, wellknown};

/// Builds a [`TypeRegistry`].
#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    types: BTreeMap<String, RuntimeType>,
}

impl TypeRegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `runtime_type` under its own name, replacing any previous
    /// type of that name.
    #[must_use]
    pub fn register(mut self, runtime_type: RuntimeType) -> Self {
        self.types.insert(runtime_type.name().to_owned(), runtime_type);
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> TypeRegistry {
        tracing::debug!(types = self.types.len(), "type registry built");
        TypeRegistry {
            types: Arc::new(self.types),
        }
    }
}

/// An immutable set of runtime types addressed by name.
///
/// Cloning is cheap; clones share the same entries.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tagrail::runtime::TypeRegistry;
///
/// let registry = TypeRegistry::wellknown();
///
/// assert!(registry.check("uint", json!(5)).is_some_and(|checked| checked.is_valid()));
/// assert!(registry.check("uint", json!(-5)).is_some_and(|checked| checked.is_not_valid()));
/// assert!(registry.get("fn").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: Arc<BTreeMap<String, RuntimeType>>,
}

impl TypeRegistry {
    /// Starts an empty registry.
    #[must_use]
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::new()
    }

    /// Builds a registry holding every type of [`wellknown`].
    #[must_use]
    pub fn wellknown() -> Self {
        [
            wellknown::any(),
            wellknown::array(),
            wellknown::bigint(),
            wellknown::boolean(),
            wellknown::byte(),
            wellknown::char(),
            wellknown::defined(),
            wellknown::float(),
            wellknown::int(),
            wellknown::nullable(),
            wellknown::object(),
            wellknown::string(),
            wellknown::chararray(),
            wellknown::intarray(),
            wellknown::floatarray(),
            wellknown::plainobject(),
            wellknown::stringarray(),
            wellknown::ubigint(),
            wellknown::ufloat(),
            wellknown::ufloatarray(),
            wellknown::uint(),
            wellknown::uintarray(),
        ]
        .into_iter()
        .fold(Self::builder(), TypeRegistryBuilder::register)
        .build()
    }

    /// Returns the type registered under `name`.
    pub fn get(&self, name: &str) -> Option<&RuntimeType> {
        self.types.get(name)
    }

    /// Checks `value` against the type registered under `name`, if any.
    pub fn check(&self, name: &str, value: Value) -> Option<Checked> {
        self.get(name).map(|runtime_type| runtime_type.check(value))
    }

    /// Returns `true` if a type is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterates over the registered names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
