//! Runtime types: named, refinable validators over dynamic values.
//!
//! A [`RuntimeType`] checks a [`serde_json::Value`] and returns a
//! [`Checked`], which behaves like a container whose active variant is
//! "valid". Types refine into new types with [`RuntimeType::derive`];
//! [`wellknown`] provides the common ones and [`TypeRegistry`] looks them up
//! by name.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tagrail::runtime::wellknown::int;
//!
//! let uint = int().derive("u", |value| value.as_f64().is_some_and(|n| n >= 0.0));
//!
//! assert!(uint.check(json!(-5)).is_not_valid());
//! assert_eq!(uint.check(json!(5)).unwrap(), json!(5));
//! ```

mod registry;
mod runtime_type;
pub mod wellknown;

pub use registry::{TypeRegistry, TypeRegistryBuilder};
pub use runtime_type::{Checked, RuntimeType};
