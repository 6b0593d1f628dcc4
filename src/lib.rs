//! # tagrail
//!
//! Tagged containers, type guards and small collections for
//! railway-oriented Rust.
//!
//! ## Overview
//!
//! - **Containers**: the Option, Maybe, Result and Either families, each with
//!   its own validity rule, a shared tagged form and conversions between them
//! - **Variant combinators**: generic `map`, `filter`, `fold`, `swap` and
//!   `unwrap` written once over any two-variant family
//! - **Type guards**: composable predicates over [`serde_json::Value`],
//!   including structural schemas
//! - **Boundary adapters**: `safe` and `trycatch` turn panics into `Err`
//! - **Collections**: linked lists, queues and stacks of functions, immutable
//!   lists, ranges and tuples
//! - **Runtime types**: named, refinable validators and a type registry
//!
//! ## Feature Flags
//!
//! - `guard`: predicates and type guards
//! - `container`: tagged values, variant combinators and the container
//!   families
//! - `control`: `safe`, `trycatch` and the `PushSub` notifier
//! - `collection`: linked lists, queue, stack, list, range and tuple
//! - `runtime`: runtime types and the type registry
//! - `async`: async boundary adapters and `call_async` on queues and stacks
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tagrail::prelude::*;
//!
//! let total = result::and_then(result::ok(10), |value| value + 5);
//! assert_eq!(result::unwrap(total), 15);
//!
//! assert_eq!(option::option(10).maybe().option(), Some(10));
//! assert!(maybe::maybe("").is_nothing());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

mod error;

pub use error::{CastError, ContainerError, Error, IndexError};

/// Prelude module for convenient imports.
///
/// Re-exports the types, traits and family modules used in most programs.
///
/// # Usage
///
/// ```rust
/// use tagrail::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{CastError, ContainerError, Error, IndexError};

    #[cfg(feature = "guard")]
    pub use crate::guard::{Schema, Typeguard};
    #[cfg(feature = "guard")]
    pub use crate::predicate::Predicate;

    #[cfg(feature = "container")]
    pub use crate::container::{
        Either, Maybe, Nullable, OptionExt, ResultExt, Truthy, either, maybe, option, result,
    };
    #[cfg(feature = "container")]
    pub use crate::tagged::{IntoTagged, Tagged, TaggedUnion};
    #[cfg(feature = "container")]
    pub use crate::variant::Variant;

    #[cfg(feature = "control")]
    pub use crate::control::{PushSub, Thrown, Unsubscriber, safe, trycatch};
    #[cfg(feature = "async")]
    pub use crate::control::{safe_async, trycatch_async};

    #[cfg(feature = "collection")]
    pub use crate::collection::{DoublyLinkedList, LinkedList, List, Queue, Range, Stack, Tuple};

    #[cfg(feature = "runtime")]
    pub use crate::runtime::{Checked, RuntimeType, TypeRegistry};
}

#[cfg(feature = "guard")]
pub mod predicate;

#[cfg(feature = "guard")]
pub mod guard;

#[cfg(feature = "container")]
pub mod tagged;

#[cfg(feature = "container")]
pub mod variant;

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "runtime")]
pub mod runtime;
