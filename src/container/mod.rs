//! The four container families.
//!
//! | Family | Active variant | Inactive variant | Validity rule |
//! |---|---|---|---|
//! | [`Option`] | `Some(T)` | `None` | payload is not nullish ([`Nullable`]) |
//! | [`Maybe`] | `Just(T)` | `Nothing` | payload is truthy ([`Truthy`]) |
//! | [`Result`] | `Ok(T)` | `Err(Error)` | payload is not an [`Error`](crate::Error) |
//! | [`Either`] | `Left(L)` / `Right(R)` | the other side | none |
//!
//! `Option` and `Result` are the std types; their family functions live in
//! [`option`] and [`result`], with the conversions std lacks available as
//! methods through [`OptionExt`] and [`ResultExt`]. Every family implements
//! [`TaggedUnion`](crate::tagged::TaggedUnion) and, for serializable
//! payloads, [`IntoTagged`](crate::tagged::IntoTagged).
//!
//! # Examples
//!
//! ```rust
//! use tagrail::container::{OptionExt, option, result};
//!
//! assert_eq!(option::option(10).maybe().option().unwrap(), 10);
//! assert_eq!(result::unwrap_or(result::err("boom"), 99), 99);
//! ```

pub mod either;
pub mod maybe;
pub mod option;
pub mod result;
mod truthy;

pub use either::Either;
pub use maybe::Maybe;
pub use option::OptionExt;
pub use result::ResultExt;
pub use truthy::{Nullable, Truthy};
