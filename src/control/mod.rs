//! Control helpers at the edges of a pipeline.
//!
//! - [`safe`] / [`trycatch`]: run a function and turn a panic into `Err`
//! - [`safe_async`] / [`trycatch_async`]: the same for futures (`async` feature)
//! - [`PushSub`]: a synchronous publish/subscribe notifier
//!
//! # Examples
//!
//! ```rust
//! use tagrail::container::maybe;
//! use tagrail::control::safe;
//!
//! let rejected = safe(maybe::just, 0);
//! assert_eq!(rejected.unwrap_err().message(), "just argument is falsy");
//! ```

mod pushsub;
mod safe;

pub use pushsub::{PushSub, Unsubscriber};
#[cfg(feature = "async")]
pub use safe::{safe_async, trycatch_async};
pub use safe::{Thrown, safe, trycatch};
