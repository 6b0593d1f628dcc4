//! Generic operations over the active variant of a two-variant family.
//!
//! Every container family in this crate is a closed union of two variants,
//! one of which is "active" for a given operation: `Some` for `map` over an
//! `Option`, `Left` for `map_left` over an `Either`, and so on. [`Variant`]
//! describes one such variant through Generic Associated Types: how to split
//! a family value into the active payload or the rest, and how to put it
//! back together.
//!
//! The free functions in this module ([`map`], [`filter`], [`fold`],
//! [`unwrap`], ...) are written once against [`Variant`] and instantiated by
//! each family with its own constructor. Constructors are passed explicitly
//! so a family can re-validate the payload when it re-wraps it (`Option`
//! re-checks nullishness, `Maybe` re-checks truthiness).
//!
//! # Examples
//!
//! ```rust
//! use tagrail::variant::{self, SomeVariant};
//!
//! let doubled = variant::map::<SomeVariant, _, _>(Some(21), Some, |value| value * 2);
//! assert_eq!(doubled, Some(42));
//!
//! let untouched = variant::map::<SomeVariant, i32, i32>(None, Some, |value| value * 2);
//! assert_eq!(untouched, None);
//! ```

mod filterable;
mod foldable;
mod mappable;
mod unwrappable;

use std::marker::PhantomData;

pub use filterable::{filter, filter_or};
pub use foldable::{fold, swap};
pub use mappable::{map, map_or, map_or_else};
pub use unwrappable::{expect, unexpect, unwrap, unwrap_or, unwrap_or_else};

use crate::container::{Either, Maybe};

/// One variant of a two-variant family, viewed as the active one.
///
/// # Laws
///
/// For any family value `family` and payload `value`:
///
/// 1. **Split/restore**: if `split(family)` is `Err(rest)`, then
///    `restore(rest)` is equal to `family`.
/// 2. **Split/wrap**: `split(wrap(value))` is `Ok(value)`.
/// 3. **Recognition**: `recognize(&family)` is `true` exactly when
///    `split(family)` is `Ok`.
pub trait Variant {
    /// The family with the active payload set to `A`.
    type Family<A>;

    /// What the inactive variant carries.
    type Rest;

    /// The tag of the active variant.
    const TAG: &'static str;

    /// Returns the active payload, or the rest when the family is inactive.
    ///
    /// # Errors
    ///
    /// Returns the inactive variant's payload as `Err`.
    fn split<A>(family: Self::Family<A>) -> Result<A, Self::Rest>;

    /// Rebuilds an inactive family from its payload.
    fn restore<A>(rest: Self::Rest) -> Self::Family<A>;

    /// Wraps a payload in the active variant without validating it.
    fn wrap<A>(value: A) -> Self::Family<A>;

    /// Returns `true` when the active variant is present.
    fn recognize<A>(family: &Self::Family<A>) -> bool;
}

/// Returns `true` when `family` holds the variant `V`.
#[inline]
pub fn recognize<V: Variant, A>(family: &V::Family<A>) -> bool {
    V::recognize(family)
}

// =============================================================================
// Families
// =============================================================================

/// `Some` of [`Option`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SomeVariant;

impl Variant for SomeVariant {
    type Family<A> = Option<A>;
    type Rest = ();

    const TAG: &'static str = "some";

    #[inline]
    fn split<A>(family: Option<A>) -> Result<A, ()> {
        family.ok_or(())
    }

    #[inline]
    fn restore<A>((): ()) -> Option<A> {
        None
    }

    #[inline]
    fn wrap<A>(value: A) -> Option<A> {
        Some(value)
    }

    #[inline]
    fn recognize<A>(family: &Option<A>) -> bool {
        family.is_some()
    }
}

/// `Just` of [`Maybe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JustVariant;

impl Variant for JustVariant {
    type Family<A> = Maybe<A>;
    type Rest = ();

    const TAG: &'static str = "just";

    #[inline]
    fn split<A>(family: Maybe<A>) -> Result<A, ()> {
        match family {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing => Err(()),
        }
    }

    #[inline]
    fn restore<A>((): ()) -> Maybe<A> {
        Maybe::Nothing
    }

    #[inline]
    fn wrap<A>(value: A) -> Maybe<A> {
        Maybe::Just(value)
    }

    #[inline]
    fn recognize<A>(family: &Maybe<A>) -> bool {
        family.is_just()
    }
}

/// `Ok` of [`Result`], with the error type fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OkVariant<E>(PhantomData<E>);

impl<E> Variant for OkVariant<E> {
    type Family<A> = Result<A, E>;
    type Rest = E;

    const TAG: &'static str = "ok";

    #[inline]
    fn split<A>(family: Result<A, E>) -> Result<A, E> {
        family
    }

    #[inline]
    fn restore<A>(rest: E) -> Result<A, E> {
        Err(rest)
    }

    #[inline]
    fn wrap<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    #[inline]
    fn recognize<A>(family: &Result<A, E>) -> bool {
        family.is_ok()
    }
}

/// `Err` of [`Result`], with the success type fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrVariant<T>(PhantomData<T>);

impl<T> Variant for ErrVariant<T> {
    type Family<A> = Result<T, A>;
    type Rest = T;

    const TAG: &'static str = "err";

    #[inline]
    fn split<A>(family: Result<T, A>) -> Result<A, T> {
        match family {
            Ok(rest) => Err(rest),
            Err(value) => Ok(value),
        }
    }

    #[inline]
    fn restore<A>(rest: T) -> Result<T, A> {
        Ok(rest)
    }

    #[inline]
    fn wrap<A>(value: A) -> Result<T, A> {
        Err(value)
    }

    #[inline]
    fn recognize<A>(family: &Result<T, A>) -> bool {
        family.is_err()
    }
}

/// `Left` of [`Either`], with the right type fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftVariant<R>(PhantomData<R>);

impl<R> Variant for LeftVariant<R> {
    type Family<A> = Either<A, R>;
    type Rest = R;

    const TAG: &'static str = "left";

    #[inline]
    fn split<A>(family: Either<A, R>) -> Result<A, R> {
        match family {
            Either::Left(value) => Ok(value),
            Either::Right(rest) => Err(rest),
        }
    }

    #[inline]
    fn restore<A>(rest: R) -> Either<A, R> {
        Either::Right(rest)
    }

    #[inline]
    fn wrap<A>(value: A) -> Either<A, R> {
        Either::Left(value)
    }

    #[inline]
    fn recognize<A>(family: &Either<A, R>) -> bool {
        family.is_left()
    }
}

/// `Right` of [`Either`], with the left type fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RightVariant<L>(PhantomData<L>);

impl<L> Variant for RightVariant<L> {
    type Family<A> = Either<L, A>;
    type Rest = L;

    const TAG: &'static str = "right";

    #[inline]
    fn split<A>(family: Either<L, A>) -> Result<A, L> {
        match family {
            Either::Left(rest) => Err(rest),
            Either::Right(value) => Ok(value),
        }
    }

    #[inline]
    fn restore<A>(rest: L) -> Either<L, A> {
        Either::Left(rest)
    }

    #[inline]
    fn wrap<A>(value: A) -> Either<L, A> {
        Either::Right(value)
    }

    #[inline]
    fn recognize<A>(family: &Either<L, A>) -> bool {
        family.is_right()
    }
}
