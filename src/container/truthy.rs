//! Validity rules for the `Option` and `Maybe` families.
//!
//! `Option` rejects nullish values ([`Nullable`]); `Maybe` rejects falsy ones
//! ([`Truthy`]). The two rules differ on purpose: `0`, `""` and `false` are
//! valid `Some` payloads but invalid `Just` payloads.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

use super::{Either, Maybe};
use crate::error::Error;
use crate::tagged::Tagged;

// =============================================================================
// Nullable
// =============================================================================

/// Values that may stand for "nothing at all".
///
/// Only `None`, `()` and `Value::Null` are nullish. Everything else, including
/// `0`, `""` and `false`, is a legitimate payload.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::container::Nullable;
///
/// assert!(json!(null).is_nullish());
/// assert!(None::<i32>.is_nullish());
/// assert!(!0_i32.is_nullish());
/// assert!(!"".is_nullish());
/// ```
pub trait Nullable {
    /// Returns `true` if the value is nullish.
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

impl Nullable for () {
    #[inline]
    fn is_nullish(&self) -> bool {
        true
    }
}

impl Nullable for Value {
    #[inline]
    fn is_nullish(&self) -> bool {
        self.is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

macro_rules! never_nullish {
    ($($type:ty),* $(,)?) => {
        $(impl Nullable for $type {})*
    };
}

never_nullish!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String, Error,
);

impl<T> Nullable for [T] {}
impl<T> Nullable for Vec<T> {}
impl<T> Nullable for VecDeque<T> {}
impl<T> Nullable for HashSet<T> {}
impl<T> Nullable for BTreeSet<T> {}
impl<K, V> Nullable for HashMap<K, V> {}
impl<K, V> Nullable for BTreeMap<K, V> {}
impl<T> Nullable for Rc<T> {}
impl<T> Nullable for Arc<T> {}
impl<T> Nullable for Maybe<T> {}
impl<L, R> Nullable for Either<L, R> {}
impl<T, E> Nullable for Result<T, E> {}
impl<T> Nullable for Tagged<T> {}

// =============================================================================
// Truthy
// =============================================================================

/// Values with a truthiness.
///
/// `false`, zero, `NaN`, empty strings and nullish values are falsy.
/// Collections are truthy even when empty, as are characters and errors.
///
/// ```rust
/// use serde_json::json;
/// use tagrail::container::Truthy;
///
/// assert!(!0_i32.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Vec::<i32>::new().is_truthy());
/// assert!(!json!(false).is_truthy());
/// assert!(json!({}).is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value is truthy.
    fn is_truthy(&self) -> bool;

    /// Returns `true` if the value is falsy.
    #[inline]
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_integers {
    ($($type:ty),* $(,)?) => {
        $(
            impl Truthy for $type {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! truthy_floats {
    ($($type:ty),* $(,)?) => {
        $(
            impl Truthy for $type {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !self.is_nan() && *self != 0.0
                }
            }
        )*
    };
}

truthy_floats!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|number| number.is_truthy()),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! always_truthy {
    ($([$($generics:tt)*] $type:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Truthy for $type {
                #[inline]
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )*
    };
}

always_truthy!(
    [] char,
    [] Error,
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] HashSet<T>,
    [T] BTreeSet<T>,
    [K, V] HashMap<K, V>,
    [K, V] BTreeMap<K, V>,
    [T] Rc<T>,
    [T] Arc<T>,
    [T] Maybe<T>,
    [L, R] Either<L, R>,
    [T, E] Result<T, E>,
    [T] Tagged<T>,
);
